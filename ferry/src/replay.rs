//! Offline replay of recorded client input.
//!
//! A capture describes the player, the world around them and a timeline of
//! session events. Replaying feeds the timeline through a session worker and
//! logs every packet the bridge would have sent.

use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
    time::{Duration, Instant},
};

use ferry_core::{
    ChannelSink, Entity, EntityFlags, FerryConfig, Session, SessionEvent, SessionPlayerEntity,
    SessionWorker, WorldSnapshot,
};
use ferry_protocol::{
    BedrockPacket, JavaPacket,
    packets::{bedrock::SPlayerAuthInput, java::SEditBook},
};
use ferry_registry::{BlockMappings, EntityKind};
use ferry_utils::{BlockStateId, GameMode, locks::SyncRwLock};
use glam::{IVec3, Vec3};
use smallvec::SmallVec;
use serde::Deserialize;
use thiserror::Error;
use tokio::{fs, sync::mpsc::UnboundedReceiver, task::JoinError};
use tokio_util::sync::CancellationToken;

/// An error that can occur while replaying a capture.
#[derive(Error, Debug)]
pub enum ReplayError {
    /// The capture file could not be read.
    #[error("Failed to read capture {path}: {source}")]
    Read {
        /// The capture path.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// The capture file is not a valid capture.
    #[error("Failed to parse capture: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The session worker panicked.
    #[error("Session worker failed: {0}")]
    Worker(#[from] JoinError),
}

#[derive(Deserialize)]
struct CapturePlayer {
    entity_id: i32,
    geyser_id: u64,
    #[serde(default)]
    flags: EntityFlags,
}

#[derive(Deserialize)]
struct CaptureEntity {
    entity_id: i32,
    geyser_id: u64,
    /// Namespaced type, e.g. `minecraft:oak_boat`.
    identifier: String,
    position: Vec3,
    #[serde(default)]
    yaw: f32,
    #[serde(default)]
    pitch: f32,
    #[serde(default)]
    on_ground: bool,
    #[serde(default)]
    flags: EntityFlags,
    #[serde(default)]
    passengers: SmallVec<[i32; 2]>,
    #[serde(default)]
    vehicle_id: Option<i32>,
}

impl From<CaptureEntity> for Entity {
    fn from(entity: CaptureEntity) -> Self {
        let kind = EntityKind::from_identifier(&entity.identifier);
        if kind == EntityKind::Other {
            log::debug!(
                "Entity {} has untracked type {}",
                entity.entity_id,
                entity.identifier
            );
        }
        Self {
            entity_id: entity.entity_id,
            geyser_id: entity.geyser_id,
            kind,
            position: entity.position,
            yaw: entity.yaw,
            pitch: entity.pitch,
            on_ground: entity.on_ground,
            flags: entity.flags,
            passengers: entity.passengers,
            vehicle_id: entity.vehicle_id,
        }
    }
}

#[derive(Deserialize)]
struct CaptureBlock {
    position: IVec3,
    state: BlockStateId,
}

#[derive(Deserialize)]
struct CaptureMapping {
    java: BlockStateId,
    bedrock: u32,
}

/// One entry of the capture timeline.
#[derive(Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum CaptureEvent {
    Spawned {
        position: Vec3,
    },
    Input {
        /// Milliseconds since the start of the capture.
        at_ms: u64,
        packet: Box<SPlayerAuthInput>,
    },
    GameMode {
        game_mode: GameMode,
    },
    FlyCapability {
        can_fly: bool,
    },
    PlayerFlags {
        flags: EntityFlags,
    },
    Mounted {
        vehicle_id: Option<i32>,
    },
    BookEdit {
        packet: SEditBook,
    },
    GameTick {
        #[serde(default)]
        haste_level: i32,
        #[serde(default)]
        mining_fatigue_level: i32,
    },
}

impl CaptureEvent {
    fn into_session_event(self, start: Instant) -> SessionEvent {
        match self {
            Self::Spawned { position } => SessionEvent::Spawned { position },
            Self::Input { at_ms, packet } => SessionEvent::Input {
                packet,
                received_at: start + Duration::from_millis(at_ms),
            },
            Self::GameMode { game_mode } => SessionEvent::GameModeChanged(game_mode),
            Self::FlyCapability { can_fly } => SessionEvent::FlyCapabilityChanged(can_fly),
            Self::PlayerFlags { flags } => SessionEvent::PlayerFlagsChanged(flags),
            Self::Mounted { vehicle_id } => SessionEvent::Mounted(vehicle_id),
            Self::BookEdit { packet } => SessionEvent::QueueBookEdit(packet),
            Self::GameTick {
                haste_level,
                mining_fatigue_level,
            } => SessionEvent::GameTick {
                haste_level,
                mining_fatigue_level,
            },
        }
    }
}

/// A recorded session.
#[derive(Deserialize)]
struct Capture {
    username: String,
    player: CapturePlayer,
    #[serde(default)]
    player_in_water: bool,
    #[serde(default)]
    player_must_crawl: bool,
    #[serde(default)]
    entities: Vec<CaptureEntity>,
    #[serde(default)]
    blocks: Vec<CaptureBlock>,
    #[serde(default)]
    air_runtime_id: u32,
    #[serde(default)]
    block_mappings: Vec<CaptureMapping>,
    timeline: Vec<CaptureEvent>,
}

impl Capture {
    fn world(&mut self) -> WorldSnapshot {
        let mut world = WorldSnapshot::new();
        world.player_in_water = self.player_in_water;
        world.player_must_crawl = self.player_must_crawl;
        for entity in self.entities.drain(..) {
            world.insert_entity(entity.into());
        }
        for block in self.blocks.drain(..) {
            world.set_block(block.position, block.state);
        }
        world
    }

    fn block_mappings(&self) -> BlockMappings {
        let mut mappings = BlockMappings::new(self.air_runtime_id);
        for mapping in &self.block_mappings {
            mappings.insert(mapping.java, mapping.bedrock);
        }
        mappings
    }
}

/// Packets the bridge produced during a replay.
#[derive(Default)]
pub struct ReplayOutput {
    /// Packets sent to the Java server, in order.
    pub java: Vec<JavaPacket>,
    /// Packets sent to the Bedrock client, in order.
    pub bedrock: Vec<BedrockPacket>,
}

/// Replays the capture at `path`.
pub async fn run(
    path: &Path,
    config: Arc<FerryConfig>,
    cancel_token: CancellationToken,
) -> Result<ReplayOutput, ReplayError> {
    let text = fs::read_to_string(path)
        .await
        .map_err(|source| ReplayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    replay_text(&text, config, cancel_token).await
}

async fn replay_text(
    text: &str,
    config: Arc<FerryConfig>,
    cancel_token: CancellationToken,
) -> Result<ReplayOutput, ReplayError> {
    let mut capture: Capture = serde_json5::from_str(text)?;

    let (sink, java_rx, bedrock_rx) = ChannelSink::new();
    let mut player =
        SessionPlayerEntity::new(capture.player.entity_id, capture.player.geyser_id);
    player.flags = capture.player.flags;

    let session = Session::new(
        capture.username.clone(),
        player,
        config,
        Arc::new(capture.block_mappings()),
        Arc::new(sink),
    );
    let world = Arc::new(SyncRwLock::new(capture.world()));

    let (worker, handle) = SessionWorker::new(session, world, cancel_token);
    let task = worker.spawn();

    let start = Instant::now();
    let events = capture.timeline.len();
    for event in capture.timeline {
        if !handle.send(event.into_session_event(start)) {
            log::warn!("Session worker stopped before the capture ended");
            break;
        }
    }
    drop(handle);

    let session = task.await?;
    log::info!(
        "Replayed {events} events for {} (spawned: {})",
        session.username,
        session.spawned
    );

    Ok(ReplayOutput {
        java: drain(java_rx),
        bedrock: drain(bedrock_rx),
    })
}

fn drain<T>(mut receiver: UnboundedReceiver<T>) -> Vec<T> {
    let mut packets = Vec::new();
    while let Ok(packet) = receiver.try_recv() {
        packets.push(packet);
    }
    packets
}

#[cfg(test)]
mod tests {
    use ferry_core::WorldView;

    use super::*;

    const CAPTURE: &str = r#"{
      username: "Steve",
      player: { entity_id: 1, geyser_id: 1 },
      entities: [
        {
          entity_id: 5,
          geyser_id: 50,
          identifier: "minecraft:oak_boat",
          position: [0.0, 62.0, 0.0],
          yaw: 90.0,
          pitch: 0.0,
          on_ground: false,
          passengers: [1],
        },
      ],
      timeline: [
        { event: "spawned", position: [0.0, 64.0, 0.0] },
        { event: "mounted", vehicle_id: 5 },
        {
          event: "input",
          at_ms: 0,
          packet: {
            rotation: [0.0, 0.0, 0.0],
            position: [0.0, 65.62, 0.0],
            motion: [0.0, 0.0],
            analog_move_vector: [0.0, 1.0],
            input_data: "START_SNEAKING",
            tick: 1,
            delta: [0.0, 0.0, 0.0],
            player_actions: [],
          },
        },
      ],
    }"#;

    #[tokio::test]
    async fn replays_a_boat_capture() {
        let output = replay_text(
            CAPTURE,
            Arc::new(FerryConfig::default()),
            CancellationToken::new(),
        )
        .await
        .expect("capture should replay");

        assert!(matches!(
            output.java.as_slice(),
            [
                JavaPacket::PlayerInput(_),
                JavaPacket::MoveVehicle(_),
                JavaPacket::PlayerCommand(_),
            ]
        ));
        assert!(output.bedrock.is_empty());
    }

    #[test]
    fn capture_entities_resolve_their_identifier() {
        let mut capture: Capture = serde_json5::from_str(CAPTURE).expect("capture should parse");
        let world = capture.world();
        let boat = world.entity(5).expect("boat should be in the world");
        assert_eq!(boat.kind, EntityKind::Boat);
        assert_eq!(boat.passengers.as_slice(), &[1]);

        let unknown: CaptureEntity = serde_json5::from_str(
            r#"{ entity_id: 9, geyser_id: 90, identifier: "minecraft:zombie", position: [0.0, 0.0, 0.0] }"#,
        )
        .expect("entity should parse");
        assert_eq!(Entity::from(unknown).kind, EntityKind::Other);
    }

    #[tokio::test]
    async fn rejects_malformed_captures() {
        let result = replay_text(
            "{ username: 3 }",
            Arc::new(FerryConfig::default()),
            CancellationToken::new(),
        )
        .await;
        assert!(matches!(result, Err(ReplayError::Parse(_))));
    }
}
