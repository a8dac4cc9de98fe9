//! Session worker event ordering and shutdown.

use std::sync::Arc;

use ferry_core::{
    ChannelSink, Entity, EntityFlags, FerryConfig, Session, SessionEvent, SessionHandle,
    SessionPlayerEntity, SessionWorker, WorldSnapshot,
};
use ferry_protocol::{
    JavaPacket,
    packets::{
        bedrock::{InputFlags, SPlayerAuthInput},
        java::{PlayerCommandAction, SEditBook, SPlayerAbilities},
    },
};
use ferry_registry::{BlockMappings, EntityKind};
use ferry_utils::locks::SyncRwLock;
use glam::{Vec2, Vec3};
use smallvec::smallvec;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

fn input(flags: InputFlags) -> SPlayerAuthInput {
    SPlayerAuthInput {
        rotation: Vec3::ZERO,
        position: Vec3::new(0.0, 1.62, 0.0),
        motion: Vec2::ZERO,
        analog_move_vector: Vec2::ZERO,
        input_data: flags,
        tick: 0,
        delta: Vec3::ZERO,
        item_use_transaction: None,
        player_actions: Vec::new(),
    }
}

fn worker(
    world: WorldSnapshot,
) -> (
    SessionWorker<WorldSnapshot>,
    SessionHandle,
    UnboundedReceiver<JavaPacket>,
    CancellationToken,
) {
    let (sink, java, _bedrock) = ChannelSink::new();
    let session = Session::new(
        "Alex",
        SessionPlayerEntity::new(7, 70),
        Arc::new(FerryConfig {
            player_eye_height: 1.62,
            ..FerryConfig::default()
        }),
        Arc::new(BlockMappings::new(0)),
        Arc::new(sink),
    );
    let token = CancellationToken::new();
    let (worker, handle) =
        SessionWorker::new(session, Arc::new(SyncRwLock::new(world)), token.clone());
    (worker, handle, java, token)
}

fn drain(java: &mut UnboundedReceiver<JavaPacket>) -> Vec<JavaPacket> {
    let mut packets = Vec::new();
    while let Ok(packet) = java.try_recv() {
        packets.push(packet);
    }
    packets
}

#[tokio::test]
async fn applies_events_in_order() {
    let (worker, handle, mut java, _token) = worker(WorldSnapshot::new());
    let task = worker.spawn();

    // Dropped: not spawned yet.
    assert!(handle.send_input(input(InputFlags::START_SNEAKING)));
    assert!(handle.send(SessionEvent::Spawned {
        position: Vec3::ZERO,
    }));
    assert!(handle.send(SessionEvent::FlyCapabilityChanged(true)));
    assert!(handle.send(SessionEvent::QueueBookEdit(SEditBook {
        slot: 1,
        pages: vec!["hello".to_string()],
        title: Some("Notes".to_string()),
    })));
    assert!(handle.send_input(input(InputFlags::START_SNEAKING | InputFlags::START_FLYING)));
    drop(handle);

    let session = task.await.expect("worker panicked");
    assert!(session.spawned);
    assert!(session.can_fly);
    assert!(session.movement.sneaking);
    assert!(session.movement.flying);

    let packets = drain(&mut java);
    assert_eq!(packets.len(), 3);
    assert!(matches!(packets[0], JavaPacket::EditBook(_)));
    assert!(matches!(
        &packets[1],
        JavaPacket::PlayerCommand(command) if command.action == PlayerCommandAction::StartSneaking
    ));
    assert_eq!(packets[2], JavaPacket::from(SPlayerAbilities { flying: true }));
}

#[tokio::test]
async fn reads_the_shared_world() {
    let mut world = WorldSnapshot::new();
    world.insert_entity(Entity {
        entity_id: 9,
        geyser_id: 90,
        kind: EntityKind::Camel,
        position: Vec3::new(4.0, 70.0, 4.0),
        yaw: 0.0,
        pitch: 0.0,
        on_ground: true,
        flags: EntityFlags::empty(),
        passengers: smallvec![7],
        vehicle_id: None,
    });
    let (worker, handle, mut java, _token) = worker(world);
    let task = worker.spawn();

    handle.send(SessionEvent::Spawned {
        position: Vec3::ZERO,
    });
    handle.send(SessionEvent::Mounted(Some(9)));
    let mut packet = input(InputFlags::empty());
    packet.analog_move_vector = Vec2::new(0.0, 1.0);
    handle.send_input(packet);
    drop(handle);

    let session = task.await.expect("worker panicked");
    assert!(session.movement.last_vehicle_move_at.is_some());
    let packets = drain(&mut java);
    assert!(matches!(
        packets.as_slice(),
        [JavaPacket::PlayerInput(_), JavaPacket::MoveVehicle(_)]
    ));
}

#[tokio::test]
async fn stops_when_cancelled() {
    let (worker, handle, mut java, token) = worker(WorldSnapshot::new());
    let task = worker.spawn();

    token.cancel();
    let session = task.await.expect("worker panicked");
    assert!(!session.spawned);

    assert!(!handle.send(SessionEvent::Spawned {
        position: Vec3::ZERO,
    }));
    assert!(drain(&mut java).is_empty());
}
