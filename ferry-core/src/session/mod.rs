//! A Bedrock player's session as seen by the input path.

mod book_edit;
mod cooldown;
mod movement_state;

use std::sync::Arc;

use ferry_protocol::{
    BedrockPacket, JavaPacket,
    packets::bedrock::{CUpdateAbilities, DEFAULT_FLY_SPEED, DEFAULT_WALK_SPEED},
};
use ferry_registry::BlockMappings;
use ferry_utils::GameMode;
use glam::Vec3;

pub use book_edit::BookEditCache;
pub use cooldown::COOLDOWN_BAR_LENGTH;
pub use movement_state::{
    BASE_SWING_DURATION, NO_ARM_ANIMATION, SessionMovementState, swing_duration,
};

use crate::{FerryConfig, PacketSink, SessionPlayerEntity};

/// One connected Bedrock player.
///
/// Owned by a single worker; every tick gets exclusive access, so nothing in
/// here is synchronized.
pub struct Session {
    /// Bedrock username, for logging.
    pub username: String,
    /// The session's own player entity.
    pub player: SessionPlayerEntity,
    /// State diffed against each tick.
    pub movement: SessionMovementState,
    /// Book edits waiting to be sent.
    pub book_edit: BookEditCache,
    /// Whether the Java server has finished spawning the player.
    pub spawned: bool,
    /// Game mode as reported by the Java server.
    pub game_mode: GameMode,
    /// Whether the Java server allows flight.
    pub can_fly: bool,
    /// Java block state to Bedrock runtime id table.
    pub block_mappings: Arc<BlockMappings>,
    block_sequence: i32,
    config: Arc<FerryConfig>,
    sink: Arc<dyn PacketSink>,
}

impl Session {
    /// Creates a session for a player that has not spawned yet.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        player: SessionPlayerEntity,
        config: Arc<FerryConfig>,
        block_mappings: Arc<BlockMappings>,
        sink: Arc<dyn PacketSink>,
    ) -> Self {
        Self {
            username: username.into(),
            player,
            movement: SessionMovementState::new(Vec3::ZERO),
            book_edit: BookEditCache::new(),
            spawned: false,
            game_mode: GameMode::Survival,
            can_fly: false,
            block_mappings,
            block_sequence: 0,
            config,
            sink,
        }
    }

    /// The bridge configuration.
    #[must_use]
    pub fn config(&self) -> &FerryConfig {
        &self.config
    }

    /// Marks the player as spawned at `position` (Java feet position).
    pub const fn spawn(&mut self, position: Vec3) {
        self.movement.last_position = position;
        self.spawned = true;
    }

    /// Enqueues a packet for the Java server.
    pub fn send_java(&self, packet: impl Into<JavaPacket>) {
        self.sink.send_java(packet.into());
    }

    /// Enqueues a packet for the Bedrock client.
    pub fn send_bedrock(&self, packet: impl Into<BedrockPacket>) {
        self.sink.send_bedrock(packet.into());
    }

    /// Sends the pending book edit, if any, to the Java server.
    pub fn flush_book_edit(&mut self) {
        if let Some(packet) = self.book_edit.check_for_send() {
            self.send_java(packet);
        }
    }

    /// Next block interaction sequence number.
    pub const fn next_block_sequence(&mut self) -> i32 {
        self.block_sequence = self.block_sequence.wrapping_add(1);
        self.block_sequence
    }

    /// The client's ability flags derived from authoritative server state.
    #[must_use]
    pub fn abilities(&self) -> CUpdateAbilities {
        let spectator = self.game_mode == GameMode::Spectator;
        let creative = self.game_mode == GameMode::Creative;
        CUpdateAbilities {
            unique_entity_id: self.player.unique_id(),
            may_fly: self.can_fly || self.game_mode.always_can_fly(),
            flying: self.movement.flying || spectator,
            no_clip: spectator,
            invulnerable: creative || spectator,
            instabuild: creative,
            fly_speed: DEFAULT_FLY_SPEED,
            walk_speed: DEFAULT_WALK_SPEED,
        }
    }

    /// Re-sends the authoritative abilities, undoing anything the client
    /// predicted on its own.
    pub fn send_abilities(&self) {
        self.send_bedrock(self.abilities());
    }

    /// Advances an in-progress arm swing by one game tick.
    pub const fn tick_arm_animation(&mut self, haste_level: i32, mining_fatigue_level: i32) {
        self.movement
            .tick_arm_animation(swing_duration(haste_level, mining_fatigue_level));
    }
}
