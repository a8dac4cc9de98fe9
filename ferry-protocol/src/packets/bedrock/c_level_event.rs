//! Clientbound level event packet - world effects such as particles and sounds.

use ferry_utils::Direction;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Level event types emitted by the input path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelEventType {
    /// Cracking particles on the top face.
    ParticleBreakBlockUp,
    /// Cracking particles on the bottom face.
    ParticleBreakBlockDown,
    /// Cracking particles on the north face.
    ParticleBreakBlockNorth,
    /// Cracking particles on the south face.
    ParticleBreakBlockSouth,
    /// Cracking particles on the west face.
    ParticleBreakBlockWest,
    /// Cracking particles on the east face.
    ParticleBreakBlockEast,
}

impl LevelEventType {
    /// The cracking particle event for a block face.
    #[must_use]
    pub const fn break_particles(face: Direction) -> Self {
        match face {
            Direction::Up => Self::ParticleBreakBlockUp,
            Direction::Down => Self::ParticleBreakBlockDown,
            Direction::North => Self::ParticleBreakBlockNorth,
            Direction::South => Self::ParticleBreakBlockSouth,
            Direction::West => Self::ParticleBreakBlockWest,
            Direction::East => Self::ParticleBreakBlockEast,
        }
    }
}

/// Clientbound `LevelEventPacket`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CLevelEvent {
    /// Event type.
    pub event: LevelEventType,
    /// World position of the effect.
    pub position: Vec3,
    /// Event data. For block particles this is the block runtime id.
    pub data: i32,
}
