//! Serverbound player movement packets.
//!
//! Java splits player movement into four packets depending on what changed.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// One of the four serverbound move packets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SMovePlayer {
    /// `ServerboundMovePlayerPacket.Pos`
    Pos {
        /// Feet position.
        position: DVec3,
        /// Whether the player is on the ground.
        on_ground: bool,
        /// Whether the player is pressed against a wall.
        horizontal_collision: bool,
    },
    /// `ServerboundMovePlayerPacket.PosRot`
    PosRot {
        /// Feet position.
        position: DVec3,
        /// Yaw in degrees.
        yaw: f32,
        /// Pitch in degrees.
        pitch: f32,
        /// Whether the player is on the ground.
        on_ground: bool,
        /// Whether the player is pressed against a wall.
        horizontal_collision: bool,
    },
    /// `ServerboundMovePlayerPacket.Rot`
    Rot {
        /// Yaw in degrees.
        yaw: f32,
        /// Pitch in degrees.
        pitch: f32,
        /// Whether the player is on the ground.
        on_ground: bool,
        /// Whether the player is pressed against a wall.
        horizontal_collision: bool,
    },
    /// `ServerboundMovePlayerPacket.StatusOnly`
    StatusOnly {
        /// Whether the player is on the ground.
        on_ground: bool,
        /// Whether the player is pressed against a wall.
        horizontal_collision: bool,
    },
}

impl SMovePlayer {
    /// The position carried by this packet, if any.
    #[must_use]
    pub const fn position(&self) -> Option<DVec3> {
        match self {
            Self::Pos { position, .. } | Self::PosRot { position, .. } => Some(*position),
            Self::Rot { .. } | Self::StatusOnly { .. } => None,
        }
    }

    /// The on-ground flag every variant carries.
    #[must_use]
    pub const fn on_ground(&self) -> bool {
        match self {
            Self::Pos { on_ground, .. }
            | Self::PosRot { on_ground, .. }
            | Self::Rot { on_ground, .. }
            | Self::StatusOnly { on_ground, .. } => *on_ground,
        }
    }
}
