//! Block faces.

use glam::IVec3;
use serde::{Deserialize, Serialize};

/// One of the six faces of a block.
///
/// Ordinals follow the Java ordering (down, up, north, south, west, east),
/// which Bedrock also uses for the `face` field of block actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// -Y
    Down,
    /// +Y
    Up,
    /// -Z
    North,
    /// +Z
    South,
    /// -X
    West,
    /// +X
    East,
}

impl Direction {
    /// All directions in ordinal order.
    pub const VALUES: [Self; 6] = [
        Self::Down,
        Self::Up,
        Self::North,
        Self::South,
        Self::West,
        Self::East,
    ];

    /// Converts a wire face index into a direction.
    ///
    /// Bedrock sends `-1` or `255` when no face applies, which maps to `None`.
    #[must_use]
    pub fn from_face(face: i32) -> Option<Self> {
        usize::try_from(face)
            .ok()
            .and_then(|index| Self::VALUES.get(index).copied())
    }

    /// The wire face index of this direction.
    #[must_use]
    pub const fn face(self) -> i32 {
        self as i32
    }

    /// Unit offset pointing out of this face.
    #[must_use]
    pub const fn normal(self) -> IVec3 {
        match self {
            Self::Down => IVec3::new(0, -1, 0),
            Self::Up => IVec3::new(0, 1, 0),
            Self::North => IVec3::new(0, 0, -1),
            Self::South => IVec3::new(0, 0, 1),
            Self::West => IVec3::new(-1, 0, 0),
            Self::East => IVec3::new(1, 0, 0),
        }
    }
}
