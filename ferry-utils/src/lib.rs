//! Shared primitives used across the ferry crates.

pub mod direction;
pub mod game_mode;
pub mod locks;

use serde::{Deserialize, Serialize};

pub use direction::Direction;
pub use game_mode::GameMode;

/// A Java Edition block state id.
///
/// Java numbers every block state globally; Bedrock assigns its own runtime ids,
/// so the two never line up and must go through a mapping table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockStateId(pub u16);

impl BlockStateId {
    /// The air block state. Always id 0 on Java.
    pub const AIR: Self = Self(0);

    /// Returns true if this is the air state.
    #[must_use]
    pub const fn is_air(self) -> bool {
        self.0 == 0
    }
}
