use ferry_utils::Direction;
use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use super::Hand;

/// Serverbound right click on a block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SUseItemOn {
    /// Hand holding the used item.
    pub hand: Hand,
    /// Clicked block.
    pub block_position: IVec3,
    /// Clicked face.
    pub face: Direction,
    /// Cursor position on the face, each axis in `0..=1`.
    pub cursor: Vec3,
    /// Whether the player's head is inside the block.
    pub inside_block: bool,
    /// Whether the click hit the world border.
    pub world_border_hit: bool,
    /// Block interaction sequence number, acknowledged by the server.
    pub sequence: i32,
}
