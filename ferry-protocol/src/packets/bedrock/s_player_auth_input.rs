//! Serverbound composite input packet, sent by the Bedrock client once per tick.

use glam::{IVec3, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::{InputFlags, PlayerActionType};

/// The kind of an item-use transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemUseAction {
    /// Right click on a block.
    ClickBlock,
    /// Right click in the air.
    ClickAir,
    /// Block destroyed.
    Destroy,
}

/// Item-use data attached when `PERFORM_ITEM_INTERACTION` is set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemUseTransaction {
    /// What the client did with the item.
    pub action: ItemUseAction,
    /// Target block coordinate.
    pub block_position: IVec3,
    /// Clicked face, `-1` or `255` when none.
    pub block_face: i32,
    /// Selected hotbar slot.
    pub hotbar_slot: i32,
    /// Player position at the time of the click.
    pub player_position: Vec3,
    /// Click position relative to the block.
    pub click_position: Vec3,
}

/// One block action attached when `PERFORM_BLOCK_ACTIONS` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBlockAction {
    /// The action type.
    pub action: PlayerActionType,
    /// Target block coordinate.
    pub block_position: IVec3,
    /// Face being broken.
    pub face: i32,
}

/// `PlayerAuthInputPacket`.
///
/// Bundles everything the client did this tick: movement, the analog stick,
/// the discrete input flags and any item or block interaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SPlayerAuthInput {
    /// Pitch, yaw and head yaw.
    pub rotation: Vec3,
    /// Eye position of the player.
    pub position: Vec3,
    /// Normalized movement input.
    pub motion: Vec2,
    /// Raw analog stick vector. Only repeated while the stick is held.
    pub analog_move_vector: Vec2,
    /// Discrete input flags.
    pub input_data: InputFlags,
    /// Client tick number.
    #[serde(default)]
    pub tick: u64,
    /// Client-side velocity.
    #[serde(default)]
    pub delta: Vec3,
    /// Present when `PERFORM_ITEM_INTERACTION` is set.
    #[serde(default)]
    pub item_use_transaction: Option<ItemUseTransaction>,
    /// Present when `PERFORM_BLOCK_ACTIONS` is set.
    #[serde(default)]
    pub player_actions: Vec<PlayerBlockAction>,
}

impl SPlayerAuthInput {
    /// Pitch component of `rotation`.
    #[must_use]
    pub const fn pitch(&self) -> f32 {
        self.rotation.x
    }

    /// Yaw component of `rotation`.
    #[must_use]
    pub const fn yaw(&self) -> f32 {
        self.rotation.y
    }

    /// Head yaw component of `rotation`.
    #[must_use]
    pub const fn head_yaw(&self) -> f32 {
        self.rotation.z
    }
}
