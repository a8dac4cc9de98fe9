use serde::{Deserialize, Serialize};

/// Action types for the player command packet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerCommandAction {
    /// Player starts sneaking.
    StartSneaking,
    /// Player stops sneaking.
    StopSneaking,
    /// Player leaves bed (only when clicking "Leave Bed" button).
    LeaveBed,
    /// Player starts sprinting. Also used for swimming.
    StartSprinting,
    /// Player stops sprinting.
    StopSprinting,
    /// Player starts jumping while riding a horse (data = jump boost 0-100).
    StartRidingJump,
    /// Player stops jumping while riding a horse.
    StopRidingJump,
    /// Player opens vehicle inventory (horse/chest boat) via inventory key.
    OpenVehicleInventory,
    /// Player starts flying with elytra.
    StartFallFlying,
}

/// Serverbound packet sent when a player performs a command action.
///
/// This handles actions like sneaking, sprinting, sleeping, elytra, and horse riding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SPlayerCommand {
    /// The entity ID of the player (should match the player's ID).
    pub entity_id: i32,
    /// The action being performed.
    pub action: PlayerCommandAction,
    /// Jump boost for `StartRidingJump` (0-100), otherwise 0.
    pub jump_boost: i32,
}

impl SPlayerCommand {
    /// Creates a command without a jump boost.
    #[must_use]
    pub const fn new(entity_id: i32, action: PlayerCommandAction) -> Self {
        Self {
            entity_id,
            action,
            jump_boost: 0,
        }
    }
}
