use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Bedrock player action types used on the input path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerActionType {
    /// Started breaking a block.
    StartBreak,
    /// Stopped breaking a block before it broke.
    AbortBreak,
    /// Finished breaking a block.
    StopBreak,
    /// Still breaking a block (legacy server-authoritative breaking).
    ContinueBreak,
    /// Client predicts the block is destroyed.
    BlockPredictDestroy,
    /// Still breaking a block (server-authoritative breaking).
    BlockContinueDestroy,
    /// Started flying.
    StartFlying,
    /// Stopped flying.
    StopFlying,
}

/// Clientbound `PlayerActionPacket`. Used to force the client out of flight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CPlayerAction {
    /// Bedrock runtime id of the player.
    pub runtime_entity_id: u64,
    /// The action.
    pub action: PlayerActionType,
    /// Block coordinate, zero when unused.
    pub block_position: IVec3,
    /// Result coordinate, zero when unused.
    pub result_position: IVec3,
    /// Block face, zero when unused.
    pub face: i32,
}

impl CPlayerAction {
    /// Creates an action that carries no block data.
    #[must_use]
    pub const fn without_block(runtime_entity_id: u64, action: PlayerActionType) -> Self {
        Self {
            runtime_entity_id,
            action,
            block_position: IVec3::ZERO,
            result_position: IVec3::ZERO,
            face: 0,
        }
    }
}
