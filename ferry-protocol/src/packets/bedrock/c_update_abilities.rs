//! Clientbound update abilities packet - the client's view of what the player may do.

use serde::{Deserialize, Serialize};

/// Default Bedrock fly speed.
pub const DEFAULT_FLY_SPEED: f32 = 0.05;
/// Default Bedrock walk speed.
pub const DEFAULT_WALK_SPEED: f32 = 0.1;

/// Clientbound `UpdateAbilitiesPacket`, flattened to the base ability layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CUpdateAbilities {
    /// Bedrock unique id of the player.
    pub unique_entity_id: i64,
    /// The player may toggle flight.
    pub may_fly: bool,
    /// The player is flying.
    pub flying: bool,
    /// The player passes through blocks.
    pub no_clip: bool,
    /// The player takes no damage.
    pub invulnerable: bool,
    /// The player breaks blocks instantly.
    pub instabuild: bool,
    /// Fly speed.
    pub fly_speed: f32,
    /// Walk speed.
    pub walk_speed: f32,
}
