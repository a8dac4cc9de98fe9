use serde::{Deserialize, Serialize};

/// Serverbound steering input, used by the server to drive ridden vehicles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SPlayerInput {
    /// Sideways input, positive to the left.
    pub sideways: f32,
    /// Forward input, positive forwards.
    pub forward: f32,
    /// Jump held.
    pub jumping: bool,
    /// Sneak held. Dismounts on the server.
    pub sneaking: bool,
}
