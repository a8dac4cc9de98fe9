use serde::{Deserialize, Serialize};

/// Serverbound abilities packet. The only thing a client may report is
/// whether it is flying; the server decides whether that is allowed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SPlayerAbilities {
    /// The client is flying.
    pub flying: bool,
}
