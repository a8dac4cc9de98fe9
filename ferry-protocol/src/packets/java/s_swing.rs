use serde::{Deserialize, Serialize};

/// A player hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    /// The main hand.
    MainHand,
    /// The off hand.
    OffHand,
}

/// Serverbound arm swing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SSwing {
    /// Which hand swung.
    pub hand: Hand,
}
