use serde::{Deserialize, Serialize};

/// The game mode a player is in, as reported by the Java server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Survival mode.
    #[default]
    Survival,
    /// Creative mode. Can always fly.
    Creative,
    /// Adventure mode.
    Adventure,
    /// Spectator mode. Always flying, no collision.
    Spectator,
}

impl GameMode {
    /// Whether this mode grants flight regardless of the server's ability flags.
    #[must_use]
    pub const fn always_can_fly(self) -> bool {
        matches!(self, Self::Creative | Self::Spectator)
    }
}
