use serde::{Deserialize, Serialize};

/// Where a [`CSetTitle`] text is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleKind {
    /// Subtitle slot under the crosshair title.
    Subtitle,
    /// Action bar above the hotbar.
    Actionbar,
}

/// Clientbound `SetTitlePacket`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CSetTitle {
    /// Display slot.
    pub kind: TitleKind,
    /// Formatted text.
    pub text: String,
    /// Fade in ticks.
    pub fade_in: i32,
    /// Stay ticks.
    pub stay: i32,
    /// Fade out ticks.
    pub fade_out: i32,
}
