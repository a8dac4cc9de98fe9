//! Attack cooldown indicator.
//!
//! Java shows an attack cooldown under the crosshair; Bedrock has no such
//! thing, so a title is used instead. Only the first frame is sent from here.
//! Animating the bar is up to whatever renders titles for the session.

use ferry_protocol::packets::bedrock::{CSetTitle, TitleKind};

use super::Session;
use crate::CooldownPreference;

/// Number of segments in the cooldown bar.
pub const COOLDOWN_BAR_LENGTH: usize = 10;

const BAR_SEGMENT: &str = "\u{02d9}";

impl Session {
    /// Shows an empty cooldown bar, per the configured preference.
    pub fn send_cooldown(&self) {
        let kind = match self.config().cooldown {
            CooldownPreference::Title => TitleKind::Subtitle,
            CooldownPreference::Actionbar => TitleKind::Actionbar,
            CooldownPreference::Disabled => return,
        };

        self.send_bedrock(CSetTitle {
            kind,
            text: format!("\u{a7}4{}", BAR_SEGMENT.repeat(COOLDOWN_BAR_LENGTH)),
            fade_in: 0,
            stay: 2,
            fade_out: 5,
        });
    }
}
