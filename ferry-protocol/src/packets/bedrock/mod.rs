mod c_animate;
mod c_level_event;
mod c_player_action;
mod c_set_title;
mod c_update_abilities;
mod input_flags;
mod s_player_auth_input;

use serde::{Deserialize, Serialize};

pub use c_animate::{AnimateAction, CAnimate};
pub use c_level_event::{CLevelEvent, LevelEventType};
pub use c_player_action::{CPlayerAction, PlayerActionType};
pub use c_set_title::{CSetTitle, TitleKind};
pub use c_update_abilities::{CUpdateAbilities, DEFAULT_FLY_SPEED, DEFAULT_WALK_SPEED};
pub use input_flags::InputFlags;
pub use s_player_auth_input::{
    ItemUseAction, ItemUseTransaction, PlayerBlockAction, SPlayerAuthInput,
};

/// A packet headed to the Bedrock client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BedrockPacket {
    /// See [`CAnimate`].
    Animate(CAnimate),
    /// See [`CLevelEvent`].
    LevelEvent(CLevelEvent),
    /// See [`CPlayerAction`].
    PlayerAction(CPlayerAction),
    /// See [`CSetTitle`].
    SetTitle(CSetTitle),
    /// See [`CUpdateAbilities`].
    UpdateAbilities(CUpdateAbilities),
}

macro_rules! impl_from_packet {
    ($($variant:ident => $packet:ty),* $(,)?) => {
        $(
            impl From<$packet> for BedrockPacket {
                fn from(packet: $packet) -> Self {
                    Self::$variant(packet)
                }
            }
        )*
    };
}

impl_from_packet! {
    Animate => CAnimate,
    LevelEvent => CLevelEvent,
    PlayerAction => CPlayerAction,
    SetTitle => CSetTitle,
    UpdateAbilities => CUpdateAbilities,
}
