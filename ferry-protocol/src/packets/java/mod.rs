mod s_edit_book;
mod s_move_player;
mod s_move_vehicle;
mod s_player_abilities;
mod s_player_command;
mod s_player_input;
mod s_swing;
mod s_use_item_on;

use serde::{Deserialize, Serialize};

pub use s_edit_book::SEditBook;
pub use s_move_player::SMovePlayer;
pub use s_move_vehicle::SMoveVehicle;
pub use s_player_abilities::SPlayerAbilities;
pub use s_player_command::{PlayerCommandAction, SPlayerCommand};
pub use s_player_input::SPlayerInput;
pub use s_swing::{Hand, SSwing};
pub use s_use_item_on::SUseItemOn;

/// A packet headed to the Java server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JavaPacket {
    /// See [`SEditBook`].
    EditBook(SEditBook),
    /// See [`SMovePlayer`].
    MovePlayer(SMovePlayer),
    /// See [`SMoveVehicle`].
    MoveVehicle(SMoveVehicle),
    /// See [`SPlayerAbilities`].
    PlayerAbilities(SPlayerAbilities),
    /// See [`SPlayerCommand`].
    PlayerCommand(SPlayerCommand),
    /// See [`SPlayerInput`].
    PlayerInput(SPlayerInput),
    /// See [`SSwing`].
    Swing(SSwing),
    /// See [`SUseItemOn`].
    UseItemOn(SUseItemOn),
}

macro_rules! impl_from_packet {
    ($($variant:ident => $packet:ty),* $(,)?) => {
        $(
            impl From<$packet> for JavaPacket {
                fn from(packet: $packet) -> Self {
                    Self::$variant(packet)
                }
            }
        )*
    };
}

impl_from_packet! {
    EditBook => SEditBook,
    MovePlayer => SMovePlayer,
    MoveVehicle => SMoveVehicle,
    PlayerAbilities => SPlayerAbilities,
    PlayerCommand => SPlayerCommand,
    PlayerInput => SPlayerInput,
    Swing => SSwing,
    UseItemOn => SUseItemOn,
}
