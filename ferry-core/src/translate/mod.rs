//! Translation of the Bedrock composite input packet.

pub mod action;
pub mod interaction;
pub mod movement;
pub mod vehicle;

use std::time::Instant;

use ferry_protocol::packets::bedrock::SPlayerAuthInput;

use crate::{Session, WorldView};

/// Handles one `PlayerAuthInput` packet.
///
/// Ignored entirely until the player has spawned. Otherwise any pending book
/// edit goes out first, then steering input, then movement, then discrete
/// actions, so the server always knows where the player is before acting on
/// swings and clicks.
pub fn on_input(
    session: &mut Session,
    world: &dyn WorldView,
    packet: &SPlayerAuthInput,
    now: Instant,
) {
    if !session.spawned {
        return;
    }
    log::trace!("{}: {packet:?}", session.username);

    session.flush_book_edit();

    vehicle::translate_vehicle_input(session, world, packet, now);
    movement::translate_movement(session, packet);
    action::translate_actions(session, world, packet);
}
