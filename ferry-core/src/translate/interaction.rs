//! Item use and block breaking feedback.

use ferry_protocol::packets::{
    bedrock::{CLevelEvent, ItemUseAction, LevelEventType, PlayerActionType, SPlayerAuthInput},
    java::{Hand, SUseItemOn},
};
use ferry_utils::Direction;
use glam::Vec3;

use crate::{Session, WorldView};

/// Relays a right click on a block from the item-use transaction.
pub fn use_item_on(session: &mut Session, packet: &SPlayerAuthInput) {
    let Some(transaction) = &packet.item_use_transaction else {
        return;
    };
    if transaction.action != ItemUseAction::ClickBlock {
        return;
    }
    let Some(face) = Direction::from_face(transaction.block_face) else {
        log::trace!(
            "{} clicked {} without a face",
            session.username,
            transaction.block_position
        );
        return;
    };

    let sequence = session.next_block_sequence();
    session.send_java(SUseItemOn {
        hand: Hand::MainHand,
        block_position: transaction.block_position,
        face,
        cursor: transaction.click_position.clamp(Vec3::ZERO, Vec3::ONE),
        inside_block: false,
        world_border_hit: false,
        sequence,
    });
}

/// Echoes cracking particles for blocks the player is still breaking.
pub fn spawn_block_break_particles(
    session: &Session,
    world: &dyn WorldView,
    packet: &SPlayerAuthInput,
) {
    if !session.config().emit_block_break_particles {
        return;
    }

    for action in &packet.player_actions {
        if !matches!(
            action.action,
            PlayerActionType::ContinueBreak | PlayerActionType::BlockContinueDestroy
        ) {
            continue;
        }
        let Some(face) = Direction::from_face(action.face) else {
            continue;
        };
        let state = world.block_state_at(action.block_position);
        if state.is_air() {
            continue;
        }

        session.send_bedrock(CLevelEvent {
            event: LevelEventType::break_particles(face),
            position: action.block_position.as_vec3(),
            data: session.block_mappings.bedrock_runtime_id(state) as i32,
        });
    }
}
