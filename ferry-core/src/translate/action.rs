//! Discrete input flags to Java player commands.
//!
//! Bedrock re-sends held state flags every tick, so every handler here is
//! guarded against repeating what the server already knows.

use ferry_protocol::packets::{
    bedrock::{
        AnimateAction, CAnimate, CPlayerAction, InputFlags, PlayerActionType, SPlayerAuthInput,
    },
    java::{Hand, PlayerCommandAction, SPlayerAbilities, SPlayerCommand, SSwing},
};
use ferry_utils::GameMode;

use super::interaction;
use crate::{EntityFlags, Session, WorldView};

/// A flag handler. All handlers share one shape so they fit in [`HANDLERS`].
type Handler = fn(&mut Session, &dyn WorldView, &SPlayerAuthInput);

/// Handled flags and their handlers, in bit order.
const HANDLERS: [(InputFlags, Handler); 13] = [
    (InputFlags::START_SPRINTING, start_sprinting),
    (InputFlags::STOP_SPRINTING, stop_sprinting),
    (InputFlags::START_SNEAKING, start_sneaking),
    (InputFlags::STOP_SNEAKING, stop_sneaking),
    (InputFlags::START_SWIMMING, start_swimming),
    (InputFlags::STOP_SWIMMING, stop_swimming),
    (InputFlags::START_GLIDING, start_gliding),
    (InputFlags::STOP_GLIDING, stop_gliding),
    (InputFlags::PERFORM_ITEM_INTERACTION, perform_item_interaction),
    (InputFlags::PERFORM_BLOCK_ACTIONS, perform_block_actions),
    (InputFlags::MISSED_SWING, missed_swing),
    (InputFlags::START_FLYING, start_flying),
    (InputFlags::STOP_FLYING, stop_flying),
];

/// Runs the handler of every set flag, in flag order.
pub fn translate_actions(session: &mut Session, world: &dyn WorldView, packet: &SPlayerAuthInput) {
    for (flag, handler) in HANDLERS {
        if packet.input_data.contains(flag) {
            handler(session, world, packet);
        }
    }
}

fn send_command(session: &Session, action: PlayerCommandAction) {
    session.send_java(SPlayerCommand::new(session.player.entity_id, action));
}

fn start_sprinting(session: &mut Session, _world: &dyn WorldView, _packet: &SPlayerAuthInput) {
    if !session.player.get_flag(EntityFlags::SWIMMING) {
        send_command(session, PlayerCommandAction::StartSprinting);
        session.movement.sprinting = true;
    }
}

fn stop_sprinting(session: &mut Session, _world: &dyn WorldView, _packet: &SPlayerAuthInput) {
    if !session.player.get_flag(EntityFlags::SWIMMING) {
        send_command(session, PlayerCommandAction::StopSprinting);
    }
    session.movement.sprinting = false;
}

fn start_sneaking(session: &mut Session, _world: &dyn WorldView, _packet: &SPlayerAuthInput) {
    send_command(session, PlayerCommandAction::StartSneaking);
    session.movement.sneaking = true;
}

fn stop_sneaking(session: &mut Session, _world: &dyn WorldView, _packet: &SPlayerAuthInput) {
    send_command(session, PlayerCommandAction::StopSneaking);
    session.movement.sneaking = false;
}

fn start_gliding(session: &mut Session, _world: &dyn WorldView, _packet: &SPlayerAuthInput) {
    // Creative flight has to stop or the server refuses the glide.
    session.send_java(SPlayerAbilities { flying: false });
    send_command(session, PlayerCommandAction::StartFallFlying);
}

/// Java has no glide toggle off; starting again is how the client ends it too.
fn stop_gliding(session: &mut Session, _world: &dyn WorldView, _packet: &SPlayerAuthInput) {
    send_command(session, PlayerCommandAction::StartFallFlying);
}

fn perform_item_interaction(
    session: &mut Session,
    _world: &dyn WorldView,
    packet: &SPlayerAuthInput,
) {
    interaction::use_item_on(session, packet);
}

fn perform_block_actions(session: &mut Session, world: &dyn WorldView, packet: &SPlayerAuthInput) {
    interaction::spawn_block_break_particles(session, world, packet);
}

/// Java models swimming as sprinting in water.
fn start_swimming(session: &mut Session, _world: &dyn WorldView, _packet: &SPlayerAuthInput) {
    if session.player.get_flag(EntityFlags::SWIMMING) {
        return;
    }
    send_command(session, PlayerCommandAction::StartSprinting);
    session.movement.swimming = true;
    session.movement.sprinting = true;
}

fn stop_swimming(session: &mut Session, world: &dyn WorldView, _packet: &SPlayerAuthInput) {
    // Crawling under a low ceiling makes the client flip this every tick.
    if world.must_player_crawl_here() {
        return;
    }
    send_command(session, PlayerCommandAction::StopSprinting);
    session.movement.swimming = false;
    session.movement.sprinting = false;
}

fn missed_swing(session: &mut Session, _world: &dyn WorldView, _packet: &SPlayerAuthInput) {
    if !session.movement.is_arm_idle() {
        return;
    }

    // Java shows a cooldown when hitting air and has no sound to hook it on.
    session.send_cooldown();

    session.send_java(SSwing {
        hand: Hand::MainHand,
    });
    session.movement.activate_arm_animation_ticking();

    // The client does not animate its own missed swing.
    session.send_bedrock(CAnimate {
        runtime_entity_id: session.player.geyser_id,
        action: AnimateAction::SwingArm,
    });
}

fn start_flying(session: &mut Session, world: &dyn WorldView, _packet: &SPlayerAuthInput) {
    if !session.can_fly {
        // The client predicted flight on its own. Correct it.
        session.send_abilities();
        session.send_bedrock(CPlayerAction::without_block(
            session.player.geyser_id,
            PlayerActionType::StopFlying,
        ));
        return;
    }

    if session.game_mode == GameMode::Spectator {
        // Already flying.
        session.send_abilities();
        return;
    }

    if session.player.get_flag(EntityFlags::SWIMMING) && world.is_player_in_water() {
        // Java cannot fly while swimming in water, only while crawling.
        session.send_abilities();
        return;
    }

    session.movement.flying = true;
    session.send_java(SPlayerAbilities { flying: true });
}

fn stop_flying(session: &mut Session, _world: &dyn WorldView, _packet: &SPlayerAuthInput) {
    session.movement.flying = false;
    session.send_java(SPlayerAbilities { flying: false });
}
