//! Player movement validation and relay.

use ferry_protocol::packets::{
    bedrock::{InputFlags, SPlayerAuthInput},
    java::SMovePlayer,
};
use glam::Vec3;

use crate::Session;

/// Largest squared distance a player may move in a single tick.
///
/// Anything further is a desync or a forged packet, never a legitimate move.
pub const MAX_MOVE_DISTANCE_SQ: f32 = 300.0;

/// Checks whether moving from `current` to `proposed` is acceptable.
///
/// Rejects non-finite coordinates and moves longer than
/// [`MAX_MOVE_DISTANCE_SQ`] (squared). A move of exactly the limit is allowed.
#[must_use]
pub fn is_valid_move(current: Vec3, proposed: Vec3) -> bool {
    if !proposed.is_finite() {
        return false;
    }
    current.distance_squared(proposed) <= MAX_MOVE_DISTANCE_SQ
}

/// Relays the player's own movement as the matching Java move packet.
///
/// A rejected move sends nothing and leaves the last accepted position in
/// place, so the next tick is checked against a known-good point. While
/// riding only rotation is relayed, but the last position follows the client.
pub fn translate_movement(session: &mut Session, packet: &SPlayerAuthInput) {
    let state = &session.movement;

    let (yaw, pitch) = (packet.yaw(), packet.pitch());
    #[expect(clippy::float_cmp, reason = "any change at all must be relayed")]
    let rotation_changed =
        yaw.is_finite() && pitch.is_finite() && (yaw != state.last_yaw || pitch != state.last_pitch);
    let horizontal_collision = packet.input_data.contains(InputFlags::HORIZONTAL_COLLISION);

    let proposed = packet.position - Vec3::new(0.0, session.config().player_eye_height, 0.0);

    if session.player.vehicle_id.is_some() {
        // The vehicle relay owns position while riding. Follow the client
        // anyway so the first move after dismounting starts from the ride's end.
        if proposed.is_finite() {
            session.movement.last_position = proposed;
        }
        if rotation_changed {
            session.send_java(SMovePlayer::Rot {
                yaw,
                pitch,
                on_ground: session.movement.last_on_ground,
                horizontal_collision,
            });
            session.movement.last_yaw = yaw;
            session.movement.last_pitch = pitch;
        }
        return;
    }

    let position_changed = proposed != state.last_position;

    if position_changed && !is_valid_move(state.last_position, proposed) {
        log::debug!(
            "{} moved too quickly. current position: {}, new position: {}",
            session.username,
            state.last_position,
            proposed
        );
        return;
    }

    let on_ground = packet.input_data.contains(InputFlags::VERTICAL_COLLISION)
        && proposed.y <= state.last_position.y;

    let move_packet = match (position_changed, rotation_changed) {
        (true, true) => SMovePlayer::PosRot {
            position: proposed.as_dvec3(),
            yaw,
            pitch,
            on_ground,
            horizontal_collision,
        },
        (true, false) => SMovePlayer::Pos {
            position: proposed.as_dvec3(),
            on_ground,
            horizontal_collision,
        },
        (false, true) => SMovePlayer::Rot {
            yaw,
            pitch,
            on_ground,
            horizontal_collision,
        },
        (false, false) if on_ground != state.last_on_ground => SMovePlayer::StatusOnly {
            on_ground,
            horizontal_collision,
        },
        (false, false) => return,
    };

    session.send_java(move_packet);

    let state = &mut session.movement;
    if position_changed {
        state.last_position = proposed;
    }
    if rotation_changed {
        state.last_yaw = yaw;
        state.last_pitch = pitch;
    }
    state.last_on_ground = on_ground;
}
