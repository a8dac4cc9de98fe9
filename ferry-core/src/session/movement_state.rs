//! Per-session movement and input state, diffed against every incoming tick.
//!
//! Every flag here records what was last sent downstream, never a guess about
//! what the client is doing. Handlers compare the current tick against it to
//! decide whether a Java packet is needed.

use std::time::Instant;

use glam::{Vec2, Vec3};

/// `arm_animation_ticks` value while no swing is in progress.
pub const NO_ARM_ANIMATION: i32 = -1;

/// Swing duration in ticks without haste or mining fatigue.
pub const BASE_SWING_DURATION: i32 = 6;

/// Movement state for one session. Only the translation path mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionMovementState {
    /// Last accepted Java feet position.
    pub last_position: Vec3,
    /// Last relayed yaw.
    pub last_yaw: f32,
    /// Last relayed pitch.
    pub last_pitch: f32,
    /// Last relayed on-ground state.
    pub last_on_ground: bool,

    /// Last analog stick vector relayed for the current vehicle.
    pub vehicle_input: Vec2,
    /// When the vehicle position was last relayed. `None` if never.
    pub last_vehicle_move_at: Option<Instant>,

    /// Sneaking as last sent to the server.
    pub sneaking: bool,
    /// Sprinting as last sent to the server. Also the swim proxy.
    pub sprinting: bool,
    /// Swimming as last sent to the server.
    pub swimming: bool,
    /// Creative flight as last sent to the server.
    pub flying: bool,

    /// Ticks into the current arm swing, [`NO_ARM_ANIMATION`] when idle.
    pub arm_animation_ticks: i32,
}

impl SessionMovementState {
    /// Creates the state for a player spawned at `position`.
    #[must_use]
    pub const fn new(position: Vec3) -> Self {
        Self {
            last_position: position,
            last_yaw: 0.0,
            last_pitch: 0.0,
            last_on_ground: false,
            vehicle_input: Vec2::ZERO,
            last_vehicle_move_at: None,
            sneaking: false,
            sprinting: false,
            swimming: false,
            flying: false,
            arm_animation_ticks: NO_ARM_ANIMATION,
        }
    }

    /// Whether no arm swing is in progress.
    #[must_use]
    pub const fn is_arm_idle(&self) -> bool {
        self.arm_animation_ticks == NO_ARM_ANIMATION
    }

    /// Starts counting ticks for a new swing.
    pub const fn activate_arm_animation_ticking(&mut self) {
        self.arm_animation_ticks = 0;
    }

    /// Advances the swing by one game tick, returning to idle once it has run
    /// for `swing_duration` ticks. Does nothing while idle.
    pub const fn tick_arm_animation(&mut self, swing_duration: i32) {
        if self.arm_animation_ticks == NO_ARM_ANIMATION {
            return;
        }
        self.arm_animation_ticks += 1;
        if self.arm_animation_ticks >= swing_duration {
            self.arm_animation_ticks = NO_ARM_ANIMATION;
        }
    }
}

/// Swing duration in ticks for the given effect levels.
///
/// Vanilla: `LivingEntity.getCurrentSwingDuration`. Haste shortens the swing
/// by one tick per level; mining fatigue lengthens it by two per level plus
/// two. Haste wins when both are present. Levels come from the server
/// unchecked, so the arithmetic saturates.
#[must_use]
pub const fn swing_duration(haste_level: i32, mining_fatigue_level: i32) -> i32 {
    if haste_level > 0 {
        BASE_SWING_DURATION.saturating_sub(haste_level)
    } else if mining_fatigue_level > 0 {
        BASE_SWING_DURATION.saturating_add(mining_fatigue_level.saturating_add(1).saturating_mul(2))
    } else {
        BASE_SWING_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_idle() {
        let state = SessionMovementState::new(Vec3::new(0.0, 64.0, 0.0));
        assert!(state.is_arm_idle());
        assert_eq!(state.vehicle_input, Vec2::ZERO);
        assert!(state.last_vehicle_move_at.is_none());
        assert!(!state.sneaking && !state.sprinting && !state.swimming && !state.flying);
    }

    #[test]
    fn swing_returns_to_idle_after_duration() {
        let mut state = SessionMovementState::new(Vec3::ZERO);
        state.activate_arm_animation_ticking();

        for _ in 0..BASE_SWING_DURATION - 1 {
            state.tick_arm_animation(BASE_SWING_DURATION);
            assert!(!state.is_arm_idle());
        }
        state.tick_arm_animation(BASE_SWING_DURATION);
        assert!(state.is_arm_idle());
    }

    #[test]
    fn idle_state_does_not_tick() {
        let mut state = SessionMovementState::new(Vec3::ZERO);
        state.tick_arm_animation(BASE_SWING_DURATION);
        assert_eq!(state.arm_animation_ticks, NO_ARM_ANIMATION);
    }

    #[test]
    fn effects_change_swing_duration() {
        assert_eq!(swing_duration(0, 0), 6);
        assert_eq!(swing_duration(2, 0), 4);
        assert_eq!(swing_duration(0, 1), 10);
        assert_eq!(swing_duration(1, 3), 5);
    }

    #[test]
    fn extreme_effect_levels_saturate() {
        assert_eq!(swing_duration(0, i32::MAX), i32::MAX);
        assert_eq!(swing_duration(i32::MAX, 0), BASE_SWING_DURATION - i32::MAX);

        let mut state = SessionMovementState::new(Vec3::ZERO);
        state.activate_arm_animation_ticking();
        state.tick_arm_animation(swing_duration(0, i32::MAX));
        assert!(!state.is_arm_idle());
    }
}
