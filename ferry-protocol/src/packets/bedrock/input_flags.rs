//! The discrete input flags carried by `PlayerAuthInput`.
#![expect(missing_docs, reason = "flag names are the Bedrock protocol names")]

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// The raw Bedrock input bitset.
    ///
    /// Declaration order is bit order; [`InputFlags::iter`] yields set flags in
    /// that order.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct InputFlags: u64 {
        const ASCEND = 1 << 0;
        const DESCEND = 1 << 1;
        const NORTH_JUMP = 1 << 2;
        const JUMP_DOWN = 1 << 3;
        const SPRINT_DOWN = 1 << 4;
        const CHANGE_HEIGHT = 1 << 5;
        const JUMPING = 1 << 6;
        const AUTO_JUMPING_IN_WATER = 1 << 7;
        const SNEAKING = 1 << 8;
        const SNEAK_DOWN = 1 << 9;
        const UP = 1 << 10;
        const DOWN = 1 << 11;
        const LEFT = 1 << 12;
        const RIGHT = 1 << 13;
        const UP_LEFT = 1 << 14;
        const UP_RIGHT = 1 << 15;
        const WANT_UP = 1 << 16;
        const WANT_DOWN = 1 << 17;
        const WANT_DOWN_SLOW = 1 << 18;
        const WANT_UP_SLOW = 1 << 19;
        const SPRINTING = 1 << 20;
        const ASCEND_BLOCK = 1 << 21;
        const DESCEND_BLOCK = 1 << 22;
        const SNEAK_TOGGLE_DOWN = 1 << 23;
        const PERSIST_SNEAK = 1 << 24;
        const START_SPRINTING = 1 << 25;
        const STOP_SPRINTING = 1 << 26;
        const START_SNEAKING = 1 << 27;
        const STOP_SNEAKING = 1 << 28;
        const START_SWIMMING = 1 << 29;
        const STOP_SWIMMING = 1 << 30;
        const START_JUMPING = 1 << 31;
        const START_GLIDING = 1 << 32;
        const STOP_GLIDING = 1 << 33;
        const PERFORM_ITEM_INTERACTION = 1 << 34;
        const PERFORM_BLOCK_ACTIONS = 1 << 35;
        const PERFORM_ITEM_STACK_REQUEST = 1 << 36;
        const HANDLED_TELEPORT = 1 << 37;
        const EMOTING = 1 << 38;
        const MISSED_SWING = 1 << 39;
        const START_CRAWLING = 1 << 40;
        const STOP_CRAWLING = 1 << 41;
        const START_FLYING = 1 << 42;
        const STOP_FLYING = 1 << 43;
        const RECEIVED_SERVER_DATA = 1 << 44;
        const IN_CLIENT_PREDICTED_IN_VEHICLE = 1 << 45;
        const PADDLING_LEFT = 1 << 46;
        const PADDLING_RIGHT = 1 << 47;
        const BLOCK_BREAKING_DELAY_ENABLED = 1 << 48;
        const HORIZONTAL_COLLISION = 1 << 49;
        const VERTICAL_COLLISION = 1 << 50;
        const DOWN_LEFT = 1 << 51;
        const DOWN_RIGHT = 1 << 52;
        const START_USING_ITEM = 1 << 53;
        const CAMERA_RELATIVE_MOVEMENT_ENABLED = 1 << 54;
        const ROT_CONTROLLED_BY_MOVE_DIRECTION = 1 << 55;
        const START_SPIN_ATTACK = 1 << 56;
        const STOP_SPIN_ATTACK = 1 << 57;
        const IS_HOTBAR_ONLY_TOUCH = 1 << 58;
        const JUMP_RELEASED_RAW = 1 << 59;
        const JUMP_PRESSED_RAW = 1 << 60;
        const JUMP_CURRENT_RAW = 1 << 61;
        const SNEAK_RELEASED_RAW = 1 << 62;
        const SNEAK_PRESSED_RAW = 1 << 63;
    }
}
