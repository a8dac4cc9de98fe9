//! Entity views the input path reads.
//!
//! Entities are owned by the world; the session only refers to them by id.

use bitflags::bitflags;
use ferry_registry::{EntityDefinition, EntityKind, VehicleKind};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

bitflags! {
    /// Entity flags as last reported by the Java server.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct EntityFlags: u32 {
        /// Burning.
        const ON_FIRE = 1 << 0;
        /// Crouching.
        const SNEAKING = 1 << 1;
        /// Riding another entity.
        const RIDING = 1 << 2;
        /// Sprinting.
        const SPRINTING = 1 << 3;
        /// Swimming pose.
        const SWIMMING = 1 << 4;
        /// Invisible.
        const INVISIBLE = 1 << 5;
        /// Gliding with an elytra.
        const GLIDING = 1 << 6;
        /// Crawling pose.
        const CRAWLING = 1 << 7;
    }
}

/// An entity in the world, as far as the input path is concerned.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    /// Java entity id.
    pub entity_id: i32,
    /// Bedrock runtime id.
    pub geyser_id: u64,
    /// Entity type.
    pub kind: EntityKind,
    /// Java position.
    pub position: Vec3,
    /// Java yaw.
    pub yaw: f32,
    /// Java pitch.
    pub pitch: f32,
    /// Whether the entity is on the ground.
    pub on_ground: bool,
    /// Entity flags.
    pub flags: EntityFlags,
    /// Passenger ids in seat order. The first passenger sits in front.
    pub passengers: SmallVec<[i32; 2]>,
    /// Id of the entity this one is riding.
    pub vehicle_id: Option<i32>,
}

impl Entity {
    /// Returns true if `flag` is set.
    #[must_use]
    pub const fn get_flag(&self, flag: EntityFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Static definition of this entity's type.
    #[must_use]
    pub const fn definition(&self) -> &'static EntityDefinition {
        self.kind.definition()
    }

    /// Vehicle classification, `None` if this is not a relayed vehicle.
    #[must_use]
    pub const fn vehicle_kind(&self) -> Option<VehicleKind> {
        VehicleKind::of(self.kind)
    }

    /// Whether `entity_id` occupies the front seat.
    #[must_use]
    pub fn is_front_passenger(&self, entity_id: i32) -> bool {
        self.passengers.first() == Some(&entity_id)
    }
}

/// The player entity belonging to a session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionPlayerEntity {
    /// Java entity id.
    pub entity_id: i32,
    /// Bedrock runtime id.
    pub geyser_id: u64,
    /// Entity flags as last reported by the Java server.
    #[serde(default)]
    pub flags: EntityFlags,
    /// Id of the vehicle being ridden.
    #[serde(default)]
    pub vehicle_id: Option<i32>,
}

impl SessionPlayerEntity {
    /// Creates a player entity that is not riding anything and has no flags.
    #[must_use]
    pub const fn new(entity_id: i32, geyser_id: u64) -> Self {
        Self {
            entity_id,
            geyser_id,
            flags: EntityFlags::empty(),
            vehicle_id: None,
        }
    }

    /// Returns true if `flag` is set.
    #[must_use]
    pub const fn get_flag(&self, flag: EntityFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Sets or clears `flag`.
    pub fn set_flag(&mut self, flag: EntityFlags, value: bool) {
        self.flags.set(flag, value);
    }

    /// Bedrock unique entity id. The bridge hands out the same value as the runtime id.
    #[must_use]
    pub const fn unique_id(&self) -> i64 {
        self.geyser_id as i64
    }
}
