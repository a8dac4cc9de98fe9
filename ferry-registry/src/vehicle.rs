//! Vehicle classification for movement relay.

use serde::{Deserialize, Serialize};

use crate::EntityKind;

/// How a vehicle's position is relayed to the Java server.
///
/// Resolved once from the vehicle's [`EntityKind`]; everything else in the
/// relay path matches on this instead of on concrete entity kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    /// Horses, donkeys, mules, camels. Relayed only while on the ground so the
    /// server can apply ground damage (magma, etc.) while standing still.
    RideableGroundAnimal,
    /// Llamas. Part of the horse family on Java, but never relayed from here.
    PackAnimal,
    /// Boats and rafts. Relayed by the sole or front passenger only.
    WaterCraft,
}

impl VehicleKind {
    /// Classifies an entity kind. Returns `None` for entities that are not
    /// vehicles this path handles (pigs, striders, minecarts, ...).
    #[must_use]
    pub const fn of(kind: EntityKind) -> Option<Self> {
        match kind {
            EntityKind::Horse
            | EntityKind::Donkey
            | EntityKind::Mule
            | EntityKind::SkeletonHorse
            | EntityKind::ZombieHorse
            | EntityKind::Camel => Some(Self::RideableGroundAnimal),
            EntityKind::Llama | EntityKind::TraderLlama => Some(Self::PackAnimal),
            EntityKind::Boat | EntityKind::ChestBoat | EntityKind::Raft => Some(Self::WaterCraft),
            EntityKind::Player
            | EntityKind::Minecart
            | EntityKind::Pig
            | EntityKind::Strider
            | EntityKind::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horse_family_is_split() {
        assert_eq!(
            VehicleKind::of(EntityKind::Horse),
            Some(VehicleKind::RideableGroundAnimal)
        );
        assert_eq!(
            VehicleKind::of(EntityKind::Camel),
            Some(VehicleKind::RideableGroundAnimal)
        );
        assert_eq!(
            VehicleKind::of(EntityKind::TraderLlama),
            Some(VehicleKind::PackAnimal)
        );
    }

    #[test]
    fn boats_and_rafts_are_water_craft() {
        for kind in [EntityKind::Boat, EntityKind::ChestBoat, EntityKind::Raft] {
            assert_eq!(VehicleKind::of(kind), Some(VehicleKind::WaterCraft));
        }
    }

    #[test]
    fn other_rideables_have_no_kind() {
        assert_eq!(VehicleKind::of(EntityKind::Pig), None);
        assert_eq!(VehicleKind::of(EntityKind::Minecart), None);
    }
}
