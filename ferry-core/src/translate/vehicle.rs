//! Rider input and vehicle position relay.

use std::time::{Duration, Instant};

use ferry_protocol::packets::{
    bedrock::{InputFlags, SPlayerAuthInput},
    java::{SMoveVehicle, SPlayerInput},
};
use ferry_registry::VehicleKind;

use crate::{Entity, Session, WorldView};

/// Minimum time between two relayed vehicle positions.
pub const VEHICLE_MOVE_INTERVAL: Duration = Duration::from_millis(100);

/// Java measures boat yaw from a different zero than Bedrock.
const VEHICLE_YAW_OFFSET: f32 = 90.0;

/// Whether the rider `rider_id` should relay this vehicle's position.
#[must_use]
pub fn should_relay_position(kind: VehicleKind, vehicle: &Entity, rider_id: i32) -> bool {
    match kind {
        // Only while grounded, so standing on magma still hurts.
        VehicleKind::RideableGroundAnimal => vehicle.on_ground,
        VehicleKind::WaterCraft => {
            vehicle.passengers.len() == 1 || vehicle.is_front_passenger(rider_id)
        }
        VehicleKind::PackAnimal => false,
    }
}

/// Relays a changed analog stick vector as Java steering input and, when the
/// player drives a vehicle, the vehicle's position.
///
/// Bedrock only repeats the stick vector while it is held, so an unchanged
/// vector means there is nothing new to relay.
pub fn translate_vehicle_input(
    session: &mut Session,
    world: &dyn WorldView,
    packet: &SPlayerAuthInput,
    now: Instant,
) {
    let input = packet.analog_move_vector;
    if input == session.movement.vehicle_input {
        return;
    }
    if !input.is_finite() {
        // Not stored, so the next finite vector is diffed against the last one relayed.
        log::trace!("{} sent a non-finite analog vector", session.username);
        return;
    }

    session.send_java(SPlayerInput {
        sideways: input.x,
        forward: input.y,
        jumping: packet.input_data.contains(InputFlags::JUMPING),
        sneaking: packet.input_data.contains(InputFlags::SNEAKING),
    });
    session.movement.vehicle_input = input;

    let Some(vehicle_id) = session.player.vehicle_id else {
        return;
    };
    let Some(vehicle) = world.entity(vehicle_id) else {
        log::trace!("{} rides unknown entity {vehicle_id}", session.username);
        return;
    };
    let Some(kind) = vehicle.vehicle_kind() else {
        return;
    };

    if !should_relay_position(kind, vehicle, session.player.entity_id) {
        return;
    }
    if let Some(last) = session.movement.last_vehicle_move_at
        && now.saturating_duration_since(last) < VEHICLE_MOVE_INTERVAL
    {
        return;
    }

    let mut position = vehicle.position;
    if kind == VehicleKind::WaterCraft && !vehicle.on_ground {
        // Bedrock seats boats higher; without this the server sees them float up.
        position.y -= vehicle.definition().offset;
    }

    session.send_java(SMoveVehicle {
        position: position.as_dvec3(),
        yaw: vehicle.yaw - VEHICLE_YAW_OFFSET,
        pitch: vehicle.pitch,
    });
    session.movement.last_vehicle_move_at = Some(now);
}

#[cfg(test)]
mod tests {
    use ferry_registry::EntityKind;
    use glam::Vec3;
    use smallvec::{SmallVec, smallvec};

    use super::*;
    use crate::EntityFlags;

    fn vehicle(kind: EntityKind, on_ground: bool, passengers: SmallVec<[i32; 2]>) -> Entity {
        Entity {
            entity_id: 50,
            geyser_id: 50,
            kind,
            position: Vec3::new(0.0, 63.0, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            on_ground,
            flags: EntityFlags::empty(),
            passengers,
            vehicle_id: None,
        }
    }

    #[test]
    fn ground_animal_relays_only_on_ground() {
        let kind = VehicleKind::RideableGroundAnimal;
        assert!(should_relay_position(kind, &vehicle(EntityKind::Horse, true, smallvec![1]), 1));
        assert!(!should_relay_position(kind, &vehicle(EntityKind::Horse, false, smallvec![1]), 1));
    }

    #[test]
    fn pack_animal_never_relays() {
        let llama = vehicle(EntityKind::Llama, true, smallvec![1]);
        assert!(!should_relay_position(VehicleKind::PackAnimal, &llama, 1));
    }

    #[test]
    fn water_craft_relays_for_sole_or_front_rider() {
        let kind = VehicleKind::WaterCraft;
        assert!(should_relay_position(kind, &vehicle(EntityKind::Boat, false, smallvec![1]), 1));
        assert!(should_relay_position(kind, &vehicle(EntityKind::Boat, false, smallvec![1, 2]), 1));
        assert!(!should_relay_position(kind, &vehicle(EntityKind::Boat, false, smallvec![2, 1]), 1));
    }
}
