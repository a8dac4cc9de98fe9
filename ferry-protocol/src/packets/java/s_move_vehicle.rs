use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Serverbound vehicle movement, sent by the driver of a client-controlled vehicle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SMoveVehicle {
    /// Absolute vehicle position.
    pub position: DVec3,
    /// Vehicle yaw in Java degrees.
    pub yaw: f32,
    /// Vehicle pitch.
    pub pitch: f32,
}
