use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Aerodynamic state derived from one kinematic snapshot.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirData {
    /// World velocity expressed in the body frame (m/s), +z forward.
    pub local_velocity: Vector3<f64>,
    /// Angle of attack in degrees, positive when the flow comes from below.
    pub angle_of_attack: f64,
    /// |angle_of_attack| exceeds the configured stall angle.
    pub is_stalled: bool,
    /// Speed over ground (km/h).
    pub air_speed: f64,
    /// Height above the world origin (m).
    pub altitude: f64,
    /// Vertical component of world velocity (m/s).
    pub vertical_speed: f64,
}

impl Default for AirData {
    fn default() -> Self {
        Self {
            local_velocity: Vector3::zeros(),
            angle_of_attack: 0.0,
            is_stalled: false,
            air_speed: 0.0,
            altitude: 0.0,
            vertical_speed: 0.0,
        }
    }
}
