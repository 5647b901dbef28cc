use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Integrator tunables shared by every simulated body.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    // Integration parameters
    pub max_velocity: f64,
    pub max_angular_velocity: f64,
    pub timestep: f64,

    // Force parameters
    pub gravity: Vector3<f64>,
    /// Fraction of linear velocity removed per second.
    pub linear_damping: f64,
    /// Fraction of angular velocity removed per second.
    pub angular_damping: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            max_velocity: 400.0,        // m/s
            max_angular_velocity: 10.0, // rad/s
            timestep: 1.0 / 120.0,      // 120 Hz
            gravity: Vector3::new(0.0, -9.81, 0.0),
            linear_damping: 0.05,
            angular_damping: 3.0,
        }
    }
}

impl PhysicsConfig {
    /// Default tuning with gravity switched off.
    pub fn weightless() -> Self {
        Self {
            gravity: Vector3::zeros(),
            ..Default::default()
        }
    }
}
