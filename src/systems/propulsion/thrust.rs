use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{AircraftConfig, ControlInput, Force, ForceCategory, PhysicsComponent};

/// Thrust along body forward (+z) for a throttle setting.
///
/// Throttle is clamped to [0, 1] even though callers should already have done so.
pub fn calculate_thrust(throttle: f64, max_thrust: f64) -> Vector3<f64> {
    Vector3::new(0.0, 0.0, throttle.clamp(0.0, 1.0) * max_thrust)
}

/// Submits engine thrust in the body frame.
pub fn thrust_system(
    mut query: Query<(&ControlInput, &AircraftConfig, &mut PhysicsComponent)>,
) {
    for (input, config, mut physics) in query.iter_mut() {
        let thrust = calculate_thrust(input.throttle, config.max_thrust);
        physics.add_force(Force::body(thrust, ForceCategory::Propulsive));
    }
}
