use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AirData, AircraftConfig, Force, ForceCategory, PhysicsComponent, SpatialComponent,
};

/// Sea-level air density (kg/m³).
pub const SEA_LEVEL_DENSITY: f64 = 1.225;
/// Scale height of the exponential atmosphere (m).
pub const SCALE_HEIGHT: f64 = 8000.0;
/// Fraction of lift kept once stalled.
pub const STALL_LIFT_FACTOR: f64 = 0.3;
/// Parasitic drag coefficient at zero angle of attack.
pub const PARASITIC_DRAG: f64 = 0.02;
/// Induced drag added at `INDUCED_DRAG_REFERENCE_ANGLE`.
pub const INDUCED_DRAG_GAIN: f64 = 0.3;
/// Angle (deg) at which the induced term reaches `INDUCED_DRAG_GAIN`.
pub const INDUCED_DRAG_REFERENCE_ANGLE: f64 = 30.0;

/// Lift and drag for one step.
#[derive(Debug, Clone, PartialEq)]
pub struct AeroForces {
    /// Body frame, along +y.
    pub lift: Vector3<f64>,
    /// World frame, against the direction of travel.
    pub drag: Vector3<f64>,
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
    pub dynamic_pressure: f64,
}

/// Exponential atmosphere: sea-level density at 0 m, e-folding every 8 km.
pub fn air_density(altitude: f64) -> f64 {
    SEA_LEVEL_DENSITY * (-altitude / SCALE_HEIGHT).exp()
}

/// Lift coefficient from the configured curve, cut to 30% once stalled.
///
/// The cut is a step at the stall boundary, not a blend.
pub fn lift_coefficient(config: &AircraftConfig, angle_of_attack: f64, is_stalled: bool) -> f64 {
    let coefficient = config.lift_curve.evaluate(angle_of_attack.abs());
    if is_stalled {
        coefficient * STALL_LIFT_FACTOR
    } else {
        coefficient
    }
}

/// Quadratic drag polar: `0.02 + 0.3 * (alpha / 30)^2`.
pub fn drag_coefficient(angle_of_attack: f64) -> f64 {
    PARASITIC_DRAG + INDUCED_DRAG_GAIN * (angle_of_attack / INDUCED_DRAG_REFERENCE_ANGLE).powi(2)
}

/// Lift along body up and drag against world velocity.
///
/// Dynamic pressure is built from the forward component of the body velocity
/// only. A body at exactly zero velocity gets zero drag.
pub fn calculate_aero_forces(
    air_data: &AirData,
    velocity: &Vector3<f64>,
    config: &AircraftConfig,
) -> AeroForces {
    let density = air_density(air_data.altitude);
    let forward_speed = air_data.local_velocity.z;
    let dynamic_pressure = 0.5 * density * forward_speed * forward_speed;

    let lift_coefficient =
        lift_coefficient(config, air_data.angle_of_attack, air_data.is_stalled);
    let lift = lift_coefficient * dynamic_pressure * config.wing_area;

    let drag_coefficient = drag_coefficient(air_data.angle_of_attack);
    let drag_magnitude = drag_coefficient * dynamic_pressure * config.wing_area;
    let drag = velocity
        .try_normalize(0.0)
        .map_or_else(Vector3::zeros, |direction| -direction * drag_magnitude);

    AeroForces {
        lift: Vector3::new(0.0, lift, 0.0),
        drag,
        lift_coefficient,
        drag_coefficient,
        dynamic_pressure,
    }
}

/// Submits lift (body frame) and drag (world frame) to the accumulator.
pub fn aero_force_system(
    mut query: Query<(
        &AirData,
        &SpatialComponent,
        &AircraftConfig,
        &mut PhysicsComponent,
    )>,
) {
    for (air_data, spatial, config, mut physics) in query.iter_mut() {
        let forces = calculate_aero_forces(air_data, &spatial.velocity, config);

        physics.add_force(Force::body(forces.lift, ForceCategory::Aerodynamic));
        physics.add_force(Force::inertial(forces.drag, ForceCategory::Aerodynamic));
    }
}
