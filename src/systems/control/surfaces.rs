use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AircraftConfig, ControlInput, ForceCategory, Moment, PhysicsComponent, SmoothedControls,
    SpatialComponent,
};
use crate::resources::PhysicsConfig;

/// Speed (m/s) at which control surfaces reach full authority.
pub const FULL_AUTHORITY_SPEED: f64 = 40.0;
/// Smoothing rate per second of step duration.
pub const SMOOTHING_RATE: f64 = 2.0;

/// Control authority in [0, 1], linear up to [`FULL_AUTHORITY_SPEED`].
pub fn speed_factor(speed: f64) -> f64 {
    (speed / FULL_AUTHORITY_SPEED).clamp(0.0, 1.0)
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

/// Moves every smoothed axis towards its raw input by `SMOOTHING_RATE * dt`.
pub fn smooth_controls(
    previous: &SmoothedControls,
    input: &ControlInput,
    dt: f64,
) -> SmoothedControls {
    let t = SMOOTHING_RATE * dt;
    SmoothedControls {
        pitch: lerp(previous.pitch, input.pitch, t),
        roll: lerp(previous.roll, input.roll, t),
        yaw: lerp(previous.yaw, input.yaw, t),
    }
}

/// Body torque as (pitch, yaw, roll) on (x, y, z).
///
/// Roll torque is opposite in sign to the roll stick.
pub fn calculate_control_torque(
    smoothed: &SmoothedControls,
    config: &AircraftConfig,
    speed: f64,
) -> Vector3<f64> {
    let authority = speed_factor(speed);

    let roll = -smoothed.roll * config.roll_sensitivity * authority;
    let pitch = smoothed.pitch * config.pitch_sensitivity * authority;
    let yaw = smoothed.yaw * config.yaw_sensitivity * authority;

    Vector3::new(pitch, yaw, roll)
}

/// Advances input smoothing and submits the control-surface torque.
pub fn control_surface_system(
    mut query: Query<(
        &ControlInput,
        &SpatialComponent,
        &AircraftConfig,
        &mut SmoothedControls,
        &mut PhysicsComponent,
    )>,
    physics_config: Res<PhysicsConfig>,
) {
    let dt = physics_config.timestep;

    for (input, spatial, config, mut smoothed, mut physics) in query.iter_mut() {
        *smoothed = smooth_controls(&smoothed, &input.sanitized(), dt);

        let torque = calculate_control_torque(&smoothed, config, spatial.velocity.norm());
        physics.add_moment(Moment::body(torque, ForceCategory::Control));
    }
}
