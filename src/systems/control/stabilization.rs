use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{ControlInput, ForceCategory, Moment, PhysicsComponent, SpatialComponent};

/// Stick deflection below which the pilot counts as hands-off.
pub const STICK_DEADZONE: f64 = 0.1;

/// Roll leveling: deadband (deg), gain (N·m/deg), torque limit (N·m).
pub const ROLL_DEADBAND: f64 = 5.0;
pub const ROLL_GAIN: f64 = 800.0;
pub const ROLL_TORQUE_LIMIT: f64 = 4000.0;

/// Pitch trim: target (deg), deadband around target (deg), gain (N·m/deg), limit (N·m).
pub const TRIM_PITCH: f64 = 2.0;
pub const PITCH_DEADBAND: f64 = 3.0;
pub const PITCH_GAIN: f64 = 600.0;
pub const PITCH_TORQUE_LIMIT: f64 = 3000.0;

/// Damping torque per rad/s of body rate.
pub const ANGULAR_DAMPING_GAIN: f64 = 800.0;

/// Torque about body +z pulling the wings level while the roll stick is centred.
pub fn roll_leveling_torque(roll_deg: f64, roll_input: f64) -> f64 {
    if roll_input.abs() < STICK_DEADZONE && roll_deg.abs() > ROLL_DEADBAND {
        (-roll_deg * ROLL_GAIN).clamp(-ROLL_TORQUE_LIMIT, ROLL_TORQUE_LIMIT)
    } else {
        0.0
    }
}

/// Torque about body +x pulling pitch towards [`TRIM_PITCH`] while the pitch stick is centred.
pub fn pitch_trim_torque(pitch_deg: f64, pitch_input: f64) -> f64 {
    if pitch_input.abs() < STICK_DEADZONE && (pitch_deg - TRIM_PITCH).abs() > PITCH_DEADBAND {
        let error = TRIM_PITCH - pitch_deg;
        (error * PITCH_GAIN).clamp(-PITCH_TORQUE_LIMIT, PITCH_TORQUE_LIMIT)
    } else {
        0.0
    }
}

/// Opposes body rotation on every axis, regardless of pilot input.
pub fn angular_damping_torque(angular_velocity: &Vector3<f64>) -> Vector3<f64> {
    -angular_velocity * ANGULAR_DAMPING_GAIN
}

/// Sum of leveling, trim and damping torques in the body frame.
///
/// Uses the raw (unsmoothed) stick positions so the stabilizer backs off the
/// moment the pilot touches the controls.
pub fn calculate_stabilization_torque(
    spatial: &SpatialComponent,
    input: &ControlInput,
) -> Vector3<f64> {
    let (roll, pitch) = spatial.roll_pitch_degrees();

    let corrective = Vector3::new(
        pitch_trim_torque(pitch, input.pitch),
        0.0,
        roll_leveling_torque(roll, input.roll),
    );

    corrective + angular_damping_torque(&spatial.angular_velocity)
}

/// Submits stabilization torque.
pub fn stabilization_system(
    mut query: Query<(&ControlInput, &SpatialComponent, &mut PhysicsComponent)>,
) {
    for (input, spatial, mut physics) in query.iter_mut() {
        let torque = calculate_stabilization_torque(spatial, input);
        physics.add_moment(Moment::body(torque, ForceCategory::Stabilization));
    }
}
