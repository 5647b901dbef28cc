use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Kinematic state of an aircraft.
///
/// World frame is y-up. Body frame has +z forward, +y up and +x along the pitch
/// axis (towards the left wing, so the frame stays right-handed).
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space [m], `y` is altitude
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in body frame [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    /// Level flight along world +z at `speed` m/s and `altitude` m.
    pub fn at_altitude_and_speed(altitude: f64, speed: f64) -> Self {
        Self {
            position: Vector3::new(0.0, altitude, 0.0),
            velocity: Vector3::new(0.0, 0.0, speed),
            ..Default::default()
        }
    }

    /// Builds an attitude from roll and pitch angles in degrees, in the same
    /// sense as [`SpatialComponent::roll_pitch_degrees`].
    pub fn attitude_from_roll_pitch(roll_deg: f64, pitch_deg: f64) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::x_axis(), pitch_deg.to_radians())
            * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), roll_deg.to_radians())
    }

    /// Body forward axis expressed in world space.
    pub fn forward(&self) -> Vector3<f64> {
        self.attitude * Vector3::z()
    }

    /// Body up axis expressed in world space.
    pub fn up(&self) -> Vector3<f64> {
        self.attitude * Vector3::y()
    }

    /// World linear velocity expressed in the body frame.
    pub fn local_velocity(&self) -> Vector3<f64> {
        self.attitude.inverse_transform_vector(&self.velocity)
    }

    /// Roll and pitch in degrees for a yaw → pitch → roll decomposition.
    ///
    /// Both angles are measured about the body axes the stabilizer torques act
    /// on: roll about +z in (-180, 180], pitch about +x in [-90, 90]. A positive
    /// pitch therefore points the nose below the horizon.
    pub fn roll_pitch_degrees(&self) -> (f64, f64) {
        let forward = self.forward();
        let pitch_axis = self.attitude * Vector3::x();
        let up = self.up();

        let pitch = (-forward.y).clamp(-1.0, 1.0).asin().to_degrees();
        let roll = pitch_axis.y.atan2(up.y).to_degrees();
        (normalize_degrees(roll), pitch)
    }
}

/// Wraps an angle in degrees into (-180, 180].
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
