use nalgebra::Vector3;
use wingsim::{
    components::{AircraftConfig, SpatialComponent},
    resources::PhysicsConfig,
};

/// Cruise at 1000 m and 60 m/s along world +z.
pub fn cruise_spatial() -> SpatialComponent {
    SpatialComponent::at_altitude_and_speed(1000.0, 60.0)
}

/// Motionless at 1000 m with the given roll and pitch (degrees).
pub fn upset_spatial(roll_deg: f64, pitch_deg: f64) -> SpatialComponent {
    SpatialComponent {
        position: Vector3::new(0.0, 1000.0, 0.0),
        attitude: SpatialComponent::attitude_from_roll_pitch(roll_deg, pitch_deg),
        ..Default::default()
    }
}

/// Level attitude with the air arriving 45° from below the nose.
pub fn deep_stall_spatial() -> SpatialComponent {
    SpatialComponent {
        position: Vector3::new(0.0, 1000.0, 0.0),
        velocity: Vector3::new(0.0, -30.0, 30.0),
        ..Default::default()
    }
}

/// Default physics without gravity.
pub fn weightless_physics() -> PhysicsConfig {
    PhysicsConfig::weightless()
}

pub fn reference_aircraft() -> AircraftConfig {
    AircraftConfig {
        name: "test_aircraft".to_string(),
        ..Default::default()
    }
}

/// The reference aircraft as YAML, with a few values changed.
pub const LIGHT_AIRCRAFT_YAML: &str = r#"
name: light_aircraft
base_mass: 5000.0
fuel_amount: 1000.0
fuel_density: 0.5
max_thrust: 40000.0
lift_curve:
  - [0.0, 0.0]
  - [10.0, 0.9]
  - [18.0, 1.2]
stall_angle: 18.0
inertia: [8000.0, 12000.0, 4000.0]
"#;
