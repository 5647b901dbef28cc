use approx::assert_relative_eq;
use nalgebra::{UnitQuaternion, Vector3};
use wingsim::{
    components::{
        AirData, ControlInput, FlightTelemetry, ForceCategory, PhysicsComponent, ReferenceFrame,
        SpatialComponent,
    },
    resources::PhysicsConfig,
    systems::aerodynamics::air_density,
};

use crate::common::{
    assert_attitude_eq, assert_physics_valid, assert_position_eq, assert_spatial_valid,
    assert_telemetry_matches, cruise_spatial, deep_stall_spatial, reference_aircraft,
    simulate_duration, TestAppBuilder,
};

#[test]
fn test_mass_is_set_once_at_spawn() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(reference_aircraft())
        .with_initial_state(cruise_spatial())
        .build();

    let physics = app.snapshot::<PhysicsComponent>();
    assert_relative_eq!(physics.mass, 11600.0);

    app.set_input(ControlInput::with_throttle(1.0));
    app.run_steps(120);
    assert_relative_eq!(app.snapshot::<PhysicsComponent>().mass, 11600.0);
}

#[test]
fn test_at_rest_only_gravity_acts() {
    let mut app = TestAppBuilder::new()
        .with_physics(PhysicsConfig::default())
        .build();
    app.step();

    let physics = app.snapshot::<PhysicsComponent>();
    assert_physics_valid(&physics);

    assert_eq!(
        physics.force_sum(ForceCategory::Propulsive, ReferenceFrame::Body),
        Vector3::zeros()
    );
    assert_eq!(
        physics.force_sum(ForceCategory::Aerodynamic, ReferenceFrame::Body),
        Vector3::zeros()
    );
    assert_eq!(
        physics.force_sum(ForceCategory::Aerodynamic, ReferenceFrame::Inertial),
        Vector3::zeros()
    );
    assert_eq!(physics.total_moment(), Vector3::zeros());
    assert_position_eq(
        &physics.net_force,
        &Vector3::new(0.0, -9.81 * 11600.0, 0.0),
        1e-6,
    );

    let spatial = app.snapshot::<SpatialComponent>();
    assert!(spatial.velocity.y < 0.0, "aircraft should start falling");
    assert_eq!(spatial.angular_velocity, Vector3::zeros());
}

#[test]
fn test_full_throttle_thrust_along_nose() {
    let mut app = TestAppBuilder::new().build();

    app.set_input(ControlInput::with_throttle(1.0));
    app.step();
    let physics = app.snapshot::<PhysicsComponent>();
    assert_eq!(
        physics.force_sum(ForceCategory::Propulsive, ReferenceFrame::Body),
        Vector3::new(0.0, 0.0, 120000.0)
    );

    // Out-of-range throttle is clamped before use
    app.set_input(ControlInput::with_throttle(1.5));
    app.step();
    let physics = app.snapshot::<PhysicsComponent>();
    assert_eq!(
        physics.force_sum(ForceCategory::Propulsive, ReferenceFrame::Body),
        Vector3::new(0.0, 0.0, 120000.0)
    );
    assert_eq!(app.snapshot::<FlightTelemetry>().current_throttle, 1.0);
}

#[test]
fn test_step_reads_one_snapshot() {
    let mut app = TestAppBuilder::new()
        .with_initial_state(cruise_spatial())
        .build();
    app.step();

    let air_data = app.snapshot::<AirData>();
    let physics = app.snapshot::<PhysicsComponent>();
    let spatial = app.snapshot::<SpatialComponent>();

    // Air data, drag and telemetry all describe the state before integration
    assert_eq!(air_data.altitude, 1000.0);
    assert_relative_eq!(air_data.air_speed, 216.0, epsilon = 1e-9);
    let expected_drag = 0.02 * 0.5 * air_density(1000.0) * 60.0 * 60.0 * 50.0;
    let drag = physics.force_sum(ForceCategory::Aerodynamic, ReferenceFrame::Inertial);
    assert_relative_eq!(drag.z, -expected_drag, epsilon = 1e-9);
    assert_telemetry_matches(&app.snapshot::<FlightTelemetry>(), &air_data);

    // while the kinematic state has already moved on
    assert!(spatial.position.z > 0.0);
    assert!(spatial.position.y < 1000.0);
    // Level, hands-off and inside the trim band: nothing rotates the body
    assert_attitude_eq(&spatial.attitude, &UnitQuaternion::identity(), 1e-12);
}

#[test]
fn test_telemetry_trails_state_by_one_step() {
    let mut app = TestAppBuilder::new()
        .with_initial_state(cruise_spatial())
        .build();

    app.step();
    let after_first = app.snapshot::<SpatialComponent>();
    app.step();

    let telemetry = app.snapshot::<FlightTelemetry>();
    assert_eq!(telemetry.vertical_speed, after_first.velocity.y);
    assert_eq!(telemetry.altitude, after_first.position.y);
    assert_eq!(telemetry.air_speed, after_first.velocity.norm() * 3.6);
}

#[test]
fn test_deep_stall_cuts_lift() {
    let mut app = TestAppBuilder::new()
        .with_initial_state(deep_stall_spatial())
        .build();
    app.step();

    let air_data = app.snapshot::<AirData>();
    assert_relative_eq!(air_data.angle_of_attack, 45.0, epsilon = 1e-9);
    assert!(air_data.is_stalled);
    assert!(app.snapshot::<FlightTelemetry>().is_stalled);

    // Curve saturates at 1.0 beyond 15°, then 30% survives the stall
    let expected_lift = 0.3 * 0.5 * air_density(1000.0) * 30.0 * 30.0 * 50.0;
    let lift = app
        .snapshot::<PhysicsComponent>()
        .force_sum(ForceCategory::Aerodynamic, ReferenceFrame::Body);
    assert_relative_eq!(lift.y, expected_lift, epsilon = 1e-9);
}

#[test]
fn test_control_authority_needs_airspeed() {
    let roll_right = ControlInput {
        roll: 1.0,
        ..Default::default()
    };

    let mut app = TestAppBuilder::new()
        .with_initial_state(cruise_spatial())
        .build();
    app.set_input(roll_right);
    app.step();
    let control = app
        .snapshot::<PhysicsComponent>()
        .moment_sum(ForceCategory::Control);
    // One smoothing step of 2·dt towards full deflection
    assert_relative_eq!(control.z, -50000.0 / 60.0, epsilon = 1e-9);
    assert_relative_eq!(control.x, 0.0);

    let mut app = TestAppBuilder::new().build();
    app.set_input(roll_right);
    app.step();
    let control = app
        .snapshot::<PhysicsComponent>()
        .moment_sum(ForceCategory::Control);
    assert_eq!(control, Vector3::zeros());
}

#[test]
fn test_long_powered_flight_stays_finite() {
    let mut app = TestAppBuilder::new()
        .with_initial_state(cruise_spatial())
        .build();
    app.set_input(ControlInput {
        throttle: 1.0,
        pitch: -0.3,
        roll: 0.2,
        yaw: 0.1,
        brake: false,
    });

    simulate_duration(&mut app, 30.0);

    assert_spatial_valid(&app.snapshot::<SpatialComponent>());
    assert_physics_valid(&app.snapshot::<PhysicsComponent>());
    let config = app.get_state::<PhysicsConfig>().cloned().unwrap_or_default();
    assert!(app.snapshot::<SpatialComponent>().velocity.norm() <= config.max_velocity + 1e-9);
}
