use nalgebra::Vector3;
use wingsim::components::{ControlInput, ForceCategory, PhysicsComponent, SpatialComponent};

use crate::common::{
    assert_spatial_valid, attitude_error, upset_spatial, wait_for_condition, weightless_physics,
    TestAppBuilder,
};

/// Slack for the attitude extraction when an axis is already at rest.
const MONOTONE_TOLERANCE: f64 = 1e-6;

/// Hands-off recovery from a motionless upset. With no airflow the only
/// torques are the stabilizer's, so this isolates the leveling loop. The
/// default damping keeps the response overdamped: neither error may grow
/// from one step to the next.
fn recover_from(roll: f64, pitch: f64) {
    let mut app = TestAppBuilder::new()
        .with_physics(weightless_physics())
        .with_initial_state(upset_spatial(roll, pitch))
        .build();

    let (mut previous_roll_error, mut previous_pitch_error) =
        attitude_error(&app.snapshot::<SpatialComponent>());

    for step in 0..4800 {
        app.step();
        let (roll_error, pitch_error) = attitude_error(&app.snapshot::<SpatialComponent>());

        assert!(
            roll_error <= previous_roll_error + MONOTONE_TOLERANCE,
            "roll error grew from {:.4}° to {:.4}° at step {}",
            previous_roll_error,
            roll_error,
            step
        );
        assert!(
            pitch_error <= previous_pitch_error + MONOTONE_TOLERANCE,
            "pitch error grew from {:.4}° to {:.4}° at step {}",
            previous_pitch_error,
            pitch_error,
            step
        );

        previous_roll_error = roll_error;
        previous_pitch_error = pitch_error;
    }

    let spatial = app.snapshot::<SpatialComponent>();
    assert_spatial_valid(&spatial);

    let (roll_error, pitch_error) = attitude_error(&spatial);
    assert!(roll_error <= 5.5, "final roll error {:.2}°", roll_error);
    assert!(pitch_error <= 3.5, "final pitch error {:.2}°", pitch_error);
}

#[test]
fn test_recovers_from_right_bank_nose_down() {
    recover_from(30.0, 20.0);
}

#[test]
fn test_recovers_from_left_bank_nose_up() {
    recover_from(-45.0, -25.0);
}

#[test]
fn test_recovers_from_mixed_upset() {
    recover_from(25.0, -15.0);
}

#[test]
fn test_recovers_from_pure_bank() {
    recover_from(30.0, 0.0);
}

#[test]
fn test_recovers_from_pure_pitch_upset() {
    recover_from(0.0, 20.0);
}

#[test]
fn test_wings_level_within_bounded_time() {
    let mut app = TestAppBuilder::new()
        .with_physics(weightless_physics())
        .with_initial_state(upset_spatial(40.0, 2.0))
        .build();

    let levelled = wait_for_condition(
        &mut app,
        |app| {
            let world = app.world_mut();
            let mut query = world.query::<&SpatialComponent>();
            query
                .get_single(world)
                .map(|spatial| attitude_error(spatial).0 <= 5.0)
                .unwrap_or(false)
        },
        2400,
    );
    assert!(levelled, "wings not level after 20 s");
}

#[test]
fn test_pilot_input_suppresses_leveling() {
    let mut app = TestAppBuilder::new()
        .with_physics(weightless_physics())
        .with_initial_state(upset_spatial(30.0, 0.0))
        .build();

    app.set_input(ControlInput {
        roll: 0.5,
        ..Default::default()
    });
    app.step();
    let stabilization = app
        .snapshot::<PhysicsComponent>()
        .moment_sum(ForceCategory::Stabilization);
    assert_eq!(stabilization, Vector3::zeros());

    app.set_input(ControlInput::default());
    app.step();
    let stabilization = app
        .snapshot::<PhysicsComponent>()
        .moment_sum(ForceCategory::Stabilization);
    // Saturated leveling torque; the body has not started rotating yet
    assert_eq!(stabilization, Vector3::new(0.0, 0.0, -4000.0));
}
