mod fixtures;

// Re-export
pub use assertions::{
    assert_attitude_eq, assert_physics_valid, assert_position_eq, assert_spatial_valid,
    assert_telemetry_matches,
};

pub use fixtures::*;
pub use helpers::*;
pub use test_app::{TestApp, TestAppBuilder};
