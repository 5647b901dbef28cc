pub mod aerodynamics;
pub mod control;
pub mod physics;
pub mod propulsion;
mod telemetry;

pub use aerodynamics::{aero_force_system, air_data_system};
pub use control::{control_surface_system, keyboard_control_system, stabilization_system};
pub use physics::{force_calculator_system, physics_integrator_system, reset_accumulator_system};
pub use propulsion::thrust_system;
pub use telemetry::{calculate_telemetry, hud_system, telemetry_system};
