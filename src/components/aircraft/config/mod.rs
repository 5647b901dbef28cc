mod aircraft;
mod lift_curve;
mod loader;

pub use aircraft::{AircraftConfig, AircraftSource};
pub use lift_curve::LiftCurve;
pub use loader::ConfigError;
