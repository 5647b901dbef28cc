pub mod air_data;
pub mod config;
pub mod state;

pub use air_data::AirData;
pub use config::{AircraftConfig, AircraftSource, ConfigError, LiftCurve};
pub use state::SmoothedControls;
