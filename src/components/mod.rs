pub mod aircraft;
pub mod controller;
pub mod physics;
pub mod spatial;
pub mod telemetry;

pub use aircraft::{
    AirData, AircraftConfig, AircraftSource, ConfigError, LiftCurve, SmoothedControls,
};
pub use controller::{ControlInput, PlayerController};
pub use physics::{Force, ForceCategory, Moment, PhysicsComponent, ReferenceFrame};
pub use spatial::{normalize_degrees, SpatialComponent};
pub use telemetry::{FlightTelemetry, HudReadout};
