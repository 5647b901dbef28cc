mod flight_dynamics;
mod hud;
mod physics;

pub use flight_dynamics::{FlightDynamicsPlugin, FlightSet};
pub use hud::HudPlugin;
pub use physics::{PhysicsPlugin, PhysicsSet};
