mod thrust;

pub use thrust::{calculate_thrust, thrust_system};
