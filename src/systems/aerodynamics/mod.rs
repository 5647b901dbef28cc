mod air_data;
mod force_calculator;

pub use air_data::{air_data_system, calculate_air_data};
pub use force_calculator::{
    aero_force_system, air_density, calculate_aero_forces, drag_coefficient, lift_coefficient,
    AeroForces,
};
