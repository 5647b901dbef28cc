mod keyboard;
mod stabilization;
mod surfaces;

pub use keyboard::{keyboard_control_system, THROTTLE_RATE};
pub use stabilization::{
    angular_damping_torque, calculate_stabilization_torque, pitch_trim_torque,
    roll_leveling_torque, stabilization_system,
};
pub use surfaces::{
    calculate_control_torque, control_surface_system, smooth_controls, speed_factor,
};
