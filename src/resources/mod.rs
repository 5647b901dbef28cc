pub mod config;

pub use config::PhysicsConfig;
