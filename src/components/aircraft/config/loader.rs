use thiserror::Error;

use crate::components::aircraft::config::AircraftConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

impl AircraftConfig {
    /// Checks the setup-time contract of a configuration.
    ///
    /// Only file loading calls this; the per-step models never re-check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let magnitudes = [
            ("base_mass", self.base_mass),
            ("fuel_amount", self.fuel_amount),
            ("fuel_density", self.fuel_density),
            ("max_thrust", self.max_thrust),
            ("wing_area", self.wing_area),
            ("stall_angle", self.stall_angle),
            ("roll_sensitivity", self.roll_sensitivity),
            ("pitch_sensitivity", self.pitch_sensitivity),
            ("yaw_sensitivity", self.yaw_sensitivity),
            ("inertia.x", self.inertia.x),
            ("inertia.y", self.inertia.y),
            ("inertia.z", self.inertia.z),
        ];

        for (field, value) in magnitudes {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{field} must be a non-negative number, got {value}"
                )));
            }
        }

        if !self.lift_curve.is_sorted() {
            return Err(ConfigError::ValidationError(
                "lift_curve keys must be sorted by angle".to_string(),
            ));
        }

        if !self.lift_curve.covers(self.stall_angle) {
            return Err(ConfigError::ValidationError(format!(
                "lift_curve must cover [0, {}] degrees",
                self.stall_angle
            )));
        }

        Ok(())
    }
}
