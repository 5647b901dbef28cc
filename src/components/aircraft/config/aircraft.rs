use bevy::prelude::*;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::aircraft::config::{ConfigError, LiftCurve};

/// Static tuning of a fixed-wing aircraft, shared read-only by every sub-model.
///
/// All magnitudes are expected to be non-negative and the lift curve should
/// cover `[0, stall_angle]`. Files are validated on load; values built in code
/// are taken as given.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftConfig {
    /// Name of the aircraft.
    pub name: String,
    /// Dry mass (kg).
    pub base_mass: f64,
    /// Fuel load (litres).
    pub fuel_amount: f64,
    /// Fuel density (kg/litre).
    pub fuel_density: f64,
    /// Thrust at full throttle (N).
    pub max_thrust: f64,
    /// Reference wing area (m²).
    pub wing_area: f64,
    /// |Angle of attack| above which the wing is stalled (degrees).
    pub stall_angle: f64,
    /// |Angle of attack| (degrees) → lift coefficient.
    pub lift_curve: LiftCurve,
    /// Roll torque at full deflection and full authority (N·m).
    pub roll_sensitivity: f64,
    /// Pitch torque at full deflection and full authority (N·m).
    pub pitch_sensitivity: f64,
    /// Yaw torque at full deflection and full authority (N·m).
    pub yaw_sensitivity: f64,
    /// Principal moments of inertia about body (x: pitch, y: yaw, z: roll) (kg·m²).
    pub inertia: Vector3<f64>,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            base_mass: 10000.0,
            fuel_amount: 2000.0,
            fuel_density: 0.8,
            max_thrust: 120000.0,
            wing_area: 50.0,
            stall_angle: 15.0,
            lift_curve: LiftCurve::default(),
            roll_sensitivity: 50000.0,
            pitch_sensitivity: 40000.0,
            yaw_sensitivity: 20000.0,
            inertia: Vector3::new(20000.0, 30000.0, 10000.0),
        }
    }
}

impl AircraftConfig {
    /// Creates a new aircraft configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - Either the built-in preset (`Programmed`) or a YAML file (`File`).
    pub fn new(source: AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Programmed => Ok(Self::default()),
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    /// Total mass handed to the integrator once at spawn.
    pub fn total_mass(&self) -> f64 {
        self.base_mass + self.fuel_amount * self.fuel_density
    }

    /// Diagonal inertia tensor built from [`AircraftConfig::inertia`].
    pub fn inertia_tensor(&self) -> Matrix3<f64> {
        Matrix3::from_diagonal(&self.inertia)
    }

    /// Reads a YAML file. Missing fields take their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&file_contents)?;
        info!(
            "Loaded aircraft '{}' from {}",
            config.name,
            path.as_ref().display()
        );
        Ok(config)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }
}

/// Source for aircraft configuration.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    Programmed,
    File(PathBuf),
}
