use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Values published to displays after every fixed step.
///
/// Always replaced as a whole, so a reader sees one step or the next, never a mix.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightTelemetry {
    /// Degrees.
    pub angle_of_attack: f64,
    pub is_stalled: bool,
    /// km/h.
    pub air_speed: f64,
    /// m.
    pub altitude: f64,
    /// m/s.
    pub vertical_speed: f64,
    /// [0, 1].
    pub current_throttle: f64,
}

/// Text lines for a heads-up display.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct HudReadout {
    pub speed: String,
    pub altitude: String,
    pub vertical_speed: String,
    pub throttle: String,
    pub angle_of_attack: String,
    pub stall_warning: bool,
}

impl HudReadout {
    pub fn from_telemetry(telemetry: &FlightTelemetry) -> Self {
        let climb_arrow = if telemetry.vertical_speed > 0.0 {
            '↑'
        } else {
            '↓'
        };

        Self {
            speed: format!("SPD: {:.0} km/h", telemetry.air_speed),
            altitude: format!("ALT: {:.0} m", telemetry.altitude),
            vertical_speed: format!(
                "V/S: {}{:.1} m/s",
                climb_arrow,
                telemetry.vertical_speed.abs()
            ),
            throttle: format!("THR: {:.0}%", telemetry.current_throttle * 100.0),
            angle_of_attack: format!("AOA: {:.1}°", telemetry.angle_of_attack),
            stall_warning: telemetry.is_stalled,
        }
    }

    pub fn lines(&self) -> [&str; 5] {
        [
            self.speed.as_str(),
            self.altitude.as_str(),
            self.vertical_speed.as_str(),
            self.throttle.as_str(),
            self.angle_of_attack.as_str(),
        ]
    }
}
