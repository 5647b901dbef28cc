use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Marks the aircraft driven by the local keyboard.
#[derive(Component, Debug, Default)]
pub struct PlayerController {
    pub active: bool,
}

impl PlayerController {
    pub fn new() -> Self {
        Self { active: true }
    }

    pub fn disable(&mut self) {
        self.active = false;
    }
}

/// Pilot inputs, range-normalized by whatever samples the devices.
///
/// The flight model reads this once per fixed step and never writes it.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    /// Throttle lever [0, 1].
    pub throttle: f64,
    /// Pitch stick [-1, 1].
    pub pitch: f64,
    /// Roll stick [-1, 1].
    pub roll: f64,
    /// Rudder [-1, 1].
    pub yaw: f64,
    /// Wheel brake.
    pub brake: bool,
}

impl ControlInput {
    /// Throttle only, all other axes centred.
    pub fn with_throttle(throttle: f64) -> Self {
        Self {
            throttle,
            ..Default::default()
        }
    }

    /// Copy with every axis clamped to its range.
    pub fn sanitized(&self) -> Self {
        Self {
            throttle: self.throttle.clamp(0.0, 1.0),
            pitch: self.pitch.clamp(-1.0, 1.0),
            roll: self.roll.clamp(-1.0, 1.0),
            yaw: self.yaw.clamp(-1.0, 1.0),
            brake: self.brake,
        }
    }
}
