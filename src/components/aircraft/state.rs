use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-aircraft smoothed control deflections carried between fixed steps.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SmoothedControls {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}
