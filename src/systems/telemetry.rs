use bevy::prelude::*;

use crate::components::{AirData, ControlInput, FlightTelemetry, HudReadout};

/// Telemetry for the step just computed, from the same snapshot the forces used.
pub fn calculate_telemetry(air_data: &AirData, input: &ControlInput) -> FlightTelemetry {
    FlightTelemetry {
        angle_of_attack: air_data.angle_of_attack,
        is_stalled: air_data.is_stalled,
        air_speed: air_data.air_speed,
        altitude: air_data.altitude,
        vertical_speed: air_data.vertical_speed,
        current_throttle: input.throttle.clamp(0.0, 1.0),
    }
}

/// Publishes [`FlightTelemetry`] once per fixed step, replacing the previous value whole.
pub fn telemetry_system(mut query: Query<(&AirData, &ControlInput, &mut FlightTelemetry)>) {
    for (air_data, input, mut telemetry) in query.iter_mut() {
        *telemetry = calculate_telemetry(air_data, input);
    }
}

/// Rebuilds HUD text at display rate. Reads telemetry only.
pub fn hud_system(mut query: Query<(&FlightTelemetry, &mut HudReadout), Changed<FlightTelemetry>>) {
    for (telemetry, mut hud) in query.iter_mut() {
        *hud = HudReadout::from_telemetry(telemetry);
    }
}
