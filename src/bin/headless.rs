use std::env;

use bevy::log::LogPlugin;
use bevy::prelude::*;

use wingsim::{
    components::{
        AircraftConfig, AircraftSource, ControlInput, FlightTelemetry, HudReadout,
        SpatialComponent,
    },
    plugins::{FlightDynamicsPlugin, PhysicsPlugin},
    resources::PhysicsConfig,
    systems::hud_system,
};

const SIMULATED_SECONDS: f64 = 60.0;
const REPORT_INTERVAL: f64 = 5.0;
const START_ALTITUDE: f64 = 1000.0;
const START_SPEED: f64 = 60.0;

/// Scripted full-throttle run, printing the HUD and JSON telemetry at a fixed interval.
///
/// Usage: `flyer_headless [aircraft.yaml]`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();
    app.add_plugins(LogPlugin::default());

    let source = match env::args().nth(1) {
        Some(path) => AircraftSource::File(path.into()),
        None => AircraftSource::Programmed,
    };
    let config = AircraftConfig::new(source)?;
    let physics_config = PhysicsConfig::default();
    let timestep = physics_config.timestep;

    app.add_plugins((
        PhysicsPlugin::new(physics_config),
        FlightDynamicsPlugin::scripted(
            config,
            SpatialComponent::at_altitude_and_speed(START_ALTITUDE, START_SPEED),
        ),
    ))
    .add_systems(Update, hud_system);

    // Runs Startup, which spawns the aircraft
    app.update();

    let mut inputs = app.world_mut().query::<&mut ControlInput>();
    for mut input in inputs.iter_mut(app.world_mut()) {
        *input = ControlInput::with_throttle(1.0);
    }

    let steps = (SIMULATED_SECONDS / timestep).round() as usize;
    let report_every = ((REPORT_INTERVAL / timestep).round() as usize).max(1);

    for step in 1..=steps {
        app.world_mut().run_schedule(FixedUpdate);

        if step % report_every == 0 {
            app.world_mut().run_schedule(Update);
            report(&mut app, step as f64 * timestep)?;
        }
    }

    Ok(())
}

fn report(app: &mut App, elapsed: f64) -> Result<(), serde_json::Error> {
    let mut query = app.world_mut().query::<(&Name, &HudReadout, &FlightTelemetry)>();
    for (name, hud, telemetry) in query.iter(app.world()) {
        let stall = if hud.stall_warning { "  STALL" } else { "" };
        println!("[{:>5.1}s] {}{}", elapsed, name, stall);
        for line in hud.lines() {
            println!("    {}", line);
        }
        println!("{}", serde_json::to_string(telemetry)?);
    }
    Ok(())
}
