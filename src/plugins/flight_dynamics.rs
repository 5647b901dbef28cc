use bevy::prelude::*;

use crate::components::{
    AirData, AircraftConfig, ControlInput, FlightTelemetry, HudReadout, PhysicsComponent,
    PlayerController, SmoothedControls, SpatialComponent,
};
use crate::plugins::PhysicsSet;
use crate::resources::PhysicsConfig;
use crate::systems::{
    aero_force_system, air_data_system, control_surface_system, reset_accumulator_system,
    stabilization_system, telemetry_system, thrust_system,
};

/// Per-step flight stages. Every stage reads the kinematic state left by the
/// previous integration; none of them moves the aircraft.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Prepare,
    AirData,
    Forces,
    Telemetry,
}

/// Spawns one aircraft and runs its flight model at the fixed rate.
pub struct FlightDynamicsPlugin {
    config: AircraftConfig,
    initial_state: SpatialComponent,
    player: bool,
}

impl FlightDynamicsPlugin {
    pub fn new(config: AircraftConfig, initial_state: SpatialComponent) -> Self {
        Self {
            config,
            initial_state,
            player: true,
        }
    }

    /// Spawns the aircraft without a [`PlayerController`], for scripted input.
    pub fn scripted(config: AircraftConfig, initial_state: SpatialComponent) -> Self {
        Self {
            player: false,
            ..Self::new(config, initial_state)
        }
    }

    fn spawn_aircraft(
        mut commands: Commands,
        config: AircraftConfig,
        initial_state: SpatialComponent,
        player: bool,
    ) {
        let mass = config.total_mass();
        let physics = PhysicsComponent::new(mass, config.inertia_tensor());
        info!("Spawning aircraft '{}' with mass {:.1} kg", config.name, mass);
        if !config.lift_curve.covers(config.stall_angle) {
            warn!(
                "Lift curve of '{}' does not cover [0, {}]°, end values will be held",
                config.name, config.stall_angle
            );
        }

        let mut entity = commands.spawn((
            Name::new(config.name.clone()),
            config,
            initial_state,
            physics,
            ControlInput::default(),
            SmoothedControls::default(),
            AirData::default(),
            FlightTelemetry::default(),
            HudReadout::default(),
        ));
        if player {
            entity.insert(PlayerController::new());
        }
    }
}

impl Default for FlightDynamicsPlugin {
    fn default() -> Self {
        Self::new(AircraftConfig::default(), SpatialComponent::default())
    }
}

impl Plugin for FlightDynamicsPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();
        let initial_state = self.initial_state.clone();
        let player = self.player;

        app.init_resource::<PhysicsConfig>().configure_sets(
            FixedUpdate,
            (
                FlightSet::Prepare,
                FlightSet::AirData,
                FlightSet::Forces,
                FlightSet::Telemetry,
            )
                .chain()
                .before(PhysicsSet::Accumulate),
        )
        .add_systems(Startup, move |commands: Commands| {
            Self::spawn_aircraft(commands, config.clone(), initial_state.clone(), player)
        })
        .add_systems(
            FixedUpdate,
            (
                reset_accumulator_system.in_set(FlightSet::Prepare),
                air_data_system.in_set(FlightSet::AirData),
                (
                    thrust_system,
                    aero_force_system,
                    control_surface_system,
                    stabilization_system,
                )
                    .chain()
                    .in_set(FlightSet::Forces),
                telemetry_system.in_set(FlightSet::Telemetry),
            ),
        );
    }
}
