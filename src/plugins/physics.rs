use crate::resources::PhysicsConfig;
use crate::systems::{force_calculator_system, physics_integrator_system};
use bevy::prelude::*;

/// Rigid-body stages run after every contribution for the step is in.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum PhysicsSet {
    Accumulate,
    Integration,
}

pub struct PhysicsPlugin {
    pub config: PhysicsConfig,
}

impl Default for PhysicsPlugin {
    fn default() -> Self {
        Self {
            config: PhysicsConfig::default(),
        }
    }
}

impl PhysicsPlugin {
    pub fn new(config: PhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(Time::<Fixed>::from_seconds(self.config.timestep));

        app.configure_sets(
            FixedUpdate,
            (PhysicsSet::Accumulate, PhysicsSet::Integration).chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                force_calculator_system.in_set(PhysicsSet::Accumulate),
                physics_integrator_system.in_set(PhysicsSet::Integration),
            ),
        );
    }
}
