use crate::components::{PhysicsComponent, ReferenceFrame, SpatialComponent};
use crate::resources::PhysicsConfig;
use bevy::prelude::*;
use nalgebra::Vector3;

/// Empties every accumulator at the start of a fixed step.
pub fn reset_accumulator_system(mut query: Query<&mut PhysicsComponent>) {
    for mut physics in query.iter_mut() {
        physics.clear_forces();
    }
}

/// Net world-frame force and body-frame moment from the submitted contributions.
pub fn calculate_net_forces_moments(
    physics: &PhysicsComponent,
    spatial: &SpatialComponent,
    gravity: &Vector3<f64>,
) -> (Vector3<f64>, Vector3<f64>) {
    let mut net_force = gravity * physics.mass;

    for force in &physics.forces {
        net_force += match force.frame {
            ReferenceFrame::Body => spatial.attitude * force.vector,
            ReferenceFrame::Inertial => force.vector,
        };
    }

    let mut net_moment = Vector3::zeros();
    for moment in &physics.moments {
        net_moment += match moment.frame {
            ReferenceFrame::Body => moment.vector,
            ReferenceFrame::Inertial => spatial.attitude.inverse_transform_vector(&moment.vector),
        };
    }

    (net_force, net_moment)
}

pub fn force_calculator_system(
    mut query: Query<(&mut PhysicsComponent, &SpatialComponent)>,
    config: Res<PhysicsConfig>,
) {
    for (mut physics, spatial) in query.iter_mut() {
        let (net_force, net_moment) =
            calculate_net_forces_moments(&physics, spatial, &config.gravity);
        physics.net_force = net_force;
        physics.net_moment = net_moment;
    }
}
