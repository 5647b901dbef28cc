use crate::components::{PhysicsComponent, SpatialComponent};
use crate::resources::PhysicsConfig;
use bevy::prelude::*;
use nalgebra::UnitQuaternion;

/// Advances every rigid body by one fixed step from its accumulated net force and moment.
pub fn physics_integrator_system(
    mut query: Query<(&PhysicsComponent, &mut SpatialComponent)>,
    config: Res<PhysicsConfig>,
) {
    for (physics, mut spatial) in query.iter_mut() {
        integrate_state(physics, &mut spatial, &config);
    }
}

/// Semi-implicit Euler step.
///
/// Velocities are updated first and the new velocities move the position and
/// attitude. Angular velocity is held in the body frame, so the rotation
/// increment is applied on the right of the attitude.
pub fn integrate_state(
    physics: &PhysicsComponent,
    spatial: &mut SpatialComponent,
    config: &PhysicsConfig,
) {
    let dt = config.timestep;

    // Linear
    let acceleration = physics.net_force / physics.mass;
    spatial.velocity += acceleration * dt;
    spatial.velocity *= damping_factor(config.linear_damping, dt);

    // Angular, Euler's equations in the body frame
    let omega = spatial.angular_velocity;
    let gyro_term = omega.cross(&(physics.inertia * omega));
    let angular_acceleration = physics.inertia_inv * (physics.net_moment - gyro_term);
    spatial.angular_velocity += angular_acceleration * dt;
    spatial.angular_velocity *= damping_factor(config.angular_damping, dt);

    apply_velocity_limits(spatial, config.max_velocity, config.max_angular_velocity);

    spatial.position += spatial.velocity * dt;
    if spatial.angular_velocity.norm() > 0.0 {
        let rotation = UnitQuaternion::from_scaled_axis(spatial.angular_velocity * dt);
        spatial.attitude =
            UnitQuaternion::new_normalize((spatial.attitude * rotation).into_inner());
    }
}

fn damping_factor(rate: f64, dt: f64) -> f64 {
    (1.0 - rate * dt).max(0.0)
}

fn apply_velocity_limits(
    spatial: &mut SpatialComponent,
    max_velocity: f64,
    max_angular_velocity: f64,
) {
    let velocity_norm = spatial.velocity.norm();
    if velocity_norm > max_velocity {
        spatial.velocity *= max_velocity / velocity_norm;
    }

    let angular_velocity_norm = spatial.angular_velocity.norm();
    if angular_velocity_norm > max_angular_velocity {
        spatial.angular_velocity *= max_angular_velocity / angular_velocity_norm;
    }
}
