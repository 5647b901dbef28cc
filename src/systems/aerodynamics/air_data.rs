use bevy::prelude::*;

use crate::components::{AirData, AircraftConfig, SpatialComponent};

/// m/s → km/h
const MS_TO_KMH: f64 = 3.6;

/// Derives the aerodynamic state from one kinematic snapshot.
///
/// Angle of attack uses `atan2`, so near-zero forward speed still gives a
/// defined ±90° rather than a division error.
pub fn calculate_air_data(spatial: &SpatialComponent, config: &AircraftConfig) -> AirData {
    let local_velocity = spatial.local_velocity();
    let angle_of_attack = (-local_velocity.y).atan2(local_velocity.z).to_degrees();

    AirData {
        local_velocity,
        angle_of_attack,
        is_stalled: angle_of_attack.abs() > config.stall_angle,
        air_speed: spatial.velocity.norm() * MS_TO_KMH,
        altitude: spatial.position.y,
        vertical_speed: spatial.velocity.y,
    }
}

/// Refreshes [`AirData`] for every aircraft at the start of a fixed step.
pub fn air_data_system(
    mut query: Query<(Entity, &SpatialComponent, &AircraftConfig, &mut AirData)>,
) {
    for (entity, spatial, config, mut air_data) in query.iter_mut() {
        let next = calculate_air_data(spatial, config);

        if next.is_stalled != air_data.is_stalled {
            if next.is_stalled {
                debug!(
                    "{:?} stalled at {:.1}° angle of attack",
                    entity, next.angle_of_attack
                );
            } else {
                debug!("{:?} recovered from stall", entity);
            }
        }

        *air_data = next;
    }
}
