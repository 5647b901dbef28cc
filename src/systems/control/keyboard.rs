use bevy::prelude::*;

use crate::components::{ControlInput, PlayerController};

/// Throttle change per second while W or S is held.
pub const THROTTLE_RATE: f64 = 0.5;

fn axis(keyboard: &ButtonInput<KeyCode>, positive: KeyCode, negative: KeyCode) -> f64 {
    match (keyboard.pressed(positive), keyboard.pressed(negative)) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

/// Samples the keyboard into the player's [`ControlInput`] once per frame.
///
/// W/S ramp the throttle; ArrowUp/ArrowDown pitch the nose down/up; A/D roll
/// towards the left/right wing; ArrowLeft/ArrowRight yaw left/right; Space
/// holds the brake. Stick axes snap back to centre when released.
pub fn keyboard_control_system(
    mut query: Query<(&mut ControlInput, &PlayerController)>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    let dt = time.delta_secs_f64();

    for (mut input, controller) in query.iter_mut() {
        if !controller.active {
            continue;
        }

        let throttle_direction = axis(&keyboard, KeyCode::KeyW, KeyCode::KeyS);
        let next = ControlInput {
            throttle: input.throttle + throttle_direction * THROTTLE_RATE * dt,
            pitch: axis(&keyboard, KeyCode::ArrowUp, KeyCode::ArrowDown),
            roll: axis(&keyboard, KeyCode::KeyA, KeyCode::KeyD),
            yaw: axis(&keyboard, KeyCode::ArrowLeft, KeyCode::ArrowRight),
            brake: keyboard.pressed(KeyCode::Space),
        };

        *input = next.sanitized();
    }
}
