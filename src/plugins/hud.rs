use bevy::prelude::*;

use crate::systems::{hud_system, keyboard_control_system};

/// Keyboard input and HUD text, both at display rate.
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Update, (keyboard_control_system, hud_system));
    }
}
