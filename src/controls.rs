use bevy::input::keyboard::KeyCode;
use bevy::prelude::*;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Controls {
    pub yaw_left: KeyCode,
    pub yaw_right: KeyCode,
    pub pitch_up: KeyCode,
    pub pitch_down: KeyCode,
    /// Radians per key press.
    pub rotate_step: f32,
    /// Distance units per wheel notch.
    pub zoom_step: f32,
}

impl Controls {
    pub fn new() -> Self {
        Controls {
            yaw_left: KeyCode::ArrowLeft,
            yaw_right: KeyCode::ArrowRight,
            pitch_up: KeyCode::ArrowUp,
            pitch_down: KeyCode::ArrowDown,
            rotate_step: 0.05,
            zoom_step: 5.0,
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Plugin;

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Controls>();
    }
}
