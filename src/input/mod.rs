use bevy::ecs::message::Message;
use bevy::prelude::*;

pub mod keyboard;
pub mod mouse_wheel;

/// One discrete mutation of the camera rig.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub enum CameraInput {
    /// Additive change of the horizontal angle, in radians.
    Yaw(f32),
    /// Additive change of the vertical angle, in radians.
    Pitch(f32),
    /// Additive change of the distance to the origin.
    Zoom(f32),
}

/// Systems turning raw host input into [`CameraInput`] messages.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputSystems;

pub struct Plugin;

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CameraInput>();
        app.add_plugins(keyboard::Plugin);
        app.add_plugins(mouse_wheel::Plugin);
    }
}
