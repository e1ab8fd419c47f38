use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

use super::{CameraInput, InputSystems};
use crate::controls;

/// Maps a scroll delta to a fixed zoom step. Only the sign matters:
/// negative zooms in, positive zooms out.
pub fn map_scroll(controls: &controls::Controls, scroll_delta: f32) -> Option<CameraInput> {
    if scroll_delta < 0.0 {
        Some(CameraInput::Zoom(-controls.zoom_step))
    } else if scroll_delta > 0.0 {
        Some(CameraInput::Zoom(controls.zoom_step))
    } else {
        None
    }
}

/// Maps winit's vertical wheel delta, which is positive when scrolling up.
/// Scrolling up zooms in.
pub fn map_wheel(controls: &controls::Controls, wheel_y: f32) -> Option<CameraInput> {
    map_scroll(controls, -wheel_y)
}

pub struct Plugin;

impl Plugin {
    fn process_inputs(
        controls: Res<controls::Controls>,
        mut mouse_wheel_reader: MessageReader<MouseWheel>,
        mut input_writer: MessageWriter<CameraInput>,
    ) {
        for mouse_wheel in mouse_wheel_reader.read() {
            if let Some(camera_input) = map_wheel(&controls, mouse_wheel.y) {
                input_writer.write(camera_input);
            }
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, Self::process_inputs.in_set(InputSystems));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::Controls;

    #[test]
    fn sign_selects_direction() {
        let controls = Controls::new();
        assert_eq!(map_scroll(&controls, -120.0), Some(CameraInput::Zoom(-5.0)));
        assert_eq!(map_scroll(&controls, -0.01), Some(CameraInput::Zoom(-5.0)));
        assert_eq!(map_scroll(&controls, 3.0), Some(CameraInput::Zoom(5.0)));
        assert_eq!(map_scroll(&controls, 0.0), None);
    }

    #[test]
    fn scrolling_up_zooms_in() {
        let controls = Controls::new();
        assert_eq!(map_wheel(&controls, 1.0), Some(CameraInput::Zoom(-5.0)));
        assert_eq!(map_wheel(&controls, -0.5), Some(CameraInput::Zoom(5.0)));
        assert_eq!(map_wheel(&controls, 0.0), None);
    }
}
