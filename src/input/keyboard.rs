use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::input::keyboard::{KeyCode, KeyboardInput};
use bevy::prelude::*;

use super::{CameraInput, InputSystems};
use crate::controls;

/// Camera input bound to `key_code`, if any.
pub fn map_key(controls: &controls::Controls, key_code: KeyCode) -> Option<CameraInput> {
    let step = controls.rotate_step;

    if key_code == controls.yaw_left {
        Some(CameraInput::Yaw(-step))
    } else if key_code == controls.yaw_right {
        Some(CameraInput::Yaw(step))
    } else if key_code == controls.pitch_up {
        Some(CameraInput::Pitch(step))
    } else if key_code == controls.pitch_down {
        Some(CameraInput::Pitch(-step))
    } else {
        None
    }
}

pub struct Plugin;

impl Plugin {
    // Key repeats arrive as further pressed events, one camera step each.
    fn process_inputs(
        controls: Res<controls::Controls>,
        mut keyboard_input_reader: MessageReader<KeyboardInput>,
        mut input_writer: MessageWriter<CameraInput>,
    ) {
        for keyboard_input in keyboard_input_reader.read() {
            if !keyboard_input.state.is_pressed() {
                continue;
            }

            if let Some(camera_input) = map_key(&controls, keyboard_input.key_code) {
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
    fn arrows_map_to_fixed_steps() {
        let controls = Controls::new();
        assert_eq!(
            map_key(&controls, KeyCode::ArrowLeft),
            Some(CameraInput::Yaw(-0.05))
        );
        assert_eq!(
            map_key(&controls, KeyCode::ArrowRight),
            Some(CameraInput::Yaw(0.05))
        );
        assert_eq!(
            map_key(&controls, KeyCode::ArrowUp),
            Some(CameraInput::Pitch(0.05))
        );
        assert_eq!(
            map_key(&controls, KeyCode::ArrowDown),
            Some(CameraInput::Pitch(-0.05))
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(map_key(&Controls::new(), KeyCode::KeyW), None);
    }

    #[test]
    fn rebinding_changes_mapping() {
        let controls = Controls {
            yaw_left: KeyCode::KeyA,
            ..Controls::new()
        };
        assert_eq!(map_key(&controls, KeyCode::ArrowLeft), None);
        assert_eq!(
            map_key(&controls, KeyCode::KeyA),
            Some(CameraInput::Yaw(-0.05))
        );
    }
}
