use std::f32::consts::FRAC_PI_2;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::error::OrreryError;
use crate::input::{self, CameraInput};
use crate::simulation::Simulation;

/// Marks the camera entity driven by the [`CameraRig`].
#[derive(Component, Default, Debug)]
pub struct MainCamera;

/// A camera on a sphere around the origin, always looking at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    distance: f32,
    yaw: f32,
    pitch: f32,
    min_distance: f32,
    max_distance: f32,
}

impl CameraRig {
    pub const DEFAULT_MIN_DISTANCE: f32 = 10.0;
    pub const DEFAULT_MAX_DISTANCE: f32 = 200.0;

    /// Rig at yaw 0 and pitch 0. The starting distance is clamped into the bounds.
    pub fn new(distance: f32, min_distance: f32, max_distance: f32) -> Result<Self, OrreryError> {
        if !(min_distance.is_finite()
            && max_distance.is_finite()
            && min_distance > 0.0
            && min_distance <= max_distance)
        {
            return Err(OrreryError::InvalidDistanceBounds {
                min: min_distance,
                max: max_distance,
            });
        }
        if !distance.is_finite() {
            return Err(OrreryError::InvalidDistance(distance));
        }

        Ok(Self {
            distance: distance.clamp(min_distance, max_distance),
            yaw: 0.0,
            pitch: 0.0,
            min_distance,
            max_distance,
        })
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.min_distance, self.max_distance)
    }

    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(
            self.distance * sin_yaw * cos_pitch,
            self.distance * sin_pitch,
            self.distance * cos_yaw * cos_pitch,
        )
    }

    pub fn look_at(&self) -> Vec3 {
        Vec3::ZERO
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.look_at(), Vec3::Y)
    }

    pub fn set_yaw(&mut self, delta: f32) {
        self.yaw += delta;
    }

    pub fn set_pitch(&mut self, delta: f32) {
        self.pitch = f32::clamp(self.pitch + delta, -FRAC_PI_2, FRAC_PI_2);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = f32::clamp(self.distance + delta, self.min_distance, self.max_distance);
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            distance: 50.0,
            yaw: 0.0,
            pitch: 0.0,
            min_distance: Self::DEFAULT_MIN_DISTANCE,
            max_distance: Self::DEFAULT_MAX_DISTANCE,
        }
    }
}

pub struct Plugin;

impl Plugin {
    fn apply_camera_inputs(
        mut simulation: ResMut<Simulation>,
        mut camera_input_reader: MessageReader<CameraInput>,
    ) {
        for camera_input in camera_input_reader.read() {
            simulation.apply(*camera_input);
            trace!(?camera_input, camera = ?simulation.camera, "camera input applied");
        }
    }

    fn sync_camera(
        simulation: Res<Simulation>,
        mut query_cameras: Query<&mut Transform, With<MainCamera>>,
    ) {
        for mut transform in query_cameras.iter_mut() {
            *transform = simulation.camera.transform();
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (Self::apply_camera_inputs, Self::sync_camera)
                .chain()
                .after(input::InputSystems),
        );
    }
}
