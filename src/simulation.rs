use bevy::prelude::*;

use crate::camera_rig::CameraRig;
use crate::input::CameraInput;
use crate::orbit::BodyRegistry;

/// All mutable state of the orrery.
///
/// `bodies` is written only by the orbit tick and `camera` only by camera
/// inputs; rendering systems just read.
#[derive(Resource, Debug, Clone, Default)]
pub struct Simulation {
    pub bodies: BodyRegistry,
    pub camera: CameraRig,
}

impl Simulation {
    pub fn new(camera: CameraRig) -> Self {
        Self {
            bodies: BodyRegistry::new(),
            camera,
        }
    }

    /// One step of the render loop's update half.
    pub fn tick(&mut self, dt_ticks: f32) {
        self.bodies.advance(dt_ticks);
    }

    pub fn apply(&mut self, input: CameraInput) {
        match input {
            CameraInput::Yaw(delta) => self.camera.set_yaw(delta),
            CameraInput::Pitch(delta) => self.camera.set_pitch(delta),
            CameraInput::Zoom(delta) => self.camera.zoom(delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::OrbitingBody;

    #[test]
    fn tick_leaves_camera_alone() {
        let mut simulation = Simulation::default();
        simulation
            .bodies
            .insert(OrbitingBody::new(10.0, 0.1, 0.0).unwrap());
        let camera = simulation.camera.clone();
        simulation.tick(1.0);
        assert_eq!(simulation.camera, camera);
    }

    #[test]
    fn inputs_leave_bodies_alone() {
        let mut simulation = Simulation::default();
        let id = simulation
            .bodies
            .insert(OrbitingBody::new(10.0, 0.1, 1.0).unwrap());
        simulation.apply(CameraInput::Yaw(0.3));
        simulation.apply(CameraInput::Zoom(-5.0));
        assert_eq!(simulation.bodies.get(id).map(OrbitingBody::angle), Some(1.0));
        assert_eq!(simulation.camera.distance(), 45.0);
    }
}
