use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::camera_rig::CameraRig;
use crate::error::OrreryError;

/// Random stream used for the initial orbit phases.
pub const PHASE_STREAM: u64 = 0;
/// Random stream used for the background star positions.
pub const STAR_STREAM: u64 = 1;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrreryConfig {
    /// Fixed seed for every random draw. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub camera_distance: f32,
    pub min_camera_distance: f32,
    pub max_camera_distance: f32,
    /// Vertical field of view, in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub star_count: usize,
    /// Side length of the cube the stars are scattered in.
    pub starfield_extent: f32,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            seed: None,
            camera_distance: 50.0,
            min_camera_distance: CameraRig::DEFAULT_MIN_DISTANCE,
            max_camera_distance: CameraRig::DEFAULT_MAX_DISTANCE,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            star_count: 10_000,
            starfield_extent: 2000.0,
        }
    }
}

impl OrreryConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Generator for one independent random stream.
    pub fn rng(&self, stream: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
            None => StdRng::from_entropy(),
        }
    }

    pub fn camera_rig(&self) -> Result<CameraRig, OrreryError> {
        CameraRig::new(
            self.camera_distance,
            self.min_camera_distance,
            self.max_camera_distance,
        )
    }
}

pub struct Plugin;

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrreryConfig>();
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn seeded_streams_are_reproducible() {
        let config = OrreryConfig::with_seed(7);
        let a: f32 = config.rng(PHASE_STREAM).gen();
        let b: f32 = config.rng(PHASE_STREAM).gen();
        assert_eq!(a, b);
    }

    #[test]
    fn seeded_streams_differ_from_each_other() {
        let config = OrreryConfig::with_seed(7);
        let phases: u64 = config.rng(PHASE_STREAM).gen();
        let stars: u64 = config.rng(STAR_STREAM).gen();
        assert_ne!(phases, stars);
    }

    #[test]
    fn default_camera_starts_at_fifty_units() {
        let rig = OrreryConfig::default().camera_rig().unwrap();
        assert_eq!(rig.distance(), 50.0);
        assert_eq!(rig.bounds(), (10.0, 200.0));
    }
}
