pub mod camera_rig;
pub mod config;
pub mod controls;
pub mod error;
pub mod input;
pub mod orbit;
pub mod simulation;
pub mod solar_system;
pub mod starfield;
pub mod viewport;

pub use camera_rig::{CameraRig, MainCamera};
pub use config::OrreryConfig;
pub use error::OrreryError;
pub use input::CameraInput;
pub use orbit::{BodyId, BodyRegistry, OrbitingBody};
pub use simulation::Simulation;
