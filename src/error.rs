use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrreryError {
    #[error("orbit radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("angular speed must be finite, got {0}")]
    InvalidAngularSpeed(f32),

    #[error("orbit phase must be finite, got {0}")]
    InvalidPhase(f32),

    #[error("camera distance bounds must satisfy 0 < min <= max, got [{min}, {max}]")]
    InvalidDistanceBounds { min: f32, max: f32 },

    #[error("camera distance must be finite, got {0}")]
    InvalidDistance(f32),
}
