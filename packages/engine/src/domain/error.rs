use thiserror::Error;

/// Rejected input to the validating particle constructor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParticleError {
    #[error("radius must be finite and > 0, got {0}")]
    InvalidRadius(f64),

    #[error("mass must be finite and > 0, got {0}")]
    InvalidMass(f64),

    #[error("position must be finite")]
    NonFinitePosition,

    #[error("velocity must be finite")]
    NonFiniteVelocity,
}

/// Failure while loading a size-class bundle.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("bundle is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown size class: {0}")]
    UnknownClass(String),

    #[error("size class {0} is defined more than once")]
    DuplicateClass(String),

    #[error("size class {0} is missing from the bundle")]
    MissingClass(&'static str),

    #[error("size class {class}: {reason}")]
    InvalidProfile { class: &'static str, reason: String },
}
