//! Value types and size-class configuration

pub mod content;
pub mod error;
pub mod particle;
pub mod size_class;
pub mod vec2;

pub use content::SizeClassRegistry;
pub use error::{ContentError, ParticleError};
pub use particle::{Axis, Particle};
pub use size_class::{SizeClass, SizeProfile, PLANE_WIDTH};
pub use vec2::Vec2;
