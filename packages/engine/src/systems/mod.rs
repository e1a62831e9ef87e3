//! Stateless per-tick algorithms over particle slices
//!
//! A tick runs `walls`, then `pairs`, then `integrate`.

pub mod histogram;
pub mod integrate;
pub mod pairs;
pub mod spawn;
pub mod walls;

pub use histogram::speed_frequencies;
pub use integrate::integrate_positions;
pub use pairs::{resolve_particle_collisions, PairStats};
pub use spawn::random_particle;
pub use walls::resolve_wall_collisions;
