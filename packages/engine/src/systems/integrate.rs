//! Phase 3: position integration with the velocities left by phases 1-2

use crate::domain::particle::Particle;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub fn integrate_positions(particles: &mut [Particle]) {
    #[cfg(feature = "parallel")]
    {
        particles.par_iter_mut().for_each(Particle::update_position);
    }
    #[cfg(not(feature = "parallel"))]
    {
        particles.iter_mut().for_each(Particle::update_position);
    }
}
