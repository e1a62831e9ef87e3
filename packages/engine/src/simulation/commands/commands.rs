use rand::Rng;

use crate::domain::particle::Particle;
use crate::domain::size_class::{SizeClass, PLANE_WIDTH};
use crate::systems::spawn::random_particle;

use super::SimulatorCore;

pub(super) fn add_particle(sim: &mut SimulatorCore, particle: Particle) {
    sim.particles.push(particle);
}

pub(super) fn add_random_particle_with<R: Rng + ?Sized>(
    sim: &mut SimulatorCore,
    class: SizeClass,
    rng: &mut R,
) -> Particle {
    let profile = *sim.registry.profile(class);
    let particle = random_particle(&profile, PLANE_WIDTH, rng);
    sim.particles.push(particle);
    particle
}

pub(super) fn add_random_particle(sim: &mut SimulatorCore, class: SizeClass) -> Particle {
    let profile = *sim.registry.profile(class);
    let particle = random_particle(&profile, PLANE_WIDTH, &mut sim.rng);
    sim.particles.push(particle);
    particle
}

pub(super) fn reset(sim: &mut SimulatorCore) {
    sim.particles.clear();
    sim.frame = 0;
    sim.perf_stats.reset();
    crate::console_log!("simulator reset");
}
