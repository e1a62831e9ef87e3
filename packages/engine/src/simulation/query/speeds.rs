//! Read-only views over the particle sequence

use serde::Serialize;

use crate::domain::particle::Particle;
use crate::domain::size_class::SizeClass;
use crate::domain::vec2::Vec2;
use crate::systems::histogram::{speed_frequencies, DEFAULT_MAX_SPEED, DEFAULT_SPEED_BINS};

use super::SimulatorCore;

/// Serializable copy of one particle, in storage order
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleSnapshot {
    pub radius: f64,
    pub mass: f64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub class: Option<SizeClass>,
    pub color: u32,
}

pub(super) fn class_of(sim: &SimulatorCore, particle: &Particle) -> Option<SizeClass> {
    sim.registry.classify(particle.radius(), particle.mass())
}

pub(super) fn particle_speeds(sim: &SimulatorCore, class: SizeClass) -> Vec<f64> {
    sim.particles
        .iter()
        .filter(|p| class_of(sim, p) == Some(class))
        .map(Particle::speed)
        .collect()
}

pub(super) fn speed_histogram(sim: &SimulatorCore, class: SizeClass) -> Vec<u32> {
    speed_frequencies(
        &particle_speeds(sim, class),
        DEFAULT_MAX_SPEED,
        DEFAULT_SPEED_BINS,
    )
}

pub(super) fn total_kinetic_energy(sim: &SimulatorCore) -> f64 {
    sim.particles.iter().map(Particle::kinetic_energy).sum()
}

pub(super) fn total_momentum(sim: &SimulatorCore) -> Vec2 {
    sim.particles
        .iter()
        .fold(Vec2::zero(), |acc, p| acc + p.momentum())
}

pub(super) fn snapshot(sim: &SimulatorCore) -> Vec<ParticleSnapshot> {
    sim.particles
        .iter()
        .map(|p| ParticleSnapshot {
            radius: p.radius(),
            mass: p.mass(),
            position: p.position(),
            velocity: p.velocity(),
            class: class_of(sim, p),
            color: sim.registry.color_for(p.radius(), p.mass()),
        })
        .collect()
}

pub(super) fn snapshot_json(sim: &SimulatorCore) -> Result<String, serde_json::Error> {
    serde_json::to_string(&snapshot(sim))
}
