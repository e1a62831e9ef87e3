//! Simulator - owns the particle sequence and drives the tick pipeline
//!
//! `SimulatorCore` is the native API. It only orchestrates: the per-tick
//! algorithms live in `systems/`, the value types in `domain/`.
//! `Simulator` (facade.rs) wraps it for JS.

use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::domain::content::SizeClassRegistry;
use crate::domain::error::ContentError;
use crate::domain::particle::Particle;
use crate::domain::size_class::{SizeClass, PLANE_WIDTH};
use crate::domain::vec2::Vec2;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "query/speeds.rs"]
mod speeds;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::Simulator;
pub use perf_stats::PerfStats;
pub use random::DEFAULT_SEED;
pub use speeds::ParticleSnapshot;

use perf_timer::PerfTimer;

/// Reusable flat buffers handed to the renderer
#[derive(Default)]
pub(crate) struct RenderBuffers {
    pub(crate) positions: Vec<f64>,
    pub(crate) velocities: Vec<f64>,
    pub(crate) radii: Vec<f64>,
    pub(crate) colors: Vec<u32>,
}

/// The simulation state
pub struct SimulatorCore {
    particles: Vec<Particle>,
    registry: SizeClassRegistry,

    // Random spawning
    rng: ChaChaRng,
    seed: u64,

    // State
    frame: u64,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Default for SimulatorCore {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatorCore {
    /// Empty simulator seeded with `DEFAULT_SEED`
    pub fn new() -> Self {
        init::create_simulator_core(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        init::create_simulator_core(seed)
    }

    // === SETTINGS ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Restart the owned generator. Particles are left alone.
    pub fn set_seed(&mut self, seed: u64) {
        settings::set_seed(self, seed);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn load_size_class_bundle_json(&mut self, json: &str) -> Result<(), ContentError> {
        settings::load_size_class_bundle_json(self, json)
    }

    pub fn get_size_class_manifest_json(&self) -> String {
        self.registry.manifest_json()
    }

    pub fn registry(&self) -> &SizeClassRegistry {
        &self.registry
    }

    // === COMMANDS ===

    /// Append to the end of the sequence. No bounds or overlap check.
    pub fn add_particle(&mut self, particle: Particle) {
        commands::add_particle(self, particle);
    }

    /// Spawn a random particle of `class` from the owned generator
    pub fn add_random_particle(&mut self, class: SizeClass) -> Particle {
        commands::add_random_particle(self, class)
    }

    /// Spawn a random particle of `class` from a caller-supplied generator
    pub fn add_random_particle_with<R: Rng + ?Sized>(
        &mut self,
        class: SizeClass,
        rng: &mut R,
    ) -> Particle {
        commands::add_random_particle_with(self, class, rng)
    }

    pub fn add_random_small_particle(&mut self) -> Particle {
        self.add_random_particle(SizeClass::Small)
    }

    pub fn add_random_medium_particle(&mut self) -> Particle {
        self.add_random_particle(SizeClass::Medium)
    }

    pub fn add_random_large_particle(&mut self) -> Particle {
        self.add_random_particle(SizeClass::Large)
    }

    /// Drop every particle. Idempotent; the generator is not reseeded.
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    // === STEP ===

    /// Advance exactly one tick
    pub fn update(&mut self) {
        step::update(self);
    }

    // === QUERIES ===

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn num_particles(&self) -> usize {
        self.particles.len()
    }

    /// Ticks since construction or the last reset
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn plane_width(&self) -> f64 {
        PLANE_WIDTH
    }

    pub fn class_of(&self, particle: &Particle) -> Option<SizeClass> {
        speeds::class_of(self, particle)
    }

    /// Speeds of the particles in `class`, in storage order
    pub fn particle_speeds(&self, class: SizeClass) -> Vec<f64> {
        speeds::particle_speeds(self, class)
    }

    pub fn small_particle_speeds(&self) -> Vec<f64> {
        self.particle_speeds(SizeClass::Small)
    }

    pub fn medium_particle_speeds(&self) -> Vec<f64> {
        self.particle_speeds(SizeClass::Medium)
    }

    pub fn large_particle_speeds(&self) -> Vec<f64> {
        self.particle_speeds(SizeClass::Large)
    }

    pub fn speed_histogram(&self, class: SizeClass) -> Vec<u32> {
        speeds::speed_histogram(self, class)
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        speeds::total_kinetic_energy(self)
    }

    pub fn total_momentum(&self) -> Vec2 {
        speeds::total_momentum(self)
    }

    pub fn snapshot(&self) -> Vec<ParticleSnapshot> {
        speeds::snapshot(self)
    }

    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        speeds::snapshot_json(self)
    }

    // === RENDER ===

    pub fn extract_render_data(&mut self) -> usize {
        render_extract::extract_render_data(self)
    }

    pub fn positions_ptr(&self) -> *const f64 {
        self.render.positions.as_ptr()
    }

    pub fn positions_len(&self) -> usize {
        self.render.positions.len()
    }

    pub fn velocities_ptr(&self) -> *const f64 {
        self.render.velocities.as_ptr()
    }

    pub fn velocities_len(&self) -> usize {
        self.render.velocities.len()
    }

    pub fn radii_ptr(&self) -> *const f64 {
        self.render.radii.as_ptr()
    }

    pub fn radii_len(&self) -> usize {
        self.render.radii.len()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.render.colors.as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.render.colors.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
