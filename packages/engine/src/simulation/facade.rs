use wasm_bindgen::prelude::*;

use crate::domain::particle::Particle;
use crate::domain::size_class::SizeClass;
use crate::domain::vec2::Vec2;

use super::perf_stats::PerfStats;
use super::SimulatorCore;

#[wasm_bindgen]
pub struct Simulator {
    core: SimulatorCore,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Simulator {
    /// Create an empty simulator with the default seed
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SimulatorCore::new(),
        }
    }

    #[wasm_bindgen(js_name = newWithSeed)]
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            core: SimulatorCore::with_seed(seed),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn plane_width(&self) -> f64 { self.core.plane_width() }

    #[wasm_bindgen(getter)]
    pub fn num_particles(&self) -> usize { self.core.num_particles() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn seed(&self) -> u64 { self.core.seed() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.core.set_seed(seed);
    }

    /// Add a particle. Returns false (and adds nothing) when radius or mass
    /// is not a positive finite number or a coordinate is not finite.
    pub fn add_particle(&mut self, radius: f64, mass: f64, x: f64, y: f64, vx: f64, vy: f64) -> bool {
        match Particle::try_new(radius, mass, Vec2::new(x, y), Vec2::new(vx, vy)) {
            Ok(p) => {
                self.core.add_particle(p);
                true
            }
            Err(_) => false,
        }
    }

    pub fn add_random_particle(&mut self, class: SizeClass) {
        self.core.add_random_particle(class);
    }

    pub fn add_random_small_particle(&mut self) {
        self.core.add_random_small_particle();
    }

    pub fn add_random_medium_particle(&mut self) {
        self.core.add_random_medium_particle();
    }

    pub fn add_random_large_particle(&mut self) {
        self.core.add_random_large_particle();
    }

    /// Clear all particles
    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Advance one tick
    pub fn update(&mut self) {
        self.core.update();
    }

    // === QUERIES ===

    pub fn particle_speeds(&self, class: SizeClass) -> Vec<f64> {
        self.core.particle_speeds(class)
    }

    pub fn small_particle_speeds(&self) -> Vec<f64> {
        self.core.small_particle_speeds()
    }

    pub fn medium_particle_speeds(&self) -> Vec<f64> {
        self.core.medium_particle_speeds()
    }

    pub fn large_particle_speeds(&self) -> Vec<f64> {
        self.core.large_particle_speeds()
    }

    /// Speed frequencies of one class over the default axis
    pub fn speed_histogram(&self, class: SizeClass) -> Vec<u32> {
        self.core.speed_histogram(class)
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.core.total_kinetic_energy()
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.core
            .snapshot_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    // === CONFIGURATION ===

    pub fn load_size_class_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_size_class_bundle_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    pub fn get_size_class_manifest_json(&self) -> String {
        self.core.get_size_class_manifest_json()
    }

    // === RENDERING API ===

    /// Copy particle state into the render buffers; returns the particle count
    pub fn extract_render_data(&mut self) -> usize {
        self.core.extract_render_data()
    }

    /// Pointer to `[x0, y0, x1, y1, ..]`
    pub fn positions_ptr(&self) -> *const f64 {
        self.core.positions_ptr()
    }

    pub fn positions_len(&self) -> usize {
        self.core.positions_len()
    }

    pub fn velocities_ptr(&self) -> *const f64 {
        self.core.velocities_ptr()
    }

    pub fn velocities_len(&self) -> usize {
        self.core.velocities_len()
    }

    pub fn radii_ptr(&self) -> *const f64 {
        self.core.radii_ptr()
    }

    pub fn radii_len(&self) -> usize {
        self.core.radii_len()
    }

    /// Pointer to ABGR colors, one per particle
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }
}

impl Simulator {
    /// Native view of the wrapped state
    pub fn core(&self) -> &SimulatorCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut SimulatorCore {
        &mut self.core
    }
}
