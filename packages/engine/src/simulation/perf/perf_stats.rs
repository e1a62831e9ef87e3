use wasm_bindgen::prelude::*;

/// Counters and phase timings of the last `update()`
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) walls_ms: f64,
    pub(super) pairs_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) particle_count: u32,
    pub(super) wall_bounces: u32,
    pub(super) pairs_checked: u32,
    pub(super) collisions_resolved: u32,
    pub(super) degenerate_pairs: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn walls_ms(&self) -> f64 { self.walls_ms }
    #[wasm_bindgen(getter)]
    pub fn pairs_ms(&self) -> f64 { self.pairs_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn wall_bounces(&self) -> u32 { self.wall_bounces }
    #[wasm_bindgen(getter)]
    pub fn pairs_checked(&self) -> u32 { self.pairs_checked }
    #[wasm_bindgen(getter)]
    pub fn collisions_resolved(&self) -> u32 { self.collisions_resolved }
    #[wasm_bindgen(getter)]
    pub fn degenerate_pairs(&self) -> u32 { self.degenerate_pairs }
}
