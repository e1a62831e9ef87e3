//! IdealGas Engine - 2D elastic particle collisions in a square box, in WASM
//!
//! Architecture:
//! - core/          - Crate plumbing (logging)
//! - domain/        - Value types and size-class configuration
//! - systems/       - Per-tick algorithms (walls, pairs, integration) and spawning
//! - simulation/    - Owning simulator, native API and JS facade

// Logging macro must be declared first
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("IdealGas engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{Particle, SizeClass, SizeClassRegistry, Vec2};
pub use simulation::{ParticleSnapshot, PerfStats, Simulator, SimulatorCore, DEFAULT_SEED};

// Domain constants for JS
#[wasm_bindgen]
pub fn plane_width() -> f64 { domain::size_class::PLANE_WIDTH }
#[wasm_bindgen]
pub fn size_class_small() -> u8 { SizeClass::Small as u8 }
#[wasm_bindgen]
pub fn size_class_medium() -> u8 { SizeClass::Medium as u8 }
#[wasm_bindgen]
pub fn size_class_large() -> u8 { SizeClass::Large as u8 }
