//! Facade checks under a real wasm runtime:
//! `wasm-pack test --node -- --no-default-features --features console_error_panic_hook`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use idealgas_engine::{init, Simulator, SizeClass};

#[wasm_bindgen_test]
fn facade_runs_a_tick() {
    init();
    let mut sim = Simulator::new();
    assert!(sim.add_particle(1.0, 1.0, 30.0, 51.0, 0.0, 1.0));
    assert!(sim.add_particle(1.0, 1.0, 30.0, 53.0, 0.0, -1.0));
    sim.update();

    assert_eq!(sim.frame(), 1);
    assert_eq!(sim.small_particle_speeds(), vec![1.0, 1.0]);
}

#[wasm_bindgen_test]
fn facade_rejects_invalid_particles() {
    let mut sim = Simulator::new();
    assert!(!sim.add_particle(0.0, 1.0, 10.0, 10.0, 0.0, 0.0));
    assert!(!sim.add_particle(1.0, -2.0, 10.0, 10.0, 0.0, 0.0));
    assert!(!sim.add_particle(1.0, 1.0, f64::NAN, 10.0, 0.0, 0.0));
    assert_eq!(sim.num_particles(), 0);
}

#[wasm_bindgen_test]
fn facade_reports_bundle_errors() {
    let mut sim = Simulator::new();
    assert!(sim.load_size_class_bundle("not json".to_string()).is_err());
    sim.add_random_particle(SizeClass::Large);
    assert_eq!(sim.extract_render_data(), 1);
    assert_eq!(sim.positions_len(), 2);
}
