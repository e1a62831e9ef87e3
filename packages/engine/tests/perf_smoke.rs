use idealgas_engine::Simulator;

#[test]
fn perf_smoke_update() {
    let mut sim = Simulator::new();
    sim.enable_perf_metrics(true);
    for _ in 0..100 {
        sim.add_random_small_particle();
        sim.add_random_medium_particle();
        sim.add_random_large_particle();
    }
    sim.update();

    let stats = sim.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.pairs_ms() >= 0.0);
    assert_eq!(stats.particle_count(), 300);
    assert_eq!(stats.pairs_checked(), 300 * 299 / 2);
}
