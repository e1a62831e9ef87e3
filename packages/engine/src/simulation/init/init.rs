use crate::domain::content::SizeClassRegistry;

use super::perf_stats::PerfStats;
use super::random::seeded_rng;
use super::RenderBuffers;
use super::SimulatorCore;

pub(super) fn create_simulator_core(seed: u64) -> SimulatorCore {
    crate::console_log!("simulator created (seed {})", seed);

    SimulatorCore {
        particles: Vec::new(),
        registry: SizeClassRegistry::from_generated(),
        rng: seeded_rng(seed),
        seed,
        frame: 0,
        render: RenderBuffers::default(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
