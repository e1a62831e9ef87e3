use crate::domain::content::SizeClassRegistry;
use crate::domain::error::ContentError;

use super::perf_stats::PerfStats;
use super::random::seeded_rng;
use super::SimulatorCore;

pub(super) fn enable_perf_metrics(sim: &mut SimulatorCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &SimulatorCore) -> PerfStats {
    sim.perf_stats.clone()
}

pub(super) fn set_seed(sim: &mut SimulatorCore, seed: u64) {
    sim.rng = seeded_rng(seed);
    sim.seed = seed;
    crate::console_log!("rng reseeded ({})", seed);
}

/// Swap the active size classes. Existing particles keep their shape; only
/// classification, colors and future random spawns follow the new profiles.
pub(super) fn load_size_class_bundle_json(
    sim: &mut SimulatorCore,
    json: &str,
) -> Result<(), ContentError> {
    match SizeClassRegistry::from_bundle_json(json) {
        Ok(registry) => {
            sim.registry = registry;
            crate::console_log!("size-class bundle loaded");
            Ok(())
        }
        Err(err) => {
            crate::console_log!("size-class bundle rejected: {}", err);
            Err(err)
        }
    }
}
