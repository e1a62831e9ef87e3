use crate::domain::size_class::PLANE_WIDTH;
use crate::systems::integrate::integrate_positions;
use crate::systems::pairs::resolve_particle_collisions;
use crate::systems::walls::resolve_wall_collisions;

use super::perf_timer::timed;
use super::{PerfTimer, SimulatorCore};

/// One tick: walls, then pairs, then integration. The order is fixed; each
/// phase sees the velocities left by the one before it.
pub(super) fn update(sim: &mut SimulatorCore) {
    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
        sim.perf_stats.particle_count = sim.particles.len() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === PHASE 1: WALLS ===
    let bounces = timed(perf_on, &mut sim.perf_stats.walls_ms, || {
        resolve_wall_collisions(&mut sim.particles, PLANE_WIDTH)
    });

    // === PHASE 2: PAIRS ===
    // Sequential by construction, see systems::pairs.
    let pairs = timed(perf_on, &mut sim.perf_stats.pairs_ms, || {
        resolve_particle_collisions(&mut sim.particles)
    });

    // === PHASE 3: INTEGRATION ===
    timed(perf_on, &mut sim.perf_stats.integrate_ms, || {
        integrate_positions(&mut sim.particles)
    });

    sim.frame += 1;

    if let Some(t0) = step_start {
        let stats = &mut sim.perf_stats;
        stats.wall_bounces = bounces;
        stats.pairs_checked = pairs.pairs_checked;
        stats.collisions_resolved = pairs.collisions_resolved;
        stats.degenerate_pairs = pairs.degenerate_pairs;
        stats.step_ms = t0.elapsed_ms();
    }
}
