use super::SimulatorCore;

/// Refill the render buffers from the particle sequence, in storage order.
/// Returns the particle count; buffers hold 2 f64 per particle for
/// positions/velocities and 1 entry per particle for radii/colors.
pub(super) fn extract_render_data(sim: &mut SimulatorCore) -> usize {
    let n = sim.particles.len();
    let render = &mut sim.render;

    render.positions.clear();
    render.velocities.clear();
    render.radii.clear();
    render.colors.clear();
    render.positions.reserve(n * 2);
    render.velocities.reserve(n * 2);
    render.radii.reserve(n);
    render.colors.reserve(n);

    for p in &sim.particles {
        let pos = p.position();
        let vel = p.velocity();
        render.positions.extend_from_slice(&[pos.x, pos.y]);
        render.velocities.extend_from_slice(&[vel.x, vel.y]);
        render.radii.push(p.radius());
        render.colors.push(sim.registry.color_for(p.radius(), p.mass()));
    }

    n
}
