//! Phase 2: particle-particle elastic collisions
//!
//! Naive all-pairs pass over `(i, j)`, `i < j`, in index order. A pair
//! resolves when the particles touch or overlap AND approach each other.
//! Resolution is sequential: a particle hit by several partners in one tick
//! enters each later pair with the velocity produced by the earlier one.

use crate::domain::particle::Particle;
use crate::domain::vec2::Vec2;

/// Pairs closer than this (squared centre distance) have no defined
/// collision normal and are skipped.
pub const MIN_SEPARATION_SQ: f64 = 1e-12;

/// Counters produced by one collision pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PairStats {
    pub pairs_checked: u32,
    pub collisions_resolved: u32,
    pub degenerate_pairs: u32,
}

/// Outcome of testing a single pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Contact {
    /// Apart, or touching but not approaching
    None,
    /// Touching and approaching, with new velocities for (p1, p2)
    Resolved(Vec2, Vec2),
    /// Touching and approaching but coincident (or massless); left untouched
    Degenerate,
}

/// Touching/overlapping and approaching each other
#[inline]
pub fn is_collision(p1: &Particle, p2: &Particle) -> bool {
    let dx = p1.position() - p2.position();
    let dv = p1.velocity() - p2.velocity();

    let touching = dx.length() <= p1.radius() + p2.radius();
    let approaching = dv.dot(dx) < 0.0;

    touching && approaching
}

/// Post-collision velocities of two circular bodies, or `None` when the
/// collision normal or the mass ratio is undefined.
///
/// ```text
/// v1' = v1 - 2 m2 / (m1 + m2) * <v1 - v2, x1 - x2> / |x1 - x2|^2 * (x1 - x2)
/// v2' = v2 - 2 m1 / (m1 + m2) * <v2 - v1, x2 - x1> / |x2 - x1|^2 * (x2 - x1)
/// ```
pub fn post_collision_velocities(p1: &Particle, p2: &Particle) -> Option<(Vec2, Vec2)> {
    let x1 = p1.position();
    let x2 = p2.position();
    let v1 = p1.velocity();
    let v2 = p2.velocity();
    let m1 = p1.mass();
    let m2 = p2.mass();

    let total_mass = m1 + m2;
    let dist_sq = (x1 - x2).length_squared();
    if dist_sq < MIN_SEPARATION_SQ || !(total_mass > 0.0) {
        return None;
    }

    let v1_prime = v1 - (x1 - x2) * (2.0 * m2 / total_mass * (v1 - v2).dot(x1 - x2) / dist_sq);
    let v2_prime = v2 - (x2 - x1) * (2.0 * m1 / total_mass * (v2 - v1).dot(x2 - x1) / dist_sq);

    Some((v1_prime, v2_prime))
}

#[inline]
pub fn test_pair(p1: &Particle, p2: &Particle) -> Contact {
    if !is_collision(p1, p2) {
        return Contact::None;
    }
    match post_collision_velocities(p1, p2) {
        Some((v1, v2)) => Contact::Resolved(v1, v2),
        None => Contact::Degenerate,
    }
}

/// Resolve every colliding pair in `(i, j)` order, mutating in place.
pub fn resolve_particle_collisions(particles: &mut [Particle]) -> PairStats {
    let mut stats = PairStats::default();
    let n = particles.len();

    for i in 0..n {
        for j in (i + 1)..n {
            // i < j, so particle i lives in `head` and particle j is `tail[0]`
            let (head, tail) = particles.split_at_mut(j);
            let p1 = &mut head[i];
            let p2 = &mut tail[0];

            stats.pairs_checked += 1;
            match test_pair(p1, p2) {
                Contact::None => {}
                Contact::Resolved(v1, v2) => {
                    p1.set_velocity(v1);
                    p2.set_velocity(v2);
                    stats.collisions_resolved += 1;
                }
                Contact::Degenerate => stats.degenerate_pairs += 1,
            }
        }
    }

    stats
}
