//! Phase 1: wall reflection
//!
//! A particle bounces off a wall only while it touches the wall AND moves
//! toward (or along) it. A particle resting against a wall while moving away
//! keeps its velocity, otherwise it would be re-inverted every tick and never
//! leave the wall.

use crate::domain::particle::{Axis, Particle};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Touching the left/right wall (x axis) and moving into it
#[inline]
pub fn hits_x_wall(p: &Particle, plane_width: f64) -> bool {
    let pos = p.position();
    let vel = p.velocity();
    let left_bound = p.radius();
    let right_bound = plane_width - p.radius();

    (pos.x <= left_bound && vel.x <= 0.0) || (pos.x >= right_bound && vel.x >= 0.0)
}

/// Touching the bottom/top wall (y axis) and moving into it
#[inline]
pub fn hits_y_wall(p: &Particle, plane_width: f64) -> bool {
    let pos = p.position();
    let vel = p.velocity();
    let top_bound = plane_width - p.radius();
    let bottom_bound = p.radius();

    (pos.y <= bottom_bound && vel.y <= 0.0) || (pos.y >= top_bound && vel.y >= 0.0)
}

/// Reflect a single particle; returns the number of inverted components (0..=2)
#[inline]
pub fn reflect(p: &mut Particle, plane_width: f64) -> u32 {
    let mut bounces = 0;
    if hits_x_wall(p, plane_width) {
        p.invert_velocity_component(Axis::X);
        bounces += 1;
    }
    if hits_y_wall(p, plane_width) {
        p.invert_velocity_component(Axis::Y);
        bounces += 1;
    }
    bounces
}

/// Reflect every particle off the domain walls. Returns total inversions.
pub fn resolve_wall_collisions(particles: &mut [Particle], plane_width: f64) -> u32 {
    #[cfg(feature = "parallel")]
    {
        particles
            .par_iter_mut()
            .map(|p| reflect(p, plane_width))
            .sum()
    }
    #[cfg(not(feature = "parallel"))]
    {
        particles.iter_mut().map(|p| reflect(p, plane_width)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vec2::Vec2;

    const W: f64 = 100.0;

    fn unit(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle::new(1.0, 1.0, Vec2::new(x, y), Vec2::new(vx, vy))
    }

    #[test]
    fn each_wall_flips_only_its_axis() {
        let cases = [
            (unit(1.0, 50.0, -1.0, 5.0), Vec2::new(1.0, 5.0)),
            (unit(99.0, 50.0, 2.0, -7.0), Vec2::new(-2.0, -7.0)),
            (unit(25.0, 99.0, -1.0, 9.0), Vec2::new(-1.0, -9.0)),
            (unit(34.0, 0.75, -5.0, -3.0), Vec2::new(-5.0, 3.0)),
        ];
        for (mut p, expected) in cases {
            assert_eq!(reflect(&mut p, W), 1);
            assert_eq!(p.velocity(), expected);
        }
    }

    #[test]
    fn corners_flip_both_axes() {
        let cases = [
            (unit(1.0, 99.0, -1.0, 1.0), Vec2::new(1.0, -1.0)),
            (unit(99.0, 99.0, 1.0, 1.0), Vec2::new(-1.0, -1.0)),
            (unit(1.0, 1.0, -1.0, -1.0), Vec2::new(1.0, 1.0)),
            (unit(99.0, 1.0, 1.0, -1.0), Vec2::new(-1.0, 1.0)),
        ];
        for (mut p, expected) in cases {
            assert_eq!(reflect(&mut p, W), 2);
            assert_eq!(p.velocity(), expected);
        }
    }

    #[test]
    fn departing_particles_keep_velocity() {
        let cases = [
            unit(1.0, 50.0, 1.0, 5.0),
            unit(99.0, 50.0, -2.0, -7.0),
            unit(25.0, 99.0, -1.0, -9.0),
            unit(34.0, 0.75, -5.0, 3.0),
            unit(1.0, 99.0, 1.0, -1.0),
            unit(99.0, 1.0, -1.0, 1.0),
        ];
        for mut p in cases {
            let before = p.velocity();
            assert_eq!(reflect(&mut p, W), 0);
            assert_eq!(p.velocity(), before);
        }
    }

    #[test]
    fn zero_velocity_component_at_wall_is_inverted_in_place() {
        // -0.0 == 0.0, so the velocity still compares equal
        let mut p = unit(1.0, 50.0, 0.0, 0.0);
        assert_eq!(reflect(&mut p, W), 1);
        assert_eq!(p.velocity(), Vec2::zero());
    }

    #[test]
    fn interior_particles_are_untouched() {
        let mut ps = vec![unit(50.0, 50.0, -3.0, 3.0), unit(10.0, 90.0, 0.5, 0.5)];
        let before = ps.clone();
        assert_eq!(resolve_wall_collisions(&mut ps, W), 0);
        assert_eq!(ps, before);
    }

    #[test]
    fn bounds_depend_on_radius() {
        let mut big = Particle::new(2.0, 3.0, Vec2::new(1.5, 50.0), Vec2::new(-1.0, 0.0));
        assert_eq!(reflect(&mut big, W), 1);
        assert_eq!(big.velocity(), Vec2::new(1.0, 0.0));

        let mut small = Particle::new(1.0, 1.0, Vec2::new(1.5, 50.0), Vec2::new(-1.0, 0.0));
        assert_eq!(reflect(&mut small, W), 0);
    }
}
