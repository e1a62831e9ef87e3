//! Randomized particle factory
//!
//! The generator is always passed in, so callers decide seeding.

use rand::Rng;

use crate::domain::particle::Particle;
use crate::domain::size_class::SizeProfile;
use crate::domain::vec2::Vec2;

/// Sample a particle of the given profile.
///
/// Position components are uniform in `[radius, plane_width - radius]`, so the
/// particle starts fully inside the domain. Velocity components are uniform in
/// `[0, radius * speed_scale]`. No overlap check against other particles.
pub fn random_particle<R: Rng + ?Sized>(
    profile: &SizeProfile,
    plane_width: f64,
    rng: &mut R,
) -> Particle {
    let radius = profile.radius;
    let max_speed = profile.max_spawn_speed();

    let position = Vec2::new(
        rng.random_range(radius..=plane_width - radius),
        rng.random_range(radius..=plane_width - radius),
    );
    let velocity = Vec2::new(
        rng.random_range(0.0..=max_speed),
        rng.random_range(0.0..=max_speed),
    );

    Particle::new(radius, profile.mass, position, velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::size_class::{SizeClass, PLANE_WIDTH};
    use rand::SeedableRng;
    use rand_chacha::ChaChaRng;

    #[test]
    fn samples_stay_inside_profile_ranges() {
        let mut rng = ChaChaRng::seed_from_u64(7);
        for class in SizeClass::ALL {
            let profile = class.canonical_profile();
            for _ in 0..500 {
                let p = random_particle(&profile, PLANE_WIDTH, &mut rng);
                assert_eq!(p.radius(), profile.radius);
                assert_eq!(p.mass(), profile.mass);

                let pos = p.position();
                for c in [pos.x, pos.y] {
                    assert!(c >= profile.radius && c <= PLANE_WIDTH - profile.radius);
                }
                let vel = p.velocity();
                for c in [vel.x, vel.y] {
                    assert!(c >= 0.0 && c <= profile.max_spawn_speed());
                }
            }
        }
    }

    #[test]
    fn same_seed_same_particles() {
        let profile = SizeClass::Medium.canonical_profile();
        let mut a = ChaChaRng::seed_from_u64(42);
        let mut b = ChaChaRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(
                random_particle(&profile, PLANE_WIDTH, &mut a),
                random_particle(&profile, PLANE_WIDTH, &mut b)
            );
        }
    }

    #[test]
    fn zero_speed_scale_spawns_at_rest() {
        let mut profile = SizeClass::Small.canonical_profile();
        profile.speed_scale = 0.0;
        let mut rng = ChaChaRng::seed_from_u64(1);
        let p = random_particle(&profile, PLANE_WIDTH, &mut rng);
        assert_eq!(p.velocity(), Vec2::zero());
    }
}
