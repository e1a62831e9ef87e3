use rand::SeedableRng;
use rand_chacha::ChaChaRng;

/// Seed used by every freshly constructed simulator
pub const DEFAULT_SEED: u64 = 12345;

#[inline]
pub(super) fn seeded_rng(seed: u64) -> ChaChaRng {
    ChaChaRng::seed_from_u64(seed)
}
