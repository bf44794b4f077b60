//! Deterministic randomness scoped to a single callback

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Build a generator seeded from `seed` and call `cb` with it.
///
/// Every call constructs a fresh generator, so the same seed always yields the
/// same sequence within one build of this crate. The generator is only lent to
/// the callback and cannot be shared with other threads while it runs.
pub fn seeded_rng<F, T>(seed: u64, cb: F) -> T
where
    F: FnOnce(&mut StdRng) -> T,
{
    let mut rng = StdRng::seed_from_u64(seed);
    cb(&mut rng)
}
