//! The random index source used by the randomised bag operations.
//!
//! Bags never own or seed a generator themselves. Callers either pass one
//! in through the `_with` operations or, with the `std` feature, fall back
//! to the thread local generator which is seeded once per thread.

pub use rand::{
    rngs::SmallRng,
    Rng,
    RngCore,
};
use rand::SeedableRng;

/// Draws an index uniformly from `0..len`.
///
/// Returns `None` if `len` is zero since there is nothing to choose from.
#[inline]
pub fn pick_index<R>(rng: &mut R, len: usize) -> Option<usize>
where
    R: Rng + ?Sized,
{
    if len == 0 {
        return None
    }
    Some(rng.gen_range(0, len))
}

/// Returns a small fast generator with a fixed seed.
///
/// Useful to share one reproducible generator across several bags.
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Returns a small fast generator seeded from operating system entropy.
#[cfg(feature = "std")]
pub fn entropy_rng() -> SmallRng {
    SmallRng::from_entropy()
}
