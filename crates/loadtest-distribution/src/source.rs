//! Lock-guarded random source shared by distributions and generators.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};
use tracing::debug;

static GLOBAL: OnceLock<Arc<SharedRandom>> = OnceLock::new();

/// A pseudo-random source that can be shared between threads.
///
/// Every call takes the internal lock, so concurrent callers never observe
/// interleaved RNG state. This is the only entropy used by
/// [`Uniform`](crate::Uniform) sampling.
///
/// Sources are normally constructed once by whatever wires up the generators
/// and handed out as `Arc<SharedRandom>`. [`SharedRandom::global`] exists for
/// callers that want a single process-wide source.
#[derive(Debug)]
pub struct SharedRandom {
    rng: Mutex<StdRng>,
}

impl SharedRandom {
    /// Create a source seeded from the wall clock mixed with the process id,
    /// so processes started at the same instant still diverge.
    pub fn new() -> Self {
        let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let seed = nanos.wrapping_add(i64::from(std::process::id()));
        debug!("Seeding shared random source with {seed}");
        Self::from_seed(seed as u64)
    }

    /// Create a source with a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// The process-wide source, created on first use.
    pub fn global() -> Arc<SharedRandom> {
        GLOBAL.get_or_init(|| Arc::new(SharedRandom::new())).clone()
    }

    /// A non-negative 63-bit value.
    pub fn int63(&self) -> i64 {
        (self.lock().next_u64() >> 1) as i64
    }

    /// A full 64-bit value.
    pub fn uint64(&self) -> u64 {
        self.lock().next_u64()
    }

    /// A value in `[0, n)`.
    ///
    /// # Panics
    ///
    /// Panics if `n <= 0`.
    pub fn int63n(&self, n: i64) -> i64 {
        assert!(n > 0, "invalid argument to int63n: {n}");
        self.lock().random_range(0..n)
    }

    /// Reset the source to a known state.
    pub fn reseed(&self, seed: u64) {
        *self.lock() = StdRng::seed_from_u64(seed);
    }

    fn lock(&self) -> MutexGuard<'_, StdRng> {
        // A panic while holding the lock cannot leave the RNG half-updated.
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for SharedRandom {
    fn default() -> Self {
        Self::new()
    }
}
