//! Column data generator with per-column seed tracking.

use crate::column::ColumnSpec;
use crate::shape::{FromSeed, ShapedValue};
use loadtest_distribution::{Distribution, SharedRandom};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::trace;

/// A raw sample already handed out for a column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seed {
    pub column: String,
    pub value: i64,
}

/// Generates column data from random seeds.
///
/// The generator remembers every seed accepted by
/// [`generate_unique`](Generator::generate_unique), per column, for its
/// whole lifetime. It is `Sync`; share one instance between threads to get
/// uniqueness across all of them.
///
/// Uniqueness is checked with a single sample. When that sample was already
/// used the call reports failure instead of resampling, so callers that need
/// a value regardless must retry themselves.
#[derive(Debug)]
pub struct Generator {
    /// Source used to sample distributions
    rng: Arc<SharedRandom>,
    /// Seeds already accepted, keyed by column
    seeds: Mutex<HashSet<Seed>>,
}

impl Generator {
    /// Create a generator backed by the process-wide random source.
    pub fn new() -> Self {
        Self::with_random(SharedRandom::global())
    }

    /// Create a generator backed by the given random source.
    pub fn with_random(rng: Arc<SharedRandom>) -> Self {
        Self {
            rng,
            seeds: Mutex::new(HashSet::new()),
        }
    }

    /// Generate a value without any uniqueness guarantee.
    ///
    /// `population` controls how many distinct values can appear; `size`
    /// controls the length of textual output.
    pub fn generate<T: FromSeed>(&self, population: &Distribution, size: &Distribution) -> T {
        let seed = population.generate(&self.rng);
        T::from_seed(seed, size, &self.rng)
    }

    /// Generate a value whose seed was never produced before for `column`.
    ///
    /// Returns `None` when the single sampled seed was already used. No
    /// retry is attempted.
    pub fn generate_unique<T: FromSeed>(
        &self,
        column: &str,
        population: &Distribution,
        size: &Distribution,
    ) -> Option<T> {
        let seed = self.generate_seed(column, population)?;
        Some(T::from_seed(seed, size, &self.rng))
    }

    /// Same as [`generate`](Generator::generate), writing into `out`.
    pub fn generate_into<T: FromSeed>(
        &self,
        population: &Distribution,
        size: &Distribution,
        out: &mut T,
    ) {
        *out = self.generate(population, size);
    }

    /// Same as [`generate_unique`](Generator::generate_unique), writing into
    /// `out`. Returns `false` and leaves `out` untouched when the seed was
    /// already used.
    pub fn generate_unique_into<T: FromSeed>(
        &self,
        column: &str,
        population: &Distribution,
        size: &Distribution,
        out: &mut T,
    ) -> bool {
        match self.generate_unique(column, population, size) {
            Some(value) => {
                *out = value;
                true
            }
            None => false,
        }
    }

    /// Generate a value for a configured column, honouring its `unique` flag.
    pub fn generate_column(&self, spec: &ColumnSpec) -> Option<ShapedValue> {
        let seed = if spec.unique {
            self.generate_seed(&spec.name, &spec.population)?
        } else {
            spec.population.generate(&self.rng)
        };
        Some(spec.shape.shape(seed, &spec.size, &self.rng))
    }

    /// Number of seeds accepted so far, across all columns.
    pub fn seed_count(&self) -> usize {
        self.lock_seeds().len()
    }

    pub fn contains(&self, column: &str, value: i64) -> bool {
        self.lock_seeds().contains(&Seed {
            column: column.to_string(),
            value,
        })
    }

    fn generate_seed(&self, column: &str, population: &Distribution) -> Option<i64> {
        let value = population.generate(&self.rng);
        let inserted = self.lock_seeds().insert(Seed {
            column: column.to_string(),
            value,
        });
        if !inserted {
            trace!("Seed {} already generated for column {}", value, column);
            return None;
        }
        Some(value)
    }

    fn lock_seeds(&self) -> MutexGuard<'_, HashSet<Seed>> {
        // Insertions are atomic, so a poisoned set is still consistent.
        self.seeds
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadtest_distribution::{Fixed, Uniform};

    fn test_generator() -> Generator {
        Generator::with_random(Arc::new(SharedRandom::from_seed(42)))
    }

    fn fixed(value: i64) -> Distribution {
        Distribution::from(Fixed::new(value))
    }

    #[test]
    fn test_generate_int() {
        let generator = test_generator();
        let value: i64 = generator.generate(&fixed(7), &fixed(0));
        assert_eq!(value, 7);
        assert_eq!(generator.seed_count(), 0);
    }

    #[test]
    fn test_generate_string_padded() {
        let generator = test_generator();
        let value: String = generator.generate(&fixed(7), &fixed(20));
        assert_eq!(value, "0700000000000000xxxx");

        let value: String = generator.generate(&fixed(7), &fixed(16));
        assert_eq!(value, "0700000000000000");
    }

    #[test]
    fn test_generate_unique_rejects_repeat() {
        let generator = test_generator();
        let mut out = 0i64;

        assert!(generator.generate_unique_into("col", &fixed(7), &fixed(0), &mut out));
        assert_eq!(out, 7);

        out = 123;
        assert!(!generator.generate_unique_into("col", &fixed(7), &fixed(0), &mut out));
        assert_eq!(out, 123);
        assert!(generator.contains("col", 7));
    }

    #[test]
    fn test_generate_unique_scoped_per_column() {
        let generator = test_generator();
        let a: Option<i32> = generator.generate_unique("a", &fixed(7), &fixed(0));
        let b: Option<i32> = generator.generate_unique("b", &fixed(7), &fixed(0));
        assert_eq!(a, Some(7));
        assert_eq!(b, Some(7));
        assert_eq!(generator.seed_count(), 2);
    }

    #[test]
    fn test_generate_does_not_record_seeds() {
        let generator = test_generator();
        let _: i64 = generator.generate(&fixed(7), &fixed(0));
        let unique: Option<i64> = generator.generate_unique("col", &fixed(7), &fixed(0));
        assert_eq!(unique, Some(7));
    }

    #[test]
    fn test_generate_unique_exhausts_population() {
        let generator = test_generator();
        let population = Distribution::from(Uniform::new(0, 10));
        let mut seen = HashSet::new();

        // Retries are the caller's job.
        while seen.len() < 10 {
            if let Some(v) = generator.generate_unique::<i64>("col", &population, &fixed(0)) {
                assert!(seen.insert(v), "duplicate seed {v}");
            }
        }
        assert_eq!(generator.seed_count(), 10);
        for _ in 0..100 {
            assert!(generator
                .generate_unique::<i64>("col", &population, &fixed(0))
                .is_none());
        }
    }

    #[test]
    fn test_generate_into() {
        let generator = test_generator();
        let mut out = String::new();
        generator.generate_into(&fixed(255), &fixed(0), &mut out);
        assert_eq!(out, "ff00000000000000");
    }
}
