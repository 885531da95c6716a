//! Value distributions for the surreal-sync load testing framework.
//!
//! Distributions are described with the cassandra-stress profile grammar
//! (`fixed(5)`, `uniform(1..100)`, `fixed(1)/2`) and sampled from a
//! lock-guarded [`SharedRandom`] source.
//!
//! # Architecture
//!
//! ```text
//! "uniform(1..100)"        "fixed(1)/2"
//!        │                      │
//!        ▼                      ▼
//! parse_distribution()     parse_ratio()
//!        │                      │
//!        ▼                      ▼
//! ┌──────────────────────────────────┐
//! │ Distribution                     │
//! │   Fixed | Uniform | Ratio        │──── generate(&SharedRandom) ──► i64
//! └──────────────────────────────────┘
//!        │
//!        ▼
//!   product(&SharedRandom, [..]) ──► max(Π values / Π divisors, 1)
//! ```
//!
//! # Example
//!
//! ```rust
//! use loadtest_distribution::{parse_distribution, parse_ratio, product, Distribution, SharedRandom};
//!
//! let rng = SharedRandom::from_seed(42);
//! let partition = parse_distribution("fixed(100)").unwrap();
//! let ratio = Distribution::from(parse_ratio("fixed(1)/4").unwrap());
//!
//! assert_eq!(product(&rng, [&partition, &ratio]), 25);
//! ```

pub mod distribution;
pub mod parser;
pub mod product;
pub mod source;

pub use distribution::{Distribution, Fixed, Ratio, Uniform};
pub use parser::{parse_distribution, parse_ratio, DistributionError};
pub use product::product;
pub use source::SharedRandom;
