//! Column data generator for the surreal-sync load testing framework.
//!
//! The [`Generator`] turns distribution samples ("seeds") into column
//! values. It can guarantee that a column never sees the same seed twice,
//! which is what populating primary keys and other unique columns needs.
//!
//! # Architecture
//!
//! ```text
//! ColumnSpec (YAML) ─┐
//!                    ▼
//! ┌──────────────────────────────┐
//! │  Generator                   │
//! │                              │
//! │  - rng   (Arc<SharedRandom>) │
//! │  - seeds (column, value)     │
//! └──────────────┬───────────────┘
//!                │ seed
//!                ▼
//!     FromSeed / OutputShape
//!        │              │
//!        ▼              ▼
//!   i64, i32, ...   "0700000000000000xxxx"
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use loadtest_distribution::{parse_distribution, SharedRandom};
//! use loadtest_generator::Generator;
//!
//! let generator = Generator::with_random(Arc::new(SharedRandom::from_seed(42)));
//! let population = parse_distribution("fixed(7)").unwrap();
//! let size = parse_distribution("fixed(20)").unwrap();
//!
//! let first: Option<String> = generator.generate_unique("name", &population, &size);
//! assert_eq!(first.as_deref(), Some("0700000000000000xxxx"));
//!
//! // The only possible seed is taken; the caller decides whether to retry.
//! let second: Option<String> = generator.generate_unique("name", &population, &size);
//! assert_eq!(second, None);
//! ```

pub mod column;
pub mod generator;
pub mod shape;

// Re-exports for convenience
pub use column::{ColumnSpec, ConfigError};
pub use generator::{Generator, Seed};
pub use shape::{padded_hex, FromSeed, OutputShape, ShapedValue};
