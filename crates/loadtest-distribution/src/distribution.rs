//! Distribution variants.
//!
//! A [`Distribution`] produces an `i64` on every call. Values are only
//! deterministic in expectation: two calls on the same uniform distribution
//! will usually differ.

use crate::parser::{parse_distribution, parse_ratio, DistributionError};
use crate::source::SharedRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A rule for producing integer values on demand.
///
/// Serialized as its grammar string, e.g. `"uniform(1..100)"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Distribution {
    Fixed(Fixed),
    Uniform(Uniform),
    Ratio(Ratio),
}

impl Distribution {
    /// Produce the next value.
    pub fn generate(&self, rng: &SharedRandom) -> i64 {
        match self {
            Distribution::Fixed(f) => f.generate(),
            Distribution::Uniform(u) => u.generate(rng),
            Distribution::Ratio(r) => r.generate(rng),
        }
    }

    pub fn as_ratio(&self) -> Option<&Ratio> {
        match self {
            Distribution::Ratio(r) => Some(r),
            _ => None,
        }
    }

    /// Divisor applied during composition; 1 for anything but a ratio.
    pub fn ratio_value(&self) -> i64 {
        self.as_ratio().map_or(1, |r| r.value)
    }

    /// Render in the grammar accepted by [`parse_distribution`] and
    /// [`parse_ratio`].
    pub fn to_grammar(&self) -> String {
        match self {
            Distribution::Fixed(f) => format!("fixed({})", f.value),
            Distribution::Uniform(u) => format!("uniform({}..{})", u.min, u.max),
            Distribution::Ratio(r) => r.to_grammar(),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::Fixed(d) => fmt::Display::fmt(d, f),
            Distribution::Uniform(d) => fmt::Display::fmt(d, f),
            Distribution::Ratio(d) => fmt::Display::fmt(d, f),
        }
    }
}

/// Accepts both plain distributions and ratios.
impl FromStr for Distribution {
    type Err = DistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('/') {
            parse_ratio(s).map(Distribution::Ratio)
        } else {
            parse_distribution(s)
        }
    }
}

impl TryFrom<String> for Distribution {
    type Error = DistributionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Distribution> for String {
    fn from(value: Distribution) -> Self {
        value.to_grammar()
    }
}

impl From<Fixed> for Distribution {
    fn from(value: Fixed) -> Self {
        Distribution::Fixed(value)
    }
}

impl From<Uniform> for Distribution {
    fn from(value: Uniform) -> Self {
        Distribution::Uniform(value)
    }
}

impl From<Ratio> for Distribution {
    fn from(value: Ratio) -> Self {
        Distribution::Ratio(value)
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed {
    pub value: i64,
}

impl Fixed {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    pub fn generate(&self) -> i64 {
        self.value
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed({})", self.value)
    }
}

/// Uniform distribution over `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uniform {
    /// Lower bound (inclusive)
    pub min: i64,
    /// Upper bound (exclusive)
    pub max: i64,
}

impl Uniform {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Sample a value from `rng`.
    ///
    /// A zero-width range (`min == max`) always yields `min`.
    ///
    /// # Panics
    ///
    /// Panics if `max < min`. The parser never builds such a value.
    pub fn generate(&self, rng: &SharedRandom) -> i64 {
        if self.max == self.min {
            return self.min;
        }
        self.min + rng.int63n(self.max - self.min)
    }
}

impl fmt::Display for Uniform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uniform(min={}, max={})", self.min, self.max)
    }
}

/// Describes how likely an operation is to apply.
///
/// `fixed(1)/1` applies to a whole partition, `fixed(1)/2` to half of it.
/// It is used to size batch inserts relative to the partition size; the
/// divisor only matters when combined with [`product`](crate::product).
/// Generation delegates to the wrapped distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ratio {
    pub distribution: Box<Distribution>,
    pub value: i64,
}

impl Ratio {
    pub fn new(distribution: impl Into<Distribution>, value: i64) -> Self {
        Self {
            distribution: Box::new(distribution.into()),
            value,
        }
    }

    pub fn generate(&self, rng: &SharedRandom) -> i64 {
        self.distribution.generate(rng)
    }

    pub fn to_grammar(&self) -> String {
        format!("{}/{}", self.distribution.to_grammar(), self.value)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.distribution, self.value)
    }
}

impl FromStr for Ratio {
    type Err = DistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ratio(s)
    }
}

impl TryFrom<String> for Ratio {
    type Error = DistributionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_ratio(&value)
    }
}

impl From<Ratio> for String {
    fn from(value: Ratio) -> Self {
        value.to_grammar()
    }
}
