//! Projection of raw seeds into output values.
//!
//! Two shapes exist: integers, which take the low bits of the seed, and
//! text, which hex-encodes the seed and pads it with `'x'` up to a sampled
//! size. The shape is picked statically through [`FromSeed`] or, for
//! configuration-driven callers, at runtime through [`OutputShape`].

use loadtest_distribution::{Distribution, SharedRandom};
use serde::{Deserialize, Serialize};

/// Filler appended to text values shorter than the requested size.
pub const PAD: char = 'x';

/// Encode `seed` as 8 little-endian bytes in lowercase hex, right-padded
/// with [`PAD`] to `size` characters. Never truncates.
pub fn padded_hex(seed: i64, size: i64) -> String {
    let mut out = hex::encode(seed.to_le_bytes());
    let wanted = usize::try_from(size).unwrap_or(0);
    if wanted > out.len() {
        let missing = wanted - out.len();
        out.extend(std::iter::repeat(PAD).take(missing));
    }
    out
}

mod private {
    pub trait Sealed {}
}

/// Output types a seed can be shaped into.
///
/// Sealed: only the integer primitives and `String` are supported, so an
/// unsupported target is rejected at compile time.
pub trait FromSeed: private::Sealed + Sized {
    /// Build a value from `seed`. `size` is only sampled by textual shapes.
    fn from_seed(seed: i64, size: &Distribution, rng: &SharedRandom) -> Self;
}

macro_rules! impl_from_seed_int {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl FromSeed for $t {
                fn from_seed(seed: i64, _size: &Distribution, _rng: &SharedRandom) -> Self {
                    seed as $t
                }
            }
        )*
    };
}

impl_from_seed_int!(i64, i32, i16, u64, u32, u16, isize, usize);

impl private::Sealed for String {}

impl FromSeed for String {
    fn from_seed(seed: i64, size: &Distribution, rng: &SharedRandom) -> Self {
        padded_hex(seed, size.generate(rng))
    }
}

/// Runtime selection of an output shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputShape {
    #[default]
    Integer,
    Text,
}

impl OutputShape {
    pub fn shape(self, seed: i64, size: &Distribution, rng: &SharedRandom) -> ShapedValue {
        match self {
            OutputShape::Integer => ShapedValue::Integer(i64::from_seed(seed, size, rng)),
            OutputShape::Text => ShapedValue::Text(String::from_seed(seed, size, rng)),
        }
    }
}

impl std::fmt::Display for OutputShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputShape::Integer => write!(f, "integer"),
            OutputShape::Text => write!(f, "text"),
        }
    }
}

/// A shaped value produced for a configured column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapedValue {
    Integer(i64),
    Text(String),
}

impl ShapedValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ShapedValue::Integer(v) => Some(*v),
            ShapedValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ShapedValue::Text(s) => Some(s),
            ShapedValue::Integer(_) => None,
        }
    }
}
