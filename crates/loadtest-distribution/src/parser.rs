//! Parser for the distribution grammar.
//!
//! The syntax follows the "Supported types" section of the cassandra-stress
//! profile documentation:
//!
//! ```text
//! distribution   := type "(" params ")"
//! type           := "fixed" | "uniform"
//! fixed-params   := uint32
//! uniform-params := uint32 ".." uint32
//! ratio          := distribution "/" uint32
//! ```

use crate::distribution::{Distribution, Fixed, Ratio, Uniform};
use std::num::ParseIntError;
use tracing::debug;

/// Error type for distribution parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DistributionError {
    #[error("missing parameter list start delimiter '('")]
    MissingStartDelimiter,

    #[error("missing parameter list end delimiter ')'")]
    MissingEndDelimiter,

    /// Inverted distributions (`~type(...)`) are reserved but not supported
    #[error("unsupported inverted distribution: {0}")]
    InvertedUnsupported(String),

    #[error("unsupported distribution: {0}")]
    Unsupported(String),

    #[error("value for fixed distribution is invalid: {0}")]
    InvalidFixed(#[source] ParseIntError),

    #[error("interval for uniform distribution has invalid format, expected: min..max")]
    InvalidUniformFormat,

    #[error("min parameter for uniform distribution is invalid: {0}")]
    InvalidUniformMin(#[source] ParseIntError),

    #[error("max parameter for uniform distribution is invalid: {0}")]
    InvalidUniformMax(#[source] ParseIntError),

    #[error("interval for uniform distribution is invalid: min >= max ({min}..{max})")]
    InvalidUniformInterval { min: i64, max: i64 },

    /// Ratio without a valid nonzero `/N` divisor
    #[error("invalid input value")]
    InvalidInput,
}

/// Parse a distribution string such as `fixed(5)` or `uniform(1..100)`.
///
/// Anything after the closing `)` is ignored, which is what lets
/// [`parse_ratio`] reuse this for the `/N` form.
pub fn parse_distribution(s: &str) -> Result<Distribution, DistributionError> {
    let open = match s.find('(') {
        Some(i) if i > 0 => i,
        _ => return Err(DistributionError::MissingStartDelimiter),
    };
    let close = match s.find(')') {
        Some(j) if j > open => j,
        _ => return Err(DistributionError::MissingEndDelimiter),
    };

    let (typ, params) = (&s[..open], &s[open + 1..close]);
    if typ.starts_with('~') {
        return Err(DistributionError::InvertedUnsupported(typ.to_string()));
    }

    let distribution = match typ {
        "fixed" => {
            let value = params
                .parse::<u32>()
                .map_err(DistributionError::InvalidFixed)?;
            Distribution::Fixed(Fixed::new(i64::from(value)))
        }
        "uniform" => {
            let bounds: Vec<&str> = params.split("..").collect();
            let [min, max] = bounds.as_slice() else {
                return Err(DistributionError::InvalidUniformFormat);
            };
            let min = i64::from(
                min.parse::<u32>()
                    .map_err(DistributionError::InvalidUniformMin)?,
            );
            let max = i64::from(
                max.parse::<u32>()
                    .map_err(DistributionError::InvalidUniformMax)?,
            );
            if max < min {
                return Err(DistributionError::InvalidUniformInterval { min, max });
            }
            Distribution::Uniform(Uniform::new(min, max))
        }
        _ => return Err(DistributionError::Unsupported(typ.to_string())),
    };

    debug!("Parsed distribution {s:?} as {distribution}");
    Ok(distribution)
}

/// Parse a ratio string such as `uniform(1..10)/10`.
pub fn parse_ratio(s: &str) -> Result<Ratio, DistributionError> {
    let distribution = parse_distribution(s)?;

    let (_, divisor) = s.split_once('/').ok_or(DistributionError::InvalidInput)?;
    let value = divisor
        .parse::<u32>()
        .map_err(|_| DistributionError::InvalidInput)?;
    if value == 0 {
        return Err(DistributionError::InvalidInput);
    }

    let ratio = Ratio::new(distribution, i64::from(value));
    debug!("Parsed ratio {s:?} as {ratio}");
    Ok(ratio)
}
