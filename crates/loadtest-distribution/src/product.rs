//! Multiplicative composition of distributions.

use crate::distribution::Distribution;
use crate::source::SharedRandom;

/// Product of the values generated by `distributions`, scaled down by the
/// divisor of every [`Ratio`](crate::Ratio) among them.
///
/// Combining a partition size with a ratio such as `fixed(1)/2` yields a
/// batch covering half of the partition. The result never drops below 1.
///
/// Both products saturate instead of overflowing, and a zero divisor from a
/// hand-built [`Ratio`](crate::Ratio) also yields 1.
pub fn product<'a, I>(rng: &SharedRandom, distributions: I) -> i64
where
    I: IntoIterator<Item = &'a Distribution>,
{
    let (n, ratio) = distributions
        .into_iter()
        .fold((1i128, 1i128), |(n, ratio), d| {
            (
                n.saturating_mul(i128::from(d.generate(rng))),
                ratio.saturating_mul(i128::from(d.ratio_value())),
            )
        });
    n.checked_div(ratio)
        .map_or(1, |q| q.clamp(1, i128::from(i64::MAX)) as i64)
}
