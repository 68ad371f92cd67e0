//! Percentage-of-max rescaling.

use crate::error::{RankError, Result};

/// Full score assigned to the attribute with the highest mean.
pub const FULL_SCORE: f64 = 100.0;

/// Rescale means so the largest becomes [`FULL_SCORE`]:
/// `score = mean * (100 / max)`.
///
/// Attributes without a mean stay `None`. Fails with
/// [`RankError::EmptyResult`] when no attribute has a mean at all, and with
/// [`RankError::DegenerateScale`] when the maximum is not positive.
pub fn rescale_to_max(means: &[Option<f64>]) -> Result<Vec<Option<f64>>> {
    let max = means
        .iter()
        .flatten()
        .copied()
        .reduce(f64::max)
        .ok_or(RankError::EmptyResult)?;

    if max <= 0.0 {
        return Err(RankError::DegenerateScale { max });
    }

    let factor = FULL_SCORE / max;
    Ok(means
        .iter()
        .map(|mean| {
            // pin the maximum so float rounding can't leave it at 99.999...
            mean.map(|m| if m == max { FULL_SCORE } else { m * factor })
        })
        .collect())
}
