//! Integration and distribution helpers on series.

use log::{debug, warn};

use crate::collection::histogram::Histogram1D;
use crate::collection::series::Series;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::result::Ordinate;


/// Trapezoid-rule integral over the knots of `series`.
///
/// Returns the total and the cumulative series `(x_i, ∫ from x_0 to x_i)`.
pub fn integrate<O: Ordinate>(series: &Series<O>) -> (O, Series<O>) {
    let mut total = O::zero();
    let mut cumulative = Series::with_metric(*series.metric());

    if let Some(first) = series.front() {
        cumulative.put(first.x(), total);
    }
    for pair in series.as_slice().windows(2) {
        let dx = pair[1].x() - pair[0].x();
        total = total + (*pair[0].y() + *pair[1].y()) * (0.5 * dx);
        cumulative.put(pair[1].x(), total);
    }

    (total, cumulative)
}

impl<O: Ordinate> Series<O> {
    /// See [`integrate`].
    pub fn integrate(&self) -> (O, Series<O>) {
        integrate(self)
    }
}


/// Converts histogram contents into a density sampled at the bin centres.
///
/// Each bin contributes `content / width` at its midpoint; under- and overflow
/// are dropped.
pub fn to_probability_density(histogram: &Histogram1D) -> Series<f64> {
    histogram
        .contents()
        .map(|(lo, hi, content)| (0.5 * (lo + hi), content / (hi - lo)))
        .collect()
}


/// Inverse cumulative distribution of a density sampled in `series`.
///
/// The output maps probability `P ∈ [0, 1]` to abscissa. Leading knots whose
/// cumulative integral does not exceed `0.5·eps·V` are skipped, with the last
/// of them anchoring `P = 0`; knots that raise `P` by no more than `eps` are
/// dropped. Returns the total integral `V` and the inverse distribution.
///
/// The anchor is the last skipped knot rather than the first counted one, so
/// the mass of the first non-empty segment stays below the first counted `P`.
/// Anchored at the first counted knot, a uniform density on `[0, 2]` would
/// map `P = 0` to `x = 1`.
///
/// # Errors
/// - [`InterpolationError::EmptyCollection`] for fewer than two knots.
/// - [`InterpolationError::DivisionByZero`] if the integral vanishes or no knot
///   survives the threshold.
pub fn make_cdf(series: &Series<f64>, eps: f64) -> Result<(f64, Series<f64>), InterpolationError> {
    if series.len() < 2 {
        return Err(InterpolationError::EmptyCollection);
    }

    let (total, cumulative) = integrate(series);
    if total == 0.0 {
        return Err(InterpolationError::DivisionByZero { context: "cumulative distribution" });
    }

    let knots = cumulative.as_slice();
    let start = knots.iter().position(|e| *e.y() > 0.5 * eps * total).ok_or(
        InterpolationError::DivisionByZero { context: "cumulative distribution, no remaining data" },
    )?;
    let anchor = start.saturating_sub(1);

    let mut output = Series::new();
    output.put(0.0, knots[anchor].x());

    let mut p_max = 0.0;
    let mut x_max = knots[anchor].x();
    let mut dropped = 0usize;

    for e in &knots[anchor + 1..] {
        let p = *e.y() / total;
        if p > p_max {
            x_max = e.x();
            if p > p_max + eps {
                output.put(p, e.x());
                p_max = p;
            } else {
                dropped += 1;
            }
        }
    }
    output.put(1.0, x_max);

    if dropped > 0 {
        warn!("cumulative distribution dropped {dropped} knots within eps = {eps}");
    }
    debug!("cumulative distribution: {} knots, integral {total}", output.len());

    Ok((total, output))
}
