//! Query location and the Neville kernel shared by the axis interpolators.

use crate::collection::{Element, Series};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::result::Ordinate;


/// Where a query falls in a series.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Bracket {
    /// The series holds a single sample and the query matches it.
    Single,
    /// Index of the upper bracketing sample, in `1..len`.
    Upper(usize),
}


/// Locates `x` in `series`.
///
/// Queries within precision of either end are pulled onto the end segment.
///
/// # Errors
/// - [`InterpolationError::InsufficientData`] for fewer than two samples,
///   unless a single sample matches `x`.
/// - [`InterpolationError::ValueOutOfRange`] beyond either end.
pub(crate) fn locate<O>(series: &Series<O>, x: f64) -> Result<Bracket, InterpolationError> {
    let metric = series.metric();
    let xs = series.as_slice();
    let n = xs.len();

    if n < 2 {
        return match xs.first() {
            Some(e) if metric.equals(e.x(), x) => Ok(Bracket::Single),
            _ => Err(InterpolationError::InsufficientData { got: n, need: 2 }),
        };
    }

    let out_of_range = || InterpolationError::ValueOutOfRange {
        got: x,
        x_min: xs[0].x(),
        x_max: xs[n - 1].x(),
    };

    let p = series.lower_bound(x);
    if p == 0 {
        if metric.exceeds(x, xs[0].x()) {
            return Err(out_of_range());
        }
        return Ok(Bracket::Upper(1));
    }
    if p == n {
        if metric.exceeds(xs[n - 1].x(), x) {
            return Err(out_of_range());
        }
        return Ok(Bracket::Upper(n - 1));
    }
    Ok(Bracket::Upper(p))
}


/// First index of the `m`-sample window around upper bracket `p` in a series
/// of `size` samples: `m/2` steps up, then `m` steps down, each bounded by the
/// series ends.
pub(crate) fn window_start(p: usize, m: usize, size: usize) -> usize {
    let top = (p + m / 2).min(size);
    top.saturating_sub(m)
}


/// Neville's algorithm carrying derivatives.
///
/// `u[i] = x_i - x` are the offsets of the window samples from the query and
/// `y[i]` their ordinates. Returns `order + 1` coefficients, the value and the
/// derivatives up to `order` at the query. The pivot is the sample closest to
/// the query (first on ties).
pub(crate) fn neville<O: Ordinate>(u: &[f64], y: &[O], order: usize) -> Vec<O> {
    let n = u.len();
    let k_max = order + 1;

    let mut v: Vec<Vec<O>> = y
        .iter()
        .map(|&yi| {
            let mut row = vec![O::zero(); k_max];
            row[0] = yi;
            row
        })
        .collect();
    let mut w = v.clone();

    let mut j = 0usize;
    for i in 1..n {
        if u[i].abs() < u[j].abs() {
            j = i;
        }
    }

    let mut result = v[j].clone();
    // j + 1 after the pivot has been consumed; may reach zero
    let mut jj = j;

    let mut r = vec![O::zero(); k_max];
    for m in 1..n {
        for i in 0..n - m {
            let ho = u[i];
            let hp = u[i + m];
            let dx = ho - hp;

            for k in 0..k_max {
                r[k] = (v[i + 1][k] - w[i][k]) / dx;
            }

            v[i][0] = r[0] * ho;
            w[i][0] = r[0] * hp;
            for k in 1..k_max {
                v[i][k] = r[k] * ho - r[k - 1] * k as f64;
                w[i][k] = r[k] * hp - r[k - 1] * k as f64;
            }
        }

        if 2 * jj < n - m {
            for k in 0..k_max {
                result[k] = result[k] + v[jj][k];
            }
        } else {
            for k in 0..k_max {
                result[k] = result[k] + w[jj - 1][k];
            }
            jj -= 1;
        }
    }

    result
}


/// Offsets and ordinates of a window of samples.
pub(crate) fn window_data<O: Ordinate>(elements: &[Element<O>], x: f64) -> (Vec<f64>, Vec<O>) {
    elements.iter().map(|e| (e.x() - x, *e.y())).unzip()
}
