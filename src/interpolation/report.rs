//! Batch evaluation summary.
//!
//! [`InterpolationReport`] is returned by
//! [`crate::interpolation::AxisFunction::evaluate_many`] and keeps, next to the
//! results, how many of them were produced by the supervisor instead of the
//! interpolant.

use crate::interpolation::algorithms::Algorithm;

/// [`InterpolationReport`]
/// - `algorithm_name` : axis strategy, e.g. `"linear"`
/// - `n_provided`     : stored knots
/// - `n_evaluated`    : query points
/// - `n_recovered`    : queries answered by a supervisor fallback
/// - `domain`         : `(x_min, x_max)` of the knots, `None` when empty
/// - `evaluated`      : one result per query, in query order
#[derive(Debug, Clone)]
pub struct InterpolationReport<R> {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub n_recovered: usize,
    pub domain: Option<(f64, f64)>,
    pub evaluated: Vec<R>,
}

impl<R> InterpolationReport<R> {
    pub fn new(algorithm: Algorithm, n_provided: usize, n_evaluated: usize, domain: Option<(f64, f64)>) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated,
            n_recovered: 0,
            domain,
            evaluated: Vec::with_capacity(n_evaluated),
        }
    }

    /// Fraction of queries that fell back to the supervisor.
    pub fn recovered_fraction(&self) -> f64 {
        if self.n_evaluated == 0 {
            return 0.0;
        }
        self.n_recovered as f64 / self.n_evaluated as f64
    }
}
