//! A quadrature rule: abscissas with integration weights.

use crate::collection::Series;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::result::Ordinate;


/// Nodes `(x_i, w_i)` approximating `∫ f(x)·W(x) dx ≈ Σ w_i·f(x_i)` for the
/// weight function `W` the rule was built for.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Quadrature {
    nodes: Series<f64>,
}

impl Quadrature {
    pub(crate) fn from_nodes<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut series = Series::new();
        for (x, w) in nodes {
            series.put(x, w);
        }
        Self { nodes: series }
    }

    /// Nodes as a series of `(abscissa, weight)`.
    pub fn nodes(&self) -> &Series<f64> {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.nodes.iter().map(|e| (e.x(), *e.y()))
    }

    pub fn total_weight(&self) -> f64 {
        self.iter().map(|(_, w)| w).sum()
    }

    pub fn integrate<F>(&self, mut f: F) -> f64
    where
        F: FnMut(f64) -> f64,
    {
        self.iter().map(|(x, w)| w * f(x)).sum()
    }

    /// Weighted sum over a fallible integrand with any ordinate type.
    pub fn try_integrate<O, F>(&self, mut f: F) -> Result<O, InterpolationError>
    where
        O: Ordinate,
        F: FnMut(f64) -> Result<O, InterpolationError>,
    {
        let mut sum = O::zero();
        for (x, w) in self.iter() {
            sum = sum + f(x)? * w;
        }
        Ok(sum)
    }

    /// Maps a rule on `[-1, 1]` onto `[a, b]`.
    #[must_use]
    pub fn on_interval(&self, a: f64, b: f64) -> Self {
        let (mid, half) = (0.5 * (a + b), 0.5 * (b - a));
        Self::from_nodes(self.iter().map(|(x, w)| (mid + half * x, half * w)))
    }
}
