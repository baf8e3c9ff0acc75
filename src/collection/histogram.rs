//! One-dimensional histogram with under- and overflow.

use crate::collection::grid::Abscissae;
use crate::collection::series::Series;
use crate::interpolation::errors::InterpolationError;


/// Bin contents are stored at the lower edge of each bin; the last edge
/// carries no content.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram1D {
    bins: Series<f64>,
    underflow: f64,
    overflow: f64,
    integral: f64,
}

impl Histogram1D {
    /// Empty histogram over the given bin edges.
    ///
    /// # Errors
    /// - [`InterpolationError::InsufficientData`] for fewer than two edges.
    pub fn new<B>(edges: &B) -> Result<Self, InterpolationError>
    where
        B: Abscissae + ?Sized,
    {
        let mut bins = Series::new();
        bins.configure(edges, |_| 0.0);
        if bins.len() < 2 {
            return Err(InterpolationError::InsufficientData { got: bins.len(), need: 2 });
        }
        Ok(Self { bins, underflow: 0.0, overflow: 0.0, integral: 0.0 })
    }

    /// Adds weight `w` to the bin containing `x`.
    ///
    /// A bin includes its upper edge; `x` at or below the first edge counts
    /// as underflow, above the last edge as overflow.
    pub fn fill(&mut self, x: f64, w: f64) {
        let i = self.bins.lower_bound(x);
        if i == 0 {
            self.underflow += w;
        } else if i == self.bins.len() {
            self.overflow += w;
        } else if let Some(bin) = self.bins.iter_mut().nth(i - 1) {
            *bin.y_mut() += w;
        }
        self.integral += w;
    }

    pub fn bins(&self) -> &Series<f64> {
        &self.bins
    }

    /// `(lower edge, upper edge, content)` for every bin.
    pub fn contents(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.bins.as_slice().windows(2).map(|w| (w[0].x(), w[1].x(), *w[0].y()))
    }

    pub fn underflow(&self) -> f64 {
        self.underflow
    }

    pub fn overflow(&self) -> f64 {
        self.overflow
    }

    /// Total filled weight, including under- and overflow.
    pub fn integral(&self) -> f64 {
        self.integral
    }

    pub fn reset(&mut self) {
        for bin in self.bins.iter_mut() {
            *bin.y_mut() = 0.0;
        }
        self.underflow = 0.0;
        self.overflow = 0.0;
        self.integral = 0.0;
    }
}
