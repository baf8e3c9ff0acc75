//! Per-axis distance metric.
//!
//! The distance between two abscissas is the signed difference
//! `second - first`; two abscissas are considered equal when that difference
//! does not exceed the metric's precision.

use crate::interpolation::errors::InterpolationError;

/// Default equality tolerance between abscissas.
pub const DEFAULT_PRECISION: f64 = 1e-12;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DistanceMetric {
    precision: f64,
}

impl DistanceMetric {
    pub fn new(precision: f64) -> Result<Self, InterpolationError> {
        if !precision.is_finite() || precision <= 0.0 {
            return Err(InterpolationError::InvalidPrecision { got: precision });
        }
        Ok(Self { precision })
    }

    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Signed distance from `first` to `second`.
    #[inline]
    pub fn distance(&self, first: f64, second: f64) -> f64 {
        second - first
    }

    /// Strict ordering without tolerance; used for binary search.
    #[inline]
    pub fn precedes(&self, first: f64, second: f64) -> bool {
        self.distance(first, second) > 0.0
    }

    #[inline]
    pub fn equals(&self, first: f64, second: f64) -> bool {
        self.distance(first, second).abs() <= self.precision
    }

    /// Whether `second` lies beyond `first` by more than the precision.
    #[inline]
    pub fn exceeds(&self, first: f64, second: f64) -> bool {
        self.distance(first, second) > self.precision
    }
}

impl Default for DistanceMetric {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION }
    }
}
