//! Defines the interpolation algorithm variants.
//!
//! Provides the [`Algorithm`] enum, which names every axis interpolator and
//! doubles as the per-axis strategy tag of a [`crate::tensor::MultiMap`].

use std::fmt;

use crate::collection::Series;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::linear::LinearFunction;
use crate::interpolation::nearest::NearestFunction;
use crate::interpolation::polint;
use crate::interpolation::result::Ordinate;
use crate::interpolation::spline::{HermiteFunction, SplineFunction};
use crate::interpolation::traits::AxisFunction;


/// Interpolation algorithm variants.
/// - [`Algorithm::Nearest`] value of the closer bracketing sample
/// - [`Algorithm::Linear`]  linear between the bracketing samples
/// - [`Algorithm::Polint`]  Lagrange polynomial of the given degree (Neville)
/// - [`Algorithm::Spline`]  natural cubic spline
/// - [`Algorithm::Hermite`] monotone cubic Hermite spline
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Nearest,
    Linear,
    Polint(usize),
    Spline,
    Hermite,
}

impl Algorithm {
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Nearest => "nearest",
            Algorithm::Linear => "linear",
            Algorithm::Polint(_) => "polint",
            Algorithm::Spline => "natural cubic spline",
            Algorithm::Hermite => "monotone hermite spline",
        }
    }

    /// Number of samples around the query that the algorithm reads, or `None`
    /// when it needs the whole series.
    pub fn window(self) -> Option<usize> {
        match self {
            Algorithm::Nearest | Algorithm::Linear => Some(2),
            Algorithm::Polint(degree) => Some(degree + 1),
            Algorithm::Spline | Algorithm::Hermite => None,
        }
    }

    /// Builds a plain interpolator of this kind over `series`.
    ///
    /// Spline variants are compiled with default parameters.
    pub fn build<R: Ordinate>(self, series: Series<R>) -> Result<Interpolant<R>, InterpolationError> {
        Ok(match self {
            Algorithm::Nearest => Interpolant::Nearest(NearestFunction::from_series(series)),
            Algorithm::Linear => Interpolant::Linear(LinearFunction::from_series(series)),
            Algorithm::Polint(degree) => Interpolant::Polint(degree, series),
            Algorithm::Spline => {
                let mut f = SplineFunction::from_series(series);
                f.compile()?;
                Interpolant::Spline(f)
            }
            Algorithm::Hermite => {
                let mut f = HermiteFunction::from_series(series);
                f.compile()?;
                Interpolant::Hermite(f)
            }
        })
    }

    /// Interpolates `series` at `x` with a throw-away interpolator of this kind.
    ///
    /// No supervisor is consulted.
    pub fn interpolate<R: Ordinate>(self, series: Series<R>, x: f64) -> Result<R, InterpolationError> {
        match self {
            Algorithm::Polint(degree) => polint::evaluate_degree(&series, degree, x),
            other => other.build(series)?.try_evaluate(x),
        }
    }
}


/// Plain interpolator chosen at runtime by an [`Algorithm`] tag.
#[derive(Debug, Clone)]
pub enum Interpolant<R: Ordinate> {
    Nearest(NearestFunction<R>),
    Linear(LinearFunction<R>),
    Polint(usize, Series<R>),
    Spline(SplineFunction<R>),
    Hermite(HermiteFunction<R>),
}

impl<R: Ordinate> Interpolant<R> {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Interpolant::Nearest(_) => Algorithm::Nearest,
            Interpolant::Linear(_) => Algorithm::Linear,
            Interpolant::Polint(degree, _) => Algorithm::Polint(*degree),
            Interpolant::Spline(_) => Algorithm::Spline,
            Interpolant::Hermite(_) => Algorithm::Hermite,
        }
    }

    pub fn series(&self) -> &Series<R> {
        match self {
            Interpolant::Nearest(f) => f.series(),
            Interpolant::Linear(f) => f.series(),
            Interpolant::Polint(_, series) => series,
            Interpolant::Spline(f) => f.series(),
            Interpolant::Hermite(f) => f.series(),
        }
    }

    pub fn try_evaluate(&self, x: f64) -> Result<R, InterpolationError> {
        match self {
            Interpolant::Nearest(f) => f.try_evaluate(x),
            Interpolant::Linear(f) => f.try_evaluate(x),
            Interpolant::Polint(degree, series) => polint::evaluate_degree(series, *degree, x),
            Interpolant::Spline(f) => f.try_evaluate(x),
            Interpolant::Hermite(f) => f.try_evaluate(x),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Polint(degree) => write!(f, "polint({degree})"),
            other => f.write_str(other.algorithm_name()),
        }
    }
}
