use std::cmp::Ordering;
use std::fmt::Debug;

use crate::collection::Series;
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::result::{Derivative, Hesse, Ordinate, Pdf};
use crate::interpolation::supervisor::Supervisor;


/// Result mode of an axis interpolator, chosen at the type level.
pub trait Mode: Copy + Clone + Default + Debug + 'static {
    type Output<O: Ordinate>: Ordinate;
}

/// Interpolated value only.
#[derive(Debug, Copy, Clone, Default)]
pub struct Plain;

/// Value and first derivative, see [`Derivative`].
#[derive(Debug, Copy, Clone, Default)]
pub struct WithDerivative;

/// Value, first and second derivative, see [`Hesse`].
#[derive(Debug, Copy, Clone, Default)]
pub struct WithHesse;

/// Density with partial and total integral, see [`Pdf`].
#[derive(Debug, Copy, Clone, Default)]
pub struct WithIntegral;

impl Mode for Plain {
    type Output<O: Ordinate> = O;
}
impl Mode for WithDerivative {
    type Output<O: Ordinate> = Derivative<O>;
}
impl Mode for WithHesse {
    type Output<O: Ordinate> = Hesse<O>;
}
impl Mode for WithIntegral {
    type Output<O: Ordinate> = Pdf<O>;
}


/// One-dimensional interpolator over a [`Series`].
///
/// `compile` must run after the last mutation of the series and before
/// `evaluate`; this is not checked.
pub trait AxisFunction: Clone + Default {
    type Ordinate: Ordinate;
    type Output: Ordinate;

    fn algorithm(&self) -> Algorithm;

    fn series(&self) -> &Series<Self::Ordinate>;
    fn series_mut(&mut self) -> &mut Series<Self::Ordinate>;

    /// Precomputes derivative and integral caches.
    fn compile(&mut self) -> Result<(), InterpolationError>;

    fn supervisor(&self) -> &Supervisor<Self::Output>;
    fn set_supervisor(&mut self, supervisor: Supervisor<Self::Output>);

    /// Evaluates without consulting the supervisor.
    fn try_evaluate(&self, x: f64) -> Result<Self::Output, InterpolationError>;

    /// Evaluates at `x`; failures are routed through the supervisor.
    #[inline]
    fn evaluate(&self, x: f64) -> Result<Self::Output, InterpolationError> {
        match self.try_evaluate(x) {
            Ok(r) => Ok(r),
            Err(e) => self.supervisor().recover(e),
        }
    }

    fn evaluate_many(&self, xs: &[f64]) -> Result<InterpolationReport<Self::Output>, InterpolationError> {
        let series = self.series();
        let domain = series.x_min().ok().zip(series.x_max().ok());
        let mut report = InterpolationReport::new(self.algorithm(), series.len(), xs.len(), domain);
        for &x in xs {
            let r = match self.try_evaluate(x) {
                Ok(r) => r,
                Err(e) => {
                    report.n_recovered += 1;
                    self.supervisor().recover(e)?
                }
            };
            report.evaluated.push(r);
        }
        Ok(report)
    }

    fn from_series(series: Series<Self::Ordinate>) -> Self {
        let mut f = Self::default();
        *f.series_mut() = series;
        f
    }

    fn put(&mut self, x: f64, y: Self::Ordinate) {
        self.series_mut().put(x, y);
    }
}


/// Routes an integral-mode failure through the supervisor and overwrites the
/// integrals of a fallback: zero partial integral below the domain, saturated
/// at the total above it.
pub(crate) fn recover_integral<O: Ordinate>(
    supervisor: &Supervisor<Pdf<O>>,
    error: InterpolationError,
    total: O,
) -> Result<Pdf<O>, InterpolationError> {
    let side = error.out_of_range_side();
    let mut result = supervisor.recover(error)?;
    match side {
        Some(Ordering::Less) => {
            result.v = O::zero();
            result.total = total;
        }
        Some(_) => {
            result.v = total;
            result.total = total;
        }
        None => {}
    }
    Ok(result)
}
