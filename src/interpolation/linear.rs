//! Linear Interpolation
//!
//! Implements piecewise-[linear interpolation](https://en.wikipedia.org/wiki/Linear_interpolation).
//!
//! Each consecutive pair `(x[i], y[i])`, `(x[i+1], y[i+1])` defines a line
//! segment. A query within `[x[i], x[i+1]]` is
//!
//! ```text
//! a  = (x[i+1] - x) / (x[i+1] - x[i]),  b = 1 - a
//! y  = a * y[i] + b * y[i+1]
//! y' = (y[i+1] - y[i]) / (x[i+1] - x[i])
//! ```

use std::marker::PhantomData;

use crate::collection::Series;
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::bracket::{locate, Bracket};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::result::{Derivative, Ordinate};
use crate::interpolation::supervisor::Supervisor;
use crate::interpolation::traits::{AxisFunction, Mode, Plain, WithDerivative};


#[derive(Debug, Clone)]
pub struct LinearFunction<O: Ordinate, M: Mode = Plain> {
    series: Series<O>,
    supervisor: Supervisor<M::Output<O>>,
    mode: PhantomData<M>,
}

impl<O: Ordinate, M: Mode> Default for LinearFunction<O, M> {
    fn default() -> Self {
        Self { series: Series::new(), supervisor: Supervisor::default(), mode: PhantomData }
    }
}

impl<O: Ordinate, M: Mode> LinearFunction<O, M> {
    /// Value and slope at `x`.
    fn segment(&self, x: f64) -> Result<(O, O), InterpolationError> {
        let xs = self.series.as_slice();
        match locate(&self.series, x)? {
            Bracket::Single => Ok((*xs[0].y(), O::zero())),
            Bracket::Upper(q) => {
                let (lo, hi) = (&xs[q - 1], &xs[q]);
                let dx = hi.x() - lo.x();
                let a = (hi.x() - x) / dx;
                let b = 1.0 - a;
                Ok((*lo.y() * a + *hi.y() * b, (*hi.y() - *lo.y()) / dx))
            }
        }
    }
}

macro_rules! impl_linear_axis {
    ($mode:ty, |$f:ident, $fp:ident| $out:expr) => {
        impl<O: Ordinate> AxisFunction for LinearFunction<O, $mode> {
            type Ordinate = O;
            type Output = <$mode as Mode>::Output<O>;

            fn algorithm(&self) -> Algorithm {
                Algorithm::Linear
            }
            fn series(&self) -> &Series<O> {
                &self.series
            }
            fn series_mut(&mut self) -> &mut Series<O> {
                &mut self.series
            }
            fn compile(&mut self) -> Result<(), InterpolationError> {
                Ok(())
            }
            fn supervisor(&self) -> &Supervisor<Self::Output> {
                &self.supervisor
            }
            fn set_supervisor(&mut self, supervisor: Supervisor<Self::Output>) {
                self.supervisor = supervisor;
            }
            fn try_evaluate(&self, x: f64) -> Result<Self::Output, InterpolationError> {
                let ($f, $fp) = self.segment(x)?;
                Ok($out)
            }
        }
    };
}

impl_linear_axis!(Plain, |f, _fp| f);
impl_linear_axis!(WithDerivative, |f, fp| Derivative::new(f, fp));
