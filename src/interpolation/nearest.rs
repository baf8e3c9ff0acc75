//! Nearest-neighbour interpolation
//!
//! Returns the ordinate of whichever bracketing sample lies closer to the
//! query; on a tie the lower sample wins.

use crate::collection::Series;
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::bracket::{locate, Bracket};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::result::Ordinate;
use crate::interpolation::supervisor::Supervisor;
use crate::interpolation::traits::AxisFunction;


#[derive(Debug, Clone)]
pub struct NearestFunction<O: Ordinate> {
    series: Series<O>,
    supervisor: Supervisor<O>,
}

impl<O: Ordinate> Default for NearestFunction<O> {
    fn default() -> Self {
        Self { series: Series::new(), supervisor: Supervisor::default() }
    }
}

impl<O: Ordinate> AxisFunction for NearestFunction<O> {
    type Ordinate = O;
    type Output = O;

    fn algorithm(&self) -> Algorithm {
        Algorithm::Nearest
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

    fn supervisor(&self) -> &Supervisor<O> {
        &self.supervisor
    }

    fn set_supervisor(&mut self, supervisor: Supervisor<O>) {
        self.supervisor = supervisor;
    }

    fn try_evaluate(&self, x: f64) -> Result<O, InterpolationError> {
        let xs = self.series.as_slice();
        match locate(&self.series, x)? {
            Bracket::Single => Ok(*xs[0].y()),
            Bracket::Upper(q) => {
                let metric = self.series.metric();
                let (lo, hi) = (&xs[q - 1], &xs[q]);
                if metric.distance(x, hi.x()) < metric.distance(lo.x(), x) {
                    Ok(*hi.y())
                } else {
                    Ok(*lo.y())
                }
            }
        }
    }
}
