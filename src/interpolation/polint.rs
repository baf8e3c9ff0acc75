//! Lagrange polynomial interpolation (Neville's algorithm)
//!
//! A degree-`N` interpolant uses the `min(N + 1, len)` samples centred on the
//! query. Neville's scheme builds the value from the sample nearest to the
//! query outward, adding one correction term per order; derivatives ride along
//! in the same tableau.
//!
//! Degree 0 and 1 reduce to nearest-neighbour and linear interpolation.
//!
//! The integral mode integrates the degree-`N` interpolant with an `N`-point
//! Gauss-Legendre rule per segment during `compile`, and interpolates the
//! cumulative integrals with the same window at evaluation.

use std::marker::PhantomData;

use log::debug;

use crate::collection::Series;
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::bracket::{locate, neville, window_data, window_start, Bracket};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::result::{Derivative, Ordinate, Pdf, Polynome};
use crate::interpolation::supervisor::Supervisor;
use crate::interpolation::traits::{
    recover_integral, AxisFunction, Mode, Plain, WithDerivative, WithIntegral,
};
use crate::quadrature::gauss::legendre_nodes;
use crate::quadrature::config::{DEFAULT_EPS, DEFAULT_MAX_ITER};


/// Degree-`degree` interpolation of `series` at `x`, coefficients up to `order`.
fn coefficients<O: Ordinate>(
    series: &Series<O>,
    degree: usize,
    order: usize,
    x: f64,
) -> Result<Vec<O>, InterpolationError> {
    let xs = series.as_slice();
    let mut out = vec![O::zero(); order + 1];

    let p = match locate(series, x)? {
        Bracket::Single => {
            out[0] = *xs[0].y();
            return Ok(out);
        }
        Bracket::Upper(p) => p,
    };

    let (lo, hi) = (&xs[p - 1], &xs[p]);
    let dx = hi.x() - lo.x();
    match degree {
        0 => {
            let metric = series.metric();
            out[0] = if metric.distance(x, hi.x()) < metric.distance(lo.x(), x) {
                *hi.y()
            } else {
                *lo.y()
            };
        }
        1 => {
            let a = (hi.x() - x) / dx;
            out[0] = *lo.y() * a + *hi.y() * (1.0 - a);
            if order >= 1 {
                out[1] = (*hi.y() - *lo.y()) / dx;
            }
        }
        _ => {
            let m = (degree + 1).min(xs.len());
            let start = window_start(p, m, xs.len());
            let (u, y) = window_data(&xs[start..start + m], x);
            out = neville(&u, &y, order);
        }
    }
    Ok(out)
}

/// Interpolates `series` at `x` with a polynomial of runtime `degree`.
pub fn evaluate_degree<O: Ordinate>(
    series: &Series<O>,
    degree: usize,
    x: f64,
) -> Result<O, InterpolationError> {
    Ok(coefficients(series, degree, 0, x)?[0])
}


#[derive(Debug, Clone)]
pub struct PolintFunction<const N: usize, O: Ordinate, M: Mode = Plain> {
    series: Series<O>,
    integrals: Vec<O>,
    supervisor: Supervisor<M::Output<O>>,
    mode: PhantomData<M>,
}

impl<const N: usize, O: Ordinate, M: Mode> Default for PolintFunction<N, O, M> {
    fn default() -> Self {
        Self {
            series: Series::new(),
            integrals: Vec::new(),
            supervisor: Supervisor::default(),
            mode: PhantomData,
        }
    }
}

impl<const N: usize, O: Ordinate, M: Mode> PolintFunction<N, O, M> {
    /// Value and derivatives up to order `K - 1` at `x`.
    pub fn polynome<const K: usize>(&self, x: f64) -> Result<Polynome<K, O>, InterpolationError> {
        let c = coefficients(&self.series, N, K.saturating_sub(1), x)?;
        Ok(Polynome::new(std::array::from_fn(|k| c.get(k).copied().unwrap_or_else(O::zero))))
    }
}

impl<const N: usize, O: Ordinate> PolintFunction<N, O, WithIntegral> {
    pub fn total_integral(&self) -> O {
        self.integrals.last().copied().unwrap_or_else(O::zero)
    }
}

macro_rules! impl_polint_common {
    () => {
        fn algorithm(&self) -> Algorithm {
            Algorithm::Polint(N)
        }
        fn series(&self) -> &Series<O> {
            &self.series
        }
        fn series_mut(&mut self) -> &mut Series<O> {
            &mut self.series
        }
        fn supervisor(&self) -> &Supervisor<Self::Output> {
            &self.supervisor
        }
        fn set_supervisor(&mut self, supervisor: Supervisor<Self::Output>) {
            self.supervisor = supervisor;
        }
    };
}

impl<const N: usize, O: Ordinate> AxisFunction for PolintFunction<N, O, Plain> {
    type Ordinate = O;
    type Output = O;

    impl_polint_common!();

    fn compile(&mut self) -> Result<(), InterpolationError> {
        Ok(())
    }

    fn try_evaluate(&self, x: f64) -> Result<O, InterpolationError> {
        evaluate_degree(&self.series, N, x)
    }
}

impl<const N: usize, O: Ordinate> AxisFunction for PolintFunction<N, O, WithDerivative> {
    type Ordinate = O;
    type Output = Derivative<O>;

    impl_polint_common!();

    fn compile(&mut self) -> Result<(), InterpolationError> {
        Ok(())
    }

    fn try_evaluate(&self, x: f64) -> Result<Derivative<O>, InterpolationError> {
        let c = coefficients(&self.series, N, 1, x)?;
        Ok(Derivative::new(c[0], c[1]))
    }
}

impl<const N: usize, O: Ordinate> AxisFunction for PolintFunction<N, O, WithIntegral> {
    type Ordinate = O;
    type Output = Pdf<O>;

    impl_polint_common!();

    fn compile(&mut self) -> Result<(), InterpolationError> {
        self.integrals.clear();
        let xs = self.series.as_slice();
        if xs.len() < 2 {
            self.integrals.resize(xs.len(), O::zero());
            return Ok(());
        }

        let engine = legendre_nodes(N.max(1), DEFAULT_EPS, DEFAULT_MAX_ITER);
        let mut total = O::zero();
        self.integrals.push(total);

        for pair in xs.windows(2) {
            let (x_min, x_max) = (pair[0].x(), pair[1].x());
            for &(z, w) in &engine {
                let x = 0.5 * (x_max + x_min + z * (x_max - x_min));
                total = total + evaluate_degree(&self.series, N, x)? * (0.5 * (x_max - x_min) * w);
            }
            self.integrals.push(total);
        }

        debug!("polint({N}) integral compiled over {} knots", xs.len());
        Ok(())
    }

    fn try_evaluate(&self, x: f64) -> Result<Pdf<O>, InterpolationError> {
        let xs = self.series.as_slice();
        // stale until the next compile
        if self.integrals.len() != xs.len() {
            return Err(InterpolationError::InsufficientData { got: self.integrals.len(), need: xs.len() });
        }
        let total = self.total_integral();

        let p = match locate(&self.series, x)? {
            Bracket::Single => return Ok(Pdf::new(*xs[0].y(), O::zero(), O::zero(), total)),
            Bracket::Upper(p) => p,
        };

        let c = coefficients(&self.series, N, 1, x)?;

        let m = (N + 1).max(2).min(xs.len());
        let start = window_start(p, m, xs.len());
        let u: Vec<f64> = xs[start..start + m].iter().map(|e| e.x() - x).collect();
        let v = neville(&u, &self.integrals[start..start + m], 0);

        Ok(Pdf::new(c[0], c[1], v[0], total))
    }

    fn evaluate(&self, x: f64) -> Result<Pdf<O>, InterpolationError> {
        match self.try_evaluate(x) {
            Ok(r) => Ok(r),
            Err(e) => recover_integral(&self.supervisor, e, self.total_integral()),
        }
    }
}
