//! Monotone cubic Hermite spline
//!
//! Slopes are one-sided secants at the two ends and the mean of the adjacent
//! secants at interior knots. In monotone mode (the default) the slopes are
//! then limited after Fritsch and Carlson: a slope following a flat step is
//! zeroed, and on every segment with secant `s` the slope pair is rescaled
//! onto the circle `u_i² + u_j² = 9·s²` whenever it lies outside.
//!
//! Multi-component ordinates are limited component by component.

use std::marker::PhantomData;

use log::debug;

use crate::collection::{Element, Series};
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::bracket::{locate, Bracket};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::result::{Derivative, Ordinate, Pdf};
use crate::interpolation::spline::helpers::{
    big_h00, big_h01, big_h10, big_h11, h00, h00p, h01, h01p, h10, h10p, h11, h11p,
};
use crate::interpolation::supervisor::Supervisor;
use crate::interpolation::traits::{
    recover_integral, AxisFunction, Mode, Plain, WithDerivative, WithIntegral,
};


#[derive(Debug, Clone)]
pub struct HermiteFunction<O: Ordinate, M: Mode = Plain> {
    series: Series<O>,
    monotone: bool,
    u: Vec<O>,
    integrals: Vec<O>,
    supervisor: Supervisor<M::Output<O>>,
    mode: PhantomData<M>,
}

impl<O: Ordinate, M: Mode> Default for HermiteFunction<O, M> {
    fn default() -> Self {
        Self {
            series: Series::new(),
            monotone: true,
            u: Vec::new(),
            integrals: Vec::new(),
            supervisor: Supervisor::default(),
            mode: PhantomData,
        }
    }
}


/// Knot slopes, optionally limited for monotonicity.
pub(crate) fn slopes<O: Ordinate>(xs: &[Element<O>], monotone: bool) -> Vec<O> {
    let n = xs.len();
    let mut u = vec![O::zero(); n];
    if n < 2 {
        return u;
    }

    let secant = |i: usize| (*xs[i + 1].y() - *xs[i].y()) / (xs[i + 1].x() - xs[i].x());

    u[0] = secant(0);
    u[n - 1] = secant(n - 2);
    for j in 1..n - 1 {
        u[j] = (secant(j - 1) + secant(j)) * 0.5;
    }

    if monotone {
        for j in 1..n {
            for k in 0..O::DIM {
                if xs[j - 1].y().component(k) == xs[j].y().component(k) {
                    *u[j].component_mut(k) = 0.0;
                }
            }
        }

        for i in 0..n - 1 {
            let s = secant(i);
            for k in 0..O::DIM {
                let sk = s.component(k);
                let ui = u[i].component(k);
                let uj = u[i + 1].component(k);
                let w = ui * ui + uj * uj;
                if w > 9.0 * sk * sk {
                    let v = 3.0 * sk / w.sqrt();
                    *u[i].component_mut(k) = v * ui;
                    *u[i + 1].component_mut(k) = v * uj;
                }
            }
        }
    }

    u
}


struct Segment<O> {
    yp: O,
    yq: O,
    up: O,
    uq: O,
    ip: O,
    dx: f64,
    t: f64,
}

impl<O: Ordinate, M: Mode> HermiteFunction<O, M> {
    /// Whether `compile` applies the monotonicity limiter.
    pub fn is_monotone(&self) -> bool {
        self.monotone
    }

    pub fn set_monotone(&mut self, monotone: bool) {
        self.monotone = monotone;
    }

    /// Knot slopes, valid after `compile`.
    pub fn slopes(&self) -> &[O] {
        &self.u
    }

    fn solve(&mut self) {
        self.u = slopes(self.series.as_slice(), self.monotone);
        debug!("hermite spline compiled over {} knots (monotone: {})", self.u.len(), self.monotone);
    }

    fn segment(&self, x: f64) -> Result<Option<Segment<O>>, InterpolationError> {
        let q = match locate(&self.series, x)? {
            Bracket::Single => return Ok(None),
            Bracket::Upper(q) => q,
        };
        let xs = self.series.as_slice();
        let (p_el, q_el) = (&xs[q - 1], &xs[q]);
        let dx = q_el.x() - p_el.x();
        let at = |v: &Vec<O>, i: usize| v.get(i).copied().unwrap_or_else(O::zero);
        Ok(Some(Segment {
            yp: *p_el.y(),
            yq: *q_el.y(),
            up: at(&self.u, q - 1),
            uq: at(&self.u, q),
            ip: at(&self.integrals, q - 1),
            dx,
            t: (x - p_el.x()) / dx,
        }))
    }

    fn single(&self) -> O {
        self.series.front().map(|e| *e.y()).unwrap_or_else(O::zero)
    }
}

impl<O: Ordinate> HermiteFunction<O, WithIntegral> {
    pub fn total_integral(&self) -> O {
        self.integrals.last().copied().unwrap_or_else(O::zero)
    }
}

#[inline]
fn value<O: Ordinate>(s: &Segment<O>) -> O {
    let (t, dx) = (s.t, s.dx);
    s.yp * h00(t) + s.up * (h10(t) * dx) + s.yq * h01(t) + s.uq * (h11(t) * dx)
}

#[inline]
fn slope<O: Ordinate>(s: &Segment<O>) -> O {
    let (t, dx) = (s.t, s.dx);
    s.yp * (h00p(t) / dx) + s.up * h10p(t) + s.yq * (h01p(t) / dx) + s.uq * h11p(t)
}

#[inline]
fn partial_integral<O: Ordinate>(s: &Segment<O>) -> O {
    let (t, dx) = (s.t, s.dx);
    s.ip
        + (s.yp * big_h00(t) + s.up * (big_h10(t) * dx) + s.yq * big_h01(t) + s.uq * (big_h11(t) * dx))
            * dx
}

macro_rules! impl_hermite_common {
    () => {
        fn algorithm(&self) -> Algorithm {
            Algorithm::Hermite
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

impl<O: Ordinate> AxisFunction for HermiteFunction<O, Plain> {
    type Ordinate = O;
    type Output = O;

    impl_hermite_common!();

    fn compile(&mut self) -> Result<(), InterpolationError> {
        self.solve();
        Ok(())
    }

    fn try_evaluate(&self, x: f64) -> Result<O, InterpolationError> {
        Ok(match self.segment(x)? {
            Some(s) => value(&s),
            None => self.single(),
        })
    }
}

impl<O: Ordinate> AxisFunction for HermiteFunction<O, WithDerivative> {
    type Ordinate = O;
    type Output = Derivative<O>;

    impl_hermite_common!();

    fn compile(&mut self) -> Result<(), InterpolationError> {
        self.solve();
        Ok(())
    }

    fn try_evaluate(&self, x: f64) -> Result<Derivative<O>, InterpolationError> {
        Ok(match self.segment(x)? {
            Some(s) => Derivative::new(value(&s), slope(&s)),
            None => Derivative::new(self.single(), O::zero()),
        })
    }
}

impl<O: Ordinate> AxisFunction for HermiteFunction<O, WithIntegral> {
    type Ordinate = O;
    type Output = Pdf<O>;

    impl_hermite_common!();

    fn compile(&mut self) -> Result<(), InterpolationError> {
        self.solve();

        let xs = self.series.as_slice();
        self.integrals.clear();
        let mut total = O::zero();
        if !xs.is_empty() {
            self.integrals.push(total);
        }
        for (k, pair) in xs.windows(2).enumerate() {
            let dx = pair[1].x() - pair[0].x();
            let y = *pair[0].y() + *pair[1].y();
            let z = self.u[k] - self.u[k + 1];
            total = total + y * (0.5 * dx) + z * (dx * dx / 12.0);
            self.integrals.push(total);
        }
        Ok(())
    }

    fn try_evaluate(&self, x: f64) -> Result<Pdf<O>, InterpolationError> {
        let total = self.total_integral();
        Ok(match self.segment(x)? {
            Some(s) => Pdf::new(value(&s), slope(&s), partial_integral(&s), total),
            None => Pdf::new(self.single(), O::zero(), O::zero(), total),
        })
    }

    fn evaluate(&self, x: f64) -> Result<Pdf<O>, InterpolationError> {
        match self.try_evaluate(x) {
            Ok(r) => Ok(r),
            Err(e) => recover_integral(&self.supervisor, e, self.total_integral()),
        }
    }
}
