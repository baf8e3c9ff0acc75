//! Natural and clamped cubic spline
//!
//! `compile` solves for the second derivatives `u[i]` at every knot; the
//! spline on `[x[i], x[i+1]]` with `h = x[i+1] - x[i]`, `a = (x[i+1] - x)/h`,
//! `b = 1 - a` is then
//!
//! ```text
//! f(x) = a*y[i] + b*y[i+1] - a*b*((a+1)*u[i] + (b+1)*u[i+1]) * h²/6
//! ```
//!
//! [`SplineBounds`] optionally pins the first derivative at either end
//! (clamped); an unpinned end has zero curvature (natural).

use std::marker::PhantomData;

use log::debug;

use crate::collection::Series;
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::bracket::{locate, Bracket};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::result::{Derivative, Hesse, Ordinate, Pdf};
use crate::interpolation::spline::helpers::second_derivatives;
use crate::interpolation::supervisor::Supervisor;
use crate::interpolation::traits::{
    recover_integral, AxisFunction, Mode, Plain, WithDerivative, WithHesse, WithIntegral,
};


/// Optional first derivatives at the two ends of a spline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SplineBounds<O> {
    fp_at_x_min: Option<O>,
    fp_at_x_max: Option<O>,
}

impl<O> Default for SplineBounds<O> {
    fn default() -> Self {
        Self { fp_at_x_min: None, fp_at_x_max: None }
    }
}

impl<O: Copy> SplineBounds<O> {
    pub fn natural() -> Self {
        Self::default()
    }

    pub fn clamped(fp_at_x_min: O, fp_at_x_max: O) -> Self {
        Self { fp_at_x_min: Some(fp_at_x_min), fp_at_x_max: Some(fp_at_x_max) }
    }

    #[must_use]
    pub fn set_fp_at_x_min(mut self, fp: O) -> Self {
        self.fp_at_x_min = Some(fp);
        self
    }

    #[must_use]
    pub fn set_fp_at_x_max(mut self, fp: O) -> Self {
        self.fp_at_x_max = Some(fp);
        self
    }

    pub fn fp_at_x_min(&self) -> Option<O> {
        self.fp_at_x_min
    }

    pub fn fp_at_x_max(&self) -> Option<O> {
        self.fp_at_x_max
    }
}


#[derive(Debug, Clone)]
pub struct SplineFunction<O: Ordinate, M: Mode = Plain> {
    series: Series<O>,
    bounds: SplineBounds<O>,
    u: Vec<O>,
    integrals: Vec<O>,
    supervisor: Supervisor<M::Output<O>>,
    mode: PhantomData<M>,
}

impl<O: Ordinate, M: Mode> Default for SplineFunction<O, M> {
    fn default() -> Self {
        Self {
            series: Series::new(),
            bounds: SplineBounds::default(),
            u: Vec::new(),
            integrals: Vec::new(),
            supervisor: Supervisor::default(),
            mode: PhantomData,
        }
    }
}

/// Knot pair and weights of a query inside the spline domain.
struct Segment<O> {
    yp: O,
    yq: O,
    up: O,
    uq: O,
    ip: O,
    dx: f64,
    a: f64,
    b: f64,
}

impl<O: Ordinate, M: Mode> SplineFunction<O, M> {
    pub fn bounds(&self) -> &SplineBounds<O> {
        &self.bounds
    }

    /// Boundary slopes used by the next `compile`.
    pub fn set_bounds(&mut self, bounds: SplineBounds<O>) {
        self.bounds = bounds;
    }

    /// Second derivatives at the knots, valid after `compile`.
    pub fn second_derivatives(&self) -> &[O] {
        &self.u
    }

    fn solve(&mut self) {
        self.u = second_derivatives(self.series.as_slice(), &self.bounds);
        debug!("spline compiled over {} knots", self.u.len());
    }

    fn segment(&self, x: f64) -> Result<Option<Segment<O>>, InterpolationError> {
        let q = match locate(&self.series, x)? {
            Bracket::Single => return Ok(None),
            Bracket::Upper(q) => q,
        };
        let xs = self.series.as_slice();
        let (p_el, q_el) = (&xs[q - 1], &xs[q]);
        let dx = q_el.x() - p_el.x();
        let a = (q_el.x() - x) / dx;
        let at = |v: &Vec<O>, i: usize| v.get(i).copied().unwrap_or_else(O::zero);
        Ok(Some(Segment {
            yp: *p_el.y(),
            yq: *q_el.y(),
            up: at(&self.u, q - 1),
            uq: at(&self.u, q),
            ip: at(&self.integrals, q - 1),
            dx,
            a,
            b: 1.0 - a,
        }))
    }

    fn single(&self) -> O {
        self.series.front().map(|e| *e.y()).unwrap_or_else(O::zero)
    }
}

impl<O: Ordinate> SplineFunction<O, WithIntegral> {
    pub fn total_integral(&self) -> O {
        self.integrals.last().copied().unwrap_or_else(O::zero)
    }
}

#[inline]
fn value<O: Ordinate>(s: &Segment<O>) -> O {
    let (a, b, dx) = (s.a, s.b, s.dx);
    s.yp * a + s.yq * b - (s.up * (a + 1.0) + s.uq * (b + 1.0)) * (a * b * dx * dx / 6.0)
}

#[inline]
fn slope<O: Ordinate>(s: &Segment<O>) -> O {
    let (a, b, dx) = (s.a, s.b, s.dx);
    (s.yq - s.yp + (s.up * (1.0 - 3.0 * a * a) - s.uq * (1.0 - 3.0 * b * b)) * (dx * dx / 6.0)) / dx
}

#[inline]
fn curvature<O: Ordinate>(s: &Segment<O>) -> O {
    s.up * s.a + s.uq * s.b
}

/// Integral from the lower knot of the segment up to the query.
#[inline]
fn partial_integral<O: Ordinate>(s: &Segment<O>) -> O {
    let (a, b, dx) = (s.a, s.b, s.dx);
    let c = dx * dx / 6.0;
    s.ip + (s.yp - s.up * (0.5 * c)) * (0.5 * dx)
        - ((s.yp * (a * a) - s.yq * (b * b))
            + (s.up * (a * a * (0.5 * a * a - 1.0)) - s.uq * (b * b * (0.5 * b * b - 1.0))) * c)
            * (0.5 * dx)
}

macro_rules! impl_spline_common {
    () => {
        fn algorithm(&self) -> Algorithm {
            Algorithm::Spline
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

impl<O: Ordinate> AxisFunction for SplineFunction<O, Plain> {
    type Ordinate = O;
    type Output = O;

    impl_spline_common!();

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

impl<O: Ordinate> AxisFunction for SplineFunction<O, WithDerivative> {
    type Ordinate = O;
    type Output = Derivative<O>;

    impl_spline_common!();

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

impl<O: Ordinate> AxisFunction for SplineFunction<O, WithHesse> {
    type Ordinate = O;
    type Output = Hesse<O>;

    impl_spline_common!();

    fn compile(&mut self) -> Result<(), InterpolationError> {
        self.solve();
        Ok(())
    }

    fn try_evaluate(&self, x: f64) -> Result<Hesse<O>, InterpolationError> {
        Ok(match self.segment(x)? {
            Some(s) => Hesse::new(value(&s), slope(&s), curvature(&s)),
            None => Hesse::new(self.single(), O::zero(), O::zero()),
        })
    }
}

impl<O: Ordinate> AxisFunction for SplineFunction<O, WithIntegral> {
    type Ordinate = O;
    type Output = Pdf<O>;

    impl_spline_common!();

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
            let z = self.u[k] + self.u[k + 1];
            total = total + y * (0.5 * dx) - z * (0.25 * dx * dx * dx / 6.0);
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
