use crate::collection::Element;
use crate::interpolation::result::Ordinate;
use crate::interpolation::spline::cubic::SplineBounds;


/// Second derivatives of the cubic spline through `xs`.
///
/// Tridiagonal solve by forward elimination and back substitution. Without a
/// boundary slope the second derivative at that end is zero (natural spline).
/// Fewer than three knots give a straight line, all second derivatives zero.
pub(crate) fn second_derivatives<O: Ordinate>(xs: &[Element<O>], bounds: &SplineBounds<O>) -> Vec<O> {
    let n = xs.len();
    let mut u = vec![O::zero(); n];
    if n < 3 {
        return u;
    }

    let x = |i: usize| xs[i].x();
    let y = |i: usize| *xs[i].y();

    let mut buffer = vec![0.0; n];

    if let Some(fp) = bounds.fp_at_x_min() {
        let dx = x(1) - x(0);
        let dy = y(1) - y(0);
        buffer[0] = -0.5;
        u[0] = (dy / dx - fp) * (3.0 / dx);
    }

    for i in 1..n - 1 {
        let d12 = x(i) - x(i - 1);
        let d23 = x(i + 1) - x(i);
        let d13 = x(i + 1) - x(i - 1);

        let sig = d12 / d13;
        let h = sig * buffer[i - 1] + 2.0;
        buffer[i] = (sig - 1.0) / h;

        let du = (y(i + 1) - y(i)) / d23 - (y(i) - y(i - 1)) / d12;
        u[i] = (du * (6.0 / d13) - u[i - 1] * sig) / h;
    }

    if let Some(fp) = bounds.fp_at_x_max() {
        let dx = x(n - 1) - x(n - 2);
        let dy = y(n - 1) - y(n - 2);
        let un = (fp - dy / dx) * (3.0 / dx);
        u[n - 1] = (un - u[n - 2] * 0.5) / (0.5 * buffer[n - 2] + 1.0);
    } else {
        u[n - 1] = O::zero();
    }

    for i in (0..n - 1).rev() {
        u[i] = u[i] + u[i + 1] * buffer[i];
    }

    u
}


// cubic Hermite basis on t ∈ [0, 1]
#[inline]
pub(crate) fn h00(t: f64) -> f64 { (1.0 + 2.0 * t) * (1.0 - t) * (1.0 - t) }
#[inline]
pub(crate) fn h10(t: f64) -> f64 { t * (1.0 - t) * (1.0 - t) }
#[inline]
pub(crate) fn h01(t: f64) -> f64 { t * t * (3.0 - 2.0 * t) }
#[inline]
pub(crate) fn h11(t: f64) -> f64 { t * t * (t - 1.0) }

// derivatives
#[inline]
pub(crate) fn h00p(t: f64) -> f64 { 6.0 * t * (t - 1.0) }
#[inline]
pub(crate) fn h10p(t: f64) -> f64 { t * (3.0 * t - 4.0) + 1.0 }
#[inline]
pub(crate) fn h01p(t: f64) -> f64 { 6.0 * t * (1.0 - t) }
#[inline]
pub(crate) fn h11p(t: f64) -> f64 { t * (3.0 * t - 2.0) }

// antiderivatives, zero at t = 0
#[inline]
pub(crate) fn big_h00(t: f64) -> f64 { t * (t * t * (0.5 * t - 1.0) + 1.0) }
#[inline]
pub(crate) fn big_h10(t: f64) -> f64 { t * t * (t * (0.25 * t - 2.0 / 3.0) + 0.5) }
#[inline]
pub(crate) fn big_h01(t: f64) -> f64 { t * t * t * (1.0 - 0.5 * t) }
#[inline]
pub(crate) fn big_h11(t: f64) -> f64 { t * t * t * (0.25 * t - 1.0 / 3.0) }
