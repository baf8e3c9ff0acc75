//! Root polishing for quadrature nodes.
//!
//! ├ [`newton`] : Newton iteration on an orthogonal-polynomial recurrence
//! └ [`bisect`] : bisection on a monotone cumulative integral

use log::warn;


/// Outcome of a Newton polish.
///
/// `derivative` and `aux` come from the last recurrence evaluation, one step
/// before `root`; node weights are formed from them.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Polish {
    pub root: f64,
    pub derivative: f64,
    pub aux: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Iterates `z ← z - p(z)/p'(z)` until `|Δz| < eps`.
///
/// `eval` returns `(p(z), p'(z), aux)`. Hitting `max_iter` or a vanishing
/// derivative stops the iteration with `converged == false`.
pub(crate) fn newton<F>(mut eval: F, z0: f64, eps: f64, max_iter: usize) -> Polish
where
    F: FnMut(f64) -> (f64, f64, f64),
{
    let mut z = z0;
    let mut derivative = f64::NAN;
    let mut aux = f64::NAN;

    for iter in 1..=max_iter {
        let (p, dp, a) = eval(z);
        derivative = dp;
        aux = a;

        let step = p / dp;
        if !step.is_finite() {
            warn!("newton polish stopped at z = {z}: p'(z) = {dp}");
            return Polish { root: z, derivative, aux, iterations: iter, converged: false };
        }

        let z1 = z;
        z = z1 - step;
        if (z - z1).abs() < eps {
            return Polish { root: z, derivative, aux, iterations: iter, converged: true };
        }
    }

    warn!("newton polish hit max_iter = {max_iter} at z = {z}");
    Polish { root: z, derivative, aux, iterations: max_iter, converged: false }
}


/// Finds `x ∈ [lo, hi]` with `g(x) ≈ target` for non-decreasing `g`.
///
/// Stops when `|target - g(x)| < eps·|target|` or the bracket has shrunk below
/// `eps·(hi - lo)`.
pub(crate) fn bisect<G>(mut g: G, lo: f64, hi: f64, target: f64, eps: f64, max_iter: usize) -> f64
where
    G: FnMut(f64) -> f64,
{
    let width = hi - lo;
    let (mut a, mut b) = (lo, hi);
    let mut x = 0.5 * (a + b);

    for _ in 0..max_iter {
        x = 0.5 * (a + b);
        let v = g(x);

        if (target - v).abs() < eps * target.abs() || (b - a).abs() < eps * width.abs() {
            return x;
        }
        if v < target {
            a = x;
        } else {
            b = x;
        }
    }

    warn!("bisection hit max_iter = {max_iter} at x = {x}");
    x
}
