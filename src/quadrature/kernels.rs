//! Importance-sampled rules over `[-1, 1]` for angular distributions.
//!
//! Each rule places its nodes at equal-probability steps of the named density
//! `W`, with weights `1/W` scaled to the step, so that `Σ w_i·f(x_i)`
//! approximates the plain integral `∫ f(x) dx` while sampling densely where
//! `W` peaks.
//!
//! ├ Henyey-Greenstein : `W(x) ∝ (1 + g² - 2gx)^a`, optionally on `[x_min, x_max]`
//! ├ Rayleigh          : `W(x) ∝ 1 + g·x²`
//! ├ cotangent         : `W(x) ∝ 1/√(1 - x²)` mirrored onto both signs
//! └ bitangent         : cotangent for `x > 0`, uniform below
//!
//! [`Quadrature::from_integral`] builds the same kind of rule from any
//! density given its cumulative integral.

use log::debug;

use crate::quadrature::config::QuadratureCfg;
use crate::quadrature::errors::QuadratureError;
use crate::quadrature::roots::bisect;
use crate::quadrature::rule::Quadrature;


fn check_asymmetry(g: f64) -> Result<(), QuadratureError> {
    if !(g > 0.0 && g < 1.0) {
        return Err(QuadratureError::InvalidParameter { name: "g", got: g });
    }
    Ok(())
}

fn check_points(n: usize, need: usize) -> Result<(), QuadratureError> {
    if n < need {
        return Err(QuadratureError::InvalidPoints { got: n, need });
    }
    Ok(())
}

/// Steps `y` down from `y_max` to `y_min` in `n + 1` equal slices of the
/// cumulative Henyey-Greenstein integral and maps each slice centre back to `x`.
fn henyey_greenstein_nodes(n: usize, g: f64, a: f64, y_min: f64, y_max: f64) -> Vec<(f64, f64)> {
    let b = -2.0 * g * (a + 1.0);
    let ai = 1.0 / (a + 1.0);
    let dy = (y_max - y_min) / (n + 1) as f64;

    let mut nodes = Vec::with_capacity(n + 1);
    let mut y = y_max - 0.5 * dy;
    while y > y_min {
        let v = y * b;
        let w = v.powf(ai);
        let x = (1.0 + g * g - w) / (2.0 * g);
        nodes.push((x, v.powf(-a * ai) * dy));
        y -= dy;
    }
    nodes
}

impl Quadrature {
    /// Henyey-Greenstein rule, `W(x) = (1 + g² - 2gx)^a` on `[-1, 1]`.
    ///
    /// `a = -1` selects the logarithmic form of the cumulative integral.
    pub fn henyey_greenstein(n: usize, g: f64, a: f64) -> Result<Self, QuadratureError> {
        check_points(n, 1)?;
        check_asymmetry(g)?;
        if a == -1.0 {
            return Ok(Self::henyey_greenstein_log(n, g));
        }
        if !a.is_finite() {
            return Err(QuadratureError::InvalidParameter { name: "a", got: a });
        }

        let b = -2.0 * g * (a + 1.0);
        let y_min = (1.0 + g).powf(2.0 * (a + 1.0)) / b;
        let y_max = (1.0 - g).powf(2.0 * (a + 1.0)) / b;
        let nodes = henyey_greenstein_nodes(n, g, a, y_min.min(y_max), y_min.max(y_max));
        debug!("henyey-greenstein rule g = {g}, a = {a}: {} nodes", nodes.len());
        Ok(Self::from_nodes(nodes))
    }

    /// Henyey-Greenstein rule restricted to `[x_min, x_max] ⊂ [-1, 1]`.
    pub fn henyey_greenstein_range(
        n: usize,
        g: f64,
        a: f64,
        x_min: f64,
        x_max: f64,
    ) -> Result<Self, QuadratureError> {
        check_points(n, 1)?;
        check_asymmetry(g)?;
        if !a.is_finite() || a == -1.0 {
            return Err(QuadratureError::InvalidParameter { name: "a", got: a });
        }
        if !(-1.0..=1.0).contains(&x_min) || !(x_min < x_max && x_max <= 1.0) {
            return Err(QuadratureError::InvalidParameter { name: "x_min", got: x_min });
        }

        let b = -2.0 * g * (a + 1.0);
        let y_at = |x: f64| (1.0 + g * g - 2.0 * g * x).powf(a + 1.0) / b;
        let (y0, y1) = (y_at(x_min), y_at(x_max));
        let nodes = henyey_greenstein_nodes(n, g, a, y0.min(y1), y0.max(y1));
        debug!("henyey-greenstein rule on [{x_min}, {x_max}]: {} nodes", nodes.len());
        Ok(Self::from_nodes(nodes))
    }

    fn henyey_greenstein_log(n: usize, g: f64) -> Self {
        let dy = 1.0 / (n + 1) as f64;
        let gi = ((1.0 + g) / (1.0 - g)).ln() / g;
        let lo = (1.0 + g * g + 2.0 * g).ln();

        let mut nodes = Vec::with_capacity(n + 1);
        let mut y = 1.0 - 0.5 * dy;
        while y > 0.0 {
            let w = (lo - 2.0 * g * gi * y).exp();
            let x = (1.0 + g * g - w) / (2.0 * g);
            nodes.push((x, w * gi * dy));
            y -= dy;
        }
        Self::from_nodes(nodes)
    }

    /// Rayleigh rule, `W(x) = 1 + g·x²` on `[-1, 1]`, `g > 0`.
    pub fn rayleigh(n: usize, g: f64) -> Result<Self, QuadratureError> {
        check_points(n, 1)?;
        if !(g > 0.0) || !g.is_finite() {
            return Err(QuadratureError::InvalidParameter { name: "g", got: g });
        }

        let dy = 1.0 / (n + 1) as f64;
        let gi = 3.0 / g + 1.0;
        let p = 1.0 / g;

        let mut nodes = Vec::with_capacity(n + 1);
        let mut y = 0.5 * dy;
        while y < 1.0 {
            let q = 0.5 * gi - gi * y;
            let b = (q * q + p * p * p).sqrt();
            let u = (b - q).cbrt();
            let v = (b + q).cbrt();
            let x = u - v;
            let dx = (u + v) / (3.0 * b);
            nodes.push((x, dx * gi * dy));
            y += dy;
        }
        Ok(Self::from_nodes(nodes))
    }

    /// Cotangent rule, `W(x) = 1/√(1 - x²)`, nodes mirrored about zero.
    pub fn cotangent(n: usize) -> Result<Self, QuadratureError> {
        check_points(n, 2)?;
        let ds = 1.0 / (n / 2) as f64;

        let mut nodes = Vec::with_capacity(n);
        let mut sb = 0.5 * ds;
        while sb < 1.0 {
            let cb = ((1.0 + sb) * (1.0 - sb)).sqrt();
            let dc = ds * sb / cb;
            nodes.push((cb, dc));
            nodes.push((-cb, dc));
            sb += ds;
        }
        Ok(Self::from_nodes(nodes))
    }

    /// Cotangent nodes on `(0, 1)`, uniform nodes below the last of them.
    pub fn bitangent(n: usize) -> Result<Self, QuadratureError> {
        check_points(n, 2)?;
        let half = (n / 2) as f64;
        let ds = 1.0 / half;

        let mut nodes = Vec::with_capacity(n);
        let mut sb = 0.5 * ds;
        let mut cb = 1.0;
        while sb < 1.0 {
            cb = ((1.0 + sb) * (1.0 - sb)).sqrt();
            nodes.push((cb, ds * sb / cb));
            sb += ds;
        }

        let dc = (cb + 1.0) / half;
        cb -= 0.5 * dc;
        while cb > -1.0 {
            nodes.push((cb, dc));
            cb -= dc;
        }
        Ok(Self::from_nodes(nodes))
    }

    /// Rule with `n` nodes at equal-probability slices of a density `W` on
    /// `[x_min, x_max]`.
    ///
    /// `integral(a, b)` is `∫_a^b W`, `density(x)` is `W(x)`. Each slice
    /// boundary is found by bisection on the cumulative integral; the node sits
    /// at the slice midpoint with weight `slice / W(midpoint)`.
    pub fn from_integral<I, D>(
        x_min: f64,
        x_max: f64,
        n: usize,
        integral: I,
        density: D,
        cfg: &QuadratureCfg,
    ) -> Result<Self, QuadratureError>
    where
        I: Fn(f64, f64) -> f64,
        D: Fn(f64) -> f64,
    {
        check_points(n, 1)?;
        if !(x_min < x_max) {
            return Err(QuadratureError::InvalidParameter { name: "x_max", got: x_max });
        }

        let slice = integral(x_min, x_max) / n as f64;
        let mut nodes = Vec::with_capacity(n);
        let mut lo = x_min;
        for _ in 0..n {
            let hi = bisect(|x| integral(lo, x), lo, x_max, slice, cfg.eps(), cfg.max_iter());
            let x = 0.5 * (lo + hi);
            nodes.push((x, slice / density(x)));
            lo = hi;
        }
        debug!("rule from integral on [{x_min}, {x_max}]: {n} nodes");
        Ok(Self::from_nodes(nodes))
    }
}
