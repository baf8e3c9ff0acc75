//! Gauss rules from orthogonal-polynomial roots.
//!
//! Roots are seeded with the usual asymptotic guesses and polished by Newton
//! iteration on the three-term recurrence.
//!
//! ├ Legendre : `W(x) = 1` on `[-1, 1]`
//! ├ Laguerre : `W(x) = x^α·e^(-x)` on `[0, ∞)`
//! └ Hermite  : `W(x) = e^(-x²)` on `(-∞, ∞)`

use std::f64::consts::PI;

use log::debug;

use crate::quadrature::config::QuadratureCfg;
use crate::quadrature::errors::QuadratureError;
use crate::quadrature::roots::newton;
use crate::quadrature::rule::Quadrature;


/// Gauss-Legendre nodes `(z, w)` on `[-1, 1]`, ascending.
pub(crate) fn legendre_nodes(n: usize, eps: f64, max_iter: usize) -> Vec<(f64, f64)> {
    let nf = n as f64;
    let recurrence = |z: f64| {
        let (mut p1, mut p2) = (1.0, 0.0);
        for j in 0..n {
            let p3 = p2;
            p2 = p1;
            p1 = ((2 * j + 1) as f64 * z * p2 - j as f64 * p3) / (j + 1) as f64;
        }
        (p1, nf * (z * p1 - p2) / (z * z - 1.0), 0.0)
    };

    let mut nodes = Vec::with_capacity(n);
    for i in 0..(n + 1) / 2 {
        let z0 = (PI * (i as f64 + 0.75) / (nf + 0.5)).cos();
        let r = newton(&recurrence, z0, eps, max_iter);
        let z = r.root;
        let w = 2.0 / ((1.0 - z * z) * r.derivative * r.derivative);

        nodes.push((-z, w));
        if i != n - 1 - i {
            nodes.push((z, w));
        }
    }
    nodes.sort_by(|a, b| a.0.total_cmp(&b.0));
    nodes
}


/// Gauss-Laguerre nodes for `W(x) = x^alf·e^(-x)`, ascending.
fn laguerre_nodes(n: usize, alf: f64, eps: f64, max_iter: usize) -> Vec<(f64, f64)> {
    let nf = n as f64;
    let recurrence = |z: f64| {
        let (mut p1, mut p2) = (1.0, 0.0);
        for j in 0..n {
            let p3 = p2;
            p2 = p1;
            let jf = j as f64;
            p1 = ((2.0 * jf + 1.0 + alf - z) * p2 - (jf + alf) * p3) / (jf + 1.0);
        }
        (p1, (nf * p1 - (nf + alf) * p2) / z, p2)
    };
    let norm = (ln_gamma(alf + nf) - ln_gamma(nf)).exp();

    let mut roots: Vec<f64> = Vec::with_capacity(n);
    let mut nodes = Vec::with_capacity(n);
    let mut z = 0.0;
    for i in 0..n {
        z = match i {
            0 => (1.0 + alf) * (3.0 + 0.92 * alf) / (1.0 + 2.4 * nf + 1.8 * alf),
            1 => z + (15.0 + 6.25 * alf) / (1.0 + 0.9 * alf + 2.5 * nf),
            _ => {
                let ai = (i - 1) as f64;
                z + ((1.0 + 2.55 * ai) / (1.9 * ai) + 1.26 * ai * alf / (1.0 + 3.5 * ai))
                    * (z - roots[i - 2])
                    / (1.0 + 0.3 * alf)
            }
        };
        let r = newton(&recurrence, z, eps, max_iter);
        z = r.root;
        roots.push(z);
        nodes.push((z, -norm / (r.derivative * nf * r.aux)));
    }
    nodes
}


/// Gauss-Hermite nodes for `W(x) = e^(-x²)`, ascending.
fn hermite_nodes(n: usize, eps: f64, max_iter: usize) -> Vec<(f64, f64)> {
    let nf = n as f64;
    let pim4 = PI.powf(-0.25);
    let recurrence = |z: f64| {
        let (mut p1, mut p2) = (pim4, 0.0);
        for j in 0..n {
            let p3 = p2;
            p2 = p1;
            let jf = j as f64;
            p1 = z * (2.0 / (jf + 1.0)).sqrt() * p2 - (jf / (jf + 1.0)).sqrt() * p3;
        }
        (p1, (2.0 * nf).sqrt() * p2, 0.0)
    };

    // positive roots, largest first
    let mut roots: Vec<f64> = Vec::with_capacity((n + 1) / 2);
    let mut nodes = Vec::with_capacity(n);
    let mut z = 0.0;
    for i in 0..(n + 1) / 2 {
        z = match i {
            0 => (2.0 * nf + 1.0).sqrt() - 1.85575 * (2.0 * nf + 1.0).powf(-1.0 / 6.0),
            1 => z - 1.14 * nf.powf(0.426) / z,
            2 => 1.86 * z - 0.86 * roots[0],
            3 => 1.91 * z - 0.91 * roots[1],
            _ => 2.0 * z - roots[i - 2],
        };
        let r = newton(&recurrence, z, eps, max_iter);
        z = r.root;
        roots.push(z);

        let w = 2.0 / (r.derivative * r.derivative);
        nodes.push((z, w));
        if i != n - 1 - i {
            nodes.push((-z, w));
        }
    }
    nodes.sort_by(|a, b| a.0.total_cmp(&b.0));
    nodes
}


/// `ln Γ(x)` for `x > 0` (Lanczos series).
pub(crate) fn ln_gamma(x: f64) -> f64 {
    const COF: [f64; 6] = [
        76.180_091_729_471_46,
        -86.505_320_329_416_77,
        24.014_098_240_830_91,
        -1.231_739_572_450_155,
        0.120_865_097_386_617_9e-2,
        -0.539_523_938_495_3e-5,
    ];
    let mut tmp = x + 5.5;
    tmp -= (x + 0.5) * tmp.ln();
    let mut ser = 1.000_000_000_190_015;
    let mut y = x;
    for c in COF {
        y += 1.0;
        ser += c / y;
    }
    -tmp + (2.506_628_274_631_000_5 * ser / x).ln()
}


fn check_points(n: usize) -> Result<(), QuadratureError> {
    if n == 0 {
        return Err(QuadratureError::InvalidPoints { got: n, need: 1 });
    }
    Ok(())
}

impl Quadrature {
    /// `n`-point Gauss-Legendre rule on `[-1, 1]`; exact for polynomials of
    /// degree `2n - 1`.
    pub fn gauss_legendre(n: usize, cfg: &QuadratureCfg) -> Result<Self, QuadratureError> {
        check_points(n)?;
        debug!("gauss-legendre rule with {n} nodes");
        Ok(Self::from_nodes(legendre_nodes(n, cfg.eps(), cfg.max_iter())))
    }

    /// `n`-point Gauss-Laguerre rule for `W(x) = x^alf·e^(-x)`, `alf > -1`.
    pub fn gauss_laguerre(n: usize, alf: f64, cfg: &QuadratureCfg) -> Result<Self, QuadratureError> {
        check_points(n)?;
        if !(alf > -1.0) || !alf.is_finite() {
            return Err(QuadratureError::InvalidParameter { name: "alf", got: alf });
        }
        debug!("gauss-laguerre rule with {n} nodes, alf = {alf}");
        Ok(Self::from_nodes(laguerre_nodes(n, alf, cfg.eps(), cfg.max_iter())))
    }

    /// `n`-point Gauss-Hermite rule for `W(x) = e^(-x²)`.
    pub fn gauss_hermite(n: usize, cfg: &QuadratureCfg) -> Result<Self, QuadratureError> {
        check_points(n)?;
        debug!("gauss-hermite rule with {n} nodes");
        Ok(Self::from_nodes(hermite_nodes(n, cfg.eps(), cfg.max_iter())))
    }
}
