//! Gaussian smearing of a sampled function.

use std::f64::consts::{PI, SQRT_2};

use log::debug;

use crate::collection::Series;
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::result::Ordinate;
use crate::interpolation::traits::AxisFunction;
use crate::quadrature::errors::QuadratureError;
use crate::quadrature::rule::Quadrature;


/// Convolves the function sampled by `series` with a Gaussian of width `sigma`.
///
/// `engine` must be a Gauss-Hermite rule; each output sample is
/// `Σ w_j/√π · f(x + √2·σ·u_j)`, where `f` interpolates `series` with
/// `algorithm` and contributes zero outside its domain. The output keeps the
/// input abscissas and gains one more at `σ` beyond either end.
pub fn gaussian_blur<O: Ordinate>(
    series: &Series<O>,
    algorithm: Algorithm,
    sigma: f64,
    engine: &Quadrature,
) -> Result<Series<O>, QuadratureError> {
    if !(sigma > 0.0) || !sigma.is_finite() {
        return Err(QuadratureError::InvalidParameter { name: "sigma", got: sigma });
    }
    let (x_min, x_max) = (series.x_min()?, series.x_max()?);
    let f = algorithm.build(series.clone())?;
    let norm = 1.0 / PI.sqrt();

    let abscissas = std::iter::once(x_min - sigma)
        .chain(series.iter().map(|e| e.x()))
        .chain(std::iter::once(x_max + sigma));

    let mut out = Series::with_metric(*series.metric());
    for x in abscissas {
        let mut y = O::zero();
        for (u, w) in engine.iter() {
            match f.try_evaluate(x + SQRT_2 * sigma * u) {
                Ok(v) => y = y + v * (w * norm),
                Err(InterpolationError::ValueOutOfRange { .. }) => {}
                Err(e) => return Err(e.into()),
            }
        }
        out.put(x, y);
    }

    debug!("blurred {} samples with sigma = {sigma} ({algorithm})", series.len());
    Ok(out)
}

/// Replaces the samples of `function` by their Gaussian blur and recompiles.
pub fn blur_function<F: AxisFunction>(
    function: &mut F,
    sigma: f64,
    engine: &Quadrature,
) -> Result<(), QuadratureError> {
    let blurred = gaussian_blur(function.series(), function.algorithm(), sigma, engine)?;
    *function.series_mut() = blurred;
    function.compile()?;
    Ok(())
}
