use approx::assert_relative_eq;

use multinterp::collection::Series;
use multinterp::interpolation::config::AxisCfg;
use multinterp::interpolation::errors::InterpolationError;
use multinterp::interpolation::supervisor::Supervisor;
use multinterp::interpolation::{
    Algorithm, AxisFunction, PolintFunction, WithDerivative, WithIntegral,
};

type InterpResult = Result<(), InterpolationError>;

fn cubic(x: f64) -> f64 {
    1.0 - 2.0 * x + 0.5 * x * x * x
}

fn cubic_prime(x: f64) -> f64 {
    -2.0 + 1.5 * x * x
}

fn knots() -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..7).map(|i| i as f64).collect();
    let y = x.iter().map(|&x| cubic(x)).collect();
    (x, y)
}

#[test]
fn cubic_is_reproduced() -> InterpResult {
    let (x, y) = knots();
    let f: PolintFunction<3, f64> = AxisCfg::new().set_x(&x)?.set_y(&y)?.build()?;

    for q in [0.0, 0.3, 2.3, 4.5, 5.9, 6.0] {
        assert_relative_eq!(f.evaluate(q)?, cubic(q), epsilon = 1e-10);
    }
    Ok(())
}

#[test]
fn derivative_mode() -> InterpResult {
    let (x, y) = knots();
    let f: PolintFunction<3, f64, WithDerivative> = AxisCfg::new().set_x(&x)?.set_y(&y)?.build()?;

    for q in [0.7, 3.2, 5.5] {
        let r = f.evaluate(q)?;
        assert_relative_eq!(r.f, cubic(q), epsilon = 1e-10);
        assert_relative_eq!(r.fp, cubic_prime(q), epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn polynome_carries_value_and_slope() -> InterpResult {
    let (x, y) = knots();
    let f: PolintFunction<3, f64> = AxisCfg::new().set_x(&x)?.set_y(&y)?.build()?;

    let p = f.polynome::<2>(2.5)?;
    assert_relative_eq!(p.y[0], cubic(2.5), epsilon = 1e-10);
    assert_relative_eq!(p.y[1], cubic_prime(2.5), epsilon = 1e-9);
    Ok(())
}

#[test]
fn low_degrees_match_nearest_and_linear() -> InterpResult {
    let series: Series<f64> = vec![(0.0, 0.0), (2.0, 10.0), (4.0, 0.0)].into_iter().collect();

    assert_eq!(Algorithm::Polint(0).interpolate(series.clone(), 1.0)?, 0.0);
    assert_eq!(Algorithm::Polint(0).interpolate(series.clone(), 1.5)?, 10.0);
    assert_relative_eq!(Algorithm::Polint(1).interpolate(series.clone(), 3.0)?, 5.0);
    assert_relative_eq!(
        Algorithm::Polint(1).interpolate(series.clone(), 3.0)?,
        Algorithm::Linear.interpolate(series, 3.0)?
    );
    Ok(())
}

#[test]
fn degree_beyond_series_uses_all_samples() -> InterpResult {
    let series: Series<f64> = vec![(0.0, 1.0), (1.0, 2.0), (2.0, 5.0)].into_iter().collect();
    // x² + 1 through three samples
    assert_relative_eq!(Algorithm::Polint(6).interpolate(series, 1.5)?, 3.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn integral_of_quadratic() -> InterpResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y: Vec<f64> = x.iter().map(|x| x * x).collect();
    let f: PolintFunction<2, f64, WithIntegral> = AxisCfg::new().set_x(&x)?.set_y(&y)?.build()?;

    assert_relative_eq!(f.total_integral(), 64.0 / 3.0, epsilon = 1e-10);

    let r = f.evaluate(3.0)?;
    assert_relative_eq!(r.f, 9.0, epsilon = 1e-12);
    assert_relative_eq!(r.v, 9.0, epsilon = 1e-10);
    assert_relative_eq!(r.total, 64.0 / 3.0, epsilon = 1e-10);
    Ok(())
}

#[test]
fn integral_saturates_out_of_range() -> InterpResult {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, 1.0, 1.0];
    let mut f: PolintFunction<1, f64, WithIntegral> = AxisCfg::new().set_x(&x)?.set_y(&y)?.build()?;
    f.set_supervisor(Supervisor::zero());

    let below = f.evaluate(-1.0)?;
    assert_eq!(below.f, 0.0);
    assert_eq!(below.v, 0.0);
    assert_relative_eq!(below.total, 2.0, epsilon = 1e-12);

    let above = f.evaluate(3.0)?;
    assert_relative_eq!(above.v, 2.0, epsilon = 1e-12);
    assert_relative_eq!(above.total, 2.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn integral_needs_compile_after_put() -> InterpResult {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, 1.0, 1.0];
    let mut f: PolintFunction<2, f64, WithIntegral> = AxisCfg::new().set_x(&x)?.set_y(&y)?.build()?;

    f.put(3.0, 1.0);
    assert!(matches!(
        f.try_evaluate(2.5),
        Err(InterpolationError::InsufficientData { got: 3, need: 4 })
    ));

    f.compile()?;
    assert_relative_eq!(f.evaluate(2.5)?.v, 2.5, epsilon = 1e-10);

    let raw: PolintFunction<2, f64, WithIntegral> = PolintFunction::from_series(
        vec![(0.0, 1.0), (1.0, 1.0)].into_iter().collect::<Series<f64>>(),
    );
    assert!(matches!(raw.try_evaluate(0.5), Err(InterpolationError::InsufficientData { .. })));
    Ok(())
}
