use approx::assert_relative_eq;

use multinterp::interpolation::config::HermiteCfg;
use multinterp::interpolation::errors::InterpolationError;
use multinterp::interpolation::{AxisFunction, Plain, WithDerivative, WithIntegral};

type InterpResult = Result<(), InterpolationError>;

#[test]
fn monotone_data_stays_monotone() -> InterpResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 0.0, 1.0, 1.0, 5.0];
    let f = HermiteCfg::new().set_x(&x)?.set_y(&y)?.build::<Plain>()?;

    let mut prev = f.evaluate(0.0)?;
    for k in 1..=400 {
        let v = f.evaluate(0.01 * k as f64)?;
        assert!(v >= prev - 1e-12, "decrease at {}: {prev} -> {v}", 0.01 * k as f64);
        prev = v;
    }
    // flat plateaus stay flat
    assert_relative_eq!(f.evaluate(0.5)?, 0.0, epsilon = 1e-12);
    assert_relative_eq!(f.evaluate(2.5)?, 1.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn unlimited_slopes_may_overshoot() -> InterpResult {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [0.0, 0.0, 1.0, 1.0];
    let f = HermiteCfg::new().set_x(&x)?.set_y(&y)?.set_monotone(false).build::<Plain>()?;

    assert!(!f.is_monotone());
    assert!(f.evaluate(0.5)? < 0.0);
    Ok(())
}

#[test]
fn hits_knots() -> InterpResult {
    let x = [0.0, 0.5, 1.5, 2.0, 3.5];
    let y = [1.0, -2.0, 0.5, 3.0, 2.0];
    let f = HermiteCfg::new().set_x(&x)?.set_y(&y)?.build::<WithDerivative>()?;

    for (&xi, &yi) in x.iter().zip(&y) {
        assert_relative_eq!(f.evaluate(xi)?.f, yi, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn linear_data_is_exact() -> InterpResult {
    let x = [0.0, 1.0, 3.0, 4.0];
    let y: Vec<f64> = x.iter().map(|x| 3.0 * x + 1.0).collect();
    let f = HermiteCfg::new().set_x(&x)?.set_y(&y)?.build::<WithIntegral>()?;

    let r = f.evaluate(2.0)?;
    assert_relative_eq!(r.f, 7.0, epsilon = 1e-12);
    assert_relative_eq!(r.fp, 3.0, epsilon = 1e-12);
    assert_relative_eq!(r.v, 8.0, epsilon = 1e-12);
    assert_relative_eq!(f.total_integral(), 28.0, epsilon = 1e-12);
    Ok(())
}
