use std::cmp::Ordering;

use multinterp::interpolation::config::AxisCfg;
use multinterp::interpolation::errors::InterpolationError;
use multinterp::interpolation::supervisor::{Policy, Supervisor};
use multinterp::interpolation::{AxisFunction, LinearFunction};

type InterpResult = Result<(), InterpolationError>;

fn ramp() -> Result<LinearFunction<f64>, InterpolationError> {
    let x = [0.0, 1.0];
    let y = [0.0, 1.0];
    AxisCfg::new().set_x(&x)?.set_y(&y)?.build()
}

#[test]
fn default_rethrows() -> InterpResult {
    let f = ramp()?;
    assert!(matches!(f.supervisor().policy(), Policy::Rethrow));
    assert!(f.evaluate(2.0).is_err());
    Ok(())
}

#[test]
fn fallback_replaces_errors() -> InterpResult {
    let mut f = ramp()?;
    f.set_supervisor(Supervisor::fallback(-7.0));

    assert_eq!(f.evaluate(2.0)?, -7.0);
    assert_eq!(f.evaluate(0.5)?, 0.5);
    assert!(f.try_evaluate(2.0).is_err());
    Ok(())
}

#[test]
fn custom_policy_sees_the_error() -> InterpResult {
    let mut f = ramp()?;
    f.set_supervisor(Supervisor::from_fn(|e: &InterpolationError| match e.out_of_range_side() {
        Some(Ordering::Less) => Some(0.0),
        Some(_) => Some(1.0),
        None => None,
    }));

    assert_eq!(f.evaluate(-3.0)?, 0.0);
    assert_eq!(f.evaluate(3.0)?, 1.0);
    Ok(())
}

#[test]
fn clones_share_one_policy() -> InterpResult {
    let supervisor = Supervisor::fallback(1.0);
    let mut a = ramp()?;
    let mut b = ramp()?;
    a.set_supervisor(supervisor.clone());
    b.set_supervisor(supervisor.clone());

    assert!(a.supervisor().shares(b.supervisor()));
    assert!(!a.supervisor().shares(&Supervisor::fallback(1.0)));
    Ok(())
}
