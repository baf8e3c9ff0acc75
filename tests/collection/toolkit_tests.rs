use approx::assert_relative_eq;

use multinterp::collection::{integrate, make_cdf, to_probability_density, Histogram1D, Series};
use multinterp::interpolation::errors::InterpolationError;

type ToolkitResult = Result<(), InterpolationError>;

fn series(points: &[(f64, f64)]) -> Series<f64> {
    points.iter().copied().collect()
}

#[test]
fn trapezoid_integral() {
    let (total, cumulative) = integrate(&series(&[(0.0, 0.0), (2.0, 4.0)]));
    assert_eq!(total, 4.0);
    assert_eq!(cumulative.ordinates(), vec![0.0, 4.0]);

    let (total, cumulative) = series(&[(0.0, 1.0)]).integrate();
    assert_eq!(total, 0.0);
    assert_eq!(cumulative.len(), 1);
}

#[test]
fn cdf_of_uniform_density() -> ToolkitResult {
    let (total, cdf) = make_cdf(&series(&[(0.0, 0.5), (1.0, 0.5), (2.0, 0.5)]), 1e-9)?;
    assert_relative_eq!(total, 1.0);
    assert_eq!(cdf.abscissas(), vec![0.0, 0.5, 1.0]);
    assert_eq!(cdf.ordinates(), vec![0.0, 1.0, 2.0]);
    Ok(())
}

#[test]
fn cdf_anchors_at_last_empty_knot() -> ToolkitResult {
    let density = series(&[(0.0, 0.0), (1.0, 0.0), (2.0, 1.0), (3.0, 1.0)]);
    let (total, cdf) = make_cdf(&density, 1e-9)?;

    assert_relative_eq!(total, 1.5);
    let front = cdf.front().ok_or(InterpolationError::EmptyCollection)?;
    assert_eq!((front.x(), *front.y()), (0.0, 1.0));
    let back = cdf.back().ok_or(InterpolationError::EmptyCollection)?;
    assert_eq!((back.x(), *back.y()), (1.0, 3.0));
    assert_relative_eq!(*cdf.get(1.0 / 3.0)?, 2.0);
    Ok(())
}

#[test]
fn cdf_rejects_degenerate_input() {
    assert!(matches!(
        make_cdf(&series(&[(0.0, 1.0)]), 1e-9),
        Err(InterpolationError::EmptyCollection)
    ));
    assert!(matches!(
        make_cdf(&series(&[(0.0, 0.0), (1.0, 0.0)]), 1e-9),
        Err(InterpolationError::DivisionByZero { .. })
    ));
}

#[test]
fn histogram_edges_and_density() -> ToolkitResult {
    let mut h = Histogram1D::new(&[0.0, 1.0, 3.0])?;
    h.fill(0.5, 2.0);
    h.fill(2.0, 4.0);
    h.fill(3.0, 1.0);
    h.fill(0.0, 1.0);
    h.fill(5.0, 1.0);

    assert_eq!(h.underflow(), 1.0);
    assert_eq!(h.overflow(), 1.0);
    assert_eq!(h.integral(), 9.0);

    let density = to_probability_density(&h);
    assert_eq!(density.abscissas(), vec![0.5, 2.0]);
    assert_eq!(density.ordinates(), vec![2.0, 2.5]);

    h.reset();
    assert_eq!(h.integral(), 0.0);
    assert!(h.contents().all(|(_, _, c)| c == 0.0));
    Ok(())
}

#[test]
fn histogram_needs_two_edges() {
    assert!(matches!(
        Histogram1D::new(&[1.0]),
        Err(InterpolationError::InsufficientData { got: 1, need: 2 })
    ));
}
