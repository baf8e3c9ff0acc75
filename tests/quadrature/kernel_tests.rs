use approx::assert_relative_eq;

use multinterp::quadrature::{Quadrature, QuadratureCfg, QuadratureError};

type QuadResult = Result<(), QuadratureError>;

fn in_unit_range(q: &Quadrature) -> bool {
    q.iter().all(|(x, w)| (-1.0..=1.0).contains(&x) && w > 0.0)
}

#[test]
fn henyey_greenstein_integrates_plain_measure() -> QuadResult {
    let q = Quadrature::henyey_greenstein(100, 0.5, 1.0)?;
    assert!(in_unit_range(&q));
    assert_relative_eq!(q.total_weight(), 2.0, epsilon = 5e-3);
    assert_relative_eq!(q.integrate(|x| x * x), 2.0 / 3.0, epsilon = 5e-3);
    Ok(())
}

#[test]
fn henyey_greenstein_logarithmic_branch() -> QuadResult {
    let q = Quadrature::henyey_greenstein(100, 0.8, -1.0)?;
    assert!(in_unit_range(&q));
    assert_relative_eq!(q.total_weight(), 2.0, epsilon = 1e-3);
    Ok(())
}

#[test]
fn henyey_greenstein_on_sub_range() -> QuadResult {
    let q = Quadrature::henyey_greenstein_range(100, 0.8, -1.5, -0.5, 0.5)?;
    assert!(q.iter().all(|(x, _)| (-0.5..=0.5).contains(&x)));
    assert_relative_eq!(q.total_weight(), 1.0, epsilon = 1e-4);
    Ok(())
}

#[test]
fn rayleigh() -> QuadResult {
    let q = Quadrature::rayleigh(100, 0.8)?;
    assert!(in_unit_range(&q));
    assert_relative_eq!(q.total_weight(), 2.0, epsilon = 1e-4);
    assert_relative_eq!(q.integrate(|x| x * x), 2.0 / 3.0, epsilon = 1e-4);
    Ok(())
}

#[test]
fn cotangent_and_bitangent() -> QuadResult {
    let q = Quadrature::cotangent(100)?;
    assert_eq!(q.len(), 100);
    assert!(in_unit_range(&q));
    assert_relative_eq!(q.integrate(|x| x * x), 2.0 / 3.0, epsilon = 2e-3);

    let q = Quadrature::bitangent(100)?;
    assert!(in_unit_range(&q));
    assert!(q.iter().filter(|&(x, _)| x > 0.0).count() >= 50);
    assert_relative_eq!(q.integrate(|x| x * x), 2.0 / 3.0, epsilon = 2e-3);
    Ok(())
}

#[test]
fn rule_from_cumulative_integral() -> QuadResult {
    let cfg = QuadratureCfg::new();

    let uniform = Quadrature::from_integral(0.0, 1.0, 10, |a, b| b - a, |_| 1.0, &cfg)?;
    assert_eq!(uniform.len(), 10);
    for (k, (x, w)) in uniform.iter().enumerate() {
        assert_relative_eq!(x, (k as f64 + 0.5) / 10.0, epsilon = 1e-9);
        assert_relative_eq!(w, 0.1, epsilon = 1e-12);
    }

    let linear = Quadrature::from_integral(
        0.0,
        1.0,
        50,
        |a, b| (b - a) + 0.5 * (b * b - a * a),
        |x| 1.0 + x,
        &cfg,
    )?;
    assert_relative_eq!(linear.total_weight(), 1.0, epsilon = 1e-3);
    assert_relative_eq!(linear.integrate(|x| x), 0.5, epsilon = 1e-3);
    Ok(())
}

#[test]
fn invalid_kernel_parameters() {
    assert!(matches!(
        Quadrature::henyey_greenstein(10, 0.0, 1.0),
        Err(QuadratureError::InvalidParameter { name: "g", .. })
    ));
    assert!(matches!(
        Quadrature::rayleigh(10, -1.0),
        Err(QuadratureError::InvalidParameter { name: "g", .. })
    ));
    assert!(matches!(
        Quadrature::cotangent(1),
        Err(QuadratureError::InvalidPoints { got: 1, need: 2 })
    ));
    assert!(matches!(
        Quadrature::from_integral(1.0, 0.0, 4, |a, b| b - a, |_| 1.0, &QuadratureCfg::new()),
        Err(QuadratureError::InvalidParameter { .. })
    ));
}
