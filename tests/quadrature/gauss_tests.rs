use std::f64::consts::PI;

use approx::assert_relative_eq;

use multinterp::quadrature::{Quadrature, QuadratureCfg, QuadratureError};

type QuadResult = Result<(), QuadratureError>;

#[test]
fn legendre_is_exact_to_degree_2n_minus_1() -> QuadResult {
    let cfg = QuadratureCfg::new();
    let q = Quadrature::gauss_legendre(4, &cfg)?;

    assert_eq!(q.len(), 4);
    assert_relative_eq!(q.total_weight(), 2.0, epsilon = 1e-13);
    assert_relative_eq!(q.integrate(|x| x.powi(6)), 2.0 / 7.0, epsilon = 1e-13);
    assert_relative_eq!(q.integrate(|x| x.powi(7) - 3.0 * x), 0.0, epsilon = 1e-13);
    Ok(())
}

#[test]
fn legendre_on_interval() -> QuadResult {
    let q = Quadrature::gauss_legendre(3, &QuadratureCfg::new())?.on_interval(0.0, 2.0);
    assert_relative_eq!(q.integrate(|x| x * x), 8.0 / 3.0, epsilon = 1e-13);
    assert!(q.iter().all(|(x, _)| (0.0..=2.0).contains(&x)));
    Ok(())
}

#[test]
fn legendre_nodes_are_ascending() -> QuadResult {
    let q = Quadrature::gauss_legendre(9, &QuadratureCfg::new())?;
    let xs = q.nodes().abscissas();
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
    Ok(())
}

#[test]
fn laguerre_weights_sum_to_gamma() -> QuadResult {
    let cfg = QuadratureCfg::new();

    let q = Quadrature::gauss_laguerre(8, 0.0, &cfg)?;
    assert_relative_eq!(q.total_weight(), 1.0, epsilon = 1e-10);
    // ∫ x² e^(-x) = 2
    assert_relative_eq!(q.integrate(|x| x * x), 2.0, epsilon = 1e-10);

    let q = Quadrature::gauss_laguerre(8, 0.5, &cfg)?;
    assert_relative_eq!(q.total_weight(), 0.5 * PI.sqrt(), epsilon = 1e-8);
    Ok(())
}

#[test]
fn hermite_weights_sum_to_sqrt_pi() -> QuadResult {
    let q = Quadrature::gauss_hermite(10, &QuadratureCfg::new())?;
    assert_relative_eq!(q.total_weight(), PI.sqrt(), epsilon = 1e-10);
    // ∫ x² e^(-x²) = √π / 2
    assert_relative_eq!(q.integrate(|x| x * x), 0.5 * PI.sqrt(), epsilon = 1e-10);
    Ok(())
}

#[test]
fn invalid_construction() {
    let cfg = QuadratureCfg::new();
    assert!(matches!(
        Quadrature::gauss_legendre(0, &cfg),
        Err(QuadratureError::InvalidPoints { got: 0, need: 1 })
    ));
    assert!(matches!(
        Quadrature::gauss_laguerre(4, -1.0, &cfg),
        Err(QuadratureError::InvalidParameter { name: "alf", .. })
    ));
    assert!(matches!(QuadratureCfg::new().set_eps(0.0), Err(QuadratureError::InvalidTolerance { .. })));
    assert!(matches!(
        QuadratureCfg::new().set_max_iter(0),
        Err(QuadratureError::InvalidMaxIter { got: 0 })
    ));
}

#[test]
fn loose_config_still_converges() -> QuadResult {
    let cfg = QuadratureCfg::new().set_eps(1e-8)?.set_max_iter(50)?;
    let q = Quadrature::gauss_legendre(5, &cfg)?;
    assert_relative_eq!(q.integrate(|x| x.powi(4)), 0.4, epsilon = 1e-9);
    Ok(())
}
