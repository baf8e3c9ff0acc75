use approx::assert_relative_eq;

use multinterp::collection::{Abscissae, Grid};
use multinterp::interpolation::errors::InterpolationError;
use multinterp::interpolation::supervisor::Supervisor;
use multinterp::interpolation::{
    Algorithm, AxisFunction, LinearFunction, PolintFunction, SplineFunction, WithDerivative,
};
use multinterp::tensor::{MultiKey, MultiMap, Node};

type MapResult = Result<(), InterpolationError>;

type Map2 = MultiMap<LinearFunction<f64>>;
type Map3 = MultiMap<MultiMap<LinearFunction<f64>>>;

fn plane(x: f64, y: f64) -> f64 {
    1.0 + 2.0 * x + 3.0 * y
}

fn plane_map() -> Result<Map2, InterpolationError> {
    let mut map = Map2::new(&[Algorithm::Linear]);
    for i in 0..3 {
        for j in 0..4 {
            let (x, y) = (i as f64, j as f64);
            map.insert(&[x, y], plane(x, y))?;
        }
    }
    map.compile()?;
    Ok(map)
}

#[test]
fn leaf_node_matches_axis_function() -> MapResult {
    let mut leaf: LinearFunction<f64> = LinearFunction::default();
    leaf.insert_at(&[0.0], 1.0)?;
    leaf.insert_at(&[2.0], 5.0)?;
    leaf.compile_all()?;

    assert_eq!(leaf.evaluate_at(&[0.5])?, leaf.evaluate(0.5)?);
    assert!(matches!(
        leaf.evaluate_at(&[0.5, 1.0]),
        Err(InterpolationError::DimensionMismatch { got: 2, expected: 1 })
    ));
    Ok(())
}

#[test]
fn bilinear_is_exact_on_a_plane() -> MapResult {
    let map = plane_map()?;
    assert_eq!(<Map2 as Node>::DIM, 2);
    assert_eq!(map.len(), 3);

    for (x, y) in [(0.5, 1.5), (1.25, 0.1), (2.0, 3.0), (0.0, 0.0)] {
        assert_relative_eq!(map.evaluate(&[x, y])?, plane(x, y), epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn wrong_key_length_is_rejected() -> MapResult {
    let mut map = plane_map()?;
    assert!(matches!(
        map.evaluate(&[0.5]),
        Err(InterpolationError::DimensionMismatch { got: 1, expected: 2 })
    ));
    assert!(matches!(
        map.insert(&[0.0, 1.0, 2.0], 0.0),
        Err(InterpolationError::DimensionMismatch { got: 3, expected: 2 })
    ));
    Ok(())
}

#[test]
fn trilinear_is_exact() -> MapResult {
    let f = |k: &[f64]| k[0] + 2.0 * k[1] - 3.0 * k[2];
    let mut map = Map3::new(&[Algorithm::Linear, Algorithm::Linear]);

    let outer = [0.0, 1.0, 2.0];
    let middle = Grid::new(3, -1.0, 1.0);
    let inner = vec![0.0, 0.5, 2.0];
    let axes: [&dyn Abscissae; 3] = [&outer, &middle, &inner];
    map.configure(&axes, f)?;
    map.compile()?;

    assert_eq!(map.leaf_count(), 9);
    let q = [1.5, -0.25, 1.2];
    assert_relative_eq!(map.evaluate(&q)?, 1.5 - 0.5 - 3.6, epsilon = 1e-12);
    Ok(())
}

#[test]
fn outer_axis_strategies() -> MapResult {
    // cubic along the outer axis, linear inside
    let f = |k: &[f64]| k[0] * k[0] * k[0] + k[1];
    let mut map: MultiMap<LinearFunction<f64>> = MultiMap::new(&[Algorithm::Polint(3)]);
    let outer: Vec<f64> = (0..6).map(|i| i as f64).collect();
    let inner = [0.0, 1.0];
    let axes: [&dyn Abscissae; 2] = [&outer, &inner];
    map.configure(&axes, f)?;
    map.compile()?;

    assert_eq!(map.strategies(), vec![Algorithm::Polint(3)]);
    assert_relative_eq!(map.evaluate(&[2.5, 0.5])?, 15.625 + 0.5, epsilon = 1e-10);

    let mut spline_outer: MultiMap<SplineFunction<f64>> = MultiMap::new(&[Algorithm::Spline]);
    spline_outer.configure(&axes, |k| 2.0 * k[0] - k[1])?;
    spline_outer.compile()?;
    assert_relative_eq!(spline_outer.evaluate(&[3.3, 0.25])?, 6.35, epsilon = 1e-10);
    Ok(())
}

#[test]
fn derivative_leaves() -> MapResult {
    let mut map: MultiMap<PolintFunction<2, f64, WithDerivative>> = MultiMap::new(&[Algorithm::Linear]);
    let outer = [0.0, 1.0];
    let inner = [0.0, 1.0, 2.0, 3.0];
    let axes: [&dyn Abscissae; 2] = [&outer, &inner];
    map.configure(&axes, |k| (1.0 + k[0]) * k[1] * k[1])?;
    map.compile()?;

    let r = map.evaluate(&[0.5, 1.5])?;
    assert_relative_eq!(r.f, 1.5 * 2.25, epsilon = 1e-12);
    assert_relative_eq!(r.fp, 1.5 * 3.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn super_iter_walks_every_leaf() -> MapResult {
    let map = plane_map()?;
    let leaves: Vec<(MultiKey, usize)> = map.super_iter().map(|(k, leaf)| (k, leaf.series().len())).collect();

    assert_eq!(leaves.len(), 3);
    for (i, (key, n)) in leaves.iter().enumerate() {
        assert_eq!(key.as_slice(), &[i as f64]);
        assert_eq!(*n, 4);
    }
    Ok(())
}

#[test]
fn samples_can_be_rewritten() -> MapResult {
    let mut map = plane_map()?;
    map.for_each_sample_mut(|key, y| *y = key[0] * key[1]);
    map.compile()?;
    assert_relative_eq!(map.evaluate(&[2.0, 3.0])?, 6.0);
    Ok(())
}

#[test]
fn supervisor_reaches_every_level() -> MapResult {
    let mut map = plane_map()?;
    assert!(map.evaluate(&[5.0, 1.0]).is_err());

    map.set_supervisor(Supervisor::fallback(-1.0));
    // outer axis out of range
    assert_eq!(map.evaluate(&[5.0, 1.0])?, -1.0);
    // inner axis out of range, every leaf falls back
    assert_relative_eq!(map.evaluate(&[1.0, 10.0])?, -1.0);

    let shared = map.supervisor().clone();
    for (_, leaf) in map.super_iter() {
        assert!(leaf.supervisor().shares(&shared));
    }
    Ok(())
}

#[test]
fn supervisors_are_per_map() -> MapResult {
    let mut a = plane_map()?;
    let b = a.clone();
    a.set_supervisor(Supervisor::zero());

    assert_eq!(a.evaluate(&[9.0, 0.0])?, 0.0);
    assert!(b.evaluate(&[9.0, 0.0]).is_err());
    Ok(())
}

#[test]
fn integrate_along_inner_axis() -> MapResult {
    let mut map = Map2::new(&[Algorithm::Linear]);
    let outer = [0.0, 1.0];
    let inner = Grid::new(4, 0.0, 3.0);
    let axes: [&dyn Abscissae; 2] = [&outer, &inner];
    map.configure(&axes, |k| (1.0 + k[0]) * k[1])?;

    let integral = map.integrate()?;
    // ∫₀^y (1 + x)·t dt at the knots
    assert_relative_eq!(integral.evaluate(&[0.0, 2.0])?, 2.0, epsilon = 1e-12);
    assert_relative_eq!(integral.evaluate(&[1.0, 3.0])?, 9.0, epsilon = 1e-12);
    assert_relative_eq!(integral.evaluate(&[0.5, 2.0])?, 3.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn arithmetic() -> MapResult {
    let mut map = plane_map()?;
    let other = map.clone();
    map.add(&other)?;
    map.compile()?;
    assert_relative_eq!(map.evaluate(&[0.5, 0.5])?, 2.0 * plane(0.5, 0.5), epsilon = 1e-12);

    map.div(2.0)?;
    map.mul(3.0);
    map.sub(&other)?;
    map.compile()?;
    assert_relative_eq!(map.evaluate(&[1.5, 2.5])?, 2.0 * plane(1.5, 2.5), epsilon = 1e-12);

    assert!(matches!(map.div(0.0), Err(InterpolationError::DivisionByZero { .. })));
    Ok(())
}

#[test]
fn add_merges_disjoint_and_interleaved_keys() -> MapResult {
    let mut map = plane_map()?;
    let mut other = Map2::new(&[Algorithm::Linear]);
    for x in [0.5, 3.0] {
        for j in 0..4 {
            let y = j as f64;
            other.insert(&[x, y], plane(x, y))?;
        }
    }
    // inner knot between the existing ones at x = 1
    other.insert(&[1.0, 0.5], 10.0)?;

    map.add(&other)?;
    map.compile()?;

    assert_eq!(map.axis().abscissas(), vec![0.0, 0.5, 1.0, 2.0, 3.0]);
    for (x, y) in [(0.5, 1.5), (0.25, 2.0), (2.5, 1.0), (3.0, 3.0), (1.0, 2.0)] {
        assert_relative_eq!(map.evaluate(&[x, y])?, plane(x, y), epsilon = 1e-12);
    }
    assert_relative_eq!(map.evaluate(&[1.0, 0.5])?, 10.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn merged_subtrees_follow_the_receiving_map() -> MapResult {
    let mut map = plane_map()?;
    map.set_supervisor(Supervisor::fallback(-1.0));

    let mut other = Map2::new(&[Algorithm::Linear]);
    for j in 0..4 {
        other.insert(&[3.0, j as f64], plane(3.0, j as f64))?;
    }
    map.add(&other)?;
    map.compile()?;

    assert_relative_eq!(map.evaluate(&[1.0, 10.0])?, -1.0, epsilon = 1e-12);
    assert_relative_eq!(map.evaluate(&[3.0, 10.0])?, -1.0, epsilon = 1e-12);
    assert!(map.super_iter().all(|(_, leaf)| leaf.supervisor().shares(map.supervisor())));
    assert!(!other.supervisor().shares(map.supervisor()));

    let mut deep = Map3::new(&[Algorithm::Linear, Algorithm::Polint(2)]);
    for i in 0..2 {
        for j in 0..3 {
            for k in 0..2 {
                deep.insert(&[i as f64, j as f64, k as f64], 1.0)?;
            }
        }
    }
    let mut foreign = Map3::new(&[Algorithm::Nearest, Algorithm::Nearest]);
    for j in 0..3 {
        for k in 0..2 {
            foreign.insert(&[5.0, j as f64, k as f64], 1.0)?;
        }
    }
    deep.set_supervisor(Supervisor::zero());
    deep.add(&foreign)?;

    assert_eq!(deep.len(), 3);
    assert_eq!(deep.strategies(), vec![Algorithm::Linear, Algorithm::Polint(2)]);
    for e in deep.axis().iter() {
        assert_eq!(e.y().strategies(), vec![Algorithm::Polint(2)]);
        assert!(e.y().supervisor().shares(deep.supervisor()));
    }
    assert!(deep.super_iter().all(|(_, leaf)| leaf.supervisor().shares(deep.supervisor())));
    Ok(())
}

#[test]
fn sub_rejects_overlapping_incompatible_maps() -> MapResult {
    let mut map = plane_map()?;

    let mut shifted = Map2::new(&[Algorithm::Linear]);
    for x in [0.5, 1.5] {
        for j in 0..4 {
            shifted.insert(&[x, j as f64], 1.0)?;
        }
    }
    assert!(matches!(
        map.sub(&shifted),
        Err(InterpolationError::StructuralIncompatibility { .. })
    ));

    // outer keys pair up, inner ones at x = 1 do not
    let mut skewed = Map2::new(&[Algorithm::Linear]);
    skewed.insert(&[1.0, 0.0], 1.0)?;
    skewed.insert(&[1.0, 0.5], 1.0)?;
    assert!(matches!(
        map.sub(&skewed),
        Err(InterpolationError::StructuralIncompatibility { .. })
    ));

    map.compile()?;
    assert_eq!(map.leaf_count(), 3);
    assert_relative_eq!(map.evaluate(&[1.5, 2.5])?, plane(1.5, 2.5), epsilon = 1e-12);
    assert_relative_eq!(map.evaluate(&[1.0, 0.5])?, plane(1.0, 0.5), epsilon = 1e-12);
    Ok(())
}
