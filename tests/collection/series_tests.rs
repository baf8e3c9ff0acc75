use multinterp::collection::{Abscissae, Grid, Layout, Series};
use multinterp::interpolation::errors::InterpolationError;
use multinterp::interpolation::result::Derivative;

type SeriesResult = Result<(), InterpolationError>;

fn series(points: &[(f64, f64)]) -> Series<f64> {
    points.iter().copied().collect()
}

#[test]
fn put_keeps_ascending_order() {
    let mut s = Series::new();
    s.put(3.0, 30.0);
    s.put(1.0, 10.0);
    s.put(2.0, 20.0);
    s.put(1.0, 11.0);

    assert_eq!(s.abscissas(), vec![1.0, 2.0, 3.0]);
    assert_eq!(s.ordinates(), vec![11.0, 20.0, 30.0]);
}

#[test]
fn get_requires_a_matching_abscissa() -> SeriesResult {
    let s = series(&[(0.0, 1.0), (1.0, 2.0)]);
    assert_eq!(*s.get(1.0)?, 2.0);
    assert!(matches!(s.get(0.5), Err(InterpolationError::ValueOutOfRange { .. })));
    assert!(matches!(
        Series::<f64>::new().get(0.0),
        Err(InterpolationError::EmptyCollection)
    ));
    Ok(())
}

#[test]
fn add_self_doubles() -> SeriesResult {
    let mut s = series(&[(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
    let other = s.clone();
    s.add(&other)?;
    assert_eq!(s.ordinates(), vec![2.0, 4.0, 6.0]);
    Ok(())
}

#[test]
fn add_disjoint_is_union() -> SeriesResult {
    let mut s = series(&[(0.0, 1.0), (1.0, 2.0)]);
    s.add(&series(&[(2.0, 5.0), (3.0, 6.0)]))?;
    assert_eq!(s.abscissas(), vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(s.ordinates(), vec![1.0, 2.0, 5.0, 6.0]);
    Ok(())
}

#[test]
fn add_interleaved_merges() -> SeriesResult {
    let mut s = series(&[(0.0, 1.0), (2.0, 1.0)]);
    s.add(&series(&[(1.0, 4.0), (2.0, 4.0)]))?;
    assert_eq!(s.abscissas(), vec![0.0, 1.0, 2.0]);
    assert_eq!(s.ordinates(), vec![1.0, 4.0, 5.0]);
    Ok(())
}

#[test]
fn add_into_empty_copies() -> SeriesResult {
    let mut s: Series<f64> = Series::new();
    s.add(&series(&[(0.0, 1.0), (1.0, 2.0)]))?;
    assert_eq!(s.ordinates(), vec![1.0, 2.0]);
    Ok(())
}

#[test]
fn sub_matching_cancels() -> SeriesResult {
    let mut s = series(&[(0.0, 1.0), (1.0, 2.0)]);
    let other = s.clone();
    s.sub(&other)?;
    assert_eq!(s.ordinates(), vec![0.0, 0.0]);
    Ok(())
}

#[test]
fn sub_incompatible_fails() {
    let mut s = series(&[(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
    let other = series(&[(0.0, 1.0), (1.5, 2.0), (2.0, 3.0)]);
    assert!(matches!(
        s.sub(&other),
        Err(InterpolationError::StructuralIncompatibility { .. })
    ));
}

#[test]
fn scaling() -> SeriesResult {
    let mut s = series(&[(0.0, 1.0), (1.0, -2.0)]);
    s.mul(3.0);
    assert_eq!(s.ordinates(), vec![3.0, -6.0]);
    s.div(2.0)?;
    assert_eq!(s.ordinates(), vec![1.5, -3.0]);
    assert!(matches!(s.div(0.0), Err(InterpolationError::DivisionByZero { .. })));
    s.negate();
    assert_eq!(s.ordinates(), vec![-1.5, 3.0]);
    Ok(())
}

#[test]
fn add_value_and_function() -> SeriesResult {
    let mut s = series(&[(0.0, 1.0), (2.0, 1.0)]);
    s.add_value(&1.0)?;
    s.add_fn(|x| x * x)?;
    assert_eq!(s.ordinates(), vec![2.0, 6.0]);
    s.sub_fn(|x| x)?;
    assert_eq!(s.ordinates(), vec![2.0, 4.0]);
    Ok(())
}

#[test]
fn derivative_ordinates_accumulate() -> SeriesResult {
    let mut s: Series<Derivative> = Series::new();
    s.put(0.0, Derivative::new(1.0, 2.0));
    let other = s.clone();
    s.add(&other)?;
    assert_eq!(*s.get(0.0)?, Derivative::new(2.0, 4.0));
    Ok(())
}

#[test]
fn configure_on_grid() {
    let grid = Grid::new(5, 0.0, 2.0);
    assert_eq!(grid.count(), 5);
    assert_eq!(grid.step(), 0.5);

    let mut s = Series::grid();
    s.configure(&grid, |x| 2.0 * x);
    assert_eq!(s.layout(), Layout::Grid);
    assert_eq!(s.abscissas(), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    assert_eq!(s.ordinates(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn remove_and_bounds() -> SeriesResult {
    let mut s = series(&[(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
    assert_eq!(s.remove(1.0), Some(2.0));
    assert_eq!(s.remove(1.0), None);
    assert_eq!(s.x_min()?, 0.0);
    assert_eq!(s.x_max()?, 2.0);
    Ok(())
}
