use std::rc::Rc;

use multinterp::collection::Series;
use multinterp::interpolation::errors::InterpolationError;
use multinterp::interpolation::result::Derivative;
use multinterp::interpolation::{Algorithm, HermiteFunction, LinearFunction};
use multinterp::io::{BinaryRead, BinaryWrite};
use multinterp::tensor::{
    AttenuationTransformer, IdentityTransformer, MultiMap, TransformableMap, Transformer,
};

type IoResult = Result<(), InterpolationError>;

fn bytes<T: BinaryWrite>(value: &T) -> Result<Vec<u8>, InterpolationError> {
    let mut buf = Vec::new();
    value.write_to(&mut buf)?;
    Ok(buf)
}

#[test]
fn series_layout() -> IoResult {
    let s: Series<f64> = vec![(1.0, 2.0)].into_iter().collect();
    let buf = bytes(&s)?;

    let mut expected = Vec::new();
    expected.extend_from_slice(&1i32.to_le_bytes());
    expected.extend_from_slice(&1.0f64.to_le_bytes());
    expected.extend_from_slice(&2.0f64.to_le_bytes());
    assert_eq!(buf, expected);
    Ok(())
}

#[test]
fn series_round_trip() -> IoResult {
    let mut s: Series<Derivative> = Series::new();
    s.put(0.0, Derivative::new(1.0, -1.0));
    s.put(0.5, Derivative::new(f64::MIN_POSITIVE, 1e300));
    let buf = bytes(&s)?;

    let mut back: Series<Derivative> = Series::new();
    back.put(9.0, Derivative::new(9.0, 9.0));
    back.read_from(&mut buf.as_slice())?;
    assert_eq!(back, s);
    Ok(())
}

#[test]
fn truncated_stream_fails() -> IoResult {
    let s: Series<f64> = vec![(1.0, 2.0), (2.0, 3.0)].into_iter().collect();
    let buf = bytes(&s)?;

    let mut back: Series<f64> = Series::new();
    assert!(matches!(
        back.read_from(&mut &buf[..buf.len() - 3]),
        Err(InterpolationError::Io(_))
    ));
    Ok(())
}

fn sample_map() -> Result<MultiMap<MultiMap<LinearFunction<f64>>>, InterpolationError> {
    let mut map = MultiMap::new(&[Algorithm::Linear, Algorithm::Polint(2)]);
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..4 {
                let key = [i as f64, 0.5 * j as f64, k as f64 - 1.0];
                map.insert(&key, key[0] * key[1] + key[2])?;
            }
        }
    }
    map.compile()?;
    Ok(map)
}

#[test]
fn map_round_trip_is_bit_exact() -> IoResult {
    let map = sample_map()?;
    let buf = bytes(&map)?;

    let mut back: MultiMap<MultiMap<LinearFunction<f64>>> =
        MultiMap::new(&[Algorithm::Linear, Algorithm::Polint(2)]);
    back.read_from(&mut buf.as_slice())?;
    back.compile()?;

    assert_eq!(bytes(&back)?, buf);
    assert_eq!(back.strategies(), map.strategies());
    let q = [1.5, 0.7, 0.3];
    assert_eq!(back.evaluate(&q)?, map.evaluate(&q)?);
    Ok(())
}

#[test]
fn hermite_leaves_round_trip() -> IoResult {
    let mut map: MultiMap<HermiteFunction<f64>> = MultiMap::new(&[Algorithm::Hermite]);
    for i in 0..3 {
        for k in 0..5 {
            map.insert(&[i as f64, k as f64], (i * k) as f64)?;
        }
    }
    map.compile()?;

    let mut back: MultiMap<HermiteFunction<f64>> = MultiMap::new(&[Algorithm::Hermite]);
    back.read_from(&mut bytes(&map)?.as_slice())?;
    back.compile()?;
    assert_eq!(back.evaluate(&[1.2, 2.7])?, map.evaluate(&[1.2, 2.7])?);
    Ok(())
}

#[test]
fn transformer_is_appended() -> IoResult {
    let transformer = AttenuationTransformer::new(20.0, 2, 0.0, 2.0)?.set_k_0(0.25).set_r_min(0.5);
    let mut map = TransformableMap::with_transformer(
        MultiMap::<LinearFunction<f64>>::new(&[Algorithm::Linear]),
        Rc::new(transformer),
    );
    for r in [1.0, 2.0] {
        for t in [0.0, 1.0, 2.0, 3.0] {
            map.insert(&[r, t], r + t)?;
        }
    }
    map.compile()?;
    let buf = bytes(&map)?;

    let mut back: TransformableMap<MultiMap<LinearFunction<f64>>> = TransformableMap::default();
    back.read_from(&mut buf.as_slice())?;
    back.compile()?;

    assert_eq!(back.transformer().tag(), AttenuationTransformer::TAG);
    assert_eq!(back.transformer().weight(&[1.5]), transformer.weight(&[1.5]));
    assert_eq!(back.transformer().put_xn(&[1.5], 0.7), transformer.put_xn(&[1.5], 0.7));
    assert_eq!(bytes(&back)?, buf);
    Ok(())
}

#[test]
fn missing_transformer_reads_as_identity() -> IoResult {
    let map = sample_map()?;
    let inner: MultiMap<LinearFunction<f64>> = map
        .axis()
        .front()
        .map(|e| e.y().clone())
        .ok_or(InterpolationError::EmptyCollection)?;
    let buf = bytes(&inner)?;

    let mut back: TransformableMap<MultiMap<LinearFunction<f64>>> =
        TransformableMap::with_transformer(MultiMap::new(&[Algorithm::Polint(2)]), Rc::new(AttenuationTransformer::default()));
    back.read_from(&mut buf.as_slice())?;
    assert_eq!(back.transformer().tag(), IdentityTransformer::TAG);
    Ok(())
}

#[test]
fn unknown_transformer_tag_fails() -> IoResult {
    let mut buf = bytes(&MultiMap::<LinearFunction<f64>>::new(&[Algorithm::Linear]))?;
    buf.extend_from_slice(&7i32.to_le_bytes());

    let mut back: TransformableMap<MultiMap<LinearFunction<f64>>> = TransformableMap::default();
    assert!(matches!(
        back.read_from(&mut buf.as_slice()),
        Err(InterpolationError::UnknownTransformer { tag: 7 })
    ));
    Ok(())
}
