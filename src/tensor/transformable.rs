//! Tensor map with a transformer on its innermost axis.
//!
//! Samples are stored at `put_xn(context, x)` with ordinate `y / weight(context)`;
//! evaluation maps the query the same way and multiplies the result back by
//! the weight, after correcting abscissa-dependent result parts (derivatives,
//! integrals) for the stretch of the innermost axis.

use std::io::{Read, Write};
use std::rc::Rc;

use log::debug;

use crate::collection::{Element, Series};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::result::Ordinate;
use crate::interpolation::supervisor::Supervisor;
use crate::interpolation::traits::AxisFunction;
use crate::io::{BinaryRead, BinaryWrite};
use crate::quadrature::{gaussian_blur, Quadrature, QuadratureError};
use crate::tensor::node::Node;
use crate::tensor::transformer::{read_transformer, write_transformer, IdentityTransformer, Transformer};


#[derive(Debug, Clone)]
pub struct TransformableMap<M: Node> {
    map: M,
    transformer: Rc<dyn Transformer>,
}

impl<M: Node> Default for TransformableMap<M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}

/// Stored-to-raw image of a leaf series under `t` at `context`.
fn get_series<O: Ordinate>(t: &dyn Transformer, context: &[f64], series: &mut Series<O>) {
    let w = t.weight(context);
    series.transform(|e| {
        let (x, y) = e.into_parts();
        Element::new(t.get_xn(context, x), y * w)
    });
}

/// Raw-to-stored image of a leaf series under `t` at `context`.
fn put_series<O: Ordinate>(t: &dyn Transformer, context: &[f64], series: &mut Series<O>) {
    let w = t.weight(context);
    series.transform(|e| {
        let (x, y) = e.into_parts();
        Element::new(t.put_xn(context, x), y / w)
    });
}

impl<M: Node> TransformableMap<M> {
    /// Map with the identity transformer.
    pub fn new(map: M) -> Self {
        Self { map, transformer: Rc::new(IdentityTransformer) }
    }

    /// Wraps a map whose samples are already stored under `transformer`.
    pub fn with_transformer(map: M, transformer: Rc<dyn Transformer>) -> Self {
        Self { map, transformer }
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    pub fn into_inner(self) -> M {
        self.map
    }

    pub fn transformer(&self) -> &Rc<dyn Transformer> {
        &self.transformer
    }

    pub fn set_supervisor(&mut self, supervisor: Supervisor<M::Output>) {
        self.map.share_supervisor(&supervisor);
    }

    pub fn compile(&mut self) -> Result<(), InterpolationError> {
        self.map.compile_all()
    }

    fn split(xs: &[f64]) -> Result<(&[f64], f64), InterpolationError> {
        match xs.split_last() {
            Some((&xn, context)) if xs.len() == M::DIM => Ok((context, xn)),
            _ => Err(InterpolationError::DimensionMismatch { got: xs.len(), expected: M::DIM }),
        }
    }

    fn checked_weight(&self, context: &[f64]) -> Result<f64, InterpolationError> {
        let w = self.transformer.weight(context);
        if w == 0.0 || !w.is_finite() {
            return Err(InterpolationError::DivisionByZero { context: "transformer weight" });
        }
        Ok(w)
    }

    /// Puts `y` at raw coordinates `key`.
    pub fn insert(&mut self, key: &[f64], y: M::Leaf) -> Result<(), InterpolationError> {
        let (context, xn) = Self::split(key)?;
        let w = self.checked_weight(context)?;

        let mut stored = key.to_vec();
        if let Some(last) = stored.last_mut() {
            *last = self.transformer.put_xn(context, xn);
        }
        self.map.insert_at(&stored, y / w)
    }

    /// Evaluates at raw coordinates `xs`.
    pub fn evaluate(&self, xs: &[f64]) -> Result<M::Output, InterpolationError> {
        let (context, xn) = Self::split(xs)?;
        let t = &self.transformer;

        let mut stored = xs.to_vec();
        if let Some(last) = stored.last_mut() {
            *last = t.put_xn(context, xn);
        }
        let y = self.map.evaluate_at(&stored)?;

        let z = t.get_xn(context, 1.0) - t.get_xn(context, 0.0);
        Ok(y.rescale_abscissa(z) * t.weight(context))
    }

    /// Re-stores every sample under `transformer` and recompiles.
    pub fn transform(&mut self, transformer: Rc<dyn Transformer>) -> Result<(), InterpolationError> {
        let old = Rc::clone(&self.transformer);
        self.map.visit_leaves_mut(&mut Vec::new(), &mut |key, leaf| {
            get_series(old.as_ref(), key, leaf.series_mut());
            put_series(transformer.as_ref(), key, leaf.series_mut());
            Ok::<(), InterpolationError>(())
        })?;

        debug!("transformer retargeted: tag {} -> {}", old.tag(), transformer.tag());
        self.transformer = transformer;
        self.map.compile_all()
    }

    /// Adds `f(raw key)` to every stored sample and recompiles the leaves.
    pub fn add<F>(&mut self, mut f: F) -> Result<(), InterpolationError>
    where
        F: FnMut(&[f64]) -> Result<M::Leaf, InterpolationError>,
    {
        let t = Rc::clone(&self.transformer);
        self.map.visit_leaves_mut(&mut Vec::new(), &mut |key, leaf| {
            if leaf.series().is_empty() {
                return Ok(());
            }
            let series = leaf.series_mut();
            get_series(t.as_ref(), key, series);

            let mut raw = key.to_vec();
            raw.push(0.0);
            for e in series.iter_mut() {
                if let Some(last) = raw.last_mut() {
                    *last = e.x();
                }
                let y = *e.y() + f(&raw)?;
                *e.y_mut() = y;
            }

            put_series(t.as_ref(), key, series);
            leaf.compile()
        })
    }

    /// Smears every leaf along the raw innermost axis with a Gaussian of
    /// width `sigma`, see [`gaussian_blur`]. `engine` must be a Gauss-Hermite rule.
    pub fn blur(&mut self, sigma: f64, engine: &Quadrature) -> Result<(), QuadratureError> {
        let t = Rc::clone(&self.transformer);
        self.map.visit_leaves_mut(&mut Vec::new(), &mut |key, leaf| {
            if leaf.series().is_empty() {
                return Ok(());
            }
            let mut raw = leaf.series().clone();
            get_series(t.as_ref(), key, &mut raw);

            let mut blurred = gaussian_blur(&raw, leaf.algorithm(), sigma, engine)?;
            put_series(t.as_ref(), key, &mut blurred);

            *leaf.series_mut() = blurred;
            leaf.compile()?;
            Ok::<(), QuadratureError>(())
        })?;
        debug!("blurred {} leaves with sigma = {sigma}", self.map.leaf_count());
        Ok(())
    }
}

impl<M: Node> BinaryWrite for TransformableMap<M> {
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> Result<(), InterpolationError> {
        self.map.write_to(w)?;
        write_transformer(self.transformer.as_ref(), w)
    }
}

impl<M: Node> BinaryRead for TransformableMap<M> {
    /// Reads the map body, then an optional tagged transformer; a stream that
    /// ends after the body yields the identity transformer.
    fn read_from<R: Read + ?Sized>(&mut self, r: &mut R) -> Result<(), InterpolationError> {
        self.map.read_from(r)?;
        self.transformer = match read_transformer(r)? {
            Some(t) => t,
            None => Rc::new(IdentityTransformer),
        };
        Ok(())
    }
}
