//! Recursive tensor map.
//!
//! A [`MultiMap`] is a series along its own axis whose ordinates are nodes of
//! one dimension lower. Evaluation materializes a synthetic series from the
//! inner results at the samples the axis strategy reads around the query,
//! then interpolates that series with the strategy:
//!
//! ```text
//! f(x0, x1, .., xn) = interpolate_{x0}( { (x0_i, f_i(x1, .., xn)) } )
//! ```

use std::convert::Infallible;
use std::io::{Read, Write};

use log::debug;

use crate::collection::{Abscissae, Series};
use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::bracket::{locate, window_start, Bracket};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::result::Accumulate;
use crate::interpolation::supervisor::Supervisor;
use crate::interpolation::traits::AxisFunction;
use crate::io::{read_count, read_f64, BinaryRead, BinaryWrite};
use crate::tensor::key::MultiKey;
use crate::tensor::node::Node;


#[derive(Debug, Clone)]
pub struct MultiMap<M: Node> {
    axis: Series<M>,
    strategy: Algorithm,
    /// Strategies of the levels below, outermost first.
    inner: Vec<Algorithm>,
    supervisor: Supervisor<M::Output>,
}

impl<M: Node> Default for MultiMap<M> {
    fn default() -> Self {
        Self::with_strategies(&[])
    }
}

impl<M: Node> MultiMap<M> {
    /// Empty map; axes without a strategy interpolate linearly.
    pub fn new(strategies: &[Algorithm]) -> Self {
        <Self as Node>::with_strategies(strategies)
    }

    pub fn strategy(&self) -> Algorithm {
        self.strategy
    }

    /// Strategies of all outer axes, this level first.
    pub fn strategies(&self) -> Vec<Algorithm> {
        let mut all = Vec::with_capacity(self.inner.len() + 1);
        all.push(self.strategy);
        all.extend_from_slice(&self.inner);
        all
    }

    pub fn axis(&self) -> &Series<M> {
        &self.axis
    }

    pub fn axis_mut(&mut self) -> &mut Series<M> {
        &mut self.axis
    }

    pub fn len(&self) -> usize {
        self.axis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axis.is_empty()
    }

    pub fn supervisor(&self) -> &Supervisor<M::Output> {
        &self.supervisor
    }

    /// Installs `supervisor` at every level and leaf of this map.
    pub fn set_supervisor(&mut self, supervisor: Supervisor<M::Output>) {
        self.share_supervisor(&supervisor);
    }

    fn check_dim(len: usize) -> Result<(), InterpolationError> {
        if len != <Self as Node>::DIM {
            return Err(InterpolationError::DimensionMismatch { got: len, expected: <Self as Node>::DIM });
        }
        Ok(())
    }

    fn child(&self) -> M {
        let mut child = M::with_strategies(&self.inner);
        child.share_supervisor(&self.supervisor);
        child
    }

    /// Puts `y` at `key`, one abscissa per axis, outermost first.
    ///
    /// # Errors
    /// - [`InterpolationError::DimensionMismatch`] if `key` has the wrong length.
    pub fn insert(&mut self, key: &[f64], y: M::Leaf) -> Result<(), InterpolationError> {
        Self::check_dim(key.len())?;
        self.insert_at(key, y)
    }

    /// Evaluates at `xs`, one abscissa per axis, outermost first.
    ///
    /// # Errors
    /// - [`InterpolationError::DimensionMismatch`] if `xs` has the wrong length.
    /// - Any interpolation error not recovered by a supervisor.
    pub fn evaluate(&self, xs: &[f64]) -> Result<M::Output, InterpolationError> {
        Self::check_dim(xs.len())?;
        self.evaluate_at(xs)
    }

    /// Compiles every leaf; required after the last insertion.
    pub fn compile(&mut self) -> Result<(), InterpolationError> {
        self.compile_all()?;
        debug!("tensor map compiled: {} leaves over {} axes", self.leaf_count(), <Self as Node>::DIM);
        Ok(())
    }

    fn try_evaluate_at(&self, xs: &[f64]) -> Result<M::Output, InterpolationError> {
        let (&x, rest) = xs.split_first().ok_or(InterpolationError::DimensionMismatch {
            got: 0,
            expected: <Self as Node>::DIM,
        })?;

        let n = self.axis.len();
        let range = match locate(&self.axis, x)? {
            Bracket::Single => 0..1,
            Bracket::Upper(p) => match self.strategy.window() {
                Some(m) => {
                    let m = m.clamp(2, n);
                    let start = window_start(p, m, n);
                    start..start + m
                }
                None => 0..n,
            },
        };

        let mut buffer = Series::with_metric(*self.axis.metric());
        for e in &self.axis.as_slice()[range] {
            buffer.put(e.x(), e.y().evaluate_at(rest)?);
        }
        self.strategy.interpolate(buffer, x)
    }

    /// Leaves with their full key prefix, depth first.
    pub fn super_iter(&self) -> std::vec::IntoIter<(MultiKey, &M::Function)> {
        let mut out = Vec::with_capacity(self.leaf_count());
        self.collect_leaves(&mut Vec::new(), &mut out);
        out.into_iter()
    }

    /// Calls `f` with the key prefix and each leaf interpolator; stops at
    /// the first error.
    pub fn for_each_leaf_mut<E, F>(&mut self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&MultiKey, &mut M::Function) -> Result<(), E>,
    {
        self.visit_leaves_mut(&mut Vec::new(), &mut f)
    }

    /// Calls `f` with the full key and ordinate of every leaf sample.
    pub fn for_each_sample_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&MultiKey, &mut M::Leaf),
    {
        let result: Result<(), Infallible> = self.for_each_leaf_mut(|prefix, leaf| {
            for e in leaf.series_mut().iter_mut() {
                let mut key = prefix.as_slice().to_vec();
                key.push(e.x());
                f(&MultiKey::new(key), e.y_mut());
            }
            Ok(())
        });
        if let Err(never) = result {
            match never {}
        }
    }

    /// Rebuilds the map on the cartesian product of `axes`, outermost first,
    /// with ordinates `f(key)`.
    ///
    /// # Errors
    /// - [`InterpolationError::DimensionMismatch`] if the number of axes is wrong.
    pub fn configure<F>(&mut self, axes: &[&dyn Abscissae], mut f: F) -> Result<(), InterpolationError>
    where
        F: FnMut(&[f64]) -> M::Leaf,
    {
        Self::check_dim(axes.len())?;
        self.axis.clear();

        let mut index = vec![0usize; axes.len()];
        if axes.iter().any(|a| a.count() == 0) {
            return Ok(());
        }
        let mut key = vec![0.0; axes.len()];
        loop {
            for (k, (axis, &i)) in axes.iter().zip(&index).enumerate() {
                key[k] = axis.abscissa(i);
            }
            let y = f(&key);
            self.insert_at(&key, y)?;

            // odometer, innermost axis fastest
            let mut d = axes.len();
            loop {
                if d == 0 {
                    return Ok(());
                }
                d -= 1;
                index[d] += 1;
                if index[d] < axes[d].count() {
                    break;
                }
                index[d] = 0;
            }
        }
    }

    /// Map with every leaf replaced by its cumulative trapezoid integral.
    pub fn integrate(&self) -> Result<Self, InterpolationError> {
        let mut out = self.clone();
        out.for_each_leaf_mut(|_, leaf| {
            let (_, cumulative) = leaf.series().integrate();
            *leaf.series_mut() = cumulative;
            Ok::<(), InterpolationError>(())
        })?;
        out.compile()?;
        Ok(out)
    }

    /// Adds `other` key by key; keys present in `other` only are copied in.
    ///
    /// Copied subtrees take over the strategies and the supervisor of `self`.
    pub fn add(&mut self, other: &Self) -> Result<(), InterpolationError> {
        self.axis.add(&other.axis)?;
        self.adopt();
        Ok(())
    }

    /// Subtracts `other` key by key.
    ///
    /// # Errors
    /// - [`InterpolationError::StructuralIncompatibility`] if the overlapping
    ///   keys of both maps do not pair up at some level; `self` is unchanged.
    pub fn sub(&mut self, other: &Self) -> Result<(), InterpolationError> {
        self.axis.sub(&other.axis)?;
        self.adopt();
        Ok(())
    }

    fn adopt(&mut self) {
        let strategies = self.strategies();
        <Self as Node>::set_strategies(self, &strategies);
        let supervisor = self.supervisor.clone();
        self.share_supervisor(&supervisor);
    }

    pub fn mul(&mut self, factor: f64) {
        self.axis.mul(factor);
    }

    pub fn div(&mut self, factor: f64) -> Result<(), InterpolationError> {
        self.axis.div(factor)
    }
}


impl<M: Node> Accumulate for MultiMap<M> {
    fn add_assign_from(&mut self, other: &Self) -> Result<(), InterpolationError> {
        self.add(other)
    }
    fn sub_assign_from(&mut self, other: &Self) -> Result<(), InterpolationError> {
        self.sub(other)
    }
    fn scale(&mut self, factor: f64) {
        self.mul(factor);
    }
}

impl<M: Node> BinaryWrite for MultiMap<M> {
    fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> Result<(), InterpolationError> {
        self.axis.write_to(w)
    }
}

impl<M: Node> BinaryRead for MultiMap<M> {
    fn read_from<R: Read + ?Sized>(&mut self, r: &mut R) -> Result<(), InterpolationError> {
        self.axis.clear();
        let n = read_count(r)?;
        for _ in 0..n {
            let x = read_f64(r)?;
            let mut child = self.child();
            child.read_from(r)?;
            self.axis.put(x, child);
        }
        Ok(())
    }
}


impl<M: Node> Node for MultiMap<M> {
    const DIM: usize = M::DIM + 1;

    type Leaf = M::Leaf;
    type Output = M::Output;
    type Function = M::Function;

    fn with_strategies(strategies: &[Algorithm]) -> Self {
        let mut map = Self {
            axis: Series::new(),
            strategy: Algorithm::Linear,
            inner: Vec::new(),
            supervisor: Supervisor::default(),
        };
        map.set_strategies(strategies);
        map
    }

    fn evaluate_at(&self, xs: &[f64]) -> Result<M::Output, InterpolationError> {
        match self.try_evaluate_at(xs) {
            Ok(r) => Ok(r),
            Err(e) => self.supervisor.recover(e),
        }
    }

    fn insert_at(&mut self, xs: &[f64], y: M::Leaf) -> Result<(), InterpolationError> {
        let (&x, rest) = xs.split_first().ok_or(InterpolationError::DimensionMismatch {
            got: 0,
            expected: <Self as Node>::DIM,
        })?;
        let child = self.child();
        self.axis.get_or_insert_with(x, || child).insert_at(rest, y)
    }

    fn compile_all(&mut self) -> Result<(), InterpolationError> {
        for e in self.axis.iter_mut() {
            e.y_mut().compile_all()?;
        }
        Ok(())
    }

    fn set_strategies(&mut self, strategies: &[Algorithm]) {
        let (strategy, inner) = match strategies.split_first() {
            Some((&s, rest)) => (s, rest.to_vec()),
            None => (Algorithm::Linear, Vec::new()),
        };
        for e in self.axis.iter_mut() {
            e.y_mut().set_strategies(&inner);
        }
        self.strategy = strategy;
        self.inner = inner;
    }

    fn share_supervisor(&mut self, supervisor: &Supervisor<M::Output>) {
        self.supervisor = supervisor.clone();
        for e in self.axis.iter_mut() {
            e.y_mut().share_supervisor(supervisor);
        }
    }

    fn leaf_count(&self) -> usize {
        self.axis.iter().map(|e| e.y().leaf_count()).sum()
    }

    fn collect_leaves<'a>(&'a self, prefix: &mut Vec<f64>, out: &mut Vec<(MultiKey, &'a M::Function)>) {
        for e in self.axis.iter() {
            prefix.push(e.x());
            e.y().collect_leaves(prefix, out);
            prefix.pop();
        }
    }

    fn visit_leaves_mut<E>(
        &mut self,
        prefix: &mut Vec<f64>,
        f: &mut dyn FnMut(&MultiKey, &mut M::Function) -> Result<(), E>,
    ) -> Result<(), E> {
        for e in self.axis.iter_mut() {
            prefix.push(e.x());
            let result = e.y_mut().visit_leaves_mut(prefix, f);
            prefix.pop();
            result?;
        }
        Ok(())
    }
}
