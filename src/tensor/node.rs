//! One level of a tensor map.
//!
//! A [`Node`] is either a leaf axis interpolator (one axis) or a
//! [`MultiMap`](crate::tensor::MultiMap) of nodes one dimension lower. All
//! levels of a tree share the leaf ordinate type and the result type; outer
//! levels interpolate the results of the inner ones.

use std::io::{Read, Write};

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::result::{Accumulate, Ordinate};
use crate::interpolation::supervisor::Supervisor;
use crate::interpolation::traits::{AxisFunction, Mode};
use crate::interpolation::{HermiteFunction, LinearFunction, NearestFunction, PolintFunction, SplineFunction};
use crate::io::{BinaryRead, BinaryWrite};
use crate::tensor::key::MultiKey;


pub trait Node: Clone + Default + Accumulate + BinaryWrite + BinaryRead {
    /// Number of axes from this level down to the leaves.
    const DIM: usize;

    /// Ordinate stored in the leaf series.
    type Leaf: Ordinate;
    /// Result of an evaluation at any level.
    type Output: Ordinate;
    /// Leaf axis interpolator.
    type Function: AxisFunction<Ordinate = Self::Leaf, Output = Self::Output>;

    /// Empty node whose outer axes use `strategies`, outermost first.
    fn with_strategies(strategies: &[Algorithm]) -> Self;

    /// Evaluates at `xs`, one abscissa per axis of this level and below.
    fn evaluate_at(&self, xs: &[f64]) -> Result<Self::Output, InterpolationError>;

    /// Puts `y` at `xs`, creating intermediate levels as needed.
    fn insert_at(&mut self, xs: &[f64], y: Self::Leaf) -> Result<(), InterpolationError>;

    /// Compiles every leaf.
    fn compile_all(&mut self) -> Result<(), InterpolationError>;

    /// Replaces the outer-axis strategies of this level and every level below.
    fn set_strategies(&mut self, strategies: &[Algorithm]);

    /// Installs `supervisor` at this level and every level below.
    fn share_supervisor(&mut self, supervisor: &Supervisor<Self::Output>);

    fn leaf_count(&self) -> usize;

    /// Pushes `(key prefix, leaf)` for every leaf, depth first.
    fn collect_leaves<'a>(&'a self, prefix: &mut Vec<f64>, out: &mut Vec<(MultiKey, &'a Self::Function)>);

    /// Calls `f` with `(key prefix, leaf)` for every leaf, depth first.
    fn visit_leaves_mut<E>(
        &mut self,
        prefix: &mut Vec<f64>,
        f: &mut dyn FnMut(&MultiKey, &mut Self::Function) -> Result<(), E>,
    ) -> Result<(), E>;
}


macro_rules! impl_leaf_node {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Accumulate for $ty
            where
                $ty: AxisFunction,
            {
                fn add_assign_from(&mut self, other: &Self) -> Result<(), InterpolationError> {
                    self.series_mut().add(other.series())
                }
                fn sub_assign_from(&mut self, other: &Self) -> Result<(), InterpolationError> {
                    self.series_mut().sub(other.series())
                }
                fn scale(&mut self, factor: f64) {
                    self.series_mut().mul(factor);
                }
            }

            impl<$($gen)*> BinaryWrite for $ty
            where
                $ty: AxisFunction,
                <$ty as AxisFunction>::Ordinate: BinaryWrite,
            {
                fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> Result<(), InterpolationError> {
                    self.series().write_to(w)
                }
            }

            impl<$($gen)*> BinaryRead for $ty
            where
                $ty: AxisFunction,
                <$ty as AxisFunction>::Ordinate: BinaryRead + Default,
            {
                fn read_from<R: Read + ?Sized>(&mut self, r: &mut R) -> Result<(), InterpolationError> {
                    self.series_mut().read_from(r)
                }
            }

            impl<$($gen)*> Node for $ty
            where
                $ty: AxisFunction,
                <$ty as AxisFunction>::Ordinate: BinaryWrite + BinaryRead + Default,
            {
                const DIM: usize = 1;

                type Leaf = <$ty as AxisFunction>::Ordinate;
                type Output = <$ty as AxisFunction>::Output;
                type Function = $ty;

                fn with_strategies(_strategies: &[Algorithm]) -> Self {
                    Self::default()
                }

                fn evaluate_at(&self, xs: &[f64]) -> Result<<Self as Node>::Output, InterpolationError> {
                    match xs {
                        [x] => self.evaluate(*x),
                        _ => Err(InterpolationError::DimensionMismatch { got: xs.len(), expected: 1 }),
                    }
                }

                fn insert_at(&mut self, xs: &[f64], y: <Self as Node>::Leaf) -> Result<(), InterpolationError> {
                    match xs {
                        [x] => {
                            self.put(*x, y);
                            Ok(())
                        }
                        _ => Err(InterpolationError::DimensionMismatch { got: xs.len(), expected: 1 }),
                    }
                }

                fn compile_all(&mut self) -> Result<(), InterpolationError> {
                    AxisFunction::compile(self)
                }

                fn set_strategies(&mut self, _strategies: &[Algorithm]) {}

                fn share_supervisor(&mut self, supervisor: &Supervisor<<Self as Node>::Output>) {
                    AxisFunction::set_supervisor(self, supervisor.clone());
                }

                fn leaf_count(&self) -> usize {
                    1
                }

                fn collect_leaves<'a>(
                    &'a self,
                    prefix: &mut Vec<f64>,
                    out: &mut Vec<(MultiKey, &'a Self::Function)>,
                ) {
                    out.push((MultiKey::from(prefix.as_slice()), self));
                }

                fn visit_leaves_mut<E>(
                    &mut self,
                    prefix: &mut Vec<f64>,
                    f: &mut dyn FnMut(&MultiKey, &mut Self::Function) -> Result<(), E>,
                ) -> Result<(), E> {
                    f(&MultiKey::from(prefix.as_slice()), self)
                }
            }
        )*
    };
}

impl_leaf_node!(
    [O: Ordinate] NearestFunction<O>,
    [O: Ordinate, M: Mode] LinearFunction<O, M>,
    [const N: usize, O: Ordinate, M: Mode] PolintFunction<N, O, M>,
    [O: Ordinate, M: Mode] SplineFunction<O, M>,
    [O: Ordinate, M: Mode] HermiteFunction<O, M>,
);
