//! Algebraic value carriers returned by interpolators.
//!
//! Every result type is closed under negate/add/sub/scale, so that an outer
//! axis can interpolate over the results of the inner axes exactly as it would
//! over plain ordinates.
//!
//! ├ `f64`              : plain value
//! ├ [`Derivative`]     : value and first derivative
//! ├ [`Hesse`]          : value, first and second derivative
//! ├ [`Pdf`]            : value, derivative, partial and total integral
//! └ [`Polynome`]       : value and derivatives up to order `N - 1`

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Zero;

use crate::interpolation::errors::InterpolationError;

/// Ordinate algebra shared by stored samples and interpolation results.
///
/// Components give flat access to the underlying `f64` values; the monotone
/// Hermite limiter works per component and the binary codec writes them in order.
pub trait Ordinate:
    Copy
    + Debug
    + PartialEq
    + Zero
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
    + Accumulate
    + 'static
{
    const DIM: usize;

    fn component(&self, k: usize) -> f64;
    fn component_mut(&mut self, k: usize) -> &mut f64;

    /// Adjusts abscissa-dependent parts after the abscissa was stretched by `z`.
    #[inline]
    fn rescale_abscissa(self, _z: f64) -> Self {
        self
    }
}

impl Ordinate for f64 {
    const DIM: usize = 1;

    #[inline]
    fn component(&self, _k: usize) -> f64 {
        *self
    }
    #[inline]
    fn component_mut(&mut self, _k: usize) -> &mut f64 {
        self
    }
}


/// Fallible in-place arithmetic used by series and tensor map merges.
pub trait Accumulate {
    fn add_assign_from(&mut self, other: &Self) -> Result<(), InterpolationError>;
    fn sub_assign_from(&mut self, other: &Self) -> Result<(), InterpolationError>;
    fn scale(&mut self, factor: f64);

    fn negate(&mut self) {
        self.scale(-1.0);
    }
}

macro_rules! impl_accumulate_for_ordinate {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Accumulate for $ty {
                #[inline]
                fn add_assign_from(&mut self, other: &Self) -> Result<(), InterpolationError> {
                    *self = *self + *other;
                    Ok(())
                }
                #[inline]
                fn sub_assign_from(&mut self, other: &Self) -> Result<(), InterpolationError> {
                    *self = *self - *other;
                    Ok(())
                }
                #[inline]
                fn scale(&mut self, factor: f64) {
                    *self = *self * factor;
                }
            }
        )*
    };
}

impl_accumulate_for_ordinate!(f64);

impl<T: Ordinate> Accumulate for Derivative<T> {
    fn add_assign_from(&mut self, other: &Self) -> Result<(), InterpolationError> {
        *self = *self + *other;
        Ok(())
    }
    fn sub_assign_from(&mut self, other: &Self) -> Result<(), InterpolationError> {
        *self = *self - *other;
        Ok(())
    }
    fn scale(&mut self, factor: f64) {
        *self = *self * factor;
    }
}

impl<T: Ordinate> Accumulate for Hesse<T> {
    fn add_assign_from(&mut self, other: &Self) -> Result<(), InterpolationError> {
        *self = *self + *other;
        Ok(())
    }
    fn sub_assign_from(&mut self, other: &Self) -> Result<(), InterpolationError> {
        *self = *self - *other;
        Ok(())
    }
    fn scale(&mut self, factor: f64) {
        *self = *self * factor;
    }
}

impl<T: Ordinate> Accumulate for Pdf<T> {
    fn add_assign_from(&mut self, other: &Self) -> Result<(), InterpolationError> {
        *self = *self + *other;
        Ok(())
    }
    fn sub_assign_from(&mut self, other: &Self) -> Result<(), InterpolationError> {
        *self = *self - *other;
        Ok(())
    }
    fn scale(&mut self, factor: f64) {
        *self = *self * factor;
    }
}

impl<const N: usize, T: Ordinate> Accumulate for Polynome<N, T> {
    fn add_assign_from(&mut self, other: &Self) -> Result<(), InterpolationError> {
        *self = *self + *other;
        Ok(())
    }
    fn sub_assign_from(&mut self, other: &Self) -> Result<(), InterpolationError> {
        *self = *self - *other;
        Ok(())
    }
    fn scale(&mut self, factor: f64) {
        *self = *self * factor;
    }
}


/// Value and first derivative.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Derivative<T = f64> {
    pub f: T,
    pub fp: T,
}

impl<T: Ordinate> Derivative<T> {
    pub fn new(f: T, fp: T) -> Self {
        Self { f, fp }
    }
}

impl Derivative<f64> {
    /// Poisson probability of zero hits (`hit == false`) or of at least one hit,
    /// taking `f` as the expectation value.
    pub fn probability(&self, hit: bool) -> f64 {
        if hit {
            1.0 - (-self.f).exp()
        } else {
            (-self.f).exp()
        }
    }

    pub fn chi2(&self, hit: bool) -> f64 {
        if hit {
            -self.probability(true).ln()
        } else {
            self.f
        }
    }

    pub fn derivative_of_chi2(&self, hit: bool) -> f64 {
        if hit {
            -self.fp * self.probability(false) / self.probability(true)
        } else {
            self.fp
        }
    }
}

impl<T: Ordinate> Add for Derivative<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { f: self.f + rhs.f, fp: self.fp + rhs.fp }
    }
}
impl<T: Ordinate> Sub for Derivative<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { f: self.f - rhs.f, fp: self.fp - rhs.fp }
    }
}
impl<T: Ordinate> Neg for Derivative<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self { f: -self.f, fp: -self.fp }
    }
}
impl<T: Ordinate> Mul<f64> for Derivative<T> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { f: self.f * rhs, fp: self.fp * rhs }
    }
}
impl<T: Ordinate> Div<f64> for Derivative<T> {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self { f: self.f / rhs, fp: self.fp / rhs }
    }
}
impl<T: Ordinate> Zero for Derivative<T> {
    fn zero() -> Self {
        Self { f: T::zero(), fp: T::zero() }
    }
    fn is_zero(&self) -> bool {
        self.f.is_zero() && self.fp.is_zero()
    }
}
impl<T: Ordinate> Ordinate for Derivative<T> {
    const DIM: usize = 2 * T::DIM;

    fn component(&self, k: usize) -> f64 {
        if k < T::DIM { self.f.component(k) } else { self.fp.component(k - T::DIM) }
    }
    fn component_mut(&mut self, k: usize) -> &mut f64 {
        if k < T::DIM { self.f.component_mut(k) } else { self.fp.component_mut(k - T::DIM) }
    }
    fn rescale_abscissa(self, z: f64) -> Self {
        Self { f: self.f, fp: self.fp / z }
    }
}


/// Value, first and second derivative.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hesse<T = f64> {
    pub f: T,
    pub fp: T,
    pub fpp: T,
}

impl<T: Ordinate> Hesse<T> {
    pub fn new(f: T, fp: T, fpp: T) -> Self {
        Self { f, fp, fpp }
    }
}

impl<T: Ordinate> Add for Hesse<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { f: self.f + rhs.f, fp: self.fp + rhs.fp, fpp: self.fpp + rhs.fpp }
    }
}
impl<T: Ordinate> Sub for Hesse<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { f: self.f - rhs.f, fp: self.fp - rhs.fp, fpp: self.fpp - rhs.fpp }
    }
}
impl<T: Ordinate> Neg for Hesse<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self { f: -self.f, fp: -self.fp, fpp: -self.fpp }
    }
}
impl<T: Ordinate> Mul<f64> for Hesse<T> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { f: self.f * rhs, fp: self.fp * rhs, fpp: self.fpp * rhs }
    }
}
impl<T: Ordinate> Div<f64> for Hesse<T> {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self { f: self.f / rhs, fp: self.fp / rhs, fpp: self.fpp / rhs }
    }
}
impl<T: Ordinate> Zero for Hesse<T> {
    fn zero() -> Self {
        Self { f: T::zero(), fp: T::zero(), fpp: T::zero() }
    }
    fn is_zero(&self) -> bool {
        self.f.is_zero() && self.fp.is_zero() && self.fpp.is_zero()
    }
}
impl<T: Ordinate> Ordinate for Hesse<T> {
    const DIM: usize = 3 * T::DIM;

    fn component(&self, k: usize) -> f64 {
        match k / T::DIM {
            0 => self.f.component(k),
            1 => self.fp.component(k - T::DIM),
            _ => self.fpp.component(k - 2 * T::DIM),
        }
    }
    fn component_mut(&mut self, k: usize) -> &mut f64 {
        match k / T::DIM {
            0 => self.f.component_mut(k),
            1 => self.fp.component_mut(k - T::DIM),
            _ => self.fpp.component_mut(k - 2 * T::DIM),
        }
    }
    fn rescale_abscissa(self, z: f64) -> Self {
        Self { f: self.f, fp: self.fp / z, fpp: self.fpp / (z * z) }
    }
}


/// Probability density with its partial integral `v` from the lower edge and
/// the total integral over the domain.
///
/// Used for "probability of first event" evaluation: the density of the first
/// hit at `x` is `f·exp(-v)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pdf<T = f64> {
    pub f: T,
    pub fp: T,
    pub v: T,
    pub total: T,
}

impl<T: Ordinate> Pdf<T> {
    pub fn new(f: T, fp: T, v: T, total: T) -> Self {
        Self { f, fp, v, total }
    }
}

impl Pdf<f64> {
    /// Uniform density `r` over `[x_min, x_max]` evaluated at `x`.
    pub fn constant(r: f64, x_min: f64, x_max: f64, x: f64) -> Self {
        let xc = x.clamp(x_min, x_max);
        Self { f: r, fp: 0.0, v: r * (xc - x_min), total: r * (x_max - x_min) }
    }

    /// Probability density of the first hit at this abscissa.
    pub fn probability(&self) -> f64 {
        (-self.v).exp() * self.f / (1.0 - (-self.total).exp())
    }

    pub fn chi2(&self) -> f64 {
        -self.probability().ln()
    }

    pub fn derivative_of_chi2(&self) -> f64 {
        self.fp / self.f - self.f
    }
}

impl<T: Ordinate> Add for Pdf<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            f: self.f + rhs.f,
            fp: self.fp + rhs.fp,
            v: self.v + rhs.v,
            total: self.total + rhs.total,
        }
    }
}
impl<T: Ordinate> Sub for Pdf<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            f: self.f - rhs.f,
            fp: self.fp - rhs.fp,
            v: self.v - rhs.v,
            total: self.total - rhs.total,
        }
    }
}
impl<T: Ordinate> Neg for Pdf<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self { f: -self.f, fp: -self.fp, v: -self.v, total: -self.total }
    }
}
impl<T: Ordinate> Mul<f64> for Pdf<T> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self { f: self.f * rhs, fp: self.fp * rhs, v: self.v * rhs, total: self.total * rhs }
    }
}
impl<T: Ordinate> Div<f64> for Pdf<T> {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self { f: self.f / rhs, fp: self.fp / rhs, v: self.v / rhs, total: self.total / rhs }
    }
}
impl<T: Ordinate> Zero for Pdf<T> {
    fn zero() -> Self {
        Self { f: T::zero(), fp: T::zero(), v: T::zero(), total: T::zero() }
    }
    fn is_zero(&self) -> bool {
        self.f.is_zero() && self.fp.is_zero() && self.v.is_zero() && self.total.is_zero()
    }
}
impl<T: Ordinate> Ordinate for Pdf<T> {
    const DIM: usize = 4 * T::DIM;

    fn component(&self, k: usize) -> f64 {
        match k / T::DIM {
            0 => self.f.component(k),
            1 => self.fp.component(k - T::DIM),
            2 => self.v.component(k - 2 * T::DIM),
            _ => self.total.component(k - 3 * T::DIM),
        }
    }
    fn component_mut(&mut self, k: usize) -> &mut f64 {
        match k / T::DIM {
            0 => self.f.component_mut(k),
            1 => self.fp.component_mut(k - T::DIM),
            2 => self.v.component_mut(k - 2 * T::DIM),
            _ => self.total.component_mut(k - 3 * T::DIM),
        }
    }
    fn rescale_abscissa(self, z: f64) -> Self {
        Self { f: self.f, fp: self.fp / z, v: self.v * z, total: self.total * z }
    }
}


/// Value and derivatives `y[k] = d^k f / dx^k` for `k < N`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Polynome<const N: usize, T = f64> {
    pub y: [T; N],
}

impl<const N: usize, T: Ordinate> Polynome<N, T> {
    pub fn new(y: [T; N]) -> Self {
        Self { y }
    }

    /// Taylor expansion around the evaluation point, at offset `dx`.
    pub fn value_at(&self, dx: f64) -> T {
        let mut w = T::zero();
        let mut z = 1.0;
        for (i, yi) in self.y.iter().enumerate() {
            if i != 0 {
                z *= dx / i as f64;
            }
            w = w + *yi * z;
        }
        w
    }
}

impl<const N: usize, T: Ordinate> Add for Polynome<N, T> {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        for (a, b) in self.y.iter_mut().zip(rhs.y) {
            *a = *a + b;
        }
        self
    }
}
impl<const N: usize, T: Ordinate> Sub for Polynome<N, T> {
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        for (a, b) in self.y.iter_mut().zip(rhs.y) {
            *a = *a - b;
        }
        self
    }
}
impl<const N: usize, T: Ordinate> Neg for Polynome<N, T> {
    type Output = Self;
    fn neg(mut self) -> Self {
        for a in self.y.iter_mut() {
            *a = -*a;
        }
        self
    }
}
impl<const N: usize, T: Ordinate> Mul<f64> for Polynome<N, T> {
    type Output = Self;
    fn mul(mut self, rhs: f64) -> Self {
        for a in self.y.iter_mut() {
            *a = *a * rhs;
        }
        self
    }
}
impl<const N: usize, T: Ordinate> Div<f64> for Polynome<N, T> {
    type Output = Self;
    fn div(mut self, rhs: f64) -> Self {
        for a in self.y.iter_mut() {
            *a = *a / rhs;
        }
        self
    }
}
impl<const N: usize, T: Ordinate> Zero for Polynome<N, T> {
    fn zero() -> Self {
        Self { y: [T::zero(); N] }
    }
    fn is_zero(&self) -> bool {
        self.y.iter().all(Zero::is_zero)
    }
}
impl<const N: usize, T: Ordinate> Ordinate for Polynome<N, T> {
    const DIM: usize = N * T::DIM;

    fn component(&self, k: usize) -> f64 {
        self.y[k / T::DIM].component(k % T::DIM)
    }
    fn component_mut(&mut self, k: usize) -> &mut f64 {
        self.y[k / T::DIM].component_mut(k % T::DIM)
    }
    fn rescale_abscissa(mut self, z: f64) -> Self {
        let mut zk = 1.0;
        for a in self.y.iter_mut() {
            *a = *a / zk;
            zk *= z;
        }
        self
    }
}


macro_rules! impl_default_as_zero {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Default for $ty {
                fn default() -> Self {
                    Self::zero()
                }
            }
        )*
    };
}

impl_default_as_zero!(
    [T: Ordinate] Derivative<T>,
    [T: Ordinate] Hesse<T>,
    [T: Ordinate] Pdf<T>,
    [const N: usize, T: Ordinate] Polynome<N, T>,
);

/// Uniform accessors over the scalar result types.
pub trait ResultValue {
    fn value(&self) -> f64;

    fn derivative(&self) -> Option<f64> {
        None
    }
    fn integral(&self) -> Option<f64> {
        None
    }
    fn total_integral(&self) -> Option<f64> {
        None
    }
}

impl ResultValue for f64 {
    fn value(&self) -> f64 {
        *self
    }
}

impl ResultValue for Derivative<f64> {
    fn value(&self) -> f64 {
        self.f
    }
    fn derivative(&self) -> Option<f64> {
        Some(self.fp)
    }
}

impl ResultValue for Hesse<f64> {
    fn value(&self) -> f64 {
        self.f
    }
    fn derivative(&self) -> Option<f64> {
        Some(self.fp)
    }
}

impl ResultValue for Pdf<f64> {
    fn value(&self) -> f64 {
        self.f
    }
    fn derivative(&self) -> Option<f64> {
        Some(self.fp)
    }
    fn integral(&self) -> Option<f64> {
        Some(self.v)
    }
    fn total_integral(&self) -> Option<f64> {
        Some(self.total)
    }
}

impl<const N: usize> ResultValue for Polynome<N, f64> {
    fn value(&self) -> f64 {
        self.y.first().copied().unwrap_or(0.0)
    }
    fn derivative(&self) -> Option<f64> {
        self.y.get(1).copied()
    }
}
