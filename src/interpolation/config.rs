//! Builder configuration for axis interpolators.
//!
//! Provides [`CommonCfg`] with the sample slices, the abscissa precision and
//! the lookup layout, shared by all builders through `impl_common_cfg!`.
//!
//! [`CommonCfg`] : universal fields
//! ├ `x`         : abscissas, strictly increasing
//! ├ `y`         : ordinates
//! ├ `precision` : equality tolerance of the distance metric
//! └ `layout`    : ordered (binary search) or grid (O(1)) lookup
//!
//! Builders
//! ├ [`AxisCfg`]    : any axis interpolator over `f64` samples
//! ├ [`SplineCfg`]  : cubic spline with optional boundary slopes
//! └ [`HermiteCfg`] : Hermite spline with the monotone switch

use crate::collection::{DistanceMetric, Layout, Series, DEFAULT_PRECISION};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::spline::{HermiteFunction, SplineBounds, SplineFunction};
use crate::interpolation::traits::{AxisFunction, Mode};


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x: &'a [f64],
    pub(crate) y: &'a [f64],
    pub(crate) precision: f64,
    pub(crate) layout: Layout,
}

impl<'a> Default for CommonCfg<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self { x: &[], y: &[], precision: DEFAULT_PRECISION, layout: Layout::Ordered }
    }

    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x = self.x;
        let y = self.y;

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if x.len() < 2 {
            return Err(InterpolationError::InsufficientData { got: x.len(), need: 2 });
        }
        Ok(())
    }

    /// Validated samples as a series.
    pub fn series(&self) -> Result<Series<f64>, InterpolationError> {
        self.validate()?;
        let metric = DistanceMetric::new(self.precision)?;
        let mut series = Series::with_metric(metric).set_layout(self.layout);
        series.extend(self.x.iter().copied().zip(self.y.iter().copied()));
        Ok(series)
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn precision(&self) -> f64 { self.precision }
    pub fn layout(&self) -> Layout { self.layout }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a [f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a [f64]) { self.y = v; }
    pub(crate) fn with_precision(&mut self, v: f64) { self.precision = v; }
    pub(crate) fn with_layout(&mut self, v: Layout) { self.layout = v; }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

/// Strictly increasing, with neighbours further apart than `precision`.
pub(crate) fn check_abscissas(xs: &[f64], precision: f64) -> Result<(), InterpolationError> {
    for i in 1..xs.len() {
        if (xs[i] - xs[i - 1]).abs() <= precision {
            return Err(InterpolationError::DuplicateX { x1: xs[i - 1], x2: xs[i] });
        }
        if xs[i] <= xs[i - 1] {
            return Err(InterpolationError::NonIncreasingX);
        }
    }
    Ok(())
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }
                $crate::interpolation::config::check_abscissas(v, self.common.precision)?;

                // length agreement, symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != v.len() {
                    return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
                }

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                let x_len = self.common.x.len();
                let y_len = v.len();
                if x_len != 0 && y_len != x_len {
                    return Err(InterpolationError::UnequalLength { x_len, y_len });
                }

                self.common.with_y(v);
                Ok(self)
            }

            pub fn set_precision(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidPrecision { got: v });
                }
                // abscissas set earlier must stay distinct under the new tolerance
                $crate::interpolation::config::check_abscissas(self.common.x, v)?;

                self.common.with_precision(v);
                Ok(self)
            }

            #[must_use]
            pub fn set_layout(mut self, v: $crate::collection::Layout) -> Self {
                self.common.with_layout(v);
                self
            }
        }
    };
}
pub(crate) use impl_common_cfg;


/// Generic builder: validated samples into any axis interpolator.
///
/// # Construction
/// - Use [`AxisCfg::new`] then setters, finish with [`AxisCfg::build`].
///
/// # Defaults
/// - Precision [`DEFAULT_PRECISION`], ordered layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisCfg<'a> {
    common: CommonCfg<'a>,
}

impl<'a> AxisCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }

    /// Builds and compiles the interpolator.
    pub fn build<F>(&self) -> Result<F, InterpolationError>
    where
        F: AxisFunction<Ordinate = f64>,
    {
        let mut f = F::from_series(self.common.series()?);
        f.compile()?;
        Ok(f)
    }
}
impl_common_cfg!(AxisCfg<'a>);


/// Cubic spline builder.
///
/// # Fields
/// - `common` : [`CommonCfg`]
/// - `bounds` : optional first derivatives at either end; natural if unset
#[derive(Debug, Clone, Copy, Default)]
pub struct SplineCfg<'a> {
    common: CommonCfg<'a>,
    bounds: SplineBounds<f64>,
}

impl<'a> SplineCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), bounds: SplineBounds::natural() }
    }

    pub fn set_fp_at_x_min(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() {
            return Err(InterpolationError::NonFiniteVec { idx: 0 });
        }
        self.bounds = self.bounds.set_fp_at_x_min(v);
        Ok(self)
    }

    pub fn set_fp_at_x_max(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() {
            return Err(InterpolationError::NonFiniteVec { idx: 0 });
        }
        self.bounds = self.bounds.set_fp_at_x_max(v);
        Ok(self)
    }

    pub fn build<M>(&self) -> Result<SplineFunction<f64, M>, InterpolationError>
    where
        M: Mode,
        SplineFunction<f64, M>: AxisFunction<Ordinate = f64>,
    {
        let mut f = SplineFunction::<f64, M>::from_series(self.common.series()?);
        f.set_bounds(self.bounds);
        f.compile()?;
        Ok(f)
    }
}
impl_common_cfg!(SplineCfg<'a>);


/// Hermite spline builder.
///
/// # Fields
/// - `common`   : [`CommonCfg`]
/// - `monotone` : apply the Fritsch-Carlson limiter (default `true`)
#[derive(Debug, Clone, Copy)]
pub struct HermiteCfg<'a> {
    common: CommonCfg<'a>,
    monotone: bool,
}

impl<'a> Default for HermiteCfg<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> HermiteCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), monotone: true }
    }

    #[must_use]
    pub fn set_monotone(mut self, v: bool) -> Self {
        self.monotone = v;
        self
    }

    pub fn build<M>(&self) -> Result<HermiteFunction<f64, M>, InterpolationError>
    where
        M: Mode,
        HermiteFunction<f64, M>: AxisFunction<Ordinate = f64>,
    {
        let mut f = HermiteFunction::<f64, M>::from_series(self.common.series()?);
        f.set_monotone(self.monotone);
        f.compile()?;
        Ok(f)
    }
}
impl_common_cfg!(HermiteCfg<'a>);
