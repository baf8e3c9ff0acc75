//! Multidimensional interpolation engine.
//!
//! Samples are stored in axis-ordered [`collection::Series`] and evaluated through
//! one-dimensional axis interpolators, which are nested per axis into an
//! N-dimensional [`tensor::MultiMap`].
//!
//! ├ [`collection`]    : distance metric, elements, ordered/grid series, histograms
//! ├ [`interpolation`] : axis interpolators, result types, supervisors, configs
//! ├ [`quadrature`]    : Gauss-family integration rules and domain kernels
//! ├ [`tensor`]        : recursive tensor maps, multi-keys, transformers
//! └ [`io`]            : little-endian binary persistence

pub mod collection;
pub mod interpolation;
pub mod io;
pub mod quadrature;
pub mod tensor;

pub mod prelude {
    pub use crate::collection::{DistanceMetric, Element, Grid, Histogram1D, Layout, Series};
    pub use crate::interpolation::errors::InterpolationError;
    pub use crate::interpolation::result::{Derivative, Hesse, Ordinate, Pdf, Polynome};
    pub use crate::interpolation::supervisor::Supervisor;
    pub use crate::interpolation::traits::AxisFunction;
    pub use crate::interpolation::{
        HermiteFunction, LinearFunction, NearestFunction, PolintFunction, SplineFunction,
    };
    pub use crate::tensor::{MultiKey, MultiMap, Node, TransformableMap};
}
