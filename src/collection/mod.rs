//! Sample containers.
//!
//! ├ [`DistanceMetric`] : signed abscissa distance and equality tolerance
//! ├ [`Element`]        : one `(abscissa, ordinate)` sample
//! ├ [`Series`]         : ascending, coalescing sequence of elements
//! ├ [`Grid`]           : equidistant abscissa set, O(1) lookup layout
//! ├ [`Histogram1D`]    : binned accumulation with under-/overflow
//! └ [`toolkit`]        : trapezoid integrals, densities and inverse CDFs

pub mod distance;
pub mod element;
pub mod grid;
pub mod histogram;
pub mod series;
pub mod toolkit;

pub use distance::{DistanceMetric, DEFAULT_PRECISION};
pub use element::Element;
pub use grid::{Abscissae, Grid};
pub use histogram::Histogram1D;
pub use series::{Layout, Series};
pub use toolkit::{integrate, make_cdf, to_probability_density};
