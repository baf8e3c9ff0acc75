pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod result;
pub mod supervisor;
pub mod traits;
pub use algorithms::{Algorithm, Interpolant};
pub use traits::{AxisFunction, Mode, Plain, WithDerivative, WithHesse, WithIntegral};

pub(crate) mod bracket;

pub mod linear;
pub mod nearest;
pub mod polint;
pub mod spline;

pub use linear::LinearFunction;
pub use nearest::NearestFunction;
pub use polint::PolintFunction;
pub use spline::{HermiteFunction, SplineBounds, SplineFunction};
