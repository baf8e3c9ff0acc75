pub mod cubic;
pub mod monotonic;
pub(crate) mod helpers;

pub use cubic::{SplineBounds, SplineFunction};
pub use monotonic::HermiteFunction;
