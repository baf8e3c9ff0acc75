pub mod blur;
pub mod config;
pub mod errors;
pub mod gauss;
pub mod kernels;
pub mod rule;

pub(crate) mod roots;

pub use blur::{blur_function, gaussian_blur};
pub use config::QuadratureCfg;
pub use errors::QuadratureError;
pub use rule::Quadrature;
