use thiserror::Error;

use crate::interpolation::errors::InterpolationError;

#[derive(Debug, Error)]
pub enum QuadratureError {
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    #[error("invalid number of points {got}, need at least {need}")]
    InvalidPoints { got: usize, need: usize },

    #[error("invalid tolerance {got}, must be finite and > 0")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter {got}, must be > 0")]
    InvalidMaxIter { got: usize },

    #[error("invalid parameter {name} = {got}")]
    InvalidParameter { name: &'static str, got: f64 },
}
