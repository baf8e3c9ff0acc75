use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("value {got} out of range [{x_min}, {x_max}]")]
    ValueOutOfRange { got: f64, x_min: f64, x_max: f64 },

    #[error("insufficient data: got {got} samples, need at least {need}")]
    InsufficientData { got: usize, need: usize },

    #[error("division by zero in {context}")]
    DivisionByZero { context: &'static str },

    #[error("operation on an empty collection")]
    EmptyCollection,

    #[error("structurally incompatible collections: {context}")]
    StructuralIncompatibility { context: &'static str },

    #[error("key has {got} coordinates, map has {expected} dimensions")]
    DimensionMismatch { got: usize, expected: usize },

    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("x-values must be strictly increasing")]
    NonIncreasingX,

    #[error("invalid precision {got}, must be finite and > 0")]
    InvalidPrecision { got: f64 },

    #[error("unknown transformer tag {tag}")]
    UnknownTransformer { tag: i32 },

    #[error("negative element count {count} in binary stream")]
    NegativeCount { count: i32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl InterpolationError {
    /// Whether this error is an out-of-range query; below or above the domain.
    pub fn out_of_range_side(&self) -> Option<std::cmp::Ordering> {
        match *self {
            InterpolationError::ValueOutOfRange { got, x_min, .. } if got < x_min => {
                Some(std::cmp::Ordering::Less)
            }
            InterpolationError::ValueOutOfRange { .. } => Some(std::cmp::Ordering::Greater),
            _ => None,
        }
    }
}
