use thiserror::Error;

use crate::samples::SampleError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InterpolationError {
    #[error(transparent)]
    Samples(#[from] SampleError),

    #[error("duplicate x-values detected at indices {first} and {second}: x = {x}")]
    DuplicateNode { first: usize, second: usize, x: f64 },

    #[error("non-finite interpolation coefficient at index {idx}: samples overflow f64")]
    NonFiniteCoefficient { idx: usize },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },
}
