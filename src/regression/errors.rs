use thiserror::Error;

use crate::samples::SampleError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegressionError {
    #[error(transparent)]
    Samples(#[from] SampleError),

    #[error("insufficient data: got {got} point(s), need at least 2")]
    InsufficientData { got: usize },

    #[error("singular fit: all {n} x-values are identical ({x}), slope is undefined")]
    SingularFit { n: usize, x: f64 },
}
