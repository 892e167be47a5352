use thiserror::Error;

use crate::samples::SampleError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IntegrationError {
    #[error(transparent)]
    Samples(#[from] SampleError),

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("x-values must be strictly increasing: x[{idx}] = {got} follows {prev}")]
    UnsortedSamples { idx: usize, prev: f64, got: f64 },

    #[error("invalid spacing dx: must be finite and > 0. got {got}")]
    InvalidSpacing { got: f64 },
}
