//! Root-finding error types shared by every bracketing method.
//!
//! [`RootFindingError`] : common runtime errors
//! ├ non-finite function evaluation
//! └ invalid configuration (tolerance, max_iter)
//!
//! Method-specific failures (no bracket, no convergence) live next to the
//! method, e.g. [`crate::root_finding::bisection::BisectionError`].


use thiserror::Error;


#[derive(Debug, Error, Clone, PartialEq)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}
