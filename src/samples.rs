//! Paired `(x, y)` sample sets shared by every algorithm.
//!
//! [`Samples`] borrows two slices and checks the invariants common to all
//! consumers:
//! ├ both slices non-empty
//! ├ equal length
//! └ every value finite
//!
//! Algorithm-specific requirements (distinct nodes, ordering, minimum
//! point counts) are checked by the algorithm that needs them.

use thiserror::Error;


#[derive(Debug, Error, Clone, PartialEq)]
pub enum SampleError {
    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },
}


/// Validated pair of sample slices.
#[derive(Debug, Copy, Clone)]
pub struct Samples<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl<'a> Samples<'a> {
    pub fn new(x: &'a [f64], y: &'a [f64]) -> Result<Self, SampleError> {
        if x.is_empty() || y.is_empty() {
            return Err(SampleError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(SampleError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if let Some(idx) = non_finite_idx(x) {
            return Err(SampleError::NonFiniteVec { idx });
        }
        if let Some(idx) = non_finite_idx(y) {
            return Err(SampleError::NonFiniteVec { idx });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn len(&self) -> usize { self.x.len() }

    /// Always `false` for a constructed set.
    pub fn is_empty(&self) -> bool { self.x.is_empty() }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}
