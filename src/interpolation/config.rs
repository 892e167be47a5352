//! Shared configuration for interpolation.
//!
//! Two nodes are duplicates when their gap is within [`DEFAULT_REL_TOL`] of
//! their magnitude, so repeated values are caught at any scale. An absolute
//! floor ([`DEFAULT_X_TOL`], off by default) can be raised per call.
//!
//! [`CommonCfg`] universal fields
//! - `x`             : x values provided (sample times)
//! - `y`             : y values provided (sample values)
//! - `x_eval`        : x values to evaluate
//! - `x_min_spacing` : absolute floor; nodes closer than this are duplicates
//!
//! [`CommonCfg::new`] initializes configuration with empty slices.


use std::cmp::Ordering;

use crate::interpolation::errors::InterpolationError;
use crate::samples::{Samples, SampleError, non_finite_idx};

/// Relative gap `|x_j - x_i| / max(|x_i|, |x_j|)` at or below which two
/// nodes are the same value up to rounding.
pub const DEFAULT_REL_TOL: f64 = 4.0 * f64::EPSILON;

/// Absolute spacing floor; `0.0` disables it.
pub const DEFAULT_X_TOL: f64 = 0.0;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],
    pub(crate) x_min_spacing: f64,
}

impl<'a> Default for CommonCfg<'a> {
    fn default() -> Self { Self::new() }
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_eval : &[],
            x_min_spacing: DEFAULT_X_TOL,
        }
    }

    /// Full check run by the algorithm before any arithmetic.
    ///
    /// ┌ paired samples valid ([`Samples::new`])
    /// └ no two nodes equal up to rounding or closer than `x_min_spacing`
    pub fn validate(&self) -> Result<Samples<'a>, InterpolationError> {
        let samples = Samples::new(self.x, self.y)?;
        check_distinct_nodes(samples.x(), self.x_min_spacing)?;
        Ok(samples)
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self)  -> f64 { self.x_min_spacing }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a [f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a [f64]) { self.y = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a [f64]) { self.x_eval = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }

    pub(crate) fn check_x(&self, v: &[f64]) -> Result<(), InterpolationError> {
        if v.is_empty() {
            return Err(SampleError::EmptyInput.into());
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(SampleError::NonFiniteVec { idx }.into());
        }
        // length agreement check
        // symmetric with check_y
        let y_len = self.y.len();
        if y_len != 0 && y_len != v.len() {
            return Err(SampleError::UnequalLength { x_len: v.len(), y_len }.into());
        }
        Ok(())
    }

    pub(crate) fn check_y(&self, v: &[f64]) -> Result<(), InterpolationError> {
        if v.is_empty() {
            return Err(SampleError::EmptyInput.into());
        }
        if let Some(idx) = non_finite_idx(v) {
            return Err(SampleError::NonFiniteVec { idx }.into());
        }
        let x_len = self.x.len();
        if x_len != 0 && x_len != v.len() {
            return Err(SampleError::UnequalLength { x_len, y_len: v.len() }.into());
        }
        Ok(())
    }
}


/// Rejects any two nodes that are equal up to [`DEFAULT_REL_TOL`] or closer
/// than `min_spacing`.
///
/// Nodes need not be sorted; a sorted index permutation is checked
/// pairwise instead, so this is O(n log n).
pub(crate) fn check_distinct_nodes(x: &[f64], min_spacing: f64) -> Result<(), InterpolationError> {
    let mut order: Vec<usize> = (0..x.len()).collect();
    order.sort_by(|&i, &j| x[i].partial_cmp(&x[j]).unwrap_or(Ordering::Equal));

    for w in order.windows(2) {
        let (i, j) = (w[0], w[1]);
        let gap   = (x[j] - x[i]).abs();
        let scale = x[i].abs().max(x[j].abs());
        if gap <= DEFAULT_REL_TOL * scale || gap < min_spacing {
            return Err(InterpolationError::DuplicateNode {
                first : i.min(j),
                second: i.max(j),
                x     : x[i],
            });
        }
    }
    Ok(())
}
