//! Trapezoidal Rule
//!
//! Integrates raw samples with the composite
//! [trapezoidal rule](https://en.wikipedia.org/wiki/Trapezoidal_rule):
//!
//! ```text
//! ∫ y dx ≈ Σ_{i=1}^{n-1} (x[i] - x[i-1]) (y[i] + y[i-1]) / 2
//! ```
//!
//! The samples themselves are integrated; no interpolant is involved.
//! Integrating velocity samples over time gives displacement.


use crate::integration::errors::IntegrationError;
use crate::samples::{Samples, SampleError, non_finite_idx};


/// Validates samples for integration and returns them.
///
/// ┌ paired samples valid ([`Samples::new`])
/// ├ at least 2 points
/// └ `x` strictly increasing
fn validate<'a>(x: &'a [f64], y: &'a [f64]) -> Result<Samples<'a>, IntegrationError> {
    let samples = Samples::new(x, y)?;
    if samples.len() < 2 {
        return Err(IntegrationError::InsufficientPoints { got: samples.len() });
    }
    for i in 1..x.len() {
        if x[i] <= x[i - 1] {
            return Err(IntegrationError::UnsortedSamples { idx: i, prev: x[i - 1], got: x[i] });
        }
    }
    Ok(samples)
}

#[inline]
fn panel(x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    (x1 - x0) * (y0 + y1) * 0.5
}


/// Integral of the sampled data over `[x[0], x[n-1]]`.
///
/// # Errors
/// ┌ [`IntegrationError::Samples`]            empty, unequal or non-finite input
/// ├ [`IntegrationError::InsufficientPoints`] fewer than 2 points
/// └ [`IntegrationError::UnsortedSamples`]    `x` not strictly increasing
pub fn trapezoid(x: &[f64], y: &[f64]) -> Result<f64, IntegrationError> {
    validate(x, y)?;
    let total = x
        .windows(2)
        .zip(y.windows(2))
        .map(|(xw, yw)| panel(xw[0], xw[1], yw[0], yw[1]))
        .sum();
    Ok(total)
}


/// Running integral; element `i` is the area over `[x[0], x[i]]`.
///
/// The result has the same length as the input and starts at `0.0`, so it
/// pairs index-for-index with `x` (e.g. position at each sample time).
///
/// # Errors
/// Same as [`trapezoid`].
pub fn cumulative_trapezoid(x: &[f64], y: &[f64]) -> Result<Vec<f64>, IntegrationError> {
    validate(x, y)?;

    let mut out = Vec::with_capacity(x.len());
    let mut acc = 0.0;
    out.push(acc);
    for i in 1..x.len() {
        acc += panel(x[i - 1], x[i], y[i - 1], y[i]);
        out.push(acc);
    }
    Ok(out)
}


/// Trapezoidal rule for samples spaced `dx` apart.
///
/// `dx * (Σy - (y[0] + y[n-1]) / 2)`
///
/// # Errors
/// ┌ [`IntegrationError::InvalidSpacing`]     `dx` non-finite or <= 0
/// ├ [`IntegrationError::Samples`]            empty or non-finite `y`
/// └ [`IntegrationError::InsufficientPoints`] fewer than 2 points
pub fn trapezoid_uniform(y: &[f64], dx: f64) -> Result<f64, IntegrationError> {
    if !(dx.is_finite() && dx > 0.0) {
        return Err(IntegrationError::InvalidSpacing { got: dx });
    }
    if y.is_empty() {
        return Err(SampleError::EmptyInput.into());
    }
    if let Some(idx) = non_finite_idx(y) {
        return Err(SampleError::NonFiniteVec { idx }.into());
    }
    let n = y.len();
    if n < 2 {
        return Err(IntegrationError::InsufficientPoints { got: n });
    }

    let sum: f64 = y.iter().sum();
    Ok(dx * (sum - 0.5 * (y[0] + y[n - 1])))
}
