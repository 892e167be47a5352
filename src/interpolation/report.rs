//! Defines the [`InterpolationReport`] struct returned by
//! [`crate::interpolation::newton::interpolate`].
//!
//! This report carries the built interpolant together with the number of
//! data and evaluation points and the results of evaluating it.

use crate::polynomial::Polynomial;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `polynomial`  : expanded interpolating polynomial
/// - `n_provided`  : number of input data points `(x, y)`
/// - `n_evaluated` : number of points at which interpolation was performed
/// - `evaluated`   : interpolated values at each evaluation point
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub polynomial: Polynomial,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub evaluated: Vec<f64>,
}
