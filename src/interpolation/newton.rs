//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients come from [`DividedDifferenceTable`]; the nested Newton form
//! is then expanded into a canonical [`Polynomial`] which is evaluated at
//! query points using Horner's scheme.


use crate::interpolation::config::CommonCfg;
use crate::interpolation::divided_differences::DividedDifferenceTable;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::polynomial::{Evaluate, Polynomial};
use crate::samples::{non_finite_idx, SampleError};


/// Newton interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NewtonCfg::new`] then setters. Each setter validates its own
///   argument; node distinctness is checked by [`interpolate`] once the
///   spacing tolerance is final.
///
/// # Defaults
/// - Nodes equal up to [`crate::interpolation::config::DEFAULT_REL_TOL`]
///   are duplicates. [`NewtonCfg::set_x_tol`] adds an absolute spacing
///   floor on top.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
}

impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }

    pub fn common(&self) -> &CommonCfg<'a> { &self.common }

    pub fn set_x(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        self.common.check_x(v)?;
        self.common.with_x(v);
        Ok(self)
    }

    pub fn set_y(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        self.common.check_y(v)?;
        self.common.with_y(v);
        Ok(self)
    }

    pub fn set_x_eval(mut self, v: &'a [f64]) -> Result<Self, InterpolationError> {
        if let Some(idx) = non_finite_idx(v) {
            return Err(SampleError::NonFiniteVec { idx }.into());
        }
        self.common.with_x_eval(v);
        Ok(self)
    }

    pub fn set_x_tol(mut self, v: f64) -> Result<Self, InterpolationError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(InterpolationError::InvalidXTol { got: v });
        }
        self.common.with_x_min_spacing(v);
        Ok(self)
    }
}


/// Builds the expanded Newton interpolating polynomial through `(x, y)`.
///
/// Uses the default duplicate-node spacing. `x` need not be sorted; node
/// order changes rounding only, not the resulting polynomial.
///
/// # Errors
/// ├ [`InterpolationError::Samples`]              empty, unequal or non-finite input
/// ├ [`InterpolationError::DuplicateNode`]        repeated x-value
/// └ [`InterpolationError::NonFiniteCoefficient`] divided differences or expansion overflow
pub fn newton_polynomial(x: &[f64], y: &[f64]) -> Result<Polynomial, InterpolationError> {
    let table = DividedDifferenceTable::new(x, y)?;
    expand(&table, x)
}


/// Newton coefficients of `table` expanded over `nodes`, both stages
/// required finite.
fn expand(table: &DividedDifferenceTable, nodes: &[f64]) -> Result<Polynomial, InterpolationError> {
    let newton = table.coefficients();
    if let Some(idx) = non_finite_idx(&newton) {
        return Err(InterpolationError::NonFiniteCoefficient { idx });
    }

    let polynomial = Polynomial::from_newton_form(&newton, nodes);
    if let Some(idx) = non_finite_idx(polynomial.coefficients()) {
        return Err(InterpolationError::NonFiniteCoefficient { idx });
    }
    Ok(polynomial)
}


/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Validates the samples and rejects duplicate nodes before dividing.
/// - Builds the divided-difference table and expands
///
/// ```text
/// P(x) = c[0] + c[1](x - x[0]) + ... + c[n-1](x - x[0])...(x - x[n-2])
/// ```
///
///   into canonical coefficients.
/// - Evaluates `P` at every point of `cfg.common.x_eval()` with Horner's
///   scheme. Points outside the sampled range are extrapolated.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `polynomial`  : the expanded interpolant
/// - `n_provided`  : number of (x, y) data points
/// - `n_evaluated` : number of evaluation points
/// - `evaluated`   : interpolated values at each evaluation point
///
/// # Errors
/// ├ [`InterpolationError::Samples`]              x / y unset, unequal or non-finite
/// ├ [`InterpolationError::DuplicateNode`]        nodes equal up to rounding or closer than `x_tol`
/// └ [`InterpolationError::NonFiniteCoefficient`] divided differences or expansion overflow
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    let samples = cfg.common.validate()?;
    let evals   = cfg.common.x_eval();

    let table      = DividedDifferenceTable::build(samples.x(), samples.y());
    let polynomial = expand(&table, samples.x())?;
    let evaluated  = polynomial.eval_many(evals);

    Ok(InterpolationReport {
        n_provided : samples.len(),
        n_evaluated: evals.len(),
        evaluated,
        polynomial,
    })
}
