use super::common::{opposite_signs, RootReport, ToleranceReason};
use super::errors::RootFindingError;
use crate::polynomial::Evaluate;
use thiserror::Error;

const ALGORITHM: &str = "bisection";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BisectionError {
    #[error(transparent)]
    Common(#[from] RootFindingError),

    #[error("no sign change on [{lo}, {hi}]: f(lo) - target = {g_lo}, f(hi) - target = {g_hi}")]
    NoBracket { lo: f64, hi: f64, g_lo: f64, g_hi: f64 },

    #[error("invalid bounds: lo and hi must be finite with lo < hi. got [{lo}, {hi}]")]
    InvalidBounds { lo: f64, hi: f64 },

    #[error("no convergence after {max_iter} iterations; last bracket [{lo}, {hi}]")]
    Convergence { max_iter: usize, lo: f64, hi: f64 },
}

/// Bisection Configuration
///
/// # Defaults
///
/// ┌ DEFAULT_TOLERANCE - bound on both |f(mid) - target| and the bracket half-width
/// └ DEFAULT_MAX_ITER  - iteration budget before [`BisectionError::Convergence`]
///
/// # Validation:
/// └ Configuration validation occurs in [`bisection`] via [`BisectionCfg::validate()`].
///
///    The following checks are performed:
///    ├ `tolerance` >  0 and finite
///    └ `max_iter`  >= 1
#[derive(Debug, Copy, Clone)]
pub struct BisectionCfg {
    tolerance: Option<f64>,
    max_iter:  Option<usize>,
}
impl BisectionCfg {
    pub const DEFAULT_TOLERANCE: f64   = 1e-10;
    pub const DEFAULT_MAX_ITER:  usize = 100;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_tolerance(mut self, v: f64)  -> Self { self.tolerance = Some(v); self }
    pub fn with_max_iter (mut self, v: usize) -> Self { self.max_iter  = Some(v); self }

    #[inline] #[must_use] pub fn tolerance(&self) -> f64   { self.tolerance.unwrap_or(Self::DEFAULT_TOLERANCE) }
    #[inline] #[must_use] pub fn max_iter (&self) -> usize { self.max_iter .unwrap_or(Self::DEFAULT_MAX_ITER)  }

    pub fn validate(&self) -> Result<BisectionCfg, RootFindingError> {
        let tolerance = self.tolerance();
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(RootFindingError::InvalidTolerance { got: tolerance });
        }
        let max_iter = self.max_iter();
        if max_iter == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: max_iter });
        }
        Ok(Self { tolerance: Some(tolerance), max_iter: Some(max_iter) })
    }
}

impl Default for BisectionCfg {
    fn default() -> Self {
        Self {
            tolerance: Some(Self::DEFAULT_TOLERANCE),
            max_iter:  Some(Self::DEFAULT_MAX_ITER),
        }
    }
}

/// Calculates midpoint of [lo, hi]
#[inline]
fn calculate_bisection(lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * 0.5
}

/// Finds `x` in `[lo, hi]` with `func(x) = target` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Works on the shifted function `g(x) = func(x) - target`, which must be
/// continuous on `[lo, hi]` and change sign across it.
///
/// # Arguments
///
/// ┌ `func`   - The function to search.
/// ├ `lo`     - Lower bound of the search interval. Must be finite and less than `hi`.
/// ├ `hi`     - Upper bound of the search interval. Must be finite and greater than `lo`.
/// ├ `target` - Value whose crossing is sought (`0.0` for a plain root).
/// └ `cfg`    - Tolerance and iteration budget. See [`BisectionCfg`]
///    Defaults:
///    ├ cfg.tolerance = 1e-10
///    └ cfg.max_iter  = 100
///
/// # Returns
///
/// On success, a [`RootReport`]
/// ├ `root`       : midpoint of the last bracket (or the exact endpoint)
/// ├ `f_root`     : `g(root)`
/// ├ `iterations` : bisection steps, 0 if an endpoint was exact
/// ├ `evals`      : function evaluations
/// ├ `tolerance`  : [`ToleranceReason`] that stopped the run
/// ├ `left`       : final left bound
/// └ `right`      : final right bound
///
/// # Errors
///
/// ┌ [`BisectionError::InvalidBounds`] - `lo` or `hi` is NaN/inf or `lo >= hi`.
/// ├ [`BisectionError::NoBracket`]     - `g(lo)` and `g(hi)` share a sign.
/// ├ [`BisectionError::Convergence`]   - `max_iter` steps without meeting the tolerance.
/// │
/// The following are propagated via [`BisectionError::Common`]
/// ├ [`RootFindingError::NonFiniteEvaluation`] - `g(x)` is NaN or inf at an evaluated point.
/// ├ [`RootFindingError::InvalidTolerance`]    - `cfg.tolerance` <= 0 or not finite.
/// └ [`RootFindingError::InvalidMaxIter`]      - `cfg.max_iter` == 0.
pub fn bisection<F>(
    mut func: F,
    mut lo: f64,
    mut hi: f64,
    target: f64,
    cfg: BisectionCfg
) -> Result<RootReport, BisectionError>
where F: FnMut(f64) -> f64 {

    if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
        return Err(BisectionError::InvalidBounds { lo, hi });
    }

    let cfg       = cfg.validate()?;
    let tolerance = cfg.tolerance();
    let max_iter  = cfg.max_iter();

    // closure function, shifts by target and checks finiteness
    let mut eval = |x: f64| -> Result<f64, BisectionError> {
        let gx = func(x) - target;
        if !gx.is_finite() {
            Err(RootFindingError::NonFiniteEvaluation { x, fx: gx }.into())
        } else {
            Ok(gx)
        }
    };

    let exact = |root: f64, left: f64, right: f64, evals: usize| RootReport {
        root,
        f_root    : 0.0,
        iterations: 0,
        evals,
        tolerance : ToleranceReason::ExactRoot,
        left,
        right,
        algorithm : ALGORITHM,
    };

    // immediate bounds are roots
    let mut g_lo = eval(lo)?;
    if g_lo == 0.0 {
        return Ok(exact(lo, lo, hi, 1));
    }
    let g_hi = eval(hi)?;
    if g_hi == 0.0 {
        return Ok(exact(hi, lo, hi, 2));
    }

    if !opposite_signs(g_lo, g_hi) {
        return Err(BisectionError::NoBracket { lo, hi, g_lo, g_hi });
    }

    for iter in 1..=max_iter {
        let mid   = calculate_bisection(lo, hi);
        let g_mid = eval(mid)?;

        let reason = if g_mid.abs() < tolerance {
            Some(ToleranceReason::ResidualReached)
        } else if (hi - lo) * 0.5 < tolerance {
            Some(ToleranceReason::WidthReached)
        } else if mid <= lo || mid >= hi {
            Some(ToleranceReason::MachinePrecision)
        } else {
            None
        };

        if let Some(tolerance) = reason {
            // two endpoint evaluations plus one per iteration
            return Ok(RootReport {
                root      : mid,
                f_root    : g_mid,
                iterations: iter,
                evals     : iter + 2,
                tolerance,
                left      : lo,
                right     : hi,
                algorithm : ALGORITHM,
            });
        }

        // shrink interval
        if opposite_signs(g_lo, g_mid) {
            hi = mid;
        } else {
            lo   = mid;
            g_lo = g_mid;
        }
    }

    Err(BisectionError::Convergence { max_iter, lo, hi })
}

/// Finds where `f` crosses `target` on `[lo, hi]`.
///
/// Thin wrapper over [`bisection`] for any [`Evaluate`] implementor, e.g. an
/// interpolating [`crate::polynomial::Polynomial`] or a
/// [`crate::regression::least_squares::LinearFit`].
pub fn find_crossing<E>(
    f: &E,
    lo: f64,
    hi: f64,
    target: f64,
    cfg: BisectionCfg
) -> Result<RootReport, BisectionError>
where E: Evaluate + ?Sized {
    bisection(|x| f.eval(x), lo, hi, target, cfg)
}
