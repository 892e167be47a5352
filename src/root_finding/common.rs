//! Shared types for root-finding algorithms.
//!
//! ┌ [`RootReport`]      : result of a converged run
//! ├ [`ToleranceReason`] : which stopping criterion was met
//! └ `opposite_signs`    : bracket test


/// Stopping criterion satisfied by a converged run.
/// ├ [`ToleranceReason::ExactRoot`]
/// │   └ an evaluated point hit the target exactly
/// ├ [`ToleranceReason::ResidualReached`]
/// │   └ |f(x) - target| < tol
/// ├ [`ToleranceReason::WidthReached`]
/// │   └ half-width of [lo, hi] < tol
/// └ [`ToleranceReason::MachinePrecision`]
///     └ midpoint no longer separates lo and hi in floating point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceReason {
    ExactRoot,
    ResidualReached,
    WidthReached,
    MachinePrecision,
}


/// Final report returned by bracketing root finders.
///
/// [`RootReport`]
/// - `root`       : root estimate
/// - `f_root`     : residual `f(root) - target`
/// - `iterations` : bisection steps taken, `0` if an endpoint was exact
/// - `evals`      : total function evaluations
/// - `tolerance`  : criterion that stopped the run ([`ToleranceReason`])
/// - `left`       : final left bound of the bracket
/// - `right`      : final right bound of the bracket
/// - `algorithm`  : algorithm name (e.g. `"bisection"`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootReport {
    pub root      : f64,
    pub f_root    : f64,
    pub iterations: usize,
    pub evals     : usize,
    pub tolerance : ToleranceReason,
    pub left      : f64,
    pub right     : f64,
    pub algorithm : &'static str,
}


/// Determines whether `u` and `v` are of opposite sign.
///
/// Used to pick which half of the bracket keeps the sign change, and to
/// reject an initial bracket when sign(g(lo)) == sign(g(hi)).
#[inline]
pub(crate) fn opposite_signs(u: f64, v: f64) -> bool {
    u.is_sign_positive() != v.is_sign_positive()
}
