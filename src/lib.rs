//! Numerical analysis engine for estimating velocity / position over time
//! from a sparse set of measured `(t, v)` samples.
//!
//! ┌ [`interpolation`] : divided differences and Newton polynomials
//! ├ [`regression`]    : least-squares trend lines
//! ├ [`root_finding`]  : bisection for target crossings
//! ├ [`integration`]   : trapezoidal rule over raw samples
//! └ [`estimate`]      : [`estimate::Trajectory`] facade over all of the above

pub mod samples;
pub mod polynomial;

pub mod interpolation;
pub mod regression;
pub mod root_finding;
pub mod integration;

pub mod estimate;

pub use polynomial::{Evaluate, Polynomial};
pub use samples::Samples;
