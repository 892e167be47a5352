//! Trajectory estimation from sparse `(t, v)` samples.
//!
//! [`Trajectory`] validates a sample set once and exposes every operation
//! of the engine independently; there is no required call order. The
//! interpolant is built on first use and reused by later queries.
//!
//! ┌ [`Trajectory::interpolate`]   : Newton interpolating polynomial
//! ├ [`Trajectory::value_at`]      : interpolated value at one time
//! ├ [`Trajectory::values_at`]     : interpolated values at many times
//! ├ [`Trajectory::trend`]         : least-squares line
//! ├ [`Trajectory::time_of`]       : time the interpolant crosses a value
//! ├ [`Trajectory::area`]          : trapezoidal integral of the samples
//! └ [`Trajectory::displacement`]  : running trapezoidal integral
//!
//! ```
//! use trajectory::estimate::Trajectory;
//! use trajectory::root_finding::BisectionCfg;
//!
//! let t = [0.0, 1.0, 2.0];
//! let v = [0.0, 1.0, 4.0];
//! let traj = Trajectory::new(&t, &v).unwrap();
//!
//! assert!((traj.value_at(1.5).unwrap() - 2.25).abs() < 1e-12);
//! assert!((traj.area().unwrap() - 3.0).abs() < 1e-12);
//! let hit = traj.time_of(2.0, 1.0, 2.0, BisectionCfg::new()).unwrap();
//! assert!((hit.root - 2.0_f64.sqrt()).abs() < 1e-9);
//! ```

use std::cell::OnceCell;

use thiserror::Error;

use crate::integration::errors::IntegrationError;
use crate::integration::trapezoid::{cumulative_trapezoid, trapezoid};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::newton::newton_polynomial;
use crate::polynomial::{Evaluate, Polynomial};
use crate::regression::errors::RegressionError;
use crate::regression::least_squares::{fit, LinearFit};
use crate::root_finding::bisection::{find_crossing, BisectionCfg, BisectionError};
use crate::root_finding::common::RootReport;
use crate::samples::{SampleError, Samples};


#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimateError {
    #[error(transparent)]
    Samples(#[from] SampleError),

    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    #[error(transparent)]
    Regression(#[from] RegressionError),

    #[error(transparent)]
    RootFinding(#[from] BisectionError),

    #[error(transparent)]
    Integration(#[from] IntegrationError),
}


/// Sample set of an object's motion, e.g. velocity measured at times `t`.
#[derive(Debug, Clone)]
pub struct Trajectory<'a> {
    samples    : Samples<'a>,
    interpolant: OnceCell<Result<Polynomial, InterpolationError>>,
}

impl<'a> Trajectory<'a> {
    pub fn new(t: &'a [f64], v: &'a [f64]) -> Result<Self, EstimateError> {
        Ok(Self {
            samples    : Samples::new(t, v)?,
            interpolant: OnceCell::new(),
        })
    }

    pub fn samples(&self) -> Samples<'a> { self.samples }

    // divided-difference table is built at most once per sample set
    fn interpolant(&self) -> Result<&Polynomial, EstimateError> {
        self.interpolant
            .get_or_init(|| newton_polynomial(self.samples.x(), self.samples.y()))
            .as_ref()
            .map_err(|e| e.clone().into())
    }

    /// Newton polynomial through every sample.
    pub fn interpolate(&self) -> Result<Polynomial, EstimateError> {
        self.interpolant().cloned()
    }

    /// Interpolated value at an unmeasured time.
    pub fn value_at(&self, t: f64) -> Result<f64, EstimateError> {
        Ok(self.interpolant()?.eval(t))
    }

    /// Interpolated values at many times.
    pub fn values_at(&self, ts: &[f64]) -> Result<Vec<f64>, EstimateError> {
        Ok(self.interpolant()?.eval_many(ts))
    }

    /// Least-squares trend line.
    pub fn trend(&self) -> Result<LinearFit, EstimateError> {
        Ok(fit(self.samples.x(), self.samples.y())?)
    }

    /// Time in `[lo, hi]` at which the interpolant reaches `target`.
    pub fn time_of(
        &self,
        target: f64,
        lo: f64,
        hi: f64,
        cfg: BisectionCfg,
    ) -> Result<RootReport, EstimateError> {
        Ok(find_crossing(self.interpolant()?, lo, hi, target, cfg)?)
    }

    /// Area under the sampled curve (distance travelled for velocity samples).
    pub fn area(&self) -> Result<f64, EstimateError> {
        Ok(trapezoid(self.samples.x(), self.samples.y())?)
    }

    /// Running area at each sample time, starting from `0.0`.
    pub fn displacement(&self) -> Result<Vec<f64>, EstimateError> {
        Ok(cumulative_trapezoid(self.samples.x(), self.samples.y())?)
    }
}
