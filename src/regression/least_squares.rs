//! Least-Squares Linear Fit
//!
//! Closed-form [simple linear regression](https://en.wikipedia.org/wiki/Simple_linear_regression):
//!
//! ```text
//! b = (n Σxy - Σx Σy) / (n Σx² - (Σx)²)
//! a = ȳ - b x̄
//! ```
//!
//! The slope is accumulated in the equivalent centered form
//! `Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²`, which avoids the cancellation in
//! `n Σx² - (Σx)²` for large, tightly clustered `x`. Sums are taken over
//! `x / max|x|` and `y / max|y|`, so samples near `f64::MAX` still fit.
//!
//! Unlike interpolation the fitted line need not pass through any sample.


use crate::polynomial::{Evaluate, Polynomial};
use crate::regression::errors::RegressionError;
use crate::samples::Samples;


/// Result of a least-squares fit `y ≈ intercept + slope * x`.
///
/// [`LinearFit`]
/// - `intercept` : a
/// - `slope`     : b
/// - `x_mean`    : x̄
/// - `y_mean`    : ȳ
/// - `n`         : number of samples used
/// - `sse`       : residual sum of squares `Σ(y - (a + b x))²`
/// - `r_squared` : coefficient of determination, `1.0` when `y` is constant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub intercept: f64,
    pub slope: f64,
    pub x_mean: f64,
    pub y_mean: f64,
    pub n: usize,
    pub sse: f64,
    pub r_squared: f64,
}

impl LinearFit {
    /// Predict y-value for a given x using the model.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// The fitted line as a degree-1 [`Polynomial`].
    pub fn polynomial(&self) -> Polynomial {
        Polynomial::linear(self.intercept, self.slope)
    }
}

impl Evaluate for LinearFit {
    #[inline]
    fn eval(&self, x: f64) -> f64 { self.predict(x) }
}


/// Fits the least-squares line through `(x, y)`.
///
/// # Errors
/// ┌ [`RegressionError::Samples`]          empty, unequal or non-finite input
/// ├ [`RegressionError::InsufficientData`] fewer than 2 points
/// └ [`RegressionError::SingularFit`]      every `x` identical
pub fn fit(x: &[f64], y: &[f64]) -> Result<LinearFit, RegressionError> {
    let samples = Samples::new(x, y)?;
    let n = samples.len();
    if n < 2 {
        return Err(RegressionError::InsufficientData { got: n });
    }

    // exact check; rounding in the sums below can leave a tiny non-zero
    // variance for identical inputs
    if x.iter().all(|&xi| xi == x[0]) {
        return Err(RegressionError::SingularFit { n, x: x[0] });
    }

    // sums run on x / max|x| and y / max|y| so that squares of large
    // finite samples stay representable
    let x_scale = max_abs(x);
    let y_scale = match max_abs(y) {
        s if s > 0.0 => s,
        _            => 1.0,
    };

    let n_f    = n as f64;
    let u_mean = x.iter().map(|&xi| xi / x_scale).sum::<f64>() / n_f;
    let w_mean = y.iter().map(|&yi| yi / y_scale).sum::<f64>() / n_f;
    let x_mean = u_mean * x_scale;
    let y_mean = w_mean * y_scale;

    let mut suu = 0.0;
    let mut suw = 0.0;
    let mut sww = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let du = xi / x_scale - u_mean;
        let dw = yi / y_scale - w_mean;
        suu += du * du;
        suw += du * dw;
        sww += dw * dw;
    }

    if !(suu.is_finite() && suu > 0.0) {
        return Err(RegressionError::SingularFit { n, x: x_mean });
    }

    let slope     = suw / suu * y_scale / x_scale;
    let intercept = y_mean - slope * x_mean;

    let mut sse   = 0.0;
    let mut sse_w = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let r = yi - (intercept + slope * xi);
        sse   += r * r;
        sse_w += (r / y_scale) * (r / y_scale);
    }

    let r_squared = if sww > 0.0 { (1.0 - sse_w / sww).clamp(0.0, 1.0) } else { 1.0 };

    Ok(LinearFit { intercept, slope, x_mean, y_mean, n, sse, r_squared })
}


fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0_f64, |m, &vi| m.max(vi.abs()))
}
