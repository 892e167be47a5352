//! Dense polynomials in canonical (expanded) form.
//!
//! A [`Polynomial`] stores its coefficients by increasing power, so
//! `coeffs[k]` multiplies `x^k`. It is immutable once built and is
//! evaluated with [Horner's method](https://en.wikipedia.org/wiki/Horner%27s_method).
//!
//! The [`Evaluate`] trait is the seam used by root finding: anything that
//! can be evaluated at a point (a [`Polynomial`], a
//! [`crate::regression::least_squares::LinearFit`]) can be searched for a
//! target crossing.

use std::fmt;
use thiserror::Error;

use crate::samples::non_finite_idx;


#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolynomialError {
    #[error("polynomial needs at least one coefficient")]
    EmptyCoefficients,

    #[error("non-finite coefficient at index {idx}")]
    NonFiniteCoefficient { idx: usize },

    #[error("invalid sample range: lo and hi must be finite with lo < hi. got [{lo}, {hi}]")]
    InvalidSampleRange { lo: f64, hi: f64 },

    #[error("insufficient samples: got {got}, need at least 2")]
    InsufficientSamples { got: usize },
}


/// Anything that can be evaluated at a single real point.
pub trait Evaluate {
    /// evaluates single point
    fn eval(&self, x: f64) -> f64;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }
}


/// Polynomial `c[0] + c[1] x + ... + c[n-1] x^(n-1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Builds a polynomial from coefficients ordered by increasing power.
    ///
    /// # Errors
    /// ├ [`PolynomialError::EmptyCoefficients`]    if `coeffs` is empty
    /// └ [`PolynomialError::NonFiniteCoefficient`] if any coefficient is NaN/inf
    pub fn new(coeffs: Vec<f64>) -> Result<Self, PolynomialError> {
        if coeffs.is_empty() {
            return Err(PolynomialError::EmptyCoefficients);
        }
        if let Some(idx) = non_finite_idx(&coeffs) {
            return Err(PolynomialError::NonFiniteCoefficient { idx });
        }
        Ok(Self { coeffs })
    }

    pub fn constant(c: f64) -> Self {
        Self { coeffs: vec![c] }
    }

    /// `intercept + slope * x`
    pub fn linear(intercept: f64, slope: f64) -> Self {
        Self { coeffs: vec![intercept, slope] }
    }

    /// Expands the Newton form
    ///
    /// ```text
    /// c[0] + c[1](x - x0) + c[2](x - x0)(x - x1) + ... + c[n-1](x - x0)...(x - x_{n-2})
    /// ```
    ///
    /// into canonical coefficients. The running product `Π (x - x_j)` is kept
    /// as its own coefficient vector and multiplied by one more linear factor
    /// per term.
    ///
    /// `nodes` must hold at least `newton_coeffs.len() - 1` values; only
    /// that many are read.
    pub(crate) fn from_newton_form(newton_coeffs: &[f64], nodes: &[f64]) -> Self {
        let n = newton_coeffs.len();
        debug_assert!(n >= 1 && nodes.len() + 1 >= n);

        let mut coeffs = vec![0.0; n];
        let mut basis  = Vec::with_capacity(n);
        basis.push(1.0);

        coeffs[0] = newton_coeffs[0];
        for i in 1..n {
            // basis *= (x - nodes[i - 1])
            let xj = nodes[i - 1];
            basis.push(0.0);
            for k in (1..basis.len()).rev() {
                basis[k] = basis[k - 1] - xj * basis[k];
            }
            basis[0] *= -xj;

            let ci = newton_coeffs[i];
            for (acc, b) in coeffs.iter_mut().zip(basis.iter()) {
                *acc += ci * b;
            }
        }

        Self { coeffs }
    }

    /// Coefficients by increasing power.
    pub fn coefficients(&self) -> &[f64] { &self.coeffs }

    /// Index of the highest non-zero coefficient; `0` for the zero polynomial.
    pub fn degree(&self) -> usize {
        self.coeffs.iter().rposition(|&c| c != 0.0).unwrap_or(0)
    }

    /// Non-zero `(coefficient, exponent)` pairs, highest power first.
    pub fn terms(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.coeffs
            .iter()
            .enumerate()
            .rev()
            .filter(|&(_, &c)| c != 0.0)
            .map(|(k, &c)| (c, k))
    }

    /// Samples `n` evenly spaced points `(x, p(x))` on `[lo, hi]`,
    /// endpoints included. Intended for the plotting layer.
    pub fn sample(&self, lo: f64, hi: f64, n: usize) -> Result<Vec<(f64, f64)>, PolynomialError> {
        if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
            return Err(PolynomialError::InvalidSampleRange { lo, hi });
        }
        if n < 2 {
            return Err(PolynomialError::InsufficientSamples { got: n });
        }

        let step = (hi - lo) / (n - 1) as f64;
        let points = (0..n)
            .map(|i| {
                // pin the last point so rounding never overshoots `hi`
                let x = if i == n - 1 { hi } else { lo + step * i as f64 };
                (x, self.eval(x))
            })
            .collect();
        Ok(points)
    }
}

impl Evaluate for Polynomial {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }
}


/// Canonical expression, highest power first, e.g. `2x^2 - 3x + 1`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (c, k) in self.terms() {
            let magnitude = c.abs();
            if first {
                if c < 0.0 { write!(f, "-")?; }
            } else {
                write!(f, " {} ", if c < 0.0 { '-' } else { '+' })?;
            }
            first = false;

            let show_coeff = k == 0 || magnitude != 1.0;
            if show_coeff { write!(f, "{}", magnitude)?; }
            match k {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", k)?,
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
