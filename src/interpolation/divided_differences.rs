//! Newton divided-difference table.
//!
//! For nodes `x[0..n]` and values `y[0..n]` the table is lower triangular:
//!
//! ```text
//! row i, col j = f[x_{i-j}, ..., x_i]
//!
//! table[i][0] = y[i]
//! table[i][j] = (table[i][j-1] - table[i-1][j-1]) / (x[i] - x[i-j])
//! ```
//!
//! The diagonal `table[i][i]` holds the Newton-form coefficients.


use crate::interpolation::config::{check_distinct_nodes, DEFAULT_X_TOL};
use crate::interpolation::errors::InterpolationError;
use crate::samples::Samples;


/// Lower-triangular divided-difference table; row `i` holds `i + 1` entries.
#[derive(Debug, Clone)]
pub struct DividedDifferenceTable {
    rows: Vec<Vec<f64>>,
}

impl DividedDifferenceTable {
    /// Builds the table, rejecting nodes that are equal up to rounding
    /// (no absolute floor, [`DEFAULT_X_TOL`]).
    ///
    /// # Errors
    /// ├ [`InterpolationError::Samples`]       empty, unequal or non-finite input
    /// └ [`InterpolationError::DuplicateNode`] two nodes equal up to rounding
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        let samples = Samples::new(x, y)?;
        check_distinct_nodes(samples.x(), DEFAULT_X_TOL)?;
        Ok(Self::build(samples.x(), samples.y()))
    }

    /// Fills the table. Callers have already rejected duplicate nodes, so
    /// every denominator is non-zero; entries may still overflow when close
    /// nodes carry large value jumps.
    pub(crate) fn build(x: &[f64], y: &[f64]) -> Self {
        let n = x.len();
        let mut rows: Vec<Vec<f64>> = Vec::with_capacity(n);

        for i in 0..n {
            let mut row = Vec::with_capacity(i + 1);
            row.push(y[i]);
            for j in 1..=i {
                let above = rows[i - 1][j - 1];
                row.push((row[j - 1] - above) / (x[i] - x[i - j]));
            }
            rows.push(row);
        }

        Self { rows }
    }

    /// Number of nodes the table was built from.
    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Highest difference order present (`n - 1`).
    pub fn order(&self) -> usize { self.rows.len().saturating_sub(1) }

    /// `j`-th order divided difference ending at row `i`; `None` above the
    /// diagonal or out of range.
    pub fn entry(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Newton coefficients `c[i] = table[i][i]`.
    pub fn coefficients(&self) -> Vec<f64> {
        self.rows.iter().enumerate().map(|(i, row)| row[i]).collect()
    }
}
