// common helpers
pub mod common;
pub mod errors;

// algorithms
pub mod bisection;

pub use bisection::{bisection, find_crossing, BisectionCfg, BisectionError};
pub use common::{RootReport, ToleranceReason};
