pub mod errors;
pub mod least_squares;

pub use least_squares::{fit, LinearFit};
