pub mod config;
pub mod errors;
pub mod report;

pub mod divided_differences;
pub mod newton;

pub use divided_differences::DividedDifferenceTable;
pub use newton::newton_polynomial;
