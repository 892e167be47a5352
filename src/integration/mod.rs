pub mod errors;
pub mod trapezoid;

pub use trapezoid::{cumulative_trapezoid, trapezoid, trapezoid_uniform};
