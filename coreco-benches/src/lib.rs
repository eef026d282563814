//! Benchmark support crate for coreco.
//!
//! Generates synthetic liked-item tables with a skewed popularity curve so the
//! Criterion benches can measure aggregation and top-k selection at realistic
//! catalog sizes.

pub mod error;
pub mod params;
pub mod source;
