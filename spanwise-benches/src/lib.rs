//! Benchmark support crate for spanwise.
//!
//! Provides a seeded synthetic graph generator and parameter types used by
//! the Criterion benchmarks for full stepper runs and reachability queries.

pub mod error;
pub mod params;
pub mod source;
