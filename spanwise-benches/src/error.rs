//! Benchmark setup error type.

use crate::source::SyntheticError;
use spanwise_core::{GraphError, StepError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The generated graph rejected an operation.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
    /// The stepper failed while preparing a benchmark state.
    #[error("stepper failed: {0}")]
    Step(#[from] StepError),
}
