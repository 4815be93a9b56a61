//! Command-line interface for stepping through a minimum spanning forest.
//!
//! `run` builds a graph from `--vertex` and `--edge` arguments; `demo` uses a
//! built-in six-vertex graph. Both drive the stepper one call at a time and
//! report every decision.

mod commands;
mod edge_spec;

pub use commands::{
    Cli, CliError, Command, DEMO_EDGES, ExecutionSummary, RunCommand, render_summary, run_cli,
};
pub use edge_spec::{EdgeSpec, EdgeSpecError};
