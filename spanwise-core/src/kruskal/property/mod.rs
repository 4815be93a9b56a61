//! Property-based tests for the step-wise Kruskal stepper.
//!
//! Checks the stepper against a sequential union-find oracle, validates the
//! structural shape of the spanning forest and its annotations, and confirms
//! that a reset followed by a fresh run replays identically.

mod equivalence;
mod helpers;
mod oracle;
mod replay;
mod strategies;
mod structural;
mod types;
