//! Support library for the spanwise CLI binary.
//!
//! Exposes command parsing, execution and rendering so tests can drive the
//! stepper pipeline without spawning a subprocess.

pub mod cli;
pub mod logging;
