//! Support library for the coreco CLI binary.
//!
//! Re-exports the CLI and logging modules so doctests and integration tests can
//! exercise the command pipeline without forking a subprocess.

pub mod cli;
pub mod logging;
