//! CLI command handlers for zmklens.
//!
//! This module provides headless, scriptable access to the parser for
//! automation, testing, and editor integration.

pub mod common;
pub mod inspect;
pub mod validate;
pub mod watch;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use inspect::InspectArgs;
pub use validate::ValidateArgs;
pub use watch::WatchArgs;
