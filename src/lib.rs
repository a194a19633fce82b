//! # Hadolint Bridge
//!
//! Validates Dockerfiles by delegating analysis to the external
//! [hadolint](https://github.com/hadolint/hadolint) linter and translating
//! each reported issue into a character range within the original text.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hadolint_bridge::analyzer::hadolint::{LineIndex, LintExecutor};
//!
//! let dockerfile = "FROM ubuntu:latest\n";
//! let executor = LintExecutor::system();
//! let report = executor.execute(dockerfile, &LineIndex::new(dockerfile));
//!
//! for record in &report.diagnostics {
//!     println!("{}: {} {:?}", record.line, record.message, record.range);
//! }
//! ```

pub mod analyzer;
pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod handlers;

// Re-export commonly used types and functions
pub use analyzer::hadolint::{
    DiagnosticRecord, HealthStatus, LineIndex, LintExecutor, LintOutcome, LintReport,
    PathResolver, Severity, TextBuffer, TextRange,
};
pub use error::{BridgeError, ConfigError, Result};

use cli::Commands;
use config::Config;
use std::io::Write;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run one CLI command, returning the process exit code.
pub fn run_command<W: Write>(command: Commands, config: &Config, out: &mut W) -> Result<i32> {
    match command {
        Commands::Lint { path, format } => handlers::handle_lint(&path, format, config, out),
        Commands::Check => handlers::handle_check(config, out),
        Commands::Which => handlers::handle_which(config, out),
    }
}
