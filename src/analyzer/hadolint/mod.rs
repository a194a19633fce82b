//! Hadolint bridge: Dockerfile validation through the external linter.
//!
//! [Hadolint](https://github.com/hadolint/hadolint) is run as a subprocess
//! with the document on stdin. Its JSON findings are decoded and each
//! reported line is mapped onto a character range of the caller's buffer.
//!
//! # Pipeline
//!
//! - [`PathResolver`] finds the executable (well-known paths, then `PATH`)
//! - [`LintExecutor`] spawns it, feeds the text and collects output
//! - [`parse_output`] decodes the JSON array, skipping malformed issues
//! - [`map_line`] turns a 1-based line into a `[start, end)` range
//!
//! # Example
//!
//! ```rust,no_run
//! use hadolint_bridge::analyzer::hadolint::{LintExecutor, LineIndex};
//!
//! let dockerfile = "FROM ubuntu:latest\n";
//! let executor = LintExecutor::system();
//!
//! for record in executor.run(dockerfile, &LineIndex::new(dockerfile)) {
//!     println!("{}: {} - {}", record.line, record.severity, record.message);
//! }
//! ```

pub mod executor;
pub mod health;
pub mod parser;
pub mod range;
pub mod resolver;
pub mod types;

// Re-export main types and functions
pub use executor::{LINT_ARGS, LintError, LintExecutor, LintOutcome, LintReport};
pub use health::{HealthStatus, Notice, check};
pub use parser::{EntryOutcome, parse_entry, parse_output};
pub use range::{LineIndex, TextBuffer, map_line};
pub use resolver::{HADOLINT, PathResolver};
pub use types::{DiagnosticRecord, Severity, TextRange};
