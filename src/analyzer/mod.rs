//! # Analyzer Module
//!
//! Dockerfile analysis backed by external linters.

pub mod hadolint;

pub use hadolint::{DiagnosticRecord, LintExecutor, LintReport, Severity};
