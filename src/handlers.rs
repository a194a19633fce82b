//! Command handlers for the driver binary.
//!
//! Each handler writes to the given writer and returns the process exit code.

use crate::analyzer::hadolint::{
    LineIndex, LintError, LintExecutor, LintOutcome, LintReport, PathResolver, check,
};
use crate::cli::OutputFormat;
use crate::common::command_utils::ProcessRunner;
use crate::common::host::{EnvSource, FileProbe, SystemHost};
use crate::config::Config;
use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Exit code when lint errors were reported.
pub const EXIT_LINT_ERRORS: i32 = 1;
/// Exit code when hadolint could not be found or run.
pub const EXIT_TOOL_UNAVAILABLE: i32 = 2;

/// Resolver honoring the configured executable override.
pub fn resolver_from_config(config: &Config) -> PathResolver<SystemHost> {
    PathResolver::new(SystemHost).with_override(config.hadolint.path.clone())
}

pub fn handle_lint<W: Write>(
    path: &Path,
    format: OutputFormat,
    config: &Config,
    out: &mut W,
) -> Result<i32> {
    let content = std::fs::read_to_string(path)?;
    let executor = LintExecutor::new(resolver_from_config(config));
    let report = executor.execute(&content, &LineIndex::new(&content));

    match &report.outcome {
        LintOutcome::ExecutableNotFound => {
            writeln!(out, "{}", LintError::ExecutableNotFound)?;
            return Ok(EXIT_TOOL_UNAVAILABLE);
        }
        LintOutcome::LaunchFailed(reason) => {
            writeln!(out, "hadolint could not be run: {}", reason)?;
            return Ok(EXIT_TOOL_UNAVAILABLE);
        }
        LintOutcome::Completed { .. } => {}
    }

    match format {
        OutputFormat::Text => write_text(&report, path, out)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report.diagnostics)?)?,
    }

    Ok(if report.has_errors() { EXIT_LINT_ERRORS } else { 0 })
}

fn write_text<W: Write>(report: &LintReport, path: &Path, out: &mut W) -> Result<()> {
    for record in &report.diagnostics {
        let span = record
            .range
            .map(|r| format!(" [{}]", r))
            .unwrap_or_default();
        writeln!(
            out,
            "{}:{} {}: {}{}",
            path.display(),
            record.line,
            record.severity,
            record.message,
            span
        )?;
    }
    Ok(())
}

pub fn handle_check<W: Write>(config: &Config, out: &mut W) -> Result<i32> {
    let status = check(&resolver_from_config(config));
    match status.notice() {
        None => {
            writeln!(out, "hadolint is healthy")?;
            Ok(0)
        }
        Some(notice) => {
            writeln!(out, "{}: {}", notice.title, notice.message)?;
            Ok(EXIT_TOOL_UNAVAILABLE)
        }
    }
}

pub fn handle_which<W: Write>(config: &Config, out: &mut W) -> Result<i32> {
    write_resolved(&resolver_from_config(config), out)
}

fn write_resolved<H, W>(resolver: &PathResolver<H>, out: &mut W) -> Result<i32>
where
    H: FileProbe + EnvSource + ProcessRunner,
    W: Write,
{
    match resolver.resolve() {
        Some(path) => {
            writeln!(out, "{}", path.display())?;
            Ok(0)
        }
        None => {
            writeln!(out, "{}", LintError::ExecutableNotFound)?;
            Ok(EXIT_TOOL_UNAVAILABLE)
        }
    }
}
