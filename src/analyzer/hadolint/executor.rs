//! One lint pass: resolve hadolint, feed it the document, map its findings.
//!
//! A pass blocks until the subprocess exits. There is no timeout and no
//! cancellation; callers that need either should run the pass on a worker
//! of their own. Nothing here fails outward: every problem is logged and
//! shows up as fewer diagnostics.

use crate::analyzer::hadolint::parser::parse_output;
use crate::analyzer::hadolint::range::{LineIndex, TextBuffer};
use crate::analyzer::hadolint::resolver::PathResolver;
use crate::analyzer::hadolint::types::{DiagnosticRecord, Severity};
use crate::common::command_utils::{ProcessOutput, ProcessRequest, ProcessRunner};
use crate::common::host::{EnvSource, FileProbe, SystemHost};
use log::{debug, error, warn};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Arguments asking hadolint for JSON output from a Dockerfile on stdin.
pub const LINT_ARGS: [&str; 3] = ["--format", "json", "-"];

/// Why a lint pass produced no tool output at all.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("hadolint not found in common paths or system PATH")]
    ExecutableNotFound,

    #[error("failed to run {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// How a lint pass ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintOutcome {
    /// No executable was found; nothing was spawned.
    ExecutableNotFound,
    /// An executable was found but could not be run.
    LaunchFailed(String),
    /// The tool ran to completion. `None` means it was killed by a signal.
    Completed { exit_code: Option<i32> },
}

/// Diagnostics from one pass, plus how the pass ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintReport {
    pub outcome: LintOutcome,
    pub diagnostics: Vec<DiagnosticRecord>,
}

impl LintReport {
    fn without_diagnostics(outcome: LintOutcome) -> Self {
        Self {
            outcome,
            diagnostics: Vec::new(),
        }
    }

    /// Whether the tool actually ran.
    pub fn tool_ran(&self) -> bool {
        matches!(self.outcome, LintOutcome::Completed { .. })
    }

    /// Exit code is outside the expected {0, 1}.
    pub fn exited_unexpectedly(&self) -> bool {
        matches!(
            self.outcome,
            LintOutcome::Completed { exit_code } if !matches!(exit_code, Some(0) | Some(1))
        )
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn max_severity(&self) -> Option<Severity> {
        self.diagnostics.iter().map(|d| d.severity).max()
    }

    pub fn into_diagnostics(self) -> Vec<DiagnosticRecord> {
        self.diagnostics
    }
}

/// Runs hadolint over document text.
///
/// Holds no mutable state, so one executor can serve concurrent passes as
/// long as its host can.
#[derive(Debug, Clone)]
pub struct LintExecutor<H> {
    resolver: PathResolver<H>,
}

impl LintExecutor<SystemHost> {
    /// Executor backed by the real filesystem, environment and processes.
    pub fn system() -> Self {
        Self::new(PathResolver::new(SystemHost))
    }
}

impl<H> LintExecutor<H>
where
    H: FileProbe + EnvSource + ProcessRunner,
{
    pub fn new(resolver: PathResolver<H>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &PathResolver<H> {
        &self.resolver
    }

    /// Lint `content`, mapping reported lines onto `buffer`.
    pub fn run<B: TextBuffer + ?Sized>(&self, content: &str, buffer: &B) -> Vec<DiagnosticRecord> {
        self.execute(content, buffer).into_diagnostics()
    }

    /// Lint `content`, using its own line table for ranges.
    pub fn lint_text(&self, content: &str) -> Vec<DiagnosticRecord> {
        self.run(content, &LineIndex::new(content))
    }

    /// Lint `content` and report how the pass ended alongside the diagnostics.
    pub fn execute<B: TextBuffer + ?Sized>(&self, content: &str, buffer: &B) -> LintReport {
        let output = match self.invoke(content) {
            Ok(output) => output,
            Err(LintError::ExecutableNotFound) => {
                error!("Hadolint execution failed: {}", LintError::ExecutableNotFound);
                return LintReport::without_diagnostics(LintOutcome::ExecutableNotFound);
            }
            Err(err) => {
                error!("Hadolint execution failed: {}", err);
                return LintReport::without_diagnostics(LintOutcome::LaunchFailed(err.to_string()));
            }
        };

        let combined = output.combined();
        match output.exit_code {
            Some(0) | Some(1) => debug!("Hadolint exited with {:?}", output.exit_code),
            Some(code) => warn!("Hadolint error (code {}): {}", code, combined.trim()),
            None => warn!("Hadolint was terminated by a signal: {}", combined.trim()),
        }

        // Unexpected exits can still carry a usable JSON array.
        LintReport {
            outcome: LintOutcome::Completed {
                exit_code: output.exit_code,
            },
            diagnostics: parse_output(&combined, buffer),
        }
    }

    fn invoke(&self, content: &str) -> Result<ProcessOutput, LintError> {
        let path = self.resolver.resolve().ok_or(LintError::ExecutableNotFound)?;

        let request = ProcessRequest::new(&path, &LINT_ARGS).with_stdin(content.as_bytes());
        let result = self.resolver.host().run(&request);
        result.map_err(|source| LintError::Spawn { path, source })
    }
}
