//! Startup probe: is hadolint present and does it answer `--version`?
//!
//! Independent of the lint pipeline apart from sharing the resolver's idea of
//! which executable to run.

use crate::analyzer::hadolint::resolver::PathResolver;
use crate::analyzer::hadolint::types::Severity;
use crate::common::command_utils::{ProcessRequest, ProcessRunner};
use crate::common::host::{EnvSource, FileProbe};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;

pub const VERSION_ARGS: [&str; 1] = ["--version"];

static VERSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bv?(\d+\.\d+(?:\.\d+)?(?:-[0-9A-Za-z.-]+)?)\b").unwrap());

/// Result of probing the executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// `--version` exited 0.
    Healthy {
        path: PathBuf,
        version: Option<String>,
    },
    /// The executable ran but `--version` exited non-zero.
    Unhealthy {
        path: PathBuf,
        exit_code: Option<i32>,
    },
    /// No executable, or it could not be launched.
    Missing { reason: String },
}

/// A user-facing message describing an unhealthy status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy { .. })
    }

    /// What to tell the user, or `None` when there is nothing to report.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Healthy { .. } => None,
            Self::Unhealthy { exit_code, .. } => {
                let code = exit_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string());
                Some(Notice {
                    severity: Severity::Warning,
                    title: "Hadolint not working".to_string(),
                    message: format!(
                        "Hadolint is installed but returned error code {}. Dockerfile validation will not work properly.",
                        code
                    ),
                })
            }
            Self::Missing { reason } => Some(Notice {
                severity: Severity::Error,
                title: "Hadolint not found".to_string(),
                message: format!(
                    "Hadolint executable not found. Dockerfile validation will not work. {}",
                    reason
                ),
            }),
        }
    }
}

/// Run `<hadolint> --version` and classify the result.
pub fn check<H>(resolver: &PathResolver<H>) -> HealthStatus
where
    H: FileProbe + EnvSource + ProcessRunner,
{
    let Some(path) = resolver.resolve() else {
        return HealthStatus::Missing {
            reason: "hadolint not found in common paths or system PATH".to_string(),
        };
    };

    let output = match resolver
        .host()
        .run(&ProcessRequest::new(&path, &VERSION_ARGS))
    {
        Ok(output) => output,
        Err(err) => {
            debug!("Failed to launch {}: {}", path.display(), err);
            return HealthStatus::Missing {
                reason: err.to_string(),
            };
        }
    };

    if !output.success() {
        return HealthStatus::Unhealthy {
            path,
            exit_code: output.exit_code,
        };
    }

    let version = extract_version(&output.combined());
    info!("hadolint {:?} is healthy at {}", version, path.display());
    HealthStatus::Healthy { path, version }
}

/// Pull a version number out of `--version` output such as
/// `Haskell Dockerfile Linter 2.12.0`.
pub fn extract_version(text: &str) -> Option<String> {
    VERSION_PATTERN
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}
