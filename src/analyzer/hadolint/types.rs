//! Core types produced by the hadolint pipeline.
//!
//! - `Severity` - the three display tiers a reported level collapses to
//! - `TextRange` - a half-open character span in the source buffer
//! - `DiagnosticRecord` - one finding, mapped onto the source

use serde::Serialize;
use std::fmt;

/// Severity tier of a diagnostic.
///
/// Ordered from most severe to least severe: `Error > Warning > Info`.
/// Hadolint reports more levels than this (`info`, `style`, ...); every level
/// that is not `error` or `warning` lands in `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    /// Classify a level string reported by the tool (case-insensitive).
    pub fn from_level(level: &str) -> Self {
        if level.eq_ignore_ascii_case("error") {
            Self::Error
        } else if level.eq_ignore_ascii_case("warning") {
            Self::Warning
        } else {
            Self::Info
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Error => 2,
            Self::Warning => 1,
            Self::Info => 0,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Half-open character-offset interval `[start, end)`.
///
/// Always non-empty: `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Returns `None` unless `start < end`.
    pub fn new(start: usize, end: usize) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of characters covered.
    pub fn span(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range fits inside a buffer of `len` characters.
    pub fn fits_within(&self, len: usize) -> bool {
        self.end <= len
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A single issue reported by hadolint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticRecord {
    /// The line number as reported by the tool (1-indexed).
    pub line: u32,
    /// Human-readable description.
    pub message: String,
    /// Severity tier derived from the reported level.
    pub severity: Severity,
    /// Span of the reported line, absent when it cannot be mapped.
    pub range: Option<TextRange>,
}

impl DiagnosticRecord {
    pub fn new(
        line: u32,
        message: impl Into<String>,
        severity: Severity,
        range: Option<TextRange>,
    ) -> Self {
        Self {
            line,
            message: message.into(),
            severity,
            range,
        }
    }

    /// Whether this record has a span a renderer can decorate.
    pub fn is_renderable(&self) -> bool {
        self.range.is_some()
    }
}
