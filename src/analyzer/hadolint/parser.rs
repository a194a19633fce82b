//! Decoding of `hadolint --format json` output.
//!
//! The tool prints a JSON array of issues:
//!
//! ```json
//! [{"line": 1, "code": "DL3007", "message": "...", "column": 1, "file": "-", "level": "warning"}]
//! ```
//!
//! Only `line`, `message` and `level` are used. Each element is decoded on
//! its own, so one malformed issue never costs the rest of the batch.

use crate::analyzer::hadolint::range::{TextBuffer, map_line};
use crate::analyzer::hadolint::types::{DiagnosticRecord, Severity};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use std::num::NonZeroU32;

/// The fields of one reported issue this crate relies on.
#[derive(Debug, Deserialize)]
struct RawIssue {
    line: NonZeroU32,
    message: String,
    level: String,
}

/// Result of decoding a single array element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Valid(DiagnosticRecord),
    /// The element was malformed; carries the reason.
    Skipped(String),
}

impl EntryOutcome {
    pub fn into_record(self) -> Option<DiagnosticRecord> {
        match self {
            Self::Valid(record) => Some(record),
            Self::Skipped(_) => None,
        }
    }
}

/// Decode one issue object and map its line onto `buffer`.
pub fn parse_entry<B: TextBuffer + ?Sized>(entry: &Value, buffer: &B) -> EntryOutcome {
    let raw = match RawIssue::deserialize(entry) {
        Ok(raw) => raw,
        Err(err) => return EntryOutcome::Skipped(err.to_string()),
    };

    if raw.message.is_empty() {
        return EntryOutcome::Skipped("empty message".to_string());
    }

    let line = raw.line.get();
    EntryOutcome::Valid(DiagnosticRecord {
        line,
        message: raw.message,
        severity: Severity::from_level(&raw.level),
        range: map_line(buffer, line),
    })
}

/// Decode the tool's complete output into diagnostics, in reported order.
///
/// Blank output means no issues and yields an empty list silently. Output
/// whose leading value is not a JSON array also yields an empty list, with a
/// warning. Text following the array (stderr chatter merged into the stream)
/// is ignored.
pub fn parse_output<B: TextBuffer + ?Sized>(output: &str, buffer: &B) -> Vec<DiagnosticRecord> {
    if output.trim().is_empty() {
        return Vec::new();
    }

    let mut stream = serde_json::Deserializer::from_str(output).into_iter::<Vec<Value>>();
    let entries = match stream.next() {
        Some(Ok(entries)) => entries,
        Some(Err(err)) => {
            warn!("Failed to parse hadolint output ({}): {}", err, output.trim());
            return Vec::new();
        }
        None => return Vec::new(),
    };

    let trailing = output[stream.byte_offset()..].trim();
    if !trailing.is_empty() {
        debug!("Ignoring trailing hadolint output: {}", trailing);
    }

    entries
        .iter()
        .filter_map(|entry| match parse_entry(entry, buffer) {
            EntryOutcome::Valid(record) => Some(record),
            EntryOutcome::Skipped(reason) => {
                debug!("Skipping invalid issue ({}): {}", reason, entry);
                None
            }
        })
        .collect()
}
