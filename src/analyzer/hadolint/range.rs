//! Line-to-offset mapping.
//!
//! Hadolint only reports line numbers. Editors decorate character spans, so
//! each reported line is widened to the span of that whole line, excluding
//! its terminator.

use crate::analyzer::hadolint::types::TextRange;
use log::debug;

/// Read-only, line-indexed view of a document.
///
/// Offsets are character offsets into the full text. Line extents exclude
/// line-terminator characters.
pub trait TextBuffer {
    /// Number of lines, including a trailing empty line after a final terminator.
    fn line_count(&self) -> usize;

    /// Offset of the first character of line `index` (0-based).
    fn line_start_offset(&self, index: usize) -> usize;

    /// Offset just past the last non-terminator character of line `index`.
    fn line_end_offset(&self, index: usize) -> usize;

    /// Total length of the document in characters.
    fn char_len(&self) -> usize;
}

/// Line table computed once from a string.
///
/// `\n`, `\r\n` and a lone `\r` all terminate a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    lines: Vec<(usize, usize)>,
    char_len: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut start = 0;
        let mut offset = 0;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '\n' => {
                    lines.push((start, offset));
                    offset += 1;
                    start = offset;
                }
                '\r' => {
                    lines.push((start, offset));
                    offset += 1;
                    if chars.next_if_eq(&'\n').is_some() {
                        offset += 1;
                    }
                    start = offset;
                }
                _ => offset += 1,
            }
        }
        lines.push((start, offset));

        Self {
            lines,
            char_len: offset,
        }
    }
}

impl TextBuffer for LineIndex {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_start_offset(&self, index: usize) -> usize {
        self.lines[index].0
    }

    fn line_end_offset(&self, index: usize) -> usize {
        self.lines[index].1
    }

    fn char_len(&self) -> usize {
        self.char_len
    }
}

/// Span of the 1-based `line` in `buffer`.
///
/// Returns `None` when the line is out of bounds or has no characters; an
/// empty span has nothing to decorate.
pub fn map_line<B: TextBuffer + ?Sized>(buffer: &B, line: u32) -> Option<TextRange> {
    let Some(index) = (line as usize).checked_sub(1) else {
        debug!("Invalid line {} in document", line);
        return None;
    };

    if index >= buffer.line_count() {
        debug!(
            "Line {} is outside the document ({} lines)",
            line,
            buffer.line_count()
        );
        return None;
    }

    let start = buffer.line_start_offset(index);
    let end = buffer.line_end_offset(index);

    let range = TextRange::new(start, end)?;
    if !range.fits_within(buffer.char_len()) {
        debug!(
            "Line {} spans {} past the end of the document ({} chars)",
            line,
            range,
            buffer.char_len()
        );
        return None;
    }
    Some(range)
}
