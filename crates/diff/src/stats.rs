#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diff_span::{DiffSpan, SpanKind};

/// Count lines the naive way: `""` has no lines, anything else has one
/// more line than it has `'\n'` characters.
///
/// A trailing newline therefore opens an extra (empty) line, and text
/// without a trailing newline still counts its last segment.
pub fn line_count(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        1 + text.bytes().filter(|&b| b == b'\n').count()
    }
}

/// Added/removed line totals of a diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffStats {
    /// Lines covered by inserted spans
    pub added_lines: usize,

    /// Lines covered by deleted spans
    pub removed_lines: usize,
}

impl DiffStats {
    /// Sum line counts over the changed spans; equal spans never contribute
    pub fn from_spans(spans: &[DiffSpan]) -> Self {
        spans.iter().fold(Self::default(), |mut stats, span| {
            match span.kind {
                SpanKind::Insert => stats.added_lines += span.line_count(),
                SpanKind::Delete => stats.removed_lines += span.line_count(),
                SpanKind::Equal => {}
            }
            stats
        })
    }

    /// Check if the diff has any changes
    pub fn has_changes(&self) -> bool {
        self.added_lines > 0 || self.removed_lines > 0
    }
}
