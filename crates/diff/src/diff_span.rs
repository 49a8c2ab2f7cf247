use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::stats::line_count;

/// Classification of a run of characters in a diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpanKind {
    /// Text present in both versions
    #[display(fmt = "Equal")]
    Equal,

    /// Text only present in the updated version
    #[display(fmt = "Insert")]
    Insert,

    /// Text only present in the original version
    #[display(fmt = "Delete")]
    Delete,
}

impl SpanKind {
    /// Whether text of this kind belongs to the original version
    pub fn in_original(self) -> bool {
        matches!(self, SpanKind::Equal | SpanKind::Delete)
    }

    /// Whether text of this kind belongs to the updated version
    pub fn in_updated(self) -> bool {
        matches!(self, SpanKind::Equal | SpanKind::Insert)
    }
}

impl From<similar::ChangeTag> for SpanKind {
    fn from(tag: similar::ChangeTag) -> Self {
        match tag {
            similar::ChangeTag::Equal => SpanKind::Equal,
            similar::ChangeTag::Insert => SpanKind::Insert,
            similar::ChangeTag::Delete => SpanKind::Delete,
        }
    }
}

/// A maximal run of one classification, in document order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffSpan {
    /// What this span represents
    pub kind: SpanKind,

    /// The literal text covered by the span
    pub text: String,
}

impl DiffSpan {
    /// Create a new span
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Shorthand for an equal span
    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Equal, text)
    }

    /// Shorthand for an inserted span
    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Insert, text)
    }

    /// Shorthand for a deleted span
    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Delete, text)
    }

    /// Check if this span is an insertion or a deletion
    pub fn is_change(&self) -> bool {
        self.kind != SpanKind::Equal
    }

    /// Number of chars in the span
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of lines covered by the span text
    pub fn line_count(&self) -> usize {
        line_count(&self.text)
    }
}

/// Concatenate the Equal and Delete spans, yielding the original text
pub fn reconstruct_original(spans: &[DiffSpan]) -> String {
    spans
        .iter()
        .filter(|s| s.kind.in_original())
        .map(|s| s.text.as_str())
        .collect()
}

/// Concatenate the Equal and Insert spans, yielding the updated text
pub fn reconstruct_updated(spans: &[DiffSpan]) -> String {
    spans
        .iter()
        .filter(|s| s.kind.in_updated())
        .map(|s| s.text.as_str())
        .collect()
}
