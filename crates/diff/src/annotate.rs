//! Annotated text for display
//!
//! Spans are first mapped to renderer-agnostic annotated segments. A thin
//! formatting step then turns them into bracket color-tag markup
//! (`[green]added[-]`), escaping any literal text that the renderer could
//! otherwise read as a tag.

use std::borrow::Cow;

use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diff_span::{DiffSpan, SpanKind};

/// Closes the most recent color tag
pub const RESET_TAG: &str = "[-]";

/// Highlight applied to a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Annotation {
    /// Text that only exists in the updated version
    #[display(fmt = "Added")]
    Added,

    /// Text that only exists in the original version
    #[display(fmt = "Removed")]
    Removed,
}

impl Annotation {
    /// The annotation for a span kind; equal text carries none
    pub fn for_kind(kind: SpanKind) -> Option<Self> {
        match kind {
            SpanKind::Insert => Some(Annotation::Added),
            SpanKind::Delete => Some(Annotation::Removed),
            SpanKind::Equal => None,
        }
    }
}

/// Tag names used for each annotation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Palette {
    /// Tag for added text
    pub added: String,

    /// Tag for removed text
    pub removed: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new("green", "red")
    }
}

impl Palette {
    /// Create a palette from two tag names
    pub fn new(added: impl Into<String>, removed: impl Into<String>) -> Self {
        Self {
            added: added.into(),
            removed: removed.into(),
        }
    }

    /// Get the tag name for an annotation
    pub fn tag(&self, annotation: Annotation) -> &str {
        match annotation {
            Annotation::Added => &self.added,
            Annotation::Removed => &self.removed,
        }
    }

    /// Wrap literal text in the tag for `annotation`
    pub fn paint(&self, annotation: Annotation, text: &str) -> String {
        format!("[{}]{}{}", self.tag(annotation), escape_markup(text), RESET_TAG)
    }
}

/// A run of text with an optional highlight
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnotatedSegment {
    /// Highlight, if any
    pub annotation: Option<Annotation>,

    /// Unescaped text
    pub text: String,
}

/// Diff output ready to be drawn
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnotatedText {
    segments: Vec<AnnotatedSegment>,
}

impl AnnotatedText {
    /// Annotate a sequence of diff spans
    pub fn from_spans(spans: &[DiffSpan]) -> Self {
        let segments = spans
            .iter()
            .map(|span| AnnotatedSegment {
                annotation: Annotation::for_kind(span.kind),
                text: span.text.clone(),
            })
            .collect();
        Self { segments }
    }

    /// Get the segments
    pub fn segments(&self) -> &[AnnotatedSegment] {
        &self.segments
    }

    /// Check if there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| s.text.is_empty())
    }

    /// The text with all annotations stripped
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Render as bracket color-tag markup
    pub fn to_markup(&self, palette: &Palette) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment.annotation {
                Some(annotation) => out.push_str(&palette.paint(annotation, &segment.text)),
                None => out.push_str(&escape_markup(&segment.text)),
            }
        }
        out
    }
}

/// Escape text so it renders literally in bracket color-tag markup.
///
/// Anything shaped like a tag, i.e. `[`, one or more of
/// `A-Za-z0-9_,;: -."#`, any number of `[`, then `]`, gets a `[` inserted
/// before its closing bracket: `[red]` becomes `[red[]`. Other text is
/// returned unchanged.
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let mut escaped: Option<String> = None;
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'[' {
            if let Some(close) = tag_close(bytes, i) {
                let out = escaped.get_or_insert_with(|| String::with_capacity(text.len() + 8));
                out.push_str(&text[copied..close]);
                out.push_str("[]");
                copied = close + 1;
                i = close + 1;
                continue;
            }
        }
        i += 1;
    }

    match escaped {
        Some(mut out) => {
            out.push_str(&text[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(text),
    }
}

/// Index of the `]` closing a tag-shaped sequence opened at `open`
fn tag_close(bytes: &[u8], open: usize) -> Option<usize> {
    let body = open + 1;
    let mut i = body;
    while i < bytes.len() && is_tag_byte(bytes[i]) {
        i += 1;
    }
    if i == body {
        return None;
    }
    while i < bytes.len() && bytes[i] == b'[' {
        i += 1;
    }
    (i < bytes.len() && bytes[i] == b']').then_some(i)
}

fn is_tag_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'_' | b',' | b';' | b':' | b' ' | b'-' | b'.' | b'"' | b'#'
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_tags() {
        assert_eq!(escape_markup("[red]x[-]"), "[red[]x[-[]");
        assert_eq!(escape_markup("[#ff0000:black:b]"), "[#ff0000:black:b[]");
        assert_eq!(escape_markup("[a[[]"), "[a[[[]");
        assert_eq!(escape_markup("[ab[c]"), "[ab[c[]");
        assert_eq!(escape_markup("é[x]ü"), "é[x[]ü");
    }

    #[test]
    fn test_escape_leaves_plain_text_borrowed() {
        for text in ["", "plain", "a[b", "[]", "[!]", "x]y", "[é]"] {
            assert!(matches!(escape_markup(text), Cow::Borrowed(_)), "{text:?}");
        }
    }

    #[test]
    fn test_markup_wraps_changes() {
        let spans = vec![
            DiffSpan::equal("a "),
            DiffSpan::delete("[red]"),
            DiffSpan::insert("b"),
        ];
        let text = AnnotatedText::from_spans(&spans);

        assert_eq!(text.to_markup(&Palette::default()), "a [red][red[][-][green]b[-]");
        assert_eq!(text.plain_text(), "a [red]b");
        assert_eq!(
            text.to_markup(&Palette::new("blue", "yellow")),
            "a [yellow][red[][-][blue]b[-]"
        );
    }
}
