// Character-level diff engine for the live diff session
// This crate turns two texts into classified spans, line statistics and
// annotated markup

mod annotate;
mod diff_span;
mod stats;
mod text_diff;

pub use annotate::{escape_markup, AnnotatedSegment, AnnotatedText, Annotation, Palette, RESET_TAG};
pub use diff_span::{reconstruct_original, reconstruct_updated, DiffSpan, SpanKind};
pub use stats::{line_count, DiffStats};
pub use text_diff::TextDiff;
