use log::trace;
use similar::{Algorithm, TextDiff as SimilarTextDiff};

use crate::annotate::AnnotatedText;
use crate::diff_span::{DiffSpan, SpanKind};
use crate::stats::DiffStats;

/// Wrapper around character-level text diff operations
pub struct TextDiff;

impl TextDiff {
    /// Diff two texts character by character.
    ///
    /// The result is cleaned up so that small coincidental matches inside
    /// an edited region do not split it into fragments. No deadline is set
    /// on the underlying Myers diff, so the same inputs always give the same
    /// spans.
    pub fn diff(old_text: &str, new_text: &str) -> Vec<DiffSpan> {
        let diff = SimilarTextDiff::configure()
            .algorithm(Algorithm::Myers)
            .diff_chars(old_text, new_text);

        let raw = diff
            .iter_all_changes()
            .map(|change| DiffSpan::new(change.tag().into(), change.value()));

        let spans = cleanup_semantic(merge(raw));
        trace!(
            "diffed {} -> {} chars into {} spans",
            old_text.len(),
            new_text.len(),
            spans.len()
        );
        spans
    }

    /// Diff two texts and total up the changed lines
    pub fn stats(old_text: &str, new_text: &str) -> DiffStats {
        DiffStats::from_spans(&Self::diff(old_text, new_text))
    }

    /// Diff two texts and annotate the result for display
    pub fn annotated(old_text: &str, new_text: &str) -> AnnotatedText {
        AnnotatedText::from_spans(&Self::diff(old_text, new_text))
    }
}

/// Collapse every run of edits between two equalities into one delete
/// followed by one insert, and join neighbouring equalities. Empty spans
/// are dropped.
fn merge(spans: impl IntoIterator<Item = DiffSpan>) -> Vec<DiffSpan> {
    let mut merged: Vec<DiffSpan> = Vec::new();
    let mut deleted = String::new();
    let mut inserted = String::new();

    for span in spans {
        if span.text.is_empty() {
            continue;
        }
        match span.kind {
            SpanKind::Delete => deleted.push_str(&span.text),
            SpanKind::Insert => inserted.push_str(&span.text),
            SpanKind::Equal => {
                flush_edits(&mut merged, &mut deleted, &mut inserted);
                match merged.last_mut() {
                    Some(last) if last.kind == SpanKind::Equal => last.text.push_str(&span.text),
                    _ => merged.push(span),
                }
            }
        }
    }
    flush_edits(&mut merged, &mut deleted, &mut inserted);

    merged
}

fn flush_edits(out: &mut Vec<DiffSpan>, deleted: &mut String, inserted: &mut String) {
    if !deleted.is_empty() {
        out.push(DiffSpan::delete(std::mem::take(deleted)));
    }
    if !inserted.is_empty() {
        out.push(DiffSpan::insert(std::mem::take(inserted)));
    }
}

/// Dissolve equalities that are no longer than the edits on either side
/// of them, until none are left. Expects merged input.
fn cleanup_semantic(mut spans: Vec<DiffSpan>) -> Vec<DiffSpan> {
    let mut from = 1;
    while let Some(index) = find_dissolvable_equality(&spans, from) {
        let text = std::mem::take(&mut spans[index].text);
        spans[index] = DiffSpan::delete(text.clone());
        spans.insert(index + 1, DiffSpan::insert(text));
        spans = merge(spans);
        // Only the previous equality can have become dissolvable
        from = index.saturating_sub(3).max(1);
    }
    spans
}

fn find_dissolvable_equality(spans: &[DiffSpan], from: usize) -> Option<usize> {
    let end = spans.len().saturating_sub(1);
    (from..end).find(|&i| {
        if spans[i].kind != SpanKind::Equal {
            return false;
        }
        let before = edit_weight(spans[..i].iter().rev());
        let after = edit_weight(spans[i + 1..].iter());
        let len = spans[i].char_len();
        before > 0 && after > 0 && len <= before && len <= after
    })
}

/// The larger of the deleted and inserted char counts in the edit run
/// adjacent to an equality
fn edit_weight<'a>(run: impl Iterator<Item = &'a DiffSpan>) -> usize {
    let (mut deleted, mut inserted) = (0, 0);
    for span in run.take_while(|span| span.is_change()) {
        if span.kind == SpanKind::Delete {
            deleted += span.char_len();
        } else {
            inserted += span.char_len();
        }
    }
    deleted.max(inserted)
}
