use diff_engine::{
    line_count, reconstruct_original, reconstruct_updated, DiffSpan, DiffStats, SpanKind, TextDiff,
};
use pretty_assertions::assert_eq;

fn assert_round_trip(old: &str, new: &str) -> Vec<DiffSpan> {
    let spans = TextDiff::diff(old, new);
    assert_eq!(reconstruct_original(&spans), old);
    assert_eq!(reconstruct_updated(&spans), new);
    spans
}

#[test]
fn test_empty_texts() {
    // Two empty texts produce no spans at all
    let spans = assert_round_trip("", "");
    assert!(spans.is_empty());
    assert_eq!(DiffStats::from_spans(&spans), DiffStats::default());
}

#[test]
fn test_identical_texts() {
    let spans = assert_round_trip("same", "same");
    assert_eq!(spans, vec![DiffSpan::equal("same")]);

    let stats = DiffStats::from_spans(&spans);
    assert_eq!(stats.added_lines, 0);
    assert_eq!(stats.removed_lines, 0);
}

#[test]
fn test_added_text() {
    let spans = assert_round_trip("", "Line 1\nLine 2\n");
    assert_eq!(spans, vec![DiffSpan::insert("Line 1\nLine 2\n")]);
    assert_eq!(DiffStats::from_spans(&spans).added_lines, 3);
}

#[test]
fn test_deleted_text() {
    let spans = assert_round_trip("Line 1\nLine 2", "");
    assert_eq!(spans, vec![DiffSpan::delete("Line 1\nLine 2")]);
    assert_eq!(DiffStats::from_spans(&spans).removed_lines, 2);
}

#[test]
fn test_disjoint_texts() {
    let spans = assert_round_trip("abc", "xyz");
    assert_eq!(spans, vec![DiffSpan::delete("abc"), DiffSpan::insert("xyz")]);
}

#[test]
fn test_changed_word() {
    let old = "Line 1\nLine 2\nLine 3";
    let new = "Line 1\nLine X\nLine 3";

    let spans = assert_round_trip(old, new);
    assert_eq!(
        spans,
        vec![
            DiffSpan::equal("Line 1\nLine "),
            DiffSpan::delete("2"),
            DiffSpan::insert("X"),
            DiffSpan::equal("\nLine 3"),
        ]
    );

    let stats = TextDiff::stats(old, new);
    assert_eq!(stats.added_lines, 1);
    assert_eq!(stats.removed_lines, 1);
}

#[test]
fn test_changed_line_is_not_fragmented() {
    // "world" and "there" only share an "r"; the change stays in one piece
    let spans = assert_round_trip("hello\nworld", "hello\nthere");
    assert_eq!(
        spans,
        vec![
            DiffSpan::equal("hello\n"),
            DiffSpan::delete("world"),
            DiffSpan::insert("there"),
        ]
    );

    let stats = DiffStats::from_spans(&spans);
    assert_eq!(stats.removed_lines, 1);
    assert_eq!(stats.added_lines, 1);
    assert_eq!(line_count("hello\nworld"), 2);
    assert_eq!(line_count("hello\nthere"), 2);
}

#[test]
fn test_additions_only() {
    let spans = assert_round_trip("Line 1\nLine 3\n", "Line 1\nLine 2\nLine 3\n");

    assert!(spans.iter().all(|s| s.kind != SpanKind::Delete));
    let stats = DiffStats::from_spans(&spans);
    assert!(stats.added_lines >= 1);
    assert_eq!(stats.removed_lines, 0);
}

#[test]
fn test_deletions_only() {
    let spans = assert_round_trip("Line 1\nLine 2\nLine 3\n", "Line 1\nLine 3\n");

    assert!(spans.iter().all(|s| s.kind != SpanKind::Insert));
    let stats = DiffStats::from_spans(&spans);
    assert_eq!(stats.added_lines, 0);
    assert!(stats.removed_lines >= 1);
}

#[test]
fn test_unicode_text() {
    let spans = assert_round_trip("naïve café", "naive cafe");
    assert_eq!(
        spans,
        vec![
            DiffSpan::equal("na"),
            DiffSpan::delete("ï"),
            DiffSpan::insert("i"),
            DiffSpan::equal("ve caf"),
            DiffSpan::delete("é"),
            DiffSpan::insert("e"),
        ]
    );
}

#[test]
fn test_whitespace_and_control_chars() {
    assert_round_trip("   ", "\t\t");
    assert_round_trip("a\r\nb", "a\nb");
    assert_round_trip("\u{0}\u{7}\u{1b}[31m", "\u{1b}[0m\u{0}");
    assert_round_trip("\n\n\n", "\n");
}

#[test]
fn test_spans_are_maximal() {
    let spans = assert_round_trip(
        "The quick brown fox jumps over the lazy dog",
        "The quick red fox leaps over the lazy cat",
    );

    assert!(spans.iter().all(|s| !s.text.is_empty()));
    for pair in spans.windows(2) {
        assert_ne!(pair[0].kind, pair[1].kind);
    }
}

#[test]
fn test_repeated_diff_is_stable() {
    let old = "fn main() {\n    println!(\"Hello, world!\");\n}\n";
    let new = "fn main() {\n    let name = \"Rust\";\n    println!(\"Hello, {}!\", name);\n}\n";

    assert_eq!(TextDiff::diff(old, new), TextDiff::diff(old, new));
}
