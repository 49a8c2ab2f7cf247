use diff_engine::{DiffStats, Palette, SpanKind, TextDiff};

fn main() {
    // Two sample texts to compare
    let text1 = "This is the first line.\nHere is the second line.\nAnd the third line.";
    let text2 = "This is the first line.\n\
                 This is a completely different second line.\n\
                 And the third line.\n\
                 Plus a new fourth line.";

    let spans = TextDiff::diff(text1, text2);
    let stats = DiffStats::from_spans(&spans);

    println!("Diff statistics:");
    println!("  Spans: {}", spans.len());
    println!("  Added lines: {}", stats.added_lines);
    println!("  Removed lines: {}", stats.removed_lines);

    // Print spans with terminal colors
    println!("\nSpans:");
    for span in &spans {
        match span.kind {
            SpanKind::Delete => println!("  \x1b[31m{:?}\x1b[0m", span.text),
            SpanKind::Insert => println!("  \x1b[32m{:?}\x1b[0m", span.text),
            SpanKind::Equal => println!("  {:?}", span.text),
        }
    }

    // Bracket markup, as handed to a tag-aware text view
    println!("\nMarkup:");
    println!(
        "{}",
        TextDiff::annotated(text1, text2).to_markup(&Palette::default())
    );
}
