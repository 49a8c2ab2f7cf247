//! Feed two files into a session and print every payload
//!
//! ```text
//! RUST_LOG=debug cargo run -p diff-session --example replay -- old.txt new.txt
//! ```

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use diff_session::{BufferId, FnSink, LiveDiffSession, RenderPayload};

fn print_payload(payload: &RenderPayload) {
    println!("{}|{}", payload.original_title, payload.updated_title);
    println!("{}", payload.legend);
    println!("{}", payload.body);
    println!("---");
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(original_path), Some(updated_path)) = (args.next(), args.next()) else {
        anyhow::bail!("usage: replay <original> <updated>");
    };

    let original = std::fs::read_to_string(&original_path)
        .with_context(|| format!("Failed to read {}", original_path))?;
    let updated = std::fs::read_to_string(&updated_path)
        .with_context(|| format!("Failed to read {}", updated_path))?;

    let mut session = LiveDiffSession::with_sink(FnSink(print_payload));
    session.refresh();
    session.on_buffer_changed(BufferId::Original, &original);
    session.on_buffer_changed(BufferId::Updated, &updated);

    // One tap clears the updated pane, a quick second tap clears both
    let now = Instant::now();
    for offset in [0, 150] {
        let at = now + Duration::from_millis(offset);
        let scope = session.on_clear_gesture(BufferId::Updated, at);
        println!("cleared {}", scope);
    }

    Ok(())
}
