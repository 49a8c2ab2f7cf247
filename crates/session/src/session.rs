use std::time::Instant;

use diff_engine::{escape_markup, AnnotatedText, Annotation, DiffStats, TextDiff};
use log::{debug, info, trace};

use crate::buffer::{BufferId, TextBuffer};
use crate::config::SessionConfig;
use crate::gesture::{ClearGestureState, ClearScope};
use crate::payload::{RenderPayload, RenderSink};

/// Two editable buffers and the diff between them.
///
/// All methods run synchronously on the caller's thread. Every event
/// recomputes the diff from scratch and hands a fresh [`RenderPayload`] to
/// the sink.
pub struct LiveDiffSession<S: RenderSink> {
    config: SessionConfig,
    original: TextBuffer,
    updated: TextBuffer,
    original_clear: ClearGestureState,
    updated_clear: ClearGestureState,
    sink: S,
    last_payload: Option<RenderPayload>,
}

impl<S: RenderSink> LiveDiffSession<S> {
    /// Create a session with empty buffers. Nothing is rendered until the
    /// first event or [`refresh`](Self::refresh).
    pub fn new(config: SessionConfig, sink: S) -> Self {
        info!(
            "Creating diff session: {:?} vs {:?}",
            config.original_label, config.updated_label
        );
        Self {
            original: TextBuffer::new(config.label(BufferId::Original)),
            updated: TextBuffer::new(config.label(BufferId::Updated)),
            config,
            original_clear: ClearGestureState::default(),
            updated_clear: ClearGestureState::default(),
            sink,
            last_payload: None,
        }
    }

    /// Create a session with the default configuration
    pub fn with_sink(sink: S) -> Self {
        Self::new(SessionConfig::default(), sink)
    }

    /// The host observed an edit: store the new text and re-render
    pub fn on_buffer_changed(&mut self, which: BufferId, new_content: &str) {
        trace!("{} changed ({} bytes)", which, new_content.len());
        self.buffer_mut(which).set_text(new_content);
        self.refresh();
    }

    /// The user asked to clear `which` at `now`. A second gesture on the
    /// same buffer within the double-tap window clears both buffers.
    pub fn on_clear_gesture(&mut self, which: BufferId, now: Instant) -> ClearScope {
        let gesture = self.gesture_mut(which);
        let elapsed = gesture
            .last_trigger()
            .map(|last| now.saturating_duration_since(last));
        let scope = gesture.register(now);
        debug!(
            "Clear gesture on {} (since last: {:?}) clears {}",
            which, elapsed, scope
        );

        match scope {
            ClearScope::ThisBuffer => self.buffer_mut(which).clear(),
            ClearScope::BothBuffers => {
                self.original.clear();
                self.updated.clear();
            }
        }
        self.refresh();
        scope
    }

    /// Recompute the diff and render without changing any buffer
    pub fn refresh(&mut self) {
        let original = self.original.text();
        let updated = self.updated.text();

        let spans = TextDiff::diff(&original, &updated);
        let stats = DiffStats::from_spans(&spans);
        let body = AnnotatedText::from_spans(&spans).to_markup(&self.config.palette);

        let payload = RenderPayload {
            original_title: pane_title(self.original.label(), self.original.line_count()),
            updated_title: pane_title(self.updated.label(), self.updated.line_count()),
            legend: self.legend(stats),
            body,
            stats,
        };
        trace!(
            "Rendering {} spans: +{} -{}",
            spans.len(),
            stats.added_lines,
            stats.removed_lines
        );

        self.sink.render(&payload);
        self.last_payload = Some(payload);
    }

    /// Get the current text of a buffer
    pub fn content(&self, which: BufferId) -> String {
        self.buffer(which).text()
    }

    /// Get the line count shown in a pane title
    pub fn line_count(&self, which: BufferId) -> usize {
        self.buffer(which).line_count()
    }

    /// Get a buffer
    pub fn buffer(&self, which: BufferId) -> &TextBuffer {
        match which {
            BufferId::Original => &self.original,
            BufferId::Updated => &self.updated,
        }
    }

    /// Get the payload of the most recent recompute
    pub fn last_payload(&self) -> Option<&RenderPayload> {
        self.last_payload.as_ref()
    }

    /// Get the sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the session, returning its sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn buffer_mut(&mut self, which: BufferId) -> &mut TextBuffer {
        match which {
            BufferId::Original => &mut self.original,
            BufferId::Updated => &mut self.updated,
        }
    }

    fn gesture_mut(&mut self, which: BufferId) -> &mut ClearGestureState {
        match which {
            BufferId::Original => &mut self.original_clear,
            BufferId::Updated => &mut self.updated_clear,
        }
    }

    fn legend(&self, stats: DiffStats) -> String {
        let palette = &self.config.palette;
        format!(
            " {} | {} | {} ",
            palette.paint(
                Annotation::Removed,
                &format!("Removed: {}", stats.removed_lines)
            ),
            palette.paint(Annotation::Added, &format!("Added: {}", stats.added_lines)),
            escape_markup(&self.config.clear_hint),
        )
    }
}

fn pane_title(label: &str, lines: usize) -> String {
    format!(" {} (Lines: {}) ", escape_markup(label), lines)
}
