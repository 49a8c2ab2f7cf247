use diff_engine::DiffStats;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::buffer::BufferId;

/// Everything the display layer draws after one recompute.
///
/// Titles, legend and body are bracket color-tag markup; literal text in
/// them is already escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderPayload {
    /// Title of the left pane, with its line count
    pub original_title: String,

    /// Title of the right pane, with its line count
    pub updated_title: String,

    /// Diff pane legend with the removed/added line counts
    pub legend: String,

    /// Annotated diff
    pub body: String,

    /// The statistics shown in the legend
    pub stats: DiffStats,
}

impl RenderPayload {
    /// Get the title of a pane
    pub fn title(&self, which: BufferId) -> &str {
        match which {
            BufferId::Original => &self.original_title,
            BufferId::Updated => &self.updated_title,
        }
    }
}

/// Receives a payload after every recompute
pub trait RenderSink {
    /// Draw the payload
    fn render(&mut self, payload: &RenderPayload);
}

/// Keeps every payload, oldest first
impl RenderSink for Vec<RenderPayload> {
    fn render(&mut self, payload: &RenderPayload) {
        self.push(payload.clone());
    }
}

/// Discards payloads; the host reads [`last_payload`](crate::LiveDiffSession::last_payload) instead
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _payload: &RenderPayload) {}
}

/// Adapts a closure into a sink
pub struct FnSink<F>(pub F);

impl<F> RenderSink for FnSink<F>
where
    F: FnMut(&RenderPayload),
{
    fn render(&mut self, payload: &RenderPayload) {
        (self.0)(payload)
    }
}
