// Live diff session for the two-pane comparison tool
// Owns both buffers and the clear gesture state, and re-renders the diff
// pane on every event

mod buffer;
mod config;
mod gesture;
mod payload;
mod session;

pub use buffer::{BufferId, TextBuffer};
pub use config::SessionConfig;
pub use gesture::{ClearGestureState, ClearScope, DOUBLE_TAP_WINDOW};
pub use payload::{FnSink, NullSink, RenderPayload, RenderSink};
pub use session::LiveDiffSession;

pub use diff_engine::{DiffStats, Palette};
