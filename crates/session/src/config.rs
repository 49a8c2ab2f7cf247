use diff_engine::Palette;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::buffer::BufferId;

/// Presentation settings for a session.
///
/// The double-tap window is not part of this; it is the fixed
/// [`DOUBLE_TAP_WINDOW`](crate::DOUBLE_TAP_WINDOW).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionConfig {
    /// Title label of the left pane
    pub original_label: String,

    /// Title label of the right pane
    pub updated_label: String,

    /// Tags used for added/removed text
    pub palette: Palette,

    /// Trailing hint in the diff pane legend
    pub clear_hint: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            original_label: "Original".to_string(),
            updated_label: "Updated".to_string(),
            palette: Palette::default(),
            clear_hint: "Delete to Clear".to_string(),
        }
    }
}

impl SessionConfig {
    /// Set the pane labels
    pub fn with_labels(mut self, original: impl Into<String>, updated: impl Into<String>) -> Self {
        self.original_label = original.into();
        self.updated_label = updated.into();
        self
    }

    /// Set the palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the legend hint
    pub fn with_clear_hint(mut self, hint: impl Into<String>) -> Self {
        self.clear_hint = hint.into();
        self
    }

    /// Get the label of a pane
    pub fn label(&self, which: BufferId) -> &str {
        match which {
            BufferId::Original => &self.original_label,
            BufferId::Updated => &self.updated_label,
        }
    }
}
