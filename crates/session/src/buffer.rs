use std::str::FromStr;

use anyhow::{bail, Result};
use derive_more::Display;
use ropey::Rope;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies one of the two editable panes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BufferId {
    /// The left pane
    #[display(fmt = "original")]
    Original,

    /// The right pane
    #[display(fmt = "updated")]
    Updated,
}

impl BufferId {
    /// Both buffers, in pane order
    pub const ALL: [BufferId; 2] = [BufferId::Original, BufferId::Updated];

    /// The buffer in the other pane
    pub fn other(self) -> Self {
        match self {
            BufferId::Original => BufferId::Updated,
            BufferId::Updated => BufferId::Original,
        }
    }
}

impl FromStr for BufferId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "original" | "left" => Ok(BufferId::Original),
            "updated" | "right" => Ok(BufferId::Updated),
            other => bail!("unknown buffer {other:?}, expected \"original\" or \"updated\""),
        }
    }
}

/// The text of one pane
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// Display name shown in the pane title
    label: String,

    /// Current content
    content: Rope,
}

impl TextBuffer {
    /// Create an empty buffer
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: Rope::new(),
        }
    }

    /// Get the label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the content as a string
    pub fn text(&self) -> String {
        self.content.to_string()
    }

    /// Replace the whole content
    pub fn set_text(&mut self, text: &str) {
        self.content = Rope::from_str(text);
    }

    /// Remove all content
    pub fn clear(&mut self) {
        self.content = Rope::new();
    }

    /// Check if the buffer holds no text
    pub fn is_empty(&self) -> bool {
        self.content.len_chars() == 0
    }

    /// Number of lines shown in the pane title: zero when empty, otherwise
    /// one more than the number of `'\n'` characters.
    ///
    /// Counted over the chunks rather than with `Rope::len_lines`, whose
    /// notion of a line break depends on ropey's enabled features.
    pub fn line_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let newlines: usize = self
            .content
            .chunks()
            .map(|chunk| chunk.bytes().filter(|&b| b == b'\n').count())
            .sum();
        1 + newlines
    }
}
