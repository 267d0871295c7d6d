//! Session options.

use crate::ops::DEFAULT_HEAD_LINES;

/// Options controlling how a [`Session`](crate::Session) renders its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Lines printed by `head` when no `-n` is given.
    pub head_lines: usize,
    /// Filesystem label printed by `pwd` in front of the current directory.
    pub label: String,
    /// Sort `ls` output by name. Unsorted output follows hash order.
    pub sort_listing: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            head_lines: DEFAULT_HEAD_LINES,
            label: String::new(),
            sort_listing: true,
        }
    }
}

impl SessionOptions {
    /// Creates session options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default `head` line count.
    pub fn head_lines(mut self, lines: usize) -> Self {
        self.head_lines = lines;
        self
    }

    /// Sets the `pwd` label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Enables or disables sorted `ls` output.
    pub fn sort_listing(mut self, sort: bool) -> Self {
        self.sort_listing = sort;
        self
    }
}
