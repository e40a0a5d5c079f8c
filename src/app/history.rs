//! In-memory navigation history.
//!
//! Models the browser's session history for the plugin host: each entry is a
//! fragment (empty for the search view). Pushing drops any forward entries,
//! and stepping back or forward yields the fragment of the entry landed on,
//! which the host feeds back into the engine as `HistoryChanged`.

/// Linear history of fragments with a current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStack {
    entries: Vec<String>,
    position: usize,
}

impl HistoryStack {
    /// Creates a history holding only the initial fragment.
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            position: 0,
        }
    }

    /// Appends an entry after the current one, discarding forward entries.
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.entries.truncate(self.position + 1);
        self.entries.push(fragment.into());
        self.position = self.entries.len() - 1;
        tracing::trace!(position = self.position, depth = self.entries.len(), "history entry pushed");
    }

    /// Steps back one entry and returns its fragment, or `None` at the start.
    pub fn back(&mut self) -> Option<&str> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        self.entries.get(self.position).map(String::as_str)
    }

    /// Steps forward one entry and returns its fragment, or `None` at the end.
    pub fn forward(&mut self) -> Option<&str> {
        if self.position + 1 >= self.entries.len() {
            return None;
        }
        self.position += 1;
        self.entries.get(self.position).map(String::as_str)
    }

    #[must_use]
    pub fn current(&self) -> &str {
        self.entries.get(self.position).map_or("", String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new("")
    }
}
