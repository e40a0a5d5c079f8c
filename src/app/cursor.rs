//! Keyboard selection cursor over a bounded list.
//!
//! The same cursor drives the search result list and the flow-link rows of
//! the Results view. It clamps instead of wrapping.

/// Highlighted position within a list of `len` items.
///
/// `selected` is either `None` or an index in `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionCursor {
    selected: Option<usize>,
    len: usize,
}

impl SelectionCursor {
    /// Creates a cursor with nothing selected.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { selected: None, len }
    }

    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Selects the first item from `None`, otherwise advances and clamps at
    /// the last item.
    pub fn move_down(&mut self) {
        if self.len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(index) => (index + 1).min(self.len - 1),
        });
    }

    /// Selects the first item from `None`, otherwise steps back and clamps
    /// at zero.
    ///
    /// Moving up from `None` lands on the first item, not the last.
    pub fn move_up(&mut self) {
        if self.len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(index) => index.saturating_sub(1),
        });
    }

    /// Clears the selection and adopts a new list length.
    pub fn reset(&mut self, len: usize) {
        self.selected = None;
        self.len = len;
    }
}
