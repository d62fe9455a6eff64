//! Single-open FAQ accordion state.

/// At most one item is open at a time. Clicking the open item closes it;
/// clicking a closed item closes everything else and opens it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    #[must_use]
    pub const fn new() -> Self {
        Self { open: None }
    }

    #[must_use]
    pub const fn open_item(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub const fn is_open(&self, index: usize) -> bool {
        matches!(self.open, Some(open) if open == index)
    }

    /// Apply a click on item `index`, returning the resulting state.
    #[must_use]
    pub const fn toggled(self, index: usize) -> Self {
        if self.is_open(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }
}
