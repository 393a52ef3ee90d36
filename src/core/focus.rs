//! # Focus Ring
//!
//! Tracks which login control receives keyboard input.
//!
//! ```text
//! 0 ──► 1 ──► … ──► N-1 ──► N (submit) ──┐
//! ▲                                      │
//! └──────────────────────────────────────┘
//! ```
//!
//! Indices `0..N` are text fields, index `N` is the submit control.
//! Both directions wrap.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    index: usize,
    fields: usize,
}

impl FocusRing {
    /// Focus the first field of a ring over `fields` inputs plus submit.
    pub fn new(fields: usize) -> Self {
        Self { index: 0, fields }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of text fields (the submit control is not counted).
    pub fn fields(&self) -> usize {
        self.fields
    }

    pub fn next(&mut self) {
        self.index = if self.index >= self.fields { 0 } else { self.index + 1 };
    }

    pub fn prev(&mut self) {
        self.index = if self.index == 0 { self.fields } else { self.index - 1 };
    }

    pub fn is_submit(&self) -> bool {
        self.index == self.fields
    }

    /// The focused text field, or `None` when the submit control has focus.
    pub fn field(&self) -> Option<usize> {
        (self.index < self.fields).then_some(self.index)
    }
}
