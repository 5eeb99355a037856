//! Core types for tabular output configuration.
//!
//! This module defines the data structures used to specify table layout:
//! column kinds, width bounds, and alignment.

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides).
    Center,
}

/// How a column determines its width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnKind {
    /// Sized from its header and content, within `min`/`max`.
    #[default]
    Fixed,
    /// Receives the width left over after all fixed columns. One per table.
    Flexible,
}

/// Configuration for a single column in a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Header label.
    pub name: String,
    /// Fixed or flexible sizing.
    pub kind: ColumnKind,
    /// Minimum width in display columns.
    pub min_width: usize,
    /// Maximum width in display columns (unlimited if not specified).
    pub max_width: Option<usize>,
    /// Text alignment within the column.
    pub align: Align,
}

impl ColumnSpec {
    /// Create a new column of the given kind.
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        ColumnSpec {
            name: name.into(),
            kind,
            min_width: 0,
            max_width: None,
            align: Align::default(),
        }
    }

    /// A fixed column sized from its content.
    pub fn fixed(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Fixed)
    }

    /// The flexible column that absorbs leftover width.
    pub fn flexible(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Flexible)
    }

    /// Set the minimum width.
    pub fn min(mut self, min: usize) -> Self {
        self.min_width = min;
        self
    }

    /// Set the maximum width.
    pub fn max(mut self, max: usize) -> Self {
        self.max_width = Some(max);
        self
    }

    /// Set the text alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set alignment to right (shorthand for `.align(Align::Right)`).
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    /// Set alignment to center (shorthand for `.align(Align::Center)`).
    pub fn center(self) -> Self {
        self.align(Align::Center)
    }

    pub fn is_flexible(&self) -> bool {
        self.kind == ColumnKind::Flexible
    }

    /// Apply `max_width` to a candidate width.
    pub(crate) fn cap(&self, width: usize) -> usize {
        match self.max_width {
            Some(max) => width.min(max),
            None => width,
        }
    }
}
