//! Error types for table construction.
//!
//! A [`LayoutError`] means the caller built an inconsistent table. It is a
//! contract violation by the calling command, never a user-facing condition.

use thiserror::Error;

/// A table whose rows or columns do not agree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A row has a different number of cells than there are columns.
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// More than one column was declared flexible.
    #[error("columns {first} and {second} are both flexible; a table allows one")]
    MultipleFlexible { first: usize, second: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LayoutError::RowLength {
            row: 3,
            expected: 5,
            found: 4,
        };
        assert_eq!(err.to_string(), "row 3 has 4 cells, expected 5");
    }

    #[test]
    fn test_multiple_flexible_display() {
        let err = LayoutError::MultipleFlexible {
            first: 1,
            second: 2,
        };
        assert!(err.to_string().contains("both flexible"));
    }
}
