//! Width resolution algorithm for table columns.
//!
//! Fixed columns are sized from their header and content, clamped by their
//! bounds. The flexible column, if any, gets whatever is left of the total
//! width, but never more than its widest content.

use super::cell::Cell;
use super::types::ColumnSpec;
use super::util::display_width;

/// Text placed between adjacent columns.
pub const SEPARATOR: &str = " ";

/// Columns kept free at the right edge of the terminal.
///
/// Lines never reach the last terminal column, so terminals that wrap on a
/// write to the final cell do not produce blank lines.
pub const RIGHT_MARGIN: usize = 1;

/// Width used for layout when output is not an interactive terminal or the
/// terminal reports no size.
pub const FALLBACK_WIDTH: usize = 120;

/// Resolved widths for all columns in a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width for each column in display columns.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    /// Get the width of a specific column.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Get the total width of all columns (without separators).
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Width of a rendered line: all columns plus the separators between them.
    pub fn line_width(&self) -> usize {
        self.total() + separators_width(self.widths.len())
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

fn separators_width(columns: usize) -> usize {
    columns.saturating_sub(1) * display_width(SEPARATOR)
}

/// Resolve column widths by examining the header and every row.
///
/// Rows must already have one cell per column; [`crate::tabular::Table`]
/// guarantees this. `total_width` is the width the lines must fit in.
///
/// # Example
///
/// ```rust
/// use lin_render::tabular::{resolve_widths, Cell, ColumnSpec};
///
/// let columns = vec![ColumnSpec::fixed("ID"), ColumnSpec::flexible("Title")];
/// let rows = vec![vec![Cell::plain("ENG-1"), Cell::plain("Fix the login page")]];
///
/// let resolved = resolve_widths(&columns, &rows, 80);
/// assert_eq!(resolved.widths, vec![5, 18]);
/// ```
pub fn resolve_widths(
    columns: &[ColumnSpec],
    rows: &[Vec<Cell>],
    total_width: usize,
) -> ResolvedWidths {
    if columns.is_empty() {
        return ResolvedWidths { widths: vec![] };
    }

    let content = content_widths(columns, rows);

    let mut widths: Vec<usize> = Vec::with_capacity(columns.len());
    let mut flexible: Option<usize> = None;
    let mut used_width: usize = 0;

    // First pass: fixed columns
    for (i, col) in columns.iter().enumerate() {
        if col.is_flexible() {
            widths.push(0);
            flexible.get_or_insert(i);
            continue;
        }
        let width = col.cap(content[i].max(col.min_width));
        widths.push(width);
        used_width += width;
    }

    // Second pass: the flexible column takes what is left, up to its content
    if let Some(idx) = flexible {
        let fixed_total = used_width + separators_width(columns.len()) + RIGHT_MARGIN;
        let available = total_width.saturating_sub(fixed_total);
        let wanted = columns[idx].cap(content[idx].max(columns[idx].min_width));
        widths[idx] = wanted.min(available);
    }

    ResolvedWidths { widths }
}

/// Widest visible content per column, header included.
fn content_widths(columns: &[ColumnSpec], rows: &[Vec<Cell>]) -> Vec<usize> {
    let mut widths: Vec<usize> = columns.iter().map(|c| display_width(&c.name)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.width());
        }
    }
    widths
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lines_fit_when_fixed_columns_fit(
            fixed_widths in proptest::collection::vec(1usize..15, 0..4),
            title_len in 0usize..200,
            total_width in 40usize..200,
        ) {
            let mut columns: Vec<ColumnSpec> = fixed_widths
                .iter()
                .enumerate()
                .map(|(i, _)| ColumnSpec::fixed(format!("c{}", i)))
                .collect();
            columns.push(ColumnSpec::flexible("Title"));

            let mut cells: Vec<Cell> = fixed_widths
                .iter()
                .map(|w| Cell::plain("x".repeat(*w)))
                .collect();
            cells.push(Cell::plain("t".repeat(title_len)));
            let rows = vec![cells];

            let resolved = resolve_widths(&columns, &rows, total_width);
            let fixed: usize = resolved.widths[..fixed_widths.len()].iter().sum();
            let reserve = fixed + separators_width(columns.len()) + RIGHT_MARGIN;
            if reserve <= total_width {
                prop_assert!(resolved.line_width() < total_width);
            }
            prop_assert!(resolved.widths[fixed_widths.len()] <= title_len.max("Title".len()));
        }

        #[test]
        fn bounded_fixed_columns_respect_bounds(
            min_width in 0usize..10,
            max_width in 10usize..30,
            data_width in 0usize..50,
        ) {
            let columns = vec![ColumnSpec::fixed("").min(min_width).max(max_width)];
            let rows = vec![vec![Cell::plain("x".repeat(data_width))]];

            let width = resolve_widths(&columns, &rows, 100).widths[0];
            prop_assert!(width >= min_width);
            prop_assert!(width <= max_width);
        }
    }
}
