//! Tables: validated rows, laid out and rendered to lines.
//!
//! A [`Table`] owns its column specs, its rows, and the [`TerminalContext`]
//! it will be rendered for. Construction checks the row shape once; after
//! that, [`Table::lines`] is a pure function of the table.
//!
//! # Example
//!
//! ```rust
//! use lin_render::tabular::{Cell, ColumnSpec, Table};
//! use lin_render::TerminalContext;
//!
//! let table = Table::builder(TerminalContext::new(40, 24))
//!     .column(ColumnSpec::fixed("ID"))
//!     .column(ColumnSpec::flexible("Title"))
//!     .row(["ENG-1", "Fix login redirect"])
//!     .row(["ENG-22", "Crash when the workspace has no teams at all"])
//!     .build()
//!     .unwrap();
//!
//! let lines = table.lines();
//! assert_eq!(lines.len(), 3);
//! assert!(lines[0].starts_with("ID     Title"));
//! assert!(lines[2].ends_with("at all"));
//! ```

use console::Style;

use super::cell::Cell;
use super::resolve::{resolve_widths, ResolvedWidths, SEPARATOR};
use super::traits::{Tabular, TabularRow};
use super::types::ColumnSpec;
use super::util::RESET;
use crate::context::TerminalContext;
use crate::error::LayoutError;

/// A table ready to render.
#[derive(Clone, Debug)]
pub struct Table {
    columns: Vec<ColumnSpec>,
    rows: Vec<Vec<Cell>>,
    context: TerminalContext,
}

/// Collects columns and rows, then validates them into a [`Table`].
#[derive(Clone, Debug)]
pub struct TableBuilder {
    columns: Vec<ColumnSpec>,
    rows: Vec<Vec<Cell>>,
    context: TerminalContext,
}

impl TableBuilder {
    /// Add a column.
    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    /// Add several columns.
    pub fn columns<I: IntoIterator<Item = ColumnSpec>>(mut self, columns: I) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Add a row.
    pub fn row<C: Into<Cell>, I: IntoIterator<Item = C>>(mut self, cells: I) -> Self {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Add several rows.
    pub fn rows<I: IntoIterator<Item = Vec<Cell>>>(mut self, rows: I) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Check the shape and produce the table.
    ///
    /// Fails if any row's cell count differs from the column count, or if
    /// more than one column is flexible.
    pub fn build(self) -> Result<Table, LayoutError> {
        let mut flexible = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_flexible())
            .map(|(i, _)| i);
        if let (Some(first), Some(second)) = (flexible.next(), flexible.next()) {
            return Err(LayoutError::MultipleFlexible { first, second });
        }

        let expected = self.columns.len();
        if let Some((row, cells)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(LayoutError::RowLength {
                row,
                expected,
                found: cells.len(),
            });
        }

        Ok(Table {
            columns: self.columns,
            rows: self.rows,
            context: self.context,
        })
    }
}

impl Table {
    /// Start building a table for the given terminal.
    pub fn builder(context: TerminalContext) -> TableBuilder {
        TableBuilder {
            columns: Vec::new(),
            rows: Vec::new(),
            context,
        }
    }

    /// Build a table from records that describe their own columns and cells.
    pub fn from_rows<'a, T, I>(records: I, context: TerminalContext) -> Result<Table, LayoutError>
    where
        T: Tabular + TabularRow + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        Table::builder(context)
            .columns(T::columns())
            .rows(records.into_iter().map(T::to_cells))
            .build()
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn context(&self) -> &TerminalContext {
        &self.context
    }

    /// Resolve column widths against the context's layout width.
    pub fn widths(&self) -> ResolvedWidths {
        resolve_widths(&self.columns, &self.rows, self.context.layout_width())
    }

    /// Render the header followed by every row.
    pub fn lines(&self) -> Vec<String> {
        let widths = self.widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.header_line(&widths));
        lines.extend(self.rows.iter().map(|row| self.row_line(row, &widths)));
        lines
    }

    /// The header: each label underlined on its own, padded outside the underline.
    pub fn header_line(&self, widths: &ResolvedWidths) -> String {
        let color = self.context.color_enabled;
        let cells: Vec<Cell> = self
            .columns
            .iter()
            .map(|col| {
                if color {
                    Cell::styled(col.name.clone(), Style::new().underlined())
                } else {
                    Cell::plain(col.name.clone())
                }
            })
            .collect();
        self.join(cells.iter(), widths)
    }

    /// One data row, each cell fitted to its column.
    pub fn row_line(&self, row: &[Cell], widths: &ResolvedWidths) -> String {
        self.join(row.iter(), widths)
    }

    fn join<'a, I: Iterator<Item = &'a Cell>>(&self, cells: I, widths: &ResolvedWidths) -> String {
        let color = self.context.color_enabled;
        let mut line = cells
            .zip(&self.columns)
            .zip(&widths.widths)
            .map(|((cell, col), width)| cell.render(*width, col.align, color))
            .collect::<Vec<_>>()
            .join(SEPARATOR);

        if color && line.contains('\x1b') {
            line.push_str(RESET);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabular::{display_width, ELLIPSIS};
    use console::strip_ansi_codes;

    fn plain_ctx(width: usize) -> TerminalContext {
        TerminalContext::new(width, 24).interactive(true)
    }

    #[test]
    fn build_rejects_short_row() {
        let result = Table::builder(plain_ctx(80))
            .column(ColumnSpec::fixed("A"))
            .column(ColumnSpec::fixed("B"))
            .row(["a1", "b1"])
            .row(["a2"])
            .build();

        assert_eq!(
            result.unwrap_err(),
            LayoutError::RowLength {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn build_rejects_long_row() {
        let result = Table::builder(plain_ctx(80))
            .column(ColumnSpec::fixed("A"))
            .row(["a1", "extra"])
            .build();

        assert!(matches!(result, Err(LayoutError::RowLength { found: 2, .. })));
    }

    #[test]
    fn build_rejects_two_flexible_columns() {
        let result = Table::builder(plain_ctx(80))
            .column(ColumnSpec::flexible("A"))
            .column(ColumnSpec::fixed("B"))
            .column(ColumnSpec::flexible("C"))
            .build();

        assert_eq!(
            result.unwrap_err(),
            LayoutError::MultipleFlexible {
                first: 0,
                second: 2
            }
        );
    }

    #[test]
    fn empty_table_renders_header_only() {
        let table = Table::builder(plain_ctx(80))
            .column(ColumnSpec::fixed("ID"))
            .column(ColumnSpec::flexible("Title"))
            .build()
            .unwrap();

        assert_eq!(table.lines(), vec!["ID Title".to_string()]);
    }

    #[test]
    fn label_column_truncates_to_max() {
        let labels = "bug, frontend, needs-design, regression!";
        assert_eq!(display_width(labels), 40);

        let table = Table::builder(plain_ctx(200))
            .column(ColumnSpec::fixed("ID"))
            .column(ColumnSpec::fixed("Labels").max(24))
            .row(["ENG-1", labels])
            .build()
            .unwrap();

        let widths = table.widths();
        assert_eq!(widths.get(1), Some(24));

        let line = &table.lines()[1];
        let cell = &line["ENG-1 ".len()..];
        assert_eq!(display_width(cell), 24);
        assert!(cell.ends_with(ELLIPSIS));
        assert_eq!(cell, "bug, frontend, needs-...");
    }

    #[test]
    fn flexible_title_truncated_to_leftover() {
        let long_title = "An issue title that is forty columns long";
        let long_title = &long_title[..40];
        let table = Table::builder(plain_ctx(60))
            .column(ColumnSpec::fixed("ID").min(20))
            .column(ColumnSpec::flexible("Title"))
            .column(ColumnSpec::fixed("State").min(27))
            .row(["ENG-1", long_title, "Todo"])
            .row(["ENG-2", "Short", "Done"])
            .build()
            .unwrap();

        assert_eq!(table.widths().widths, vec![20, 10, 27]);

        let lines = table.lines();
        let title = &lines[1][21..31];
        assert_eq!(title, "An issu...");
        assert_eq!(&lines[2][21..31], "Short     ");
        for line in &lines {
            assert!(display_width(line) <= 60);
        }
    }

    #[test]
    fn zero_width_flexible_still_renders() {
        let table = Table::builder(plain_ctx(10))
            .column(ColumnSpec::fixed("ID").min(8))
            .column(ColumnSpec::flexible("Title"))
            .row(["ENG-1", "Anything"])
            .build()
            .unwrap();

        let lines = table.lines();
        assert_eq!(lines[1], "ENG-1    ");
    }

    #[test]
    fn right_aligned_column() {
        let table = Table::builder(plain_ctx(80))
            .column(ColumnSpec::fixed("Name"))
            .column(ColumnSpec::fixed("Members").right())
            .row(["Eng", "12"])
            .build()
            .unwrap();

        assert_eq!(table.lines()[1], "Eng       12");
    }

    #[test]
    fn header_underline_stops_at_label() {
        let ctx = plain_ctx(80).color(true);
        let table = Table::builder(ctx)
            .column(ColumnSpec::fixed("ID").min(6))
            .column(ColumnSpec::fixed("State"))
            .build()
            .unwrap();

        let header = &table.lines()[0];
        assert!(header.starts_with("\x1b[4mID\x1b[0m"));
        // padding and separator come after the reset, outside the underline
        assert!(header.contains(&format!("ID\x1b[0m{}     \x1b[4mState", RESET)));
        assert!(header.ends_with(RESET));
        assert_eq!(strip_ansi_codes(header), "ID     State");
    }

    #[test]
    fn colorless_output_has_no_escapes() {
        let table = Table::builder(plain_ctx(80))
            .column(ColumnSpec::fixed("State"))
            .row([Cell::styled("In Progress", Style::new().yellow())])
            .build()
            .unwrap();

        for line in table.lines() {
            assert!(!line.contains('\x1b'));
        }
    }

    #[test]
    fn styled_cells_do_not_bleed_into_next_column() {
        let ctx = plain_ctx(80).color(true);
        let table = Table::builder(ctx)
            .column(ColumnSpec::fixed("Labels").max(6))
            .column(ColumnSpec::fixed("Who"))
            .row(vec![
                Cell::styled("frontend", Style::new().blue()),
                Cell::plain("ana"),
            ])
            .build()
            .unwrap();

        let line = &table.lines()[1];
        let (labels, rest) = line.split_at(line.find("ana").unwrap());
        assert!(labels.trim_end().ends_with(RESET));
        assert_eq!(strip_ansi_codes(labels), "fro... ");
        assert_eq!(rest, format!("ana{}", RESET));
    }

    #[test]
    fn rendering_is_deterministic() {
        let build = || {
            Table::builder(plain_ctx(50).color(true))
                .column(ColumnSpec::fixed("ID"))
                .column(ColumnSpec::flexible("Title"))
                .row(vec![
                    Cell::plain("ENG-1"),
                    Cell::styled("日本語のタイトルがとても長い", Style::new().green()),
                ])
                .build()
                .unwrap()
        };

        let table = build();
        assert_eq!(table.lines(), table.lines());
        assert_eq!(table.lines(), build().lines());
    }

    struct Team {
        key: &'static str,
        name: &'static str,
    }

    impl Tabular for Team {
        fn columns() -> Vec<ColumnSpec> {
            vec![ColumnSpec::fixed("Key"), ColumnSpec::flexible("Name")]
        }
    }

    impl TabularRow for Team {
        fn to_cells(&self) -> Vec<Cell> {
            vec![Cell::plain(self.key), Cell::plain(self.name)]
        }
    }

    #[test]
    fn from_rows_uses_trait_columns() {
        let teams = vec![
            Team {
                key: "ENG",
                name: "Engineering",
            },
            Team {
                key: "DES",
                name: "Design",
            },
        ];
        let table = Table::from_rows(&teams, plain_ctx(80)).unwrap();

        assert_eq!(table.columns().len(), 2);
        assert_eq!(
            table.lines(),
            vec!["Key Name       ", "ENG Engineering", "DES Design     "]
        );
    }
}
