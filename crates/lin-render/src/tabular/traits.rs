//! Traits connecting domain records to tables.
//!
//! Each listing command implements these for its record type: [`Tabular`]
//! declares the columns once, [`TabularRow`] maps one record to its cells.
//! The layout engine never looks past the cells.

use super::cell::Cell;
use super::types::ColumnSpec;

/// Types that know which columns describe them.
///
/// # Example
///
/// ```rust
/// use lin_render::tabular::{Cell, ColumnSpec, Tabular, TabularRow};
///
/// struct Team {
///     key: String,
///     name: String,
/// }
///
/// impl Tabular for Team {
///     fn columns() -> Vec<ColumnSpec> {
///         vec![ColumnSpec::fixed("Key"), ColumnSpec::flexible("Name")]
///     }
/// }
///
/// impl TabularRow for Team {
///     fn to_cells(&self) -> Vec<Cell> {
///         vec![Cell::plain(&self.key), Cell::plain(&self.name)]
///     }
/// }
///
/// let team = Team { key: "ENG".into(), name: "Engineering".into() };
/// assert_eq!(team.to_cells().len(), Team::columns().len());
/// ```
pub trait Tabular {
    /// Returns the column specs, in display order.
    fn columns() -> Vec<ColumnSpec>;
}

/// Types that can be converted to a row of cells.
///
/// The returned row must have one cell per entry of [`Tabular::columns`].
pub trait TabularRow {
    /// Converts this instance to a row of cells.
    fn to_cells(&self) -> Vec<Cell>;
}
