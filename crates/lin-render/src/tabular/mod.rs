//! Width-aware tables for terminal output.
//!
//! Everything here measures text in display columns: CJK characters count
//! as 2, combining marks as 0, and ANSI escape codes as nothing at all.
//!
//! ## Building a table
//!
//! ```rust
//! use console::Style;
//! use lin_render::tabular::{Cell, ColumnSpec, Table};
//! use lin_render::TerminalContext;
//!
//! let ctx = TerminalContext::new(60, 24).interactive(true);
//! let table = Table::builder(ctx)
//!     .column(ColumnSpec::fixed("ID"))
//!     .column(ColumnSpec::flexible("Title"))
//!     .column(ColumnSpec::fixed("Labels").max(24))
//!     .row(vec![
//!         Cell::plain("ENG-1"),
//!         Cell::plain("Fix login redirect"),
//!         Cell::styled("bug", Style::new().red()).push(", ", Style::new()).push("ui", Style::new().blue()),
//!     ])
//!     .build()
//!     .unwrap();
//!
//! for line in table.lines() {
//!     println!("{}", line);
//! }
//! ```
//!
//! ## Column kinds
//!
//! - [`ColumnKind::Fixed`] - sized from header and content, within `min`/`max`
//! - [`ColumnKind::Flexible`] - takes the leftover width (at most one per table)
//!
//! Content wider than its column is cut and ends with [`ELLIPSIS`].
//!
//! ## Utility functions
//!
//! ```rust
//! use lin_render::tabular::{display_width, pad_right, truncate_end};
//!
//! let truncated = truncate_end("Hello World", 8); // "Hello..."
//! let padded = pad_right(&truncated, 10);         // "Hello...  "
//! assert_eq!(display_width(&padded), 10);
//! ```

mod cell;
mod resolve;
mod table;
mod traits;
mod types;
mod util;

pub use cell::{Cell, StyledRun};
pub use resolve::{resolve_widths, ResolvedWidths, FALLBACK_WIDTH, RIGHT_MARGIN, SEPARATOR};
pub use table::{Table, TableBuilder};
pub use traits::{Tabular, TabularRow};
pub use types::{Align, ColumnKind, ColumnSpec};

pub use util::{display_width, pad_center, pad_left, pad_right, truncate_end, ELLIPSIS, RESET};
