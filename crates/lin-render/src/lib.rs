//! # lin-render - Adaptive Terminal Tables
//!
//! `lin-render` lays out listings for the `lin` issue-tracker client. It
//! measures text the way a terminal draws it, fits columns into the
//! available width, and keeps colors from leaking across cells.
//!
//! ## Core Concepts
//!
//! - [`TerminalContext`]: width, height, interactivity and color, sampled once
//! - [`tabular::ColumnSpec`]: one fixed or flexible column
//! - [`tabular::Cell`]: plain text or a sequence of styled runs
//! - [`tabular::Table`]: validated rows that render to lines
//!
//! ## Quick Start
//!
//! ```rust
//! use lin_render::tabular::{ColumnSpec, Table};
//! use lin_render::TerminalContext;
//!
//! let ctx = TerminalContext::new(80, 24).interactive(true);
//! let table = Table::builder(ctx)
//!     .column(ColumnSpec::fixed("Key"))
//!     .column(ColumnSpec::flexible("Name"))
//!     .column(ColumnSpec::fixed("Members").right())
//!     .row(["ENG", "Engineering", "12"])
//!     .row(["DES", "Design", "4"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     table.lines(),
//!     vec![
//!         "Key Name        Members",
//!         "ENG Engineering      12",
//!         "DES Design            4",
//!     ]
//! );
//! ```

pub mod context;
mod error;
pub mod tabular;
mod util;

pub use context::TerminalContext;
pub use error::LayoutError;
pub use util::{hex_style, parse_hex_color, rgb_to_ansi256};
