//! Table cells built from plain text or styled runs.
//!
//! A [`Cell`] is what a command hands to the table for one column of one row.
//! Styled cells carry a sequence of [`StyledRun`]s, each with its own
//! `console::Style`; rendering fits them into a column without letting a
//! color leak into the padding or the next cell.

use console::Style;

use super::types::Align;
use super::util::{
    display_width, pad_center, pad_left, pad_right, cut_columns, truncate_end, ELLIPSIS, RESET,
};

/// A contiguous span of text sharing one style.
#[derive(Clone, Debug)]
pub struct StyledRun {
    pub text: String,
    pub style: Style,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        StyledRun {
            text: single_line(&text.into()),
            style,
        }
    }

    fn width(&self) -> usize {
        display_width(&self.text)
    }

    fn paint(&self, text: &str) -> String {
        self.style
            .clone()
            .force_styling(true)
            .apply_to(text)
            .to_string()
    }
}

/// Content of a single table cell.
#[derive(Clone, Debug)]
pub enum Cell {
    /// Text rendered as-is. May already contain escape codes.
    Plain(String),
    /// Runs rendered with their styles when color is enabled.
    Styled(Vec<StyledRun>),
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Plain(String::new())
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::plain(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::plain(text)
    }
}

impl From<StyledRun> for Cell {
    fn from(run: StyledRun) -> Self {
        Cell::Styled(vec![run])
    }
}

impl From<Vec<StyledRun>> for Cell {
    fn from(runs: Vec<StyledRun>) -> Self {
        Cell::Styled(runs)
    }
}

impl Cell {
    /// A plain cell. Line breaks and tabs become spaces.
    pub fn plain(text: impl Into<String>) -> Self {
        Cell::Plain(single_line(&text.into()))
    }

    /// A cell with a single styled run.
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Cell::Styled(vec![StyledRun::new(text, style)])
    }

    /// Append a run, turning a plain cell into a styled one.
    pub fn push(self, text: impl Into<String>, style: Style) -> Self {
        let mut runs = match self {
            Cell::Plain(s) if s.is_empty() => Vec::new(),
            Cell::Plain(s) => vec![StyledRun::new(s, Style::new())],
            Cell::Styled(runs) => runs,
        };
        runs.push(StyledRun::new(text, style));
        Cell::Styled(runs)
    }

    /// Visible width of the cell content.
    pub fn width(&self) -> usize {
        match self {
            Cell::Plain(s) => display_width(s),
            Cell::Styled(runs) => runs.iter().map(StyledRun::width).sum(),
        }
    }

    /// The cell text without any styling.
    pub fn text(&self) -> String {
        match self {
            Cell::Plain(s) => console::strip_ansi_codes(s).into_owned(),
            Cell::Styled(runs) => runs.iter().map(|r| r.text.as_str()).collect(),
        }
    }

    /// Fit the cell into exactly `width` columns.
    ///
    /// Content wider than `width` is truncated with an ellipsis; narrower
    /// content is padded according to `align`. With `color` off, styled runs
    /// render as their bare text.
    pub fn render(&self, width: usize, align: Align, color: bool) -> String {
        let fitted = match self {
            Cell::Styled(runs) if color => fit_runs(runs, width),
            Cell::Styled(_) => truncate_end(&self.text(), width),
            Cell::Plain(s) => truncate_end(s, width),
        };
        match align {
            Align::Left => pad_right(&fitted, width),
            Align::Right => pad_left(&fitted, width),
            Align::Center => pad_center(&fitted, width),
        }
    }
}

/// Paint runs into at most `width` columns, ending with a reset.
///
/// Whole runs are kept while they fit; the run crossing the boundary is cut
/// and followed by the ellipsis. The result always ends with [`RESET`] once
/// any escape code was written.
fn fit_runs(runs: &[StyledRun], width: usize) -> String {
    let total: usize = runs.iter().map(StyledRun::width).sum();
    let mut out = String::new();

    if total <= width {
        for run in runs {
            out.push_str(&run.paint(&run.text));
        }
    } else if width <= ELLIPSIS.len() {
        out.push_str(&ELLIPSIS[..width]);
    } else {
        let mut budget = width - ELLIPSIS.len();
        for run in runs {
            let w = run.width();
            if w <= budget {
                out.push_str(&run.paint(&run.text));
                budget -= w;
                continue;
            }
            if budget > 0 {
                let (kept, used) = cut_columns(&run.text, budget);
                out.push_str(&run.paint(&kept));
                budget -= used;
            }
            break;
        }
        out.push_str(&" ".repeat(budget));
        out.push_str(ELLIPSIS);
    }

    if out.contains('\x1b') {
        out.push_str(RESET);
    }
    out
}

/// Flatten line breaks and other control characters to spaces. ESC is kept
/// so text that arrives already styled still measures by what is visible.
fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() && c != '\x1b' { ' ' } else { c })
        .collect()
}
