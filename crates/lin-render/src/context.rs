//! Terminal facts captured once per command.
//!
//! Rendering and paging never query the terminal themselves. A command
//! samples a [`TerminalContext`] up front (or a test builds one by hand) and
//! threads it through layout and dispatch, so a single render sees one
//! consistent width, height, and color decision.

use std::io::IsTerminal;

use crate::tabular::FALLBACK_WIDTH;

/// Size and capabilities of the output terminal.
///
/// `width` and `height` are `0` when unknown.
///
/// # Example
///
/// ```rust
/// use lin_render::TerminalContext;
///
/// let ctx = TerminalContext::new(100, 40).interactive(true).color(true);
/// assert_eq!(ctx.layout_width(), 100);
///
/// // Redirected output lays out at a fixed width.
/// let piped = TerminalContext::new(100, 40);
/// assert_eq!(piped.layout_width(), 120);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TerminalContext {
    /// Terminal width in columns.
    pub width: usize,
    /// Terminal height in rows.
    pub height: usize,
    /// Whether stdout is attached to an interactive terminal.
    pub is_interactive: bool,
    /// Whether styled output should carry escape codes.
    pub color_enabled: bool,
}

impl TerminalContext {
    /// A non-interactive, colorless context of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        TerminalContext {
            width,
            height,
            is_interactive: false,
            color_enabled: false,
        }
    }

    /// Sample stdout once.
    ///
    /// Size comes from `terminal_size`; color follows `console`'s detection
    /// (which honors `CLICOLOR`/`CLICOLOR_FORCE`) and is only enabled on an
    /// interactive terminal.
    pub fn detect() -> Self {
        let is_interactive = std::io::stdout().is_terminal();
        let (width, height) = terminal_size::terminal_size()
            .map(|(w, h)| (w.0 as usize, h.0 as usize))
            .unwrap_or((0, 0));

        TerminalContext {
            width,
            height,
            is_interactive,
            color_enabled: is_interactive && console::colors_enabled(),
        }
    }

    pub fn interactive(mut self, is_interactive: bool) -> Self {
        self.is_interactive = is_interactive;
        self
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    /// Width tables are laid out against.
    ///
    /// The real width on an interactive terminal that reports one,
    /// [`FALLBACK_WIDTH`] otherwise.
    pub fn layout_width(&self) -> usize {
        if self.is_interactive && self.width > 0 {
            self.width
        } else {
            FALLBACK_WIDTH
        }
    }

    /// Whether the terminal height is known.
    pub fn has_height(&self) -> bool {
        self.height > 0
    }
}
