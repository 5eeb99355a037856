//! Utility functions for ANSI-aware text measurement, truncation, and padding.
//!
//! All functions in this module correctly handle ANSI escape codes: they are
//! preserved in output but don't count toward display width calculations.
//! Widths come from `console::measure_text_width`, so CJK and other wide
//! characters count as two columns and combining marks as zero. Cutting text
//! walks characters with `unicode-width` directly.

use console::{measure_text_width, pad_str, Alignment};
use unicode_width::UnicodeWidthChar;

/// Marker appended to text that was cut short.
pub const ELLIPSIS: &str = "...";

/// SGR sequence that clears every active color and decoration.
pub const RESET: &str = "\x1b[0m";

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// # Example
///
/// ```rust
/// use lin_render::tabular::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Truncates a string from the end to fit within a maximum display width.
///
/// If the string already fits, it is returned unchanged. Otherwise it is cut
/// to `max_width - 3` columns and [`ELLIPSIS`] is appended, so the result is
/// exactly `max_width` columns wide. A wide character that would straddle the
/// cut is dropped and the gap filled with a space.
///
/// Below three columns the ellipsis itself is shortened (`""`, `"."`, `".."`).
/// If the input carried escape codes the result ends with [`RESET`].
///
/// # Example
///
/// ```rust
/// use lin_render::tabular::truncate_end;
///
/// assert_eq!(truncate_end("Hello World", 8), "Hello...");
/// assert_eq!(truncate_end("Short", 10), "Short");
/// assert_eq!(truncate_end("Hello", 2), "..");
/// ```
pub fn truncate_end(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let ellipsis_width = ELLIPSIS.len();
    if max_width <= ellipsis_width {
        return ELLIPSIS[..max_width].to_string();
    }

    let mut result = take_columns(s, max_width - ellipsis_width);
    result.push_str(ELLIPSIS);
    if s.contains('\x1b') {
        result.push_str(RESET);
    }
    result
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// Never truncates. If the string leaves a style open, a [`RESET`] is
/// inserted before the padding so the spaces are never colorized.
///
/// ```rust
/// use lin_render::tabular::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// assert_eq!(pad_right("hello", 3), "hello");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(&close_open_style(s), width, Alignment::Left, None).into_owned()
}

/// Pads a string on the left (right-aligns) to reach the target width.
///
/// ```rust
/// use lin_render::tabular::pad_left;
///
/// assert_eq!(pad_left("42", 5), "   42");
/// ```
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(&close_open_style(s), width, Alignment::Right, None).into_owned()
}

/// Pads a string on both sides (centers) to reach the target width.
///
/// When the remaining space is odd, the extra space goes on the right.
///
/// ```rust
/// use lin_render::tabular::pad_center;
///
/// assert_eq!(pad_center("hi", 5), " hi  ");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    pad_str(&close_open_style(s), width, Alignment::Center, None).into_owned()
}

// --- Internal helpers ---

pub(crate) fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Keep characters from the start until `budget` columns are used.
///
/// Escape sequences are copied through untouched. Zero-width characters that
/// follow the last kept character stay attached to it. If a wide character
/// does not fit, the remaining columns are filled with spaces so the result
/// is exactly `budget` wide (assuming the input was wider than `budget`).
pub(crate) fn take_columns(s: &str, budget: usize) -> String {
    let (mut result, used) = cut_columns(s, budget);
    result.push_str(&" ".repeat(budget.saturating_sub(used)));
    result
}

/// Like [`take_columns`] without the filler; also returns the columns used.
pub(crate) fn cut_columns(s: &str, budget: usize) -> (String, usize) {
    let mut result = String::with_capacity(s.len());
    let mut used = 0;
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            result.push(c);
            copy_escape(&mut chars, &mut result);
            continue;
        }

        let w = char_width(c);
        if used + w > budget {
            break;
        }
        result.push(c);
        used += w;
    }

    (result, used)
}

/// Copy the remainder of an escape sequence whose ESC was already consumed.
fn copy_escape<I: Iterator<Item = char>>(chars: &mut I, out: &mut String) {
    match chars.next() {
        // CSI: parameters and intermediates, then a final byte in @..~
        Some('[') => {
            out.push('[');
            for c in chars.by_ref() {
                out.push(c);
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        }
        Some(c) => out.push(c),
        None => {}
    }
}

/// Whether the last SGR sequence in `s` leaves a style active.
pub(crate) fn has_open_style(s: &str) -> bool {
    let mut open = false;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            continue;
        }
        let mut seq = String::from(c);
        copy_escape(&mut chars, &mut seq);
        if seq.ends_with('m') {
            open = seq != RESET && seq != "\x1b[m";
        }
    }
    open
}

fn close_open_style(s: &str) -> String {
    if has_open_style(s) {
        format!("{}{}", s, RESET)
    } else {
        s.to_string()
    }
}
