//! Color conversion helpers.

use console::{Color, Style};

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use lin_render::rgb_to_ansi256;
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
///
/// // Pure green maps to ANSI 46
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Parses `#rrggbb` (or `rrggbb`) into an RGB triplet.
///
/// Shorthand `#rgb` is accepted as well. Anything else yields `None`.
pub fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize, len: usize| u8::from_str_radix(&hex[i..i + len], 16).ok();
    match hex.len() {
        6 => Some((channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
        3 => {
            let (r, g, b) = (channel(0, 1)?, channel(1, 1)?, channel(2, 1)?);
            Some((r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}

/// Foreground style for a hex color, or the empty style if it does not parse.
///
/// ```rust
/// use lin_render::hex_style;
///
/// let style = hex_style("#eb5757").force_styling(true);
/// assert_eq!(style.apply_to("bug").to_string(), "\x1b[38;5;167mbug\x1b[0m");
/// ```
pub fn hex_style(s: &str) -> Style {
    match parse_hex_color(s) {
        Some(rgb) => Style::new().fg(Color::Color256(rgb_to_ansi256(rgb))),
        None => Style::new(),
    }
}
