//! 24-bit ANSI helpers for palette colours.
//!
//! Output is written through `anstream`, which strips these sequences when
//! stdout is not a terminal.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

/// Parses a `#RRGGBB` colour.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Foreground colour. Unparseable colours leave the text as is.
pub fn fg(text: &str, hex: &str) -> String {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => format!("\x1b[38;2;{r};{g};{b}m{text}{RESET}"),
        None => text.to_string(),
    }
}

/// Background colour with a readable foreground picked from its luminance.
pub fn bg(text: &str, hex: &str) -> String {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => {
            let luma = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
            let text_color = if luma > 128_000 { "0;0;0" } else { "255;255;255" };
            format!("\x1b[48;2;{r};{g};{b}m\x1b[38;2;{text_color}m{text}{RESET}")
        }
        None => text.to_string(),
    }
}

pub fn bold(text: &str) -> String {
    format!("{BOLD}{text}{RESET}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#4169E1"), Some((0x41, 0x69, 0xE1)));
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("4169E1"), None);
        assert_eq!(hex_to_rgb("#GG0000"), None);
    }

    #[test]
    fn test_fg() {
        assert_eq!(fg("x", "#EF4444"), "\x1b[38;2;239;68;68mx\x1b[0m");
        assert_eq!(fg("x", "red"), "x");
    }

    #[test]
    fn test_bg_picks_contrasting_text() {
        assert!(bg("15", "#FEE2E2").contains("\x1b[38;2;0;0;0m"));
        assert!(bg("15", "#7E22CE").contains("\x1b[38;2;255;255;255m"));
    }
}
