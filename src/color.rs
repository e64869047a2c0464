use regex::Regex;
use std::sync::OnceLock;

fn hex6_regex() -> &'static Regex {
    static HEX6_REGEX: OnceLock<Regex> = OnceLock::new();
    HEX6_REGEX.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap())
}

/// Parse a 6-digit hex color (`#RRGGBB`) into an RGB triplet.
///
/// Only the 6-digit form is recognised; shorthand (`#RGB`), 8-digit, and
/// named colors all return `None`.
pub fn parse_hex6(color: &str) -> Option<(u8, u8, u8)> {
    if !hex6_regex().is_match(color) {
        return None;
    }
    let r = u8::from_str_radix(&color[1..3], 16).ok()?;
    let g = u8::from_str_radix(&color[3..5], 16).ok()?;
    let b = u8::from_str_radix(&color[5..7], 16).ok()?;
    Some((r, g, b))
}

/// Convert a hex color to an `rgba(r, g, b, a)` string at the given alpha.
///
/// Anything that is not 6-digit hex falls back to opaque black, so a bad
/// stored value degrades to a legible shadow instead of failing.
pub fn hex_to_rgba(color: &str, alpha: f64) -> String {
    let (r, g, b) = parse_hex6(color).unwrap_or((0, 0, 0));
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

/// Parse a CSS pixel length ("8px", "8") into a number.
pub fn parse_px(value: &str) -> Option<f64> {
    value.trim().trim_end_matches("px").trim().parse::<f64>().ok()
}

/// Format a pixel count back into a CSS length, without a trailing ".0".
pub fn format_px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{}px", value)
    }
}
