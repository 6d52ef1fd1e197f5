use regex::Regex;
use std::sync::OnceLock;

fn hex_color_regex() -> &'static Regex {
    static HEX_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
    HEX_COLOR_REGEX.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap())
}

/// Derive a darker shade of a 6-digit hex color for gradients and hover
/// accents.
///
/// Subtracts `round(2.55 * percent)` from each RGB channel, clamping at 0,
/// and re-encodes as lowercase `#rrggbb`. Percentages above 100 saturate.
///
/// Anything that is not a `#rrggbb` color (named colors, `rgb(...)`,
/// malformed input) is returned unchanged: the renderer must never fail on a
/// user-supplied color string, so the fallback is a no-op rather than an
/// error.
pub fn darken(color: &str, percent: u8) -> String {
    if !hex_color_regex().is_match(color) {
        return color.to_string();
    }

    // The regex guarantees exactly six ASCII hex digits after '#'.
    let r = u8::from_str_radix(&color[1..3], 16).unwrap();
    let g = u8::from_str_radix(&color[3..5], 16).unwrap();
    let b = u8::from_str_radix(&color[5..7], 16).unwrap();

    let amount = (2.55 * f64::from(percent.min(100))).round() as u8;

    format!(
        "#{:02x}{:02x}{:02x}",
        r.saturating_sub(amount),
        g.saturating_sub(amount),
        b.saturating_sub(amount)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darken_basic() {
        assert_eq!(darken("#ffffff", 10), "#e5e5e5");
        assert_eq!(darken("#1976d2", 20), "#00439f");
    }

    #[test]
    fn test_darken_zero_percent_is_identity_modulo_case() {
        assert_eq!(darken("#AABBCC", 0), "#aabbcc");
        assert_eq!(darken("#aabbcc", 0), "#aabbcc");
    }

    #[test]
    fn test_darken_clamps_to_black() {
        assert_eq!(darken("#010203", 50), "#000000");
        assert_eq!(darken("#ffffff", 100), "#000000");
    }

    #[test]
    fn test_darken_saturates_above_hundred() {
        assert_eq!(darken("#808080", 255), darken("#808080", 100));
    }

    #[test]
    fn test_non_hex_is_returned_unchanged() {
        assert_eq!(darken("red", 20), "red");
        assert_eq!(darken("rgb(25, 118, 210)", 20), "rgb(25, 118, 210)");
        assert_eq!(darken("#fff", 20), "#fff");
        assert_eq!(darken("#12345g", 20), "#12345g");
        assert_eq!(darken("", 20), "");
    }

    #[test]
    fn test_channels_never_increase() {
        for percent in [0u8, 1, 17, 50, 99, 100] {
            let shade = darken("#8c5a2f", percent);
            let channel = |s: &str, i| u8::from_str_radix(&s[i..i + 2], 16).unwrap();
            assert!(channel(&shade, 1) <= 0x8c);
            assert!(channel(&shade, 3) <= 0x5a);
            assert!(channel(&shade, 5) <= 0x2f);
        }
    }
}
