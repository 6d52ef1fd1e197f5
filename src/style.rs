use serde::{Deserialize, Serialize};

/// Horizontal alignment of a text section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

/// Per-section style overrides for text sections.
///
/// Every field is optional; anything left unset falls back through the
/// config-level value to a built-in constant (see [`resolve_style_value`]).
/// Lengths and weights are plain CSS value strings (`"18px"`, `"bold"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<String>,
}

/// Three-level style cascade: explicit section value, then config-level
/// value, then built-in constant. An empty string counts as unset at every
/// level, so a blank form field never leaks into the rendered document.
///
/// This is the single place the precedence rule lives; the renderer routes
/// every styling decision through it.
pub fn resolve_style_value<'a>(
    explicit: Option<&'a str>,
    config_level: &'a str,
    fallback: &'a str,
) -> &'a str {
    match explicit {
        Some(value) if !value.is_empty() => value,
        _ if !config_level.is_empty() => config_level,
        _ => fallback,
    }
}
