//! # Expomail
//!
//! Email-document generation engine for a fairs and exhibitions operator.
//! Turns a structured, editor-maintained [`TemplateConfig`] into a complete,
//! portable HTML email document.
//!
//! ## Features
//! - Pure, deterministic rendering: one config in, one HTML document out
//! - Lossy but predictable round trip between free-text authoring and the
//!   structured section list
//! - Dynamic-field tokens resolved by a separate substitution pass, so one
//!   rendered document serves an entire recipient list
//! - Construction-time validation: a config referencing an unknown field
//!   never reaches persistence
//!
//! ## Example: render and preview
//! ```ignore
//! use expomail::{parse_config, render, substitute_preview};
//!
//! let json = r#"{
//!   "primaryColor": "#1976d2",
//!   "sections": [
//!     { "type": "text", "content": "Bonjour {{RECIPIENT_NAME}}" },
//!     { "type": "dynamicField", "fieldKey": "{{TICKET_CODE}}" }
//!   ]
//! }"#;
//!
//! let config = parse_config(json).expect("Failed to parse config");
//! let html = render(&config);
//! let preview = substitute_preview(&html);
//! ```
//!
//! ## Example: free-text authoring round trip
//! ```ignore
//! use expomail::{sections_from_text, text_from_sections, StyleDefaults};
//!
//! let defaults = StyleDefaults {
//!     font_size: "16px".to_string(),
//!     color: "#333333".to_string(),
//! };
//! let sections = sections_from_text("Ligne1\n\nLigne2", &defaults);
//! assert_eq!(text_from_sections(&sections), "Ligne1\nLigne2");
//! ```

pub mod color;
pub mod config;
pub mod convert;
pub mod error;
pub mod fields;
pub mod render;
pub mod section;
pub mod style;
pub mod substitute;
pub mod validator;

// --- Core types ---
pub use config::{
    ButtonConfig, HeaderImage, LocationConfig, SocialLink, TemplateConfig,
    DEFAULT_BACKGROUND_COLOR, DEFAULT_CONTENT_TEXT_COLOR, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE,
    DEFAULT_PRIMARY_COLOR,
};
pub use error::{TemplateError, TemplateResult};
pub use section::{DividerSection, DynamicFieldSection, Section, SpacerSection, TextSection};
pub use style::{SectionStyle, TextAlign};

// --- Registry types ---
pub use fields::{
    contains_field, field_by_key, fields_in, is_registered_key, DynamicField, DYNAMIC_FIELDS,
};

// --- Converter types ---
pub use convert::StyleDefaults;

// --- Renderer constants ---
pub use render::{BUTTON_FALLBACK_URL, DEFAULT_SPACER_HEIGHT, UNSUBSCRIBE_PLACEHOLDER};

/// Render a config into a self-contained HTML document, with no social links.
pub fn render(config: &TemplateConfig) -> String {
    render::render(config)
}

/// Render a config into a self-contained HTML document, with the operator's
/// social links appended when the config asks for them.
pub fn render_with_social_links(
    config: &TemplateConfig,
    social_links: &[SocialLink],
) -> String {
    render::render_with_social_links(config, social_links)
}

/// Render the plain-text rendition for the `text/plain` multipart alternative.
pub fn render_text(config: &TemplateConfig) -> String {
    render::render_text(config)
}

/// Split free-form authored text into an ordered section list.
pub fn sections_from_text(text: &str, defaults: &StyleDefaults) -> Vec<Section> {
    convert::sections_from_text(text, defaults)
}

/// Flatten a section list back into free text (lossy for layout sections).
pub fn text_from_sections(sections: &[Section]) -> String {
    convert::text_from_sections(sections)
}

/// Replace dynamic-field tokens with registry sample values, for previews.
pub fn substitute_preview(text: &str) -> String {
    substitute::substitute_preview(text)
}

/// Replace dynamic-field tokens with per-recipient values. Unsupplied tokens
/// are left literal.
pub fn substitute_production(
    text: &str,
    values: &std::collections::HashMap<String, String>,
) -> String {
    substitute::substitute_production(text, values)
}

/// Parse and validate a persisted JSON config.
pub fn parse_config(json: &str) -> TemplateResult<TemplateConfig> {
    config::parse_config(json)
}

/// Validate and serialize a config to pretty-printed JSON.
pub fn config_to_json(config: &TemplateConfig) -> TemplateResult<String> {
    config::config_to_json(config)
}

/// Derive a darker shade of a `#rrggbb` color. Non-hex input passes through.
pub fn darken(color: &str, percent: u8) -> String {
    color::darken(color, percent)
}
