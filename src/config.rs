use serde::{Deserialize, Serialize};

use crate::error::{TemplateError, TemplateResult};
use crate::section::Section;
use crate::validator::validate_config;

// --- Document-level style defaults ---

pub const DEFAULT_BACKGROUND_COLOR: &str = "#f4f4f7";
pub const DEFAULT_FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";
pub const DEFAULT_FONT_SIZE: &str = "16px";
pub const DEFAULT_PRIMARY_COLOR: &str = "#1976d2";
pub const DEFAULT_CONTENT_TEXT_COLOR: &str = "#333333";

/// The complete description of one email document. This is what editors
/// persist and what the renderer consumes; rendering never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateConfig {
    pub background_color: String,
    pub font_family: String,
    pub font_size: String,
    pub primary_color: String,
    pub content_text_color: String,
    /// Hidden inbox-preview line. Rendered invisibly at the top of the body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preheader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_image: Option<HeaderImage>,
    pub sections: Vec<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<ButtonConfig>,
    pub location: LocationConfig,
    pub gallery_images: Vec<String>,
    pub include_social_links: bool,
    pub include_unsubscribe_footer: bool,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        TemplateConfig {
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE.to_string(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            content_text_color: DEFAULT_CONTENT_TEXT_COLOR.to_string(),
            preheader: None,
            header_image: None,
            sections: Vec::new(),
            button: None,
            location: LocationConfig::default(),
            gallery_images: Vec::new(),
            include_social_links: false,
            include_unsubscribe_footer: true,
        }
    }
}

/// Banner image shown above the body content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderImage {
    pub url: String,
    pub alt_text: String,
}

/// Call-to-action button placed after the sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonConfig {
    pub text: String,
    pub link: String,
    pub background_color: String,
    pub text_color: String,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        ButtonConfig {
            text: String::new(),
            link: String::new(),
            background_color: DEFAULT_PRIMARY_COLOR.to_string(),
            text_color: "#ffffff".to_string(),
        }
    }
}

/// Venue block. Always part of the config; `enabled` controls whether it is
/// rendered at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationConfig {
    pub enabled: bool,
    pub label: String,
    pub latitude: String,
    pub longitude: String,
    pub background_color: String,
    pub text_color: String,
    pub button_background_color: String,
    pub button_text_color: String,
}

impl Default for LocationConfig {
    fn default() -> Self {
        LocationConfig {
            enabled: false,
            label: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            background_color: "#eef4fb".to_string(),
            text_color: "#333333".to_string(),
            button_background_color: DEFAULT_PRIMARY_COLOR.to_string(),
            button_text_color: "#ffffff".to_string(),
        }
    }
}

/// One entry of the footer social strip, supplied by the caller at render
/// time rather than stored in the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// Parse a persisted JSON document into a validated config.
pub fn parse_config(json: &str) -> TemplateResult<TemplateConfig> {
    let config: TemplateConfig = serde_json::from_str(json)?;
    validate_config(&config)?;
    Ok(config)
}

/// Serialize a config back to pretty-printed JSON, refusing to persist one
/// that fails validation.
pub fn config_to_json(config: &TemplateConfig) -> TemplateResult<String> {
    validate_config(config)?;
    serde_json::to_string_pretty(config)
        .map_err(|err| TemplateError::SerializationError(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_documented_colors() {
        let config = TemplateConfig::default();
        assert_eq!(config.background_color, "#f4f4f7");
        assert_eq!(config.primary_color, "#1976d2");
        assert_eq!(config.font_size, "16px");
        assert!(config.include_unsubscribe_footer);
        assert!(!config.include_social_links);
        assert!(!config.location.enabled);
    }

    #[test]
    fn test_parse_config_accepts_minimal_document() {
        let result = parse_config(r#"{ "sections": [] }"#);
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.font_family, DEFAULT_FONT_FAMILY);
    }

    #[test]
    fn test_parse_config_reads_camel_case_fields() {
        let json = r##"{
            "primaryColor": "#aa0000",
            "galleryImages": ["https://example.com/a.png"],
            "includeSocialLinks": true,
            "sections": [
                { "type": "text", "content": "Bonjour" },
                { "type": "dynamicField", "fieldKey": "{{EVENT_NAME}}" }
            ]
        }"##;
        let config = parse_config(json).unwrap();
        assert_eq!(config.primary_color, "#aa0000");
        assert_eq!(config.gallery_images.len(), 1);
        assert!(config.include_social_links);
        assert_eq!(config.sections.len(), 2);
    }

    #[test]
    fn test_parse_config_rejects_unknown_field_key() {
        let json = r#"{
            "sections": [
                { "type": "dynamicField", "fieldKey": "{{BAD_KEY}}" }
            ]
        }"#;
        let result = parse_config(json);
        assert!(matches!(
            result,
            Err(TemplateError::UnknownDynamicField { .. })
        ));
    }

    #[test]
    fn test_parse_config_reports_malformed_json() {
        let result = parse_config("{ not json");
        assert!(matches!(
            result,
            Err(TemplateError::DeserializationError(_))
        ));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let mut config = TemplateConfig::default();
        config.preheader = Some("Votre billet est prêt".to_string());
        config.sections = vec![
            Section::text("Bonjour {{RECIPIENT_NAME}}", Default::default()),
            Section::divider(),
            Section::spacer(Some("24px")),
        ];
        config.location.enabled = true;
        config.location.label = "Parc des Expositions".to_string();

        let json = config_to_json(&config).unwrap();
        let restored = parse_config(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_config_to_json_refuses_invalid_sections() {
        let mut config = TemplateConfig::default();
        config.sections = vec![Section::DynamicField(crate::section::DynamicFieldSection {
            id: None,
            field_key: "{{FORGED}}".to_string(),
        })];
        assert!(config_to_json(&config).is_err());
    }
}
