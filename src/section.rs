use serde::{Deserialize, Serialize};

use crate::error::TemplateResult;
use crate::style::SectionStyle;
use crate::validator::validate_field_key;

/// One ordered unit of document body content.
///
/// Persisted as an internally tagged object (`"type": "text" | "dynamicField"
/// | "divider" | "spacer"`), so every switch over sections is exhaustively
/// checked while the JSON shape keeps the historical string `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Section {
    Text(TextSection),
    DynamicField(DynamicFieldSection),
    Divider(DividerSection),
    Spacer(SpacerSection),
}

/// A paragraph of authored text. Dynamic-field tokens may sit inline inside
/// `content`; they stay literal until the substitution pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub content: String,
    #[serde(default)]
    pub style: SectionStyle,
}

/// A stand-alone dynamic-field placeholder, rendered as a highlighted token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicFieldSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub field_key: String,
}

/// A horizontal rule styled with the document's primary color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DividerSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Vertical whitespace. `height` is a CSS length; absent means the built-in
/// default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacerSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

impl Section {
    /// Build a text section with the given style.
    pub fn text(content: &str, style: SectionStyle) -> Self {
        Section::Text(TextSection {
            id: None,
            content: content.to_string(),
            style,
        })
    }

    /// Build a dynamic-field section, rejecting any key that is not a member
    /// of the registry. This is the fail-fast end of the invariant that an
    /// invalid field reference can never be persisted.
    pub fn dynamic_field(field_key: &str) -> TemplateResult<Self> {
        validate_field_key(field_key)?;
        Ok(Section::DynamicField(DynamicFieldSection {
            id: None,
            field_key: field_key.to_string(),
        }))
    }

    /// Build a divider section.
    pub fn divider() -> Self {
        Section::Divider(DividerSection::default())
    }

    /// Build a spacer section. `None` means the default height.
    pub fn spacer(height: Option<&str>) -> Self {
        Section::Spacer(SpacerSection {
            id: None,
            height: height.map(str::to_string),
        })
    }

    /// The internal addressing id, if one was assigned.
    pub fn id(&self) -> Option<&str> {
        match self {
            Section::Text(section) => section.id.as_deref(),
            Section::DynamicField(section) => section.id.as_deref(),
            Section::Divider(section) => section.id.as_deref(),
            Section::Spacer(section) => section.id.as_deref(),
        }
    }
}
