use crate::config::TemplateConfig;
use crate::error::{TemplateError, TemplateResult};
use crate::fields::{is_registered_key, DYNAMIC_FIELDS};
use crate::section::Section;

/// Check a dynamic-field key against the registry. Keys must match a
/// registered token exactly, braces and case included.
pub fn validate_field_key(key: &str) -> TemplateResult<()> {
    if is_registered_key(key) {
        Ok(())
    } else {
        Err(unknown_field(key))
    }
}

/// Validate an entire config. Today the only construction-time invariant is
/// that every dynamic-field section references a registered key; everything
/// else (colors, URLs, coordinates) degrades at render time instead of
/// failing here.
pub fn validate_config(config: &TemplateConfig) -> TemplateResult<()> {
    for section in &config.sections {
        validate_section(section)?;
    }
    Ok(())
}

fn validate_section(section: &Section) -> TemplateResult<()> {
    match section {
        Section::DynamicField(field) => validate_field_key(&field.field_key),
        Section::Text(_) | Section::Divider(_) | Section::Spacer(_) => Ok(()),
    }
}

fn unknown_field(key: &str) -> TemplateError {
    let expected = DYNAMIC_FIELDS
        .iter()
        .map(|field| field.key)
        .collect::<Vec<_>>()
        .join(", ");
    TemplateError::UnknownDynamicField {
        key: key.to_string(),
        expected,
    }
}
