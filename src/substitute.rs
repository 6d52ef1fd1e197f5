use std::collections::HashMap;

use crate::fields::{field_by_token, token_matcher};

/// Replace every registered dynamic-field token with its registry sample
/// value. Matching is case-insensitive, so tokens that drifted through manual
/// editing still resolve in previews.
pub fn substitute_preview(text: &str) -> String {
    token_matcher()
        .replace_all(text, |caps: &regex::Captures| {
            match field_by_token(&caps[0]) {
                Some(field) => field.sample_value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Replace registered tokens with recipient-specific values. `values` is
/// keyed by the canonical registry key (braces included). A token with no
/// supplied value is left as the literal matched text, so a gap in the value
/// map stays visible in the delivered document.
pub fn substitute_production(text: &str, values: &HashMap<String, String>) -> String {
    token_matcher()
        .replace_all(text, |caps: &regex::Captures| {
            field_by_token(&caps[0])
                .and_then(|field| values.get(field.key))
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
