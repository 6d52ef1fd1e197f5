use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

/// One entry of the dynamic-field catalogue.
///
/// `key` is the literal token substring as it appears inside authored text
/// and inside rendered HTML (braces included). `sample_value` is used by
/// preview substitution only and never reaches a real recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicField {
    pub key: &'static str,
    pub label: &'static str,
    pub sample_value: &'static str,
    pub description: &'static str,
}

/// The fixed, ordered dynamic-field catalogue.
///
/// Order is the order the authoring form lists the fields in; it also fixes
/// the order of [`fields_in`] results.
pub const DYNAMIC_FIELDS: &[DynamicField] = &[
    DynamicField {
        key: "{{RECIPIENT_NAME}}",
        label: "Recipient name",
        sample_value: "Marie Dupont",
        description: "Full name of the recipient, as stored on the invitation record",
    },
    DynamicField {
        key: "{{RECIPIENT_EMAIL}}",
        label: "Recipient email",
        sample_value: "marie.dupont@example.com",
        description: "Email address the document is delivered to",
    },
    DynamicField {
        key: "{{EVENT_NAME}}",
        label: "Event name",
        sample_value: "Salon du Printemps",
        description: "Public name of the fair or exhibition",
    },
    DynamicField {
        key: "{{EVENT_DATE}}",
        label: "Event date",
        sample_value: "samedi 14 mars 2026",
        description: "Human-readable opening date of the event",
    },
    DynamicField {
        key: "{{EVENT_TIME}}",
        label: "Event time",
        sample_value: "10h00 - 19h00",
        description: "Opening hours shown on the invitation",
    },
    DynamicField {
        key: "{{TICKET_CODE}}",
        label: "Ticket code",
        sample_value: "EXPO-2026-48151",
        description: "Personal entry code checked at the gate",
    },
];

/// Look up a field by its exact, case-defined key.
pub fn field_by_key(key: &str) -> Option<&'static DynamicField> {
    DYNAMIC_FIELDS.iter().find(|field| field.key == key)
}

/// Look up a field from a token occurrence. Token matching is
/// case-insensitive, the stored key is not.
pub(crate) fn field_by_token(token: &str) -> Option<&'static DynamicField> {
    DYNAMIC_FIELDS
        .iter()
        .find(|field| field.key.eq_ignore_ascii_case(token))
}

/// Whether `key` is a member of the registry's key set (exact match).
pub fn is_registered_key(key: &str) -> bool {
    field_by_key(key).is_some()
}

/// Combined matcher over every registry key: global, case-insensitive,
/// built from regex-escaped literal keys. Compiled once.
pub(crate) fn token_matcher() -> &'static Regex {
    static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    TOKEN_REGEX.get_or_init(|| {
        let alternation = DYNAMIC_FIELDS
            .iter()
            .map(|field| regex::escape(field.key))
            .collect::<Vec<_>>()
            .join("|");
        RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()
            .unwrap()
    })
}

/// Whether `text` contains at least one registry token (any case).
pub fn contains_field(text: &str) -> bool {
    token_matcher().is_match(text)
}

/// The registry entries referenced by `text`, in registry order, each listed
/// once. Used by the authoring form to show which fields a draft relies on.
pub fn fields_in(text: &str) -> Vec<&'static DynamicField> {
    let lowered = text.to_lowercase();
    DYNAMIC_FIELDS
        .iter()
        .filter(|field| lowered.contains(&field.key.to_lowercase()))
        .collect()
}
