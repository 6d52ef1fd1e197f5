use crate::fields::contains_field;
use crate::section::{Section, SpacerSection, TextSection};
use crate::style::{SectionStyle, TextAlign};

/// Document-level values stamped onto every text section produced by
/// [`sections_from_text`], so that switching an authored draft into the
/// structured editor keeps the look the author saw.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDefaults {
    pub font_size: String,
    pub color: String,
}

/// Split free-form authored text into an ordered section list.
///
/// Each line becomes one section: blank (or whitespace-only) lines become
/// spacers with the default height, other lines become centered text sections
/// carrying the raw line verbatim. Lines containing a registered dynamic
/// field token additionally get bold weight, mirroring how stand-alone field
/// sections render. Windows line endings are normalized, the trailing `\r`
/// never reaches section content.
pub fn sections_from_text(text: &str, defaults: &StyleDefaults) -> Vec<Section> {
    let mut sections = Vec::new();
    for raw_line in text.split('\n') {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        let index = sections.len();
        if line.trim().is_empty() {
            sections.push(Section::Spacer(SpacerSection {
                id: Some(format!("spacer-{index}")),
                height: None,
            }));
        } else {
            let has_field = contains_field(line);
            let prefix = if has_field { "mixed" } else { "text" };
            let style = SectionStyle {
                font_size: Some(defaults.font_size.clone()),
                font_weight: has_field.then(|| "bold".to_string()),
                text_align: Some(TextAlign::Center),
                color: Some(defaults.color.clone()),
                ..SectionStyle::default()
            };
            sections.push(Section::Text(TextSection {
                id: Some(format!("{prefix}-{index}")),
                content: line.to_string(),
                style,
            }));
        }
    }
    sections
}

/// Flatten a section list back into free text. This is the lossy direction:
/// text sections contribute their content, dynamic-field sections contribute
/// their token so it survives re-parsing, dividers and spacers are dropped
/// along with all styling.
pub fn text_from_sections(sections: &[Section]) -> String {
    sections
        .iter()
        .filter_map(|section| match section {
            Section::Text(text) => Some(text.content.clone()),
            Section::DynamicField(field) => Some(field.field_key.clone()),
            Section::Divider(_) | Section::Spacer(_) => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> StyleDefaults {
        StyleDefaults {
            font_size: "16px".to_string(),
            color: "#333333".to_string(),
        }
    }

    #[test]
    fn test_blank_lines_become_spacers() {
        let sections = sections_from_text("Ligne1\n\nLigne2", &defaults());
        assert_eq!(sections.len(), 3);
        assert!(matches!(sections[0], Section::Text(_)));
        assert!(matches!(sections[1], Section::Spacer(_)));
        assert!(matches!(sections[2], Section::Text(_)));
    }

    #[test]
    fn test_whitespace_only_line_counts_as_blank() {
        let sections = sections_from_text("a\n   \t\nb", &defaults());
        assert!(matches!(sections[1], Section::Spacer(_)));
    }

    #[test]
    fn test_text_lines_keep_raw_content() {
        let sections = sections_from_text("  indenté  ", &defaults());
        match &sections[0] {
            Section::Text(TextSection { content, .. }) => assert_eq!(content, "  indenté  "),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_crlf_is_normalized() {
        let sections = sections_from_text("Ligne1\r\nLigne2\r\n", &defaults());
        assert_eq!(sections.len(), 3);
        match &sections[0] {
            Section::Text(TextSection { content, .. }) => assert_eq!(content, "Ligne1"),
            other => panic!("expected text, got {other:?}"),
        }
        // The trailing newline yields one final spacer.
        assert!(matches!(sections[2], Section::Spacer(_)));
    }

    #[test]
    fn test_ids_are_positional() {
        let sections = sections_from_text("Bonjour\n\n{{EVENT_NAME}} vous attend", &defaults());
        assert_eq!(sections[0].id(), Some("text-0"));
        assert_eq!(sections[1].id(), Some("spacer-1"));
        assert_eq!(sections[2].id(), Some("mixed-2"));
    }

    #[test]
    fn test_lines_with_fields_are_bold() {
        let sections = sections_from_text("Votre code: {{TICKET_CODE}}", &defaults());
        match &sections[0] {
            Section::Text(text) => {
                assert_eq!(text.style.font_weight.as_deref(), Some("bold"));
                assert_eq!(text.style.text_align, Some(TextAlign::Center));
                assert_eq!(text.style.font_size.as_deref(), Some("16px"));
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_spacers_from_text_have_default_height() {
        let sections = sections_from_text("\n", &defaults());
        match &sections[0] {
            Section::Spacer(SpacerSection { height, .. }) => assert_eq!(*height, None),
            other => panic!("expected spacer, got {other:?}"),
        }
    }

    #[test]
    fn test_text_from_sections_drops_structure() {
        let sections = vec![
            Section::text("Ligne1", SectionStyle::default()),
            Section::spacer(None),
            Section::divider(),
            Section::text("Ligne2", SectionStyle::default()),
        ];
        assert_eq!(text_from_sections(&sections), "Ligne1\nLigne2");
    }

    #[test]
    fn test_text_from_sections_keeps_field_tokens() {
        let sections = vec![
            Section::text("Bonjour", SectionStyle::default()),
            Section::dynamic_field("{{RECIPIENT_NAME}}").unwrap(),
        ];
        assert_eq!(text_from_sections(&sections), "Bonjour\n{{RECIPIENT_NAME}}");
    }

    #[test]
    fn test_round_trip_is_stable_after_first_pass() {
        // Lossy once, then stable: text -> sections -> text -> sections
        // yields the same section contents.
        let first = sections_from_text("Ligne1\n\nLigne2", &defaults());
        let text = text_from_sections(&first);
        assert_eq!(text, "Ligne1\nLigne2");
        let second = sections_from_text(&text, &defaults());
        let text_again = text_from_sections(&second);
        assert_eq!(text_again, text);
    }

    #[test]
    fn test_empty_text_yields_single_spacer() {
        // "".split('\n') still yields one empty line.
        let sections = sections_from_text("", &defaults());
        assert_eq!(sections.len(), 1);
        assert!(matches!(sections[0], Section::Spacer(_)));
    }
}
