use std::borrow::Cow;

use crate::color::darken;
use crate::config::{
    ButtonConfig, HeaderImage, LocationConfig, SocialLink, TemplateConfig,
    DEFAULT_BACKGROUND_COLOR, DEFAULT_CONTENT_TEXT_COLOR, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE,
    DEFAULT_PRIMARY_COLOR,
};
use crate::fields::is_registered_key;
use crate::section::{DynamicFieldSection, Section, SpacerSection, TextSection};
use crate::style::{resolve_style_value, TextAlign};

/// Emitted as the button `href` when the author left the link blank. An empty
/// `href` is never emitted.
pub const BUTTON_FALLBACK_URL: &str = "https://example.com";

/// Height of a spacer section that declares none.
pub const DEFAULT_SPACER_HEIGHT: &str = "16px";

/// Literal placeholder left in the footer for the delivery system to resolve.
/// Deliberately not a dynamic-field token: it is replaced by a different
/// mechanism, on a different side of the sending pipeline.
pub const UNSUBSCRIBE_PLACEHOLDER: &str = "[[UNSUBSCRIBE_URL]]";

const DYNAMIC_FIELD_FONT_SIZE: &str = "18px";

// ─── Public render functions ─────────────────────────────────────────────────

/// Render a config into a self-contained HTML document, with no social-links
/// block. Pure: equal configs render to byte-identical strings.
pub fn render(config: &TemplateConfig) -> String {
    render_with_social_links(config, &[])
}

/// Render a config into a self-contained HTML document.
///
/// `social_links` comes from the operator's settings store. The social block
/// is emitted only when `config.include_social_links` is set AND the list is
/// non-empty; the flag alone is not enough.
///
/// Dynamic-field tokens are left literal in the output. Substitution is a
/// separate pass so one rendered document can serve a whole recipient list.
pub fn render_with_social_links(config: &TemplateConfig, social_links: &[SocialLink]) -> String {
    let background = resolve_style_value(None, &config.background_color, DEFAULT_BACKGROUND_COLOR);
    let font_family = resolve_style_value(None, &config.font_family, DEFAULT_FONT_FAMILY);
    let font_size = resolve_style_value(None, &config.font_size, DEFAULT_FONT_SIZE);

    let mut out = String::with_capacity(8 * 1024);
    push_document_head(&mut out, config);
    out.push_str(&format!(
        "<body style=\"margin: 0; padding: 0; background-color: {}; font-family: {}; font-size: {};\">\n",
        esc_attr(background),
        esc_attr(font_family),
        esc_attr(font_size),
    ));
    if let Some(preheader) = config.preheader.as_deref() {
        if !preheader.is_empty() {
            push_preheader(&mut out, preheader);
        }
    }
    out.push_str(
        "  <div class=\"container\" style=\"max-width: 600px; margin: 24px auto; \
         background-color: #ffffff; border-radius: 8px; overflow: hidden;\">\n",
    );
    if let Some(header) = &config.header_image {
        push_header_image(&mut out, header);
    }
    out.push_str("    <div style=\"padding: 32px 40px;\">\n");
    for section in &config.sections {
        push_section(&mut out, section, config);
    }
    if let Some(button) = &config.button {
        push_button(&mut out, button, config);
    }
    if config.location.enabled {
        push_location(&mut out, &config.location);
    }
    if !config.gallery_images.is_empty() {
        push_gallery(&mut out, &config.gallery_images);
    }
    out.push_str("    </div>\n");
    if config.include_social_links && !social_links.is_empty() {
        push_social_links(&mut out, social_links, config);
    }
    if config.include_unsubscribe_footer {
        push_footer(&mut out);
    }
    out.push_str("  </div>\n</body>\n</html>\n");
    out
}

/// Plain-text rendition of the same document, for the `text/plain` part of a
/// multipart message. Same omission rules as the HTML renderer; dynamic-field
/// tokens stay literal here too.
pub fn render_text(config: &TemplateConfig) -> String {
    let mut out = String::new();
    for section in &config.sections {
        match section {
            Section::Text(text) => {
                out.push_str(&text.content);
                out.push('\n');
            }
            Section::DynamicField(field) => {
                out.push_str(&field.field_key);
                out.push('\n');
            }
            Section::Divider(_) => out.push_str("----------\n"),
            Section::Spacer(_) => out.push('\n'),
        }
    }
    if let Some(button) = &config.button {
        let link = button.link.trim();
        let href = if link.is_empty() { BUTTON_FALLBACK_URL } else { link };
        out.push('\n');
        out.push_str(&format!("{}: {}\n", button.text, href));
    }
    if config.location.enabled {
        out.push('\n');
        out.push_str(&config.location.label);
        out.push('\n');
        let latitude = config.location.latitude.trim();
        let longitude = config.location.longitude.trim();
        if !latitude.is_empty() && !longitude.is_empty() {
            out.push_str(&maps_url(latitude, longitude));
            out.push('\n');
        }
    }
    if config.include_unsubscribe_footer {
        out.push('\n');
        out.push_str(&format!("Se désinscrire : {UNSUBSCRIBE_PLACEHOLDER}\n"));
    }
    out.trim_end().to_string()
}

// ─── Document chrome ──────────────────────────────────────────────────────────

fn push_document_head(out: &mut String, config: &TemplateConfig) {
    let background = resolve_style_value(None, &config.background_color, DEFAULT_BACKGROUND_COLOR);
    let primary = resolve_style_value(None, &config.primary_color, DEFAULT_PRIMARY_COLOR);
    out.push_str("<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n");
    out.push_str("  <meta charset=\"utf-8\">\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str("  <style>\n");
    out.push_str(&format!(
        "    body {{ margin: 0; padding: 0; background-color: {}; }}\n",
        esc_attr(background),
    ));
    out.push_str("    img { border: 0; display: block; max-width: 100%; }\n");
    out.push_str(&format!("    a {{ color: {}; }}\n", esc_attr(primary)));
    out.push_str(
        "    @media only screen and (max-width: 620px) \
         { .container { width: 100% !important; border-radius: 0 !important; } }\n",
    );
    out.push_str("  </style>\n");
    out.push_str("</head>\n");
}

/// Inbox preview line. Hidden in the rendered document but picked up by mail
/// clients as the snippet next to the subject.
fn push_preheader(out: &mut String, preheader: &str) {
    out.push_str(&format!(
        "  <span style=\"display: none; max-height: 0; overflow: hidden;\">{}</span>\n",
        esc(preheader),
    ));
}

fn push_header_image(out: &mut String, header: &HeaderImage) {
    out.push_str(&format!(
        "    <img src=\"{}\" alt=\"{}\" style=\"width: 100%;\">\n",
        esc_attr(&header.url),
        esc_attr(&header.alt_text),
    ));
}

// ─── Section blocks ───────────────────────────────────────────────────────────

fn push_section(out: &mut String, section: &Section, config: &TemplateConfig) {
    match section {
        Section::Text(text) => push_text_section(out, text, config),
        Section::DynamicField(field) => push_dynamic_field_section(out, field, config),
        Section::Divider(_) => push_divider(out, config),
        Section::Spacer(spacer) => push_spacer(out, spacer),
    }
}

fn push_text_section(out: &mut String, text: &TextSection, config: &TemplateConfig) {
    let style = &text.style;
    let font_size =
        resolve_style_value(style.font_size.as_deref(), &config.font_size, DEFAULT_FONT_SIZE);
    let color = resolve_style_value(
        style.color.as_deref(),
        &config.content_text_color,
        DEFAULT_CONTENT_TEXT_COLOR,
    );
    let align = style.text_align.unwrap_or(TextAlign::Left).as_css();
    let margin_top = resolve_style_value(style.margin_top.as_deref(), "", "0");
    let margin_bottom = resolve_style_value(style.margin_bottom.as_deref(), "", "16px");

    out.push_str(&format!(
        "      <div style=\"font-size: {}; color: {}; text-align: {}; margin: {} 0 {} 0; line-height: 1.6;",
        esc_attr(font_size),
        esc_attr(color),
        align,
        esc_attr(margin_top),
        esc_attr(margin_bottom),
    ));
    if let Some(weight) = style.font_weight.as_deref().filter(|weight| !weight.is_empty()) {
        out.push_str(&format!(" font-weight: {};", esc_attr(weight)));
    }
    out.push_str(&format!("\">{}</div>\n", esc(&text.content)));
}

/// Renders the literal token, styled to stand out. Substituting here would
/// force a full re-render per recipient.
fn push_dynamic_field_section(
    out: &mut String,
    field: &DynamicFieldSection,
    config: &TemplateConfig,
) {
    debug_assert!(
        is_registered_key(&field.field_key),
        "unregistered field key reached the renderer: {}",
        field.field_key
    );
    let primary = resolve_style_value(None, &config.primary_color, DEFAULT_PRIMARY_COLOR);
    out.push_str(&format!(
        "      <div style=\"text-align: center; margin: 16px 0;\">\
         <span style=\"font-size: {}; font-weight: bold; color: {};\">{}</span></div>\n",
        DYNAMIC_FIELD_FONT_SIZE,
        esc_attr(primary),
        esc(&field.field_key),
    ));
}

fn push_divider(out: &mut String, config: &TemplateConfig) {
    let primary = resolve_style_value(None, &config.primary_color, DEFAULT_PRIMARY_COLOR);
    out.push_str(&format!(
        "      <div style=\"height: 2px; margin: 24px 0; \
         background: linear-gradient(to right, transparent, {}, transparent);\"></div>\n",
        esc_attr(primary),
    ));
}

fn push_spacer(out: &mut String, spacer: &SpacerSection) {
    let height = spacer
        .height
        .as_deref()
        .filter(|height| !height.trim().is_empty())
        .unwrap_or(DEFAULT_SPACER_HEIGHT);
    out.push_str(&format!(
        "      <div style=\"height: {};\"></div>\n",
        esc_attr(height),
    ));
}

// ─── Optional trailing blocks ─────────────────────────────────────────────────

fn push_button(out: &mut String, button: &ButtonConfig, config: &TemplateConfig) {
    let link = button.link.trim();
    let href = if link.is_empty() { BUTTON_FALLBACK_URL } else { link };
    let background = resolve_style_value(
        Some(button.background_color.as_str()),
        &config.primary_color,
        DEFAULT_PRIMARY_COLOR,
    );
    let text_color = resolve_style_value(Some(button.text_color.as_str()), "", "#ffffff");
    let bottom = darken(background, 20);
    out.push_str(&format!(
        "      <div style=\"text-align: center; margin: 28px 0;\">\n        \
         <a href=\"{}\" style=\"display: inline-block; padding: 14px 32px; \
         background: linear-gradient(180deg, {} 0%, {} 100%); color: {}; \
         text-decoration: none; border-radius: 6px; font-weight: bold;\">{}</a>\n      </div>\n",
        esc_attr(href),
        esc_attr(background),
        esc_attr(&bottom),
        esc_attr(text_color),
        esc(&button.text),
    ));
}

fn push_location(out: &mut String, location: &LocationConfig) {
    let background = resolve_style_value(Some(location.background_color.as_str()), "", "#eef4fb");
    let text_color = resolve_style_value(Some(location.text_color.as_str()), "", "#333333");
    out.push_str(&format!(
        "      <div style=\"background-color: {}; border-radius: 8px; padding: 20px; \
         margin: 24px 0; text-align: center;\">\n",
        esc_attr(background),
    ));
    out.push_str(&format!(
        "        <div style=\"color: {}; font-weight: bold;\">{}</div>\n",
        esc_attr(text_color),
        esc(&location.label),
    ));
    out.push_str(&format!(
        "        <div style=\"color: {}; font-size: 14px; margin-top: 4px;\">Rendez-vous sur place</div>\n",
        esc_attr(text_color),
    ));
    // Both coordinates or no map link at all. A half-filled pair still gets
    // the label block above.
    let latitude = location.latitude.trim();
    let longitude = location.longitude.trim();
    if !latitude.is_empty() && !longitude.is_empty() {
        let button_background =
            resolve_style_value(Some(location.button_background_color.as_str()), "", DEFAULT_PRIMARY_COLOR);
        let button_text =
            resolve_style_value(Some(location.button_text_color.as_str()), "", "#ffffff");
        out.push_str(&format!(
            "        <a href=\"{}\" style=\"display: inline-block; margin-top: 12px; \
             padding: 10px 24px; background-color: {}; color: {}; text-decoration: none; \
             border-radius: 6px;\">Voir sur la carte</a>\n",
            esc_attr(&maps_url(latitude, longitude)),
            esc_attr(button_background),
            esc_attr(button_text),
        ));
    }
    out.push_str("      </div>\n");
}

fn push_gallery(out: &mut String, urls: &[String]) {
    out.push_str("      <div style=\"margin: 24px 0;\">\n");
    for url in urls {
        out.push_str(&format!(
            "        <img src=\"{}\" alt=\"\" style=\"width: 100%; border-radius: 6px; margin-bottom: 12px;\">\n",
            esc_attr(url),
        ));
    }
    out.push_str("      </div>\n");
}

fn push_social_links(out: &mut String, links: &[SocialLink], config: &TemplateConfig) {
    let primary = resolve_style_value(None, &config.primary_color, DEFAULT_PRIMARY_COLOR);
    out.push_str("    <div style=\"padding: 0 40px 20px 40px; text-align: center;\">\n");
    for link in links {
        out.push_str(&format!(
            "      <a href=\"{}\" style=\"color: {}; text-decoration: none; margin: 0 8px; font-size: 14px;\">{}</a>\n",
            esc_attr(&link.url),
            esc_attr(primary),
            esc(&link.platform),
        ));
    }
    out.push_str("    </div>\n");
}

fn push_footer(out: &mut String) {
    out.push_str(
        "    <div style=\"padding: 24px 40px; text-align: center; font-size: 12px; color: #888888;\">\n",
    );
    out.push_str("      Vous recevez cet email dans le cadre de votre réservation.<br>\n");
    out.push_str(&format!(
        "      <a href=\"{UNSUBSCRIBE_PLACEHOLDER}\" style=\"color: #888888;\">Se désinscrire</a>\n",
    ));
    out.push_str("    </div>\n");
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn maps_url(latitude: &str, longitude: &str) -> String {
    format!("https://www.google.com/maps?q={latitude},{longitude}")
}

fn esc(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

fn esc_attr(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
