//! Textual product information: title, feature bullets, description.
//!
//! Each field is extracted on its own; a missing block only affects its field.

use crate::amazon::models::TextualInfo;
use crate::amazon::selectors::textual;
use crate::amazon::text::{clean_text, element_text, normalize};
use scraper::{Html, Selector};
use tracing::debug;

/// Bullet Amazon injects on pages with fitment checks.
pub const MODEL_NUMBER_PROMPT: &str = "Make sure this fits by entering your model number.";

/// Extracts title, bullet points and description.
pub fn extract_textual(document: &Html) -> TextualInfo {
    TextualInfo {
        title: extract_title(document),
        bullet_points: extract_bullet_points(document),
        product_description: extract_description(document),
    }
}

/// Product title, or an empty string when the title block is missing.
pub fn extract_title(document: &Html) -> String {
    document.select(&textual::TITLE).next().map(clean_text).unwrap_or_default()
}

/// Feature bullets, without the model number prompt.
///
/// Returns `[""]` when the bullet list is missing or one of its items has no
/// text span. A list whose only item is the prompt yields `[]`.
pub fn extract_bullet_points(document: &Html) -> Vec<String> {
    read_bullet_points(document).unwrap_or_else(|| vec![String::new()])
}

fn read_bullet_points(document: &Html) -> Option<Vec<String>> {
    document.select(&textual::FEATURE_BULLETS).next()?;

    let mut bullets = Vec::new();
    for item in document.select(&textual::FEATURE_BULLET_ITEMS) {
        let Some(span) = item.select(&textual::FEATURE_BULLET_TEXT).next() else {
            debug!("Feature bullet without list item text");
            return None;
        };

        let text = clean_text(span);
        if text != MODEL_NUMBER_PROMPT {
            bullets.push(text);
        }
    }

    Some(bullets)
}

/// Description paragraphs joined by a space, empty when there are none.
pub fn extract_description(document: &Html) -> String {
    let paragraphs = paragraphs(document, &textual::DESCRIPTION)
        .or_else(|| paragraphs(document, &textual::DESCRIPTION_FALLBACK))
        .unwrap_or_default();

    normalize(&paragraphs.join(" "))
}

/// Trimmed paragraph texts, or `None` if the selector matched nothing.
fn paragraphs(document: &Html, selector: &Selector) -> Option<Vec<String>> {
    let texts: Vec<String> = document.select(selector).map(element_text).collect();
    (!texts.is_empty()).then_some(texts)
}
