//! Cleanup of text scraped out of product page markup.

use scraper::ElementRef;

/// Removes bidi marks, zero-width characters and stray control bytes.
///
/// Amazon wraps detail values in left-to-right / right-to-left marks and
/// occasionally serves dashes mis-decoded into the C1 control range. Newlines
/// and tabs survive; everything else printable is kept as is.
pub fn normalize(text: &str) -> String {
    text.chars().filter(|c| !is_artifact(*c)).collect()
}

fn is_artifact(c: char) -> bool {
    match c {
        '\n' | '\t' => false,
        // LRM, RLM, embeddings/overrides, isolates, Arabic letter mark
        '\u{200E}' | '\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}' | '\u{061C}' => {
            true
        }
        // zero-width space/joiners, word joiner, BOM
        '\u{200B}'..='\u{200D}' | '\u{2060}' | '\u{FEFF}' => true,
        '\u{FFFD}' => true,
        c => c.is_control(),
    }
}

/// Collected text of an element, trimmed.
pub fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Collected text of an element, normalized then trimmed.
pub fn clean_text(element: ElementRef) -> String {
    normalize(&element.text().collect::<String>()).trim().to_string()
}
