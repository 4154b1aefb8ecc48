//! Detail bullets layout: one `Name : Value` list item per attribute.

use super::DetailLayout;
use crate::amazon::models::{AttributeTable, BEST_SELLERS_RANK, BEST_SELLERS_RANK_BULLETS};
use crate::amazon::ranks::parse_ranks;
use crate::amazon::selectors::detail;
use crate::amazon::text::element_text;
use scraper::Html;
use tracing::trace;

/// Detail table rendered as a bullet list under `#detailBullets_feature_div`.
///
/// Sales ranks are additionally collected from the rank bullet list and
/// stored under `Best_Sellers_Rank`, next to whatever raw `Best Sellers Rank`
/// text the plain bullets produced.
pub struct DetailBulletsLayout;

impl DetailBulletsLayout {
    /// Ranks from every rank bullet naming "Best Sellers Rank".
    ///
    /// `None` when no such bullet exists, so the key can be left out.
    fn sales_ranks(&self, document: &Html) -> Option<Vec<String>> {
        let mut found = false;
        let mut ranks = Vec::new();

        for item in document.select(&detail::RANK_BULLET_ITEMS) {
            let text = element_text(item);
            let parts: Vec<&str> = text.split(':').collect();

            if !parts.iter().any(|part| part.trim() == BEST_SELLERS_RANK) {
                continue;
            }

            found = true;
            for part in parts.iter().filter(|part| part.contains('#')) {
                ranks.extend(parse_ranks(part));
            }
        }

        found.then_some(ranks)
    }
}

impl DetailLayout for DetailBulletsLayout {
    fn try_extract(&self, document: &Html) -> AttributeTable {
        let mut table = AttributeTable::new();

        for item in document.select(&detail::BULLET_ITEMS) {
            let Some(text) = item.select(&detail::BULLET_TEXT).next().map(element_text) else {
                trace!("Detail bullet without list item text");
                continue;
            };

            if let Some((key, value)) = text.split_once(':') {
                table.insert(strip_marks(key), strip_marks(value));
            }
        }

        if let Some(ranks) = self.sales_ranks(document) {
            table.insert(BEST_SELLERS_RANK_BULLETS, ranks);
        }

        table
    }

    fn name(&self) -> &'static str {
        "detail-bullets"
    }
}

/// Trims the whitespace and LRM/RLM padding Amazon puts around bullet names and values.
fn strip_marks(text: &str) -> String {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{200E}' || c == '\u{200F}').to_string()
}
