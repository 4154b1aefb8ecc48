//! Alternate technical specification grid.

use super::{pair_alternating, DetailLayout};
use crate::amazon::models::AttributeTable;
use crate::amazon::selectors::detail;
use crate::amazon::text::element_text;
use scraper::Html;

/// Detail table under `div#tech` with only `<td>` cells: name, value, name, value...
pub struct TechSpecLayout;

impl DetailLayout for TechSpecLayout {
    fn try_extract(&self, document: &Html) -> AttributeTable {
        pair_alternating(document.select(&detail::TECH_SPEC_CELLS).map(element_text))
    }

    fn name(&self) -> &'static str {
        "tech-spec"
    }
}
