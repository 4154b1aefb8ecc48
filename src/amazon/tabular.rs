//! Tabular product information: detail table and overview table.

use crate::amazon::layouts::{pair_alternating, LayoutChain};
use crate::amazon::models::{AttributeTable, TabularInfo};
use crate::amazon::selectors::overview;
use crate::amazon::text::element_text;
use scraper::Html;
use tracing::debug;

/// Extracts the product detail table using the default layout priority.
///
/// Returns `{"NA": "NA"}` when the page carries none of the known layouts.
pub fn extract_detail_table(document: &Html) -> AttributeTable {
    LayoutChain::default().extract(document)
}

/// Extracts the product overview table, empty if the page has none.
pub fn extract_overview(document: &Html) -> AttributeTable {
    let table = pair_alternating(document.select(&overview::CELLS).map(element_text));
    debug!("Overview table: {} attributes", table.len());
    table
}

/// Extracts both tables.
pub fn extract_tabular(document: &Html) -> TabularInfo {
    TabularInfo { detail: extract_detail_table(document), overview: extract_overview(document) }
}
