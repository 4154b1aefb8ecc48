//! `#prodDetails` layout: header cells hold names, data cells hold values.

use super::DetailLayout;
use crate::amazon::models::{AttributeTable, AttributeValue, BEST_SELLERS_RANK};
use crate::amazon::ranks::parse_ranks;
use crate::amazon::selectors::detail;
use crate::amazon::text::clean_text;
use scraper::Html;

/// Detail table rendered as `<th>`/`<td>` rows under `div#prodDetails`.
///
/// Names and values are collected as two independent lists and paired by
/// position, not by row. A row missing its `<th>` shifts every later pair.
pub struct ProdDetailsLayout;

impl DetailLayout for ProdDetailsLayout {
    fn try_extract(&self, document: &Html) -> AttributeTable {
        let keys: Vec<String> = document.select(&detail::PROD_DETAILS_KEYS).map(clean_text).collect();
        let values: Vec<String> =
            document.select(&detail::PROD_DETAILS_VALUES).map(clean_text).collect();

        let mut table = AttributeTable::from_pairs(keys, values);

        let rank_blob =
            table.get(BEST_SELLERS_RANK).and_then(AttributeValue::as_text).map(str::to_string);
        if let Some(blob) = rank_blob {
            table.insert(BEST_SELLERS_RANK, parse_ranks(&blob));
        }

        table
    }

    fn name(&self) -> &'static str {
        "prod-details"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> AttributeTable {
        ProdDetailsLayout.try_extract(&Html::parse_document(html))
    }

    #[test]
    fn test_prod_details_basic() {
        let table = extract(
            r#"<div id="prodDetails"><table>
                <tr><th> Brand </th><td>&lrm;Apple</td></tr>
                <tr><th>Item Weight</th><td> 1.06 ounces </td></tr>
            </table></div>"#,
        );

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Brand"), Some(&AttributeValue::from("Apple")));
        assert_eq!(table.get("Item Weight"), Some(&AttributeValue::from("1.06 ounces")));
    }

    #[test]
    fn test_prod_details_best_sellers_rank() {
        let table = extract(
            r#"<div id="prodDetails"><table>
                <tr><th>Best Sellers Rank</th>
                    <td><span>#1,204 in Electronics (<a href="/bestsellers">See Top 100 in Electronics</a>)</span>
                        <span>#37 in Smartwatches</span></td></tr>
            </table></div>"#,
        );

        assert_eq!(
            table.get(BEST_SELLERS_RANK).and_then(AttributeValue::as_ranks),
            Some(&["#1,204 in Electronics".to_string(), "#37 in Smartwatches".to_string()][..])
        );
    }

    #[test]
    fn test_prod_details_pairs_by_position() {
        // First row lacks a header cell, so values shift onto later names.
        let table = extract(
            r#"<div id="prodDetails"><table>
                <tr><td>orphan</td></tr>
                <tr><th>Brand</th><td>Apple</td></tr>
                <tr><th>Color</th><td>Red</td></tr>
            </table></div>"#,
        );

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("Brand"), Some(&AttributeValue::from("orphan")));
        assert_eq!(table.get("Color"), Some(&AttributeValue::from("Apple")));
    }

    #[test]
    fn test_prod_details_absent() {
        assert!(extract("<html><body><table><tr><th>a</th><td>b</td></tr></table></body></html>")
            .is_empty());
    }
}
