//! Product detail table layouts and their priority-ordered chain.
//!
//! Amazon renders the same attribute table in one of three layouts. Each
//! layout returns an empty table when its markup is absent; the chain takes
//! the first non-empty result.

pub mod detail_bullets;
pub mod prod_details;
pub mod tech_spec;

use crate::amazon::models::AttributeTable;
use scraper::Html;
use tracing::{debug, trace};

pub use detail_bullets::DetailBulletsLayout;
pub use prod_details::ProdDetailsLayout;
pub use tech_spec::TechSpecLayout;

/// One way a product page may lay out its detail table.
pub trait DetailLayout: Send + Sync {
    /// Extracts the table, or returns an empty table if the layout is absent.
    fn try_extract(&self, document: &Html) -> AttributeTable;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Layouts tried in order; the first non-empty table wins.
pub struct LayoutChain {
    layouts: Vec<Box<dyn DetailLayout>>,
}

impl LayoutChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self { layouts: Vec::new() }
    }

    /// Appends a layout with lower priority than those already added.
    pub fn add(&mut self, layout: impl DetailLayout + 'static) -> &mut Self {
        self.layouts.push(Box::new(layout));
        self
    }

    /// Runs the layouts in priority order.
    ///
    /// Returns the `{"NA": "NA"}` table when none of them matched.
    pub fn extract(&self, document: &Html) -> AttributeTable {
        for layout in &self.layouts {
            let table = layout.try_extract(document);
            if !table.is_empty() {
                debug!("Detail table matched layout '{}' ({} attributes)", layout.name(), table.len());
                return table;
            }
            trace!("Layout '{}' not present", layout.name());
        }

        debug!("No detail table layout matched");
        AttributeTable::not_available()
    }
}

impl Default for LayoutChain {
    /// `#prodDetails`, then detail bullets, then the tech-spec grid.
    ///
    /// A page carrying more than one layout resolves to the earliest here.
    fn default() -> Self {
        let mut chain = Self::new();
        chain.add(ProdDetailsLayout).add(DetailBulletsLayout).add(TechSpecLayout);
        chain
    }
}

/// Splits cells into even-indexed names and odd-indexed values, then pairs them.
///
/// A trailing name without a value is dropped.
pub(crate) fn pair_alternating(cells: impl IntoIterator<Item = String>) -> AttributeTable {
    let mut keys = Vec::new();
    let mut values = Vec::new();

    for (index, cell) in cells.into_iter().enumerate() {
        if index % 2 == 0 {
            keys.push(cell);
        } else {
            values.push(cell);
        }
    }

    AttributeTable::from_pairs(keys, values)
}
