//! amz-product-info - Tabular and textual information from Amazon product pages
//!
//! Extracts specification tables (in any of the three layouts Amazon uses),
//! the overview table, and the title, feature bullets and description.

pub mod amazon;
pub mod commands;
pub mod config;
pub mod dump;
pub mod format;

pub use amazon::models::{AttributeTable, AttributeValue, TabularInfo, TextualInfo};
pub use amazon::page::{PageError, ProductPage};
pub use config::Config;
