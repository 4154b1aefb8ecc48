//! Amazon-specific modules for page retrieval, parsing, and data models.

pub mod client;
pub mod layouts;
pub mod models;
pub mod page;
pub mod ranks;
pub mod selectors;
pub mod tabular;
pub mod text;
pub mod textual;

pub use client::{AmazonClient, FileSource, PageSource};
pub use models::{AttributeTable, AttributeValue, TabularInfo, TextualInfo};
pub use page::{PageError, ProductPage};
pub use ranks::parse_ranks;
pub use tabular::{extract_detail_table, extract_overview};
pub use text::normalize;
pub use textual::{extract_bullet_points, extract_description, extract_title};
