//! Data models for extracted product attributes and textual content.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Attribute name used by the `#prodDetails` table for sales ranks.
pub const BEST_SELLERS_RANK: &str = "Best Sellers Rank";

/// Attribute name the detail-bullets layout stores sales ranks under.
///
/// Spelled differently from [`BEST_SELLERS_RANK`]; dumps keep each layout's key.
pub const BEST_SELLERS_RANK_BULLETS: &str = "Best_Sellers_Rank";

/// Key and value of the placeholder table returned when no layout matched.
pub const NOT_AVAILABLE: &str = "NA";

/// A single attribute value: plain text, or a list of rank entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Ranks(Vec<String>),
}

impl AttributeValue {
    /// Returns the text value, if this is not a rank list.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            AttributeValue::Ranks(_) => None,
        }
    }

    /// Returns the rank entries, if this is a rank list.
    pub fn as_ranks(&self) -> Option<&[String]> {
        match self {
            AttributeValue::Ranks(ranks) => Some(ranks),
            AttributeValue::Text(_) => None,
        }
    }
}

impl From<String> for AttributeValue {
    fn from(text: String) -> Self {
        AttributeValue::Text(text)
    }
}

impl From<&str> for AttributeValue {
    fn from(text: &str) -> Self {
        AttributeValue::Text(text.to_string())
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(ranks: Vec<String>) -> Self {
        AttributeValue::Ranks(ranks)
    }
}

/// Attribute name to value map extracted from a product page.
///
/// Entries keep page order for display and dumping. Equality ignores order.
#[derive(Debug, Clone, Default)]
pub struct AttributeTable {
    entries: Vec<(String, AttributeValue)>,
    // key -> position in `entries`
    index: HashMap<String, usize>,
}

impl AttributeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The `{"NA": "NA"}` table signalling that no detail layout matched.
    pub fn not_available() -> Self {
        let mut table = Self::new();
        table.insert(NOT_AVAILABLE, NOT_AVAILABLE);
        table
    }

    /// Returns true if this is the `{"NA": "NA"}` placeholder.
    pub fn is_not_available(&self) -> bool {
        self.entries.len() == 1
            && self.get(NOT_AVAILABLE).and_then(AttributeValue::as_text) == Some(NOT_AVAILABLE)
    }

    /// Pairs the i-th key with the i-th value, stopping at the shorter list.
    pub fn from_pairs(keys: Vec<String>, values: Vec<String>) -> Self {
        keys.into_iter().zip(values).map(|(k, v)| (k, AttributeValue::Text(v))).collect()
    }

    /// Inserts an attribute. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        let key = key.into();
        let value = value.into();

        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in page order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates attribute names in page order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl PartialEq for AttributeTable {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for AttributeTable {}

impl FromIterator<(String, AttributeValue)> for AttributeTable {
    fn from_iter<I: IntoIterator<Item = (String, AttributeValue)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

impl Serialize for AttributeTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

impl<'de> Deserialize<'de> for AttributeTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = AttributeTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of attribute names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut table = AttributeTable::new();
                while let Some((key, value)) = access.next_entry::<String, AttributeValue>()? {
                    table.insert(key, value);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

/// Both tables a tabular extraction produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularInfo {
    /// Product detail table, or the `{"NA": "NA"}` placeholder
    pub detail: AttributeTable,
    /// Product overview table, empty when the page has none
    pub overview: AttributeTable,
}

/// Free-text content of a product page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextualInfo {
    /// Product title, empty when not found
    pub title: String,
    /// Feature bullets; `[""]` when the bullet list could not be read
    pub bullet_points: Vec<String>,
    /// Product description paragraphs joined by a space
    pub product_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut table = AttributeTable::new();
        table.insert("Brand", "Apple");
        table.insert("Color", "Red");
        table.insert("Brand", "Beats");

        assert_eq!(table.len(), 2);
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["Brand", "Color"]);
        assert_eq!(table.get("Brand"), Some(&AttributeValue::from("Beats")));
    }

    #[test]
    fn test_from_pairs_truncates_to_shorter() {
        let keys = ranks(&["a", "b", "c"]);
        let values = ranks(&["1", "2"]);
        let table = AttributeTable::from_pairs(keys, values);

        assert_eq!(table.len(), 2);
        assert!(!table.contains_key("c"));
    }

    #[test]
    fn test_not_available() {
        let table = AttributeTable::not_available();
        assert!(table.is_not_available());
        assert_eq!(serde_json::to_string(&table).unwrap(), r#"{"NA":"NA"}"#);

        let mut table = AttributeTable::not_available();
        table.insert("Brand", "Apple");
        assert!(!table.is_not_available());
        assert!(!AttributeTable::new().is_not_available());
    }

    #[test]
    fn test_equality_ignores_order() {
        let mut first = AttributeTable::new();
        first.insert("a", "1");
        first.insert("b", "2");

        let mut second = AttributeTable::new();
        second.insert("b", "2");
        second.insert("a", "1");

        assert_eq!(first, second);

        second.insert("a", "3");
        assert_ne!(first, second);
    }

    #[test]
    fn test_serialize_keeps_page_order() {
        let mut table = AttributeTable::new();
        table.insert("Zeta", "last letter");
        table.insert(BEST_SELLERS_RANK, ranks(&["#1 in Watches"]));
        table.insert("Alpha", "first letter");

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(
            json,
            r##"{"Zeta":"last letter","Best Sellers Rank":["#1 in Watches"],"Alpha":"first letter"}"##
        );
    }

    #[test]
    fn test_json_round_trip() {
        let mut table = AttributeTable::new();
        table.insert("Product Dimensions", "1.73 x 1.5 x 0.42 inches");
        table.insert(BEST_SELLERS_RANK_BULLETS, ranks(&["#12 in Widgets", "#5 in Gadgets"]));
        table.insert("Empty ranks", Vec::<String>::new());

        let json = serde_json::to_string_pretty(&table).unwrap();
        let parsed: AttributeTable = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, table);
        assert_eq!(
            parsed.get(BEST_SELLERS_RANK_BULLETS).and_then(AttributeValue::as_ranks),
            Some(&ranks(&["#12 in Widgets", "#5 in Gadgets"])[..])
        );
    }

    #[test]
    fn test_deserialize_rejects_non_map() {
        assert!(serde_json::from_str::<AttributeTable>("[1, 2]").is_err());
        assert!(serde_json::from_str::<AttributeTable>(r#"{"a": 1}"#).is_err());
    }

    #[test]
    fn test_large_table_lookup_and_replace() {
        let mut table: AttributeTable =
            (0..2000).map(|i| (format!("key {}", i), AttributeValue::from(i.to_string()))).collect();
        table.insert("key 1500", "replaced");
        table.insert("key 2000", "appended");

        assert_eq!(table.len(), 2001);
        assert_eq!(table.get("key 1500"), Some(&AttributeValue::from("replaced")));
        assert_eq!(table.get("key 0"), Some(&AttributeValue::from("0")));
        assert_eq!(table.keys().nth(1500), Some("key 1500"));
        assert_eq!(table.keys().last(), Some("key 2000"));
        assert!(!table.contains_key("key 2001"));
    }

    #[test]
    fn test_textual_info_serde_field_names() {
        let info = TextualInfo {
            title: "Watch".to_string(),
            bullet_points: vec![String::new()],
            product_description: String::new(),
        };

        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["title"], "Watch");
        assert_eq!(value["bullet_points"], serde_json::json!([""]));
        assert_eq!(value["product_description"], "");
    }
}
