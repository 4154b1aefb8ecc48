//! JSON dumps of extracted information, one file per result.

use crate::format::to_json_pretty;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

pub const DETAIL_TABLE_FILE: &str = "product_detail_table.json";
pub const OVERVIEW_TABLE_FILE: &str = "product_overview_table.json";
pub const TEXTUAL_INFO_FILE: &str = "product_textual_info.json";

/// Writes results into a dump directory, creating it when missing.
pub struct Dumper {
    dir: PathBuf,
}

impl Dumper {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Writes `value` to `<dir>/<file_name>`, replacing any previous dump.
    pub fn dump<T: Serialize + ?Sized>(&self, file_name: &str, value: &T) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create dump directory: {}", self.dir.display()))?;

        let path = self.dir.join(file_name);
        let json = to_json_pretty(value)
            .with_context(|| format!("Failed to serialize {}", file_name))?;

        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write dump file: {}", path.display()))?;

        info!("Dumped {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amazon::models::{AttributeTable, TextualInfo};
    use tempfile::TempDir;

    #[test]
    fn test_dump_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("extracted_info");
        let dumper = Dumper::new(&dir);

        let path = dumper.dump(DETAIL_TABLE_FILE, &AttributeTable::not_available()).unwrap();

        assert_eq!(path, dir.join("product_detail_table.json"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\n    \"NA\": \"NA\"\n}");
    }

    #[test]
    fn test_dump_replaces_previous_file() {
        let tmp = TempDir::new().unwrap();
        let dumper = Dumper::new(tmp.path());

        let mut table = AttributeTable::new();
        table.insert("Brand", "A much longer brand name than the second dump");
        dumper.dump(OVERVIEW_TABLE_FILE, &table).unwrap();

        let path = dumper.dump(OVERVIEW_TABLE_FILE, &AttributeTable::new()).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "{}");
    }

    #[test]
    fn test_dump_textual_round_trip() {
        let tmp = TempDir::new().unwrap();
        let dumper = Dumper::new(tmp.path());
        let info = TextualInfo {
            title: "Watch".to_string(),
            bullet_points: vec!["One".to_string()],
            product_description: String::new(),
        };

        let path = dumper.dump(TEXTUAL_INFO_FILE, &info).unwrap();
        let parsed: TextualInfo =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(parsed, info);
    }

    #[test]
    fn test_dump_into_file_path_fails() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("not_a_dir");
        std::fs::write(&blocker, "x").unwrap();

        let err = Dumper::new(&blocker).dump(DETAIL_TABLE_FILE, &AttributeTable::new()).unwrap_err();
        assert!(err.to_string().contains("Failed to create dump directory"));
    }
}
