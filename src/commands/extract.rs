//! Product information extraction command.

use crate::amazon::{AmazonClient, PageSource, ProductPage};
use crate::config::{Config, InfoType};
use crate::dump::{Dumper, DETAIL_TABLE_FILE, OVERVIEW_TABLE_FILE, TEXTUAL_INFO_FILE};
use crate::format::Formatter;
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

/// Fetches one product page and extracts the configured information.
pub struct ExtractCommand {
    config: Config,
}

impl ExtractCommand {
    /// Creates a new extract command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches `url` over HTTP and returns the printable output.
    pub async fn execute(&self, url: &str) -> Result<String> {
        let client = AmazonClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_source(&client, url).await
    }

    /// Extracts from a page obtained through `source` (for testing and saved pages).
    ///
    /// The returned text is empty unless `verbosity_enabled` is set.
    pub async fn execute_with_source(&self, source: &impl PageSource, url: &str) -> Result<String> {
        let html = source.fetch(url).await?;
        let page = ProductPage::parse(&html)
            .with_context(|| format!("Failed to parse product page: {}", url))?;

        info!("Extracting {} information from {}", self.config.info_type, url);

        let formatter = Formatter::new(self.config.format);
        let mut sections = Vec::new();

        match self.config.info_type {
            InfoType::Tabular => {
                let info = page.tabular();
                if info.detail.is_not_available() {
                    warn!("No product detail table found on {}", url);
                }

                self.emit(&mut sections, "product_detail_table", DETAIL_TABLE_FILE, &info.detail, |t| {
                    formatter.format_table(t)
                })?;
                self.emit(
                    &mut sections,
                    "product_overview_table",
                    OVERVIEW_TABLE_FILE,
                    &info.overview,
                    |t| formatter.format_table(t),
                )?;
            }
            InfoType::Textual => {
                let info = page.textual();
                self.emit(&mut sections, "product_textual_info", TEXTUAL_INFO_FILE, &info, |t| {
                    formatter.format_textual(t)
                })?;
            }
        }

        if !self.config.verbosity_enabled && !self.config.dump_info_enabled {
            warn!("Nothing to report: enable --verbosity-enabled or --dump-info-enabled");
        }

        Ok(sections.join("\n\n"))
    }

    /// Renders and/or dumps one result according to the config flags.
    fn emit<T: Serialize>(
        &self,
        sections: &mut Vec<String>,
        label: &str,
        file_name: &str,
        value: &T,
        render: impl FnOnce(&T) -> String,
    ) -> Result<()> {
        if self.config.verbosity_enabled {
            sections.push(format!("{}:\n{}", label, render(value)));
        }

        if self.config.dump_info_enabled {
            let path = Dumper::new(&self.config.dump_info_path).dump(file_name, value)?;
            eprintln!("dumped in {}.", path.display());
        }

        Ok(())
    }
}
