//! Page retrieval: HTTP client with browser emulation, or a saved page on disk.

use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use rand::Rng;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use wreq::Client;
use wreq_util::Emulation;

/// Desktop browser profiles a client may present itself as.
const EMULATIONS: [Emulation; 3] = [Emulation::Chrome129, Emulation::Chrome130, Emulation::Chrome131];

/// Trait for product page retrieval - enables mocking for tests.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Returns the rendered HTML of the page at `url`.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Amazon HTTP client with browser impersonation.
pub struct AmazonClient {
    client: Client,
    emulation: Emulation,
}

impl AmazonClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10));

        // Configure proxy if specified
        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;
        let profile = rand::rng().random_range(0..EMULATIONS.len());
        debug!("Using browser emulation profile #{}", profile);
        let emulation = EMULATIONS[profile].clone();

        Ok(Self { client, emulation })
    }
}

#[async_trait]
impl PageSource for AmazonClient {
    async fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching product page: {}", url);

        let response = self
            .client
            .get(url)
            .emulation(self.emulation.clone())
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.9")
            .header("Accept-Encoding", "gzip, deflate, br")
            .header("Cache-Control", "no-cache")
            .header("Pragma", "no-cache")
            .header("Sec-Fetch-Dest", "document")
            .header("Sec-Fetch-Mode", "navigate")
            .header("Sec-Fetch-Site", "none")
            .header("Sec-Fetch-User", "?1")
            .header("Upgrade-Insecure-Requests", "1")
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == 503 {
            warn!("Blocked (503). Consider using a proxy.");
            anyhow::bail!("Blocked by Amazon (503). Try again later or use --proxy.");
        }

        if !status.is_success() {
            anyhow::bail!("Request failed with status: {}", status);
        }

        response.text().await.context("Failed to read response body")
    }
}

/// Reads a page previously saved from a browser.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PageSource for FileSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        info!("Reading saved page for {} from {}", url, self.path.display());
        tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read HTML file: {}", self.path.display()))
    }
}
