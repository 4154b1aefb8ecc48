//! amz-product-info - Tabular and textual information from Amazon product pages
//!
//! Fetches one product page and prints and/or dumps what it finds.

use amz_product_info::amazon::FileSource;
use amz_product_info::commands::ExtractCommand;
use amz_product_info::config::{Config, InfoType, OutputFormat};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "amz-product-info",
    version,
    about = "Extract tabular and textual information from an Amazon product page",
    long_about = "Extracts product detail and overview tables, or title, bullet points and \
                  description, from a single Amazon product page."
)]
struct Cli {
    /// URL of the Amazon product page
    #[arg(long = "url", alias = "URL", default_value = "https://www.amazon.com/dp/B08KHR6B3W/")]
    url: String,

    /// Type of information to extract (tabular, textual)
    #[arg(long)]
    info_type: Option<InfoType>,

    /// Display the extracted info
    #[arg(long)]
    verbosity_enabled: bool,

    /// Dump the extracted info as JSON files
    #[arg(long)]
    dump_info_enabled: bool,

    /// Directory to dump the extracted info into
    #[arg(long, env = "AMZ_DUMP_PATH")]
    dump_info_path: Option<PathBuf>,

    /// Read a saved page instead of fetching the URL
    #[arg(long)]
    html_file: Option<PathBuf>,

    /// Output format for displayed info
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, env = "AMZ_PROXY")]
    proxy: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "AMZ_TIMEOUT")]
    timeout: Option<u64>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(info_type) = cli.info_type {
        config.info_type = info_type;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(path) = cli.dump_info_path {
        config.dump_info_path = path;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    config.verbosity_enabled |= cli.verbosity_enabled;
    config.dump_info_enabled |= cli.dump_info_enabled;

    let cmd = ExtractCommand::new(config);
    let output = match cli.html_file {
        Some(path) => cmd.execute_with_source(&FileSource::new(path), &cli.url).await?,
        None => cmd.execute(&cli.url).await?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
