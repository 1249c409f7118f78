//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use url::Url;

/// Purge full-page cache entries from Redis by URL.
///
/// Connection and key settings come from the environment
/// (`REDIS_HOSTNAME`, `REDIS_PREFIX`, `HOME_URL`, ...).
#[derive(Debug, Parser)]
#[command(name = "pagepurge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Site home URL, overrides `HOME_URL`.
    #[arg(long)]
    pub home_url: Option<Url>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Purge every cached page of the site.
    All {
        /// Purge every key under the prefix, for all sites.
        #[arg(long)]
        network: bool,
    },
    /// Purge the cached pages of one or more URLs.
    Url {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Purge the custom URL list from `PURGE_URLS`.
    Custom,
    /// Purge raw cache keys; keys containing `*` are purged as patterns.
    Key {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Purge every key matching a `*` pattern.
    Pattern { pattern: String },
}
