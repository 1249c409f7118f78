mod cli;
mod config;
mod error;
mod hooks;
mod output;
mod purger;
mod store;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use pagepurge_core::purge::{PurgeError, PurgeScope};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    cli::{Cli, Commands},
    config::Config,
    output::format_results,
    purger::CachePurger,
    store::RedisStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pagepurge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env()?;
    if let Some(home_url) = cli.home_url {
        config.home_url = home_url;
    }

    let store =
        RedisStore::new(config.redis.connection_url()?.as_str(), config.redis.connect).await?;
    tracing::info!(
        endpoint = %config.redis.endpoint(),
        prefix = %config.prefix,
        "Connected to cache store"
    );

    let purger = CachePurger::new(Arc::new(store), config.purger_config())
        .with_hooks(hooks::from_config(&config));

    let results = match cli.command {
        Commands::All { network } => {
            let scope = if network {
                PurgeScope::Network
            } else {
                PurgeScope::Site
            };
            vec![purger.purge_all(scope).await]
        }
        Commands::Url { urls } => {
            let mut results = Vec::with_capacity(urls.len());
            for url in &urls {
                results.push(purger.purge_url(url).await);
            }
            results
        }
        Commands::Custom => purger.purge_custom_urls().await,
        Commands::Key { keys } => {
            let mut results = Vec::with_capacity(keys.len());
            for key in keys {
                results.push(purger.purge_key(key).await);
            }
            results
        }
        Commands::Pattern { pattern } => vec![purger.purge_pattern(pattern).await],
    };

    println!("{}", format_results(&results, cli.format));

    if results
        .iter()
        .any(|result| result.error().is_some_and(PurgeError::is_backend))
    {
        std::process::exit(1);
    }

    Ok(())
}
