use anyhow::Result;
use clap::Parser;
use discograph_fetch::Config;

mod commands;
mod tui;

#[derive(Debug, Parser)]
#[command(name = "discograph", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the artist-site proxy API
    #[arg(long, global = true)]
    base_url: Option<String>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Fetch and print the merged release catalog
    ///
    /// Requests the primary catalog and the user-generated-content feed
    /// concurrently, then merges them into one list:
    ///
    /// - Secondary tracks marked non-public are dropped
    /// - Secondary tracks whose title matches a primary release
    ///   (case-insensitively) are dropped; the primary source wins
    /// - Remaining secondary tracks are classified as mix or remix by
    ///   duration (over 15 minutes means a mix)
    /// - Primary releases get a listening link for every platform,
    ///   resolved through the link service with search-URL fallbacks
    /// - The combined list is sorted by release date, newest first
    ///
    /// Either source failing degrades to an empty contribution; the
    /// command still prints whatever the other source returned.
    Catalog {
        /// Filter key: all, album, single, mix, or remix
        #[arg(long, default_value = "all")]
        filter: String,
    },
    /// Resolve listening links for a single release
    Links {
        /// Release title, used for the search-URL fallbacks
        name: String,

        /// The release's URL on its own platform; enables real link
        /// resolution instead of fallbacks only
        #[arg(long)]
        url: Option<String>,
    },
    /// Browse the catalog interactively
    Browse,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.base_url {
        Some(base_url) => Config::load_with_base_url(base_url)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Catalog { filter } => {
            commands::run_catalog(&config, &filter).await?;
        }
        Commands::Links { name, url } => {
            commands::run_links(&config, &name, url.as_deref()).await?;
        }
        Commands::Browse => {
            tui::run_tui(&config)?;
        }
        Commands::Config { action } => {
            commands::config::run(action)?;
        }
    }

    Ok(())
}
