mod commands;
mod output;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ycdash_lib::{CachedClient, DashboardConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "ycdash")]
#[command(about = "Explore Y Combinator startups from the yc-oss dataset")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Base URL of the yc-oss API (overrides YCDASH_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Base URL of a published snapshot (overrides YCDASH_SNAPSHOT_URL)
    #[arg(long, global = true)]
    snapshot_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Headline statistics for AI startups
    Overview(commands::overview::OverviewArgs),
    /// Searchable, paginated company directory
    Companies(commands::companies::CompaniesArgs),
    /// Statistics for one region of the full directory
    Region(commands::region::RegionArgs),
    /// Write a snapshot of normalized companies and their statistics
    Snapshot(commands::snapshot::SnapshotArgs),
    /// Show dataset metadata
    Meta,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ycdash=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let mut config = DashboardConfig::from_env();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(url) = cli.snapshot_url {
        config.snapshot_url = Some(url);
    }

    let client = Arc::new(CachedClient::from_config(&config));

    match &cli.command {
        Commands::Overview(args) => {
            commands::overview::run(args, &client, config.snapshot_url.as_deref(), &format).await?
        }
        Commands::Companies(args) => {
            commands::companies::run(args, &client, config.page_size, &format).await?
        }
        Commands::Region(args) => {
            commands::region::run(args, &client, &config.region, &format).await?
        }
        Commands::Snapshot(args) => commands::snapshot::run(args, &client).await?,
        Commands::Meta => commands::meta::run(&client, &format).await?,
    }

    Ok(())
}
