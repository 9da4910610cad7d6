use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use movie_collector::collector::{CollectorConfig, MovieCollector};
use movie_collector::util::db::Db;
use movie_collector::util::env as env_util;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "movie-collector",
    version,
    about = "Collect popular and Oscar-nominated movies into a consolidated CSV"
)]
struct Cli {
    /// Optional override for the sqlite database URL
    #[arg(long)]
    db_url: Option<String>,
    /// Directory the CSV report is written to
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Minimum vote count for a movie to qualify
    #[arg(long)]
    min_votes: Option<i64>,
    /// First release year included in the collection
    #[arg(long)]
    min_year: Option<i64>,
    /// Last release year included in the collection
    #[arg(long)]
    max_year: Option<i64>,
    /// Override for the IMDb API base URL
    #[arg(long)]
    api_base_url: Option<String>,
    /// Courtesy delay between records, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
    /// Region code used for localized title lookups
    #[arg(long)]
    region: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = CollectorConfig::from_env();
    if let Some(min_votes) = cli.min_votes {
        config.min_votes = min_votes;
    }
    if let Some(min_year) = cli.min_year {
        config.min_year = min_year;
    }
    if let Some(max_year) = cli.max_year {
        config.max_year = max_year;
    }
    if let Some(base_url) = cli.api_base_url {
        config.api_base_url = base_url;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.request_delay = Duration::from_millis(delay_ms);
    }
    if let Some(region) = cli.region {
        config.region = region;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }

    let database_url = match cli.db_url {
        Some(url) => url,
        None => env_util::db_url().context("set MOVIES_DB_URL / DATABASE_URL or pass --db-url")?,
    };

    let max_conns: u32 = env_util::env_parse("DB_MAX_CONNS", 5);
    let db = Db::connect(&database_url, max_conns)
        .await
        .context("Db::connect failed")?;
    info!("database connected (max_conns={})", max_conns);

    let collector = MovieCollector::new(db, config)?;
    collector.run_full_collection().await?;
    Ok(())
}
