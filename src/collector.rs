use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::sleep;

use crate::enrich::{EnrichedRecord, Enricher};
use crate::errors::ErrorLog;
use crate::imdbapi::cache::ResponseCache;
use crate::imdbapi::fields::group_thousands;
use crate::imdbapi::provider::{ImdbApiProvider, DEFAULT_BASE_URL};
use crate::oscars::{oscar_reference_map, OscarEntry};
use crate::report;
use crate::util::db::Db;
use crate::util::env::{env_opt, env_parse};

/// A progress marker is printed after every this many records.
const PROGRESS_EVERY: usize = 50;

#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub min_votes: i64,
    pub min_year: i64,
    pub max_year: i64,
    pub api_base_url: String,
    pub request_delay: Duration,
    pub region: String,
    pub output_dir: PathBuf,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            min_votes: 50_000,
            min_year: 1999,
            max_year: 2024,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_delay: Duration::from_millis(50),
            region: "BR".to_string(),
            output_dir: PathBuf::from("tmp"),
        }
    }
}

impl CollectorConfig {
    /// Defaults overridden by env: MIN_VOTES, MIN_YEAR, MAX_YEAR,
    /// IMDB_API_BASE_URL, REQUEST_DELAY_MS, TITLE_REGION, OUTPUT_DIR.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            min_votes: env_parse("MIN_VOTES", defaults.min_votes),
            min_year: env_parse("MIN_YEAR", defaults.min_year),
            max_year: env_parse("MAX_YEAR", defaults.max_year),
            api_base_url: env_opt("IMDB_API_BASE_URL").unwrap_or(defaults.api_base_url),
            request_delay: Duration::from_millis(env_parse(
                "REQUEST_DELAY_MS",
                defaults.request_delay.as_millis() as u64,
            )),
            region: env_opt("TITLE_REGION").unwrap_or(defaults.region),
            output_dir: env_opt("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
        }
    }
}

/// Drives the whole run: fetch the qualifying movies, enrich them in order,
/// write the CSV, print the summary.
pub struct MovieCollector {
    db: Db,
    api: ImdbApiProvider,
    oscars: HashMap<String, OscarEntry>,
    config: CollectorConfig,
}

impl MovieCollector {
    pub fn new(db: Db, config: CollectorConfig) -> Result<Self> {
        let api = ImdbApiProvider::new(Some(&config.api_base_url))?;
        Ok(Self {
            db,
            api,
            oscars: oscar_reference_map(),
            config,
        })
    }

    /// Only a failure of the source query itself aborts the run; per-record
    /// failures are recovered inside the enricher and the cache layer.
    pub async fn run_full_collection(&self) -> Result<PathBuf> {
        println!("🎬 Starting full movie collection...");
        println!(
            "📊 Criteria: movies with more than {} votes",
            group_thousands(self.config.min_votes)
        );

        let movies = self
            .db
            .fetch_candidate_movies(
                self.config.min_votes,
                self.config.min_year,
                self.config.max_year,
            )
            .await
            .context("failed to fetch candidate movies")?;
        println!("📊 Found {} movies in the database", movies.len());

        println!("🔄 Processing movies and enriching data...");
        let mut cache = ResponseCache::new();
        let mut errors = ErrorLog::new();
        let mut records: Vec<EnrichedRecord> = Vec::with_capacity(movies.len());
        let total = movies.len();

        let mut enricher = Enricher::new(
            &self.db,
            &self.api,
            &self.oscars,
            &self.config.region,
            &mut cache,
            &mut errors,
        );
        for (index, movie) in movies.iter().enumerate() {
            records.push(enricher.enrich(movie).await);

            if (index + 1) % PROGRESS_EVERY == 0 {
                println!("⏳ Processed {}/{} movies...", index + 1, total);
            }

            // Courtesy delay toward the API, applied per record.
            sleep(self.config.request_delay).await;
        }
        println!("✅ Processing complete: {} movies", records.len());

        println!("📄 Writing consolidated CSV file...");
        let path = report::write_csv(&self.config.output_dir, &records)?;
        println!("✅ CSV file written: {}", path.display());
        println!("📊 Total movies in CSV: {}", records.len());

        report::print_summary(&self.config, &records, &errors);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_match_the_collection_criteria() {
        let config = CollectorConfig::default();
        assert_eq!(config.min_votes, 50_000);
        assert_eq!(config.min_year, 1999);
        assert_eq!(config.max_year, 2024);
        assert_eq!(config.request_delay, Duration::from_millis(50));
        assert_eq!(config.region, "BR");
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
    }
}
