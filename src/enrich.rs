use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::errors::ErrorLog;
use crate::imdbapi::cache::ResponseCache;
use crate::imdbapi::provider::ImdbApiProvider;
use crate::oscars::OscarEntry;
use crate::util::db::{Db, SourceMovieRow};

/// One flat output row. The serde renames double as the CSV column labels.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedRecord {
    #[serde(rename = "IMDb ID")]
    pub imdb_id: String,
    #[serde(rename = "Original Title")]
    pub original_title: String,
    #[serde(rename = "Localized Title")]
    pub localized_title: String,
    #[serde(rename = "Release Year")]
    pub release_year: i64,
    #[serde(rename = "IMDb Rating")]
    pub rating: f64,
    #[serde(rename = "Votes")]
    pub votes: i64,
    #[serde(rename = "Runtime (min)")]
    pub runtime_minutes: Option<i64>,
    #[serde(rename = "Oscar Nominee")]
    pub oscar_nominee: String,
    #[serde(rename = "Oscar Winner")]
    pub oscar_winner: String,
    #[serde(rename = "Oscar Ceremony Year")]
    pub oscar_ceremony_year: String,
    #[serde(rename = "Oscar Status")]
    pub oscar_status: String,
    #[serde(rename = "Genres")]
    pub genres: String,
    #[serde(rename = "Directors")]
    pub directors: String,
    #[serde(rename = "Writers")]
    pub writers: String,
    #[serde(rename = "Main Cast")]
    pub main_cast: String,
    #[serde(rename = "Countries")]
    pub countries: String,
    #[serde(rename = "Languages")]
    pub languages: String,
    #[serde(rename = "Budget")]
    pub budget: String,
    #[serde(rename = "Worldwide Gross")]
    pub worldwide_gross: String,
    #[serde(rename = "Domestic Gross")]
    pub domestic_gross: String,
    #[serde(rename = "Metascore")]
    pub metascore: String,
    #[serde(rename = "Synopsis")]
    pub synopsis: String,
}

/// Award fields derived from the curated table for one title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardStatus {
    pub nominated: bool,
    pub winner: bool,
    pub ceremony_year: String,
    pub label: String,
}

pub fn award_status(entry: Option<&OscarEntry>) -> AwardStatus {
    match entry {
        Some(entry) => AwardStatus {
            nominated: true,
            winner: entry.winner,
            ceremony_year: entry.ceremony_year.to_string(),
            label: if entry.winner {
                "🏆 Winner".to_string()
            } else {
                "🎬 Nominee".to_string()
            },
        },
        None => AwardStatus {
            nominated: false,
            winner: false,
            ceremony_year: String::new(),
            label: String::new(),
        },
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Flatten an optional API value into a CSV cell.
fn api_cell(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Builds one output record per source row. Every sub-lookup failure is
/// recorded and leaves its field empty; a row is always produced.
pub struct Enricher<'a> {
    db: &'a Db,
    api: &'a ImdbApiProvider,
    oscars: &'a HashMap<String, OscarEntry>,
    region: &'a str,
    cache: &'a mut ResponseCache,
    errors: &'a mut ErrorLog,
}

impl<'a> Enricher<'a> {
    pub fn new(
        db: &'a Db,
        api: &'a ImdbApiProvider,
        oscars: &'a HashMap<String, OscarEntry>,
        region: &'a str,
        cache: &'a mut ResponseCache,
        errors: &'a mut ErrorLog,
    ) -> Self {
        Self {
            db,
            api,
            oscars,
            region,
            cache,
            errors,
        }
    }

    pub async fn enrich(&mut self, row: &SourceMovieRow) -> EnrichedRecord {
        let entry = self.oscars.get(&row.imdb_id);
        let award = award_status(entry);

        let localized_title = match entry {
            Some(entry) => entry.localized_title.to_string(),
            None => self.localized_title(row).await,
        };

        let genres_result = self.db.genres(row.id).await;
        let genres = self.rollup(genres_result, "genres", &row.title);
        let directors_result = self.db.directors(row.id).await;
        let directors = self.rollup(directors_result, "directors", &row.title);
        let writers_result = self.db.writers(row.id).await;
        let writers = self.rollup(writers_result, "writers", &row.title);
        let cast_result = self.db.main_cast(row.id).await;
        let main_cast = self.rollup(cast_result, "main cast", &row.title);

        let countries = self.api_field(&row.imdb_id, &["originCountries"]).await;
        let languages = self.api_field(&row.imdb_id, &["spokenLanguages"]).await;
        let budget = self
            .api_field(&row.imdb_id, &["boxOffice", "productionBudget"])
            .await;
        let worldwide_gross = self
            .api_field(&row.imdb_id, &["boxOffice", "worldwideGross"])
            .await;
        let domestic_gross = self
            .api_field(&row.imdb_id, &["boxOffice", "domesticGross"])
            .await;
        let metascore = self.api_field(&row.imdb_id, &["metacritic", "score"]).await;
        let synopsis = self.api_field(&row.imdb_id, &["plot"]).await;

        EnrichedRecord {
            imdb_id: row.imdb_id.clone(),
            original_title: row.title.clone(),
            localized_title,
            release_year: row.release_year,
            rating: row.rating,
            votes: row.votes,
            runtime_minutes: row.runtime_minutes,
            oscar_nominee: yes_no(award.nominated).to_string(),
            oscar_winner: yes_no(award.winner).to_string(),
            oscar_ceremony_year: award.ceremony_year,
            oscar_status: award.label,
            genres,
            directors,
            writers,
            main_cast,
            countries,
            languages,
            budget,
            worldwide_gross,
            domestic_gross,
            metascore,
            synopsis,
        }
    }

    /// Regional alias with fallback to the original title.
    async fn localized_title(&mut self, row: &SourceMovieRow) -> String {
        match self.db.regional_title(row.id, self.region).await {
            Ok(Some(name)) => name,
            Ok(None) => row.original_title.clone(),
            Err(err) => {
                self.errors.record(format!(
                    "Failed to fetch {} title for {}: {err:#}",
                    self.region, row.title
                ));
                row.original_title.clone()
            }
        }
    }

    fn rollup(&mut self, result: anyhow::Result<Vec<String>>, what: &str, title: &str) -> String {
        match result {
            Ok(names) => names.join(", "),
            Err(err) => {
                self.errors
                    .record(format!("Failed to fetch {what} for {title}: {err:#}"));
                String::new()
            }
        }
    }

    async fn api_field(&mut self, imdb_id: &str, path: &[&str]) -> String {
        api_cell(
            self.api
                .fetch_field(self.cache, self.errors, imdb_id, path)
                .await,
        )
    }
}
