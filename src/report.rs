use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::collector::CollectorConfig;
use crate::enrich::EnrichedRecord;
use crate::errors::ErrorLog;
use crate::imdbapi::fields::group_thousands;

/// Fixed column order of the consolidated CSV. Must stay in sync with the
/// serde renames on `EnrichedRecord`.
pub const HEADERS: [&str; 22] = [
    "IMDb ID",
    "Original Title",
    "Localized Title",
    "Release Year",
    "IMDb Rating",
    "Votes",
    "Runtime (min)",
    "Oscar Nominee",
    "Oscar Winner",
    "Oscar Ceremony Year",
    "Oscar Status",
    "Genres",
    "Directors",
    "Writers",
    "Main Cast",
    "Countries",
    "Languages",
    "Budget",
    "Worldwide Gross",
    "Domestic Gross",
    "Metascore",
    "Synopsis",
];

/// Write all records to a timestamped CSV under `dir`, in collection order.
pub fn write_csv(dir: &Path, records: &[EnrichedRecord]) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output dir {}", dir.display()))?;

    let filename = format!("movies_full_{}.csv", Local::now().format("%Y%m%d_%H%M%S"));
    let path = dir.join(filename);

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    writer.write_record(HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(path)
}

/// Console summary printed after the CSV is written.
pub fn print_summary(config: &CollectorConfig, records: &[EnrichedRecord], errors: &ErrorLog) {
    let nominee_count = records.iter().filter(|r| r.oscar_nominee == "Yes").count();
    let winner_count = records.iter().filter(|r| r.oscar_winner == "Yes").count();
    let regular_count = records.len() - nominee_count;

    println!("\n{}", "=".repeat(80));
    println!("📊 FULL MOVIE COLLECTION SUMMARY");
    println!("{}", "=".repeat(80));
    println!("📅 Period: {} - {}", config.min_year, config.max_year);
    println!("🎬 Total movies collected: {}", records.len());
    println!();
    println!("🏆 OSCAR MOVIES:");
    println!("   • Nominees/Winners: {nominee_count}");
    println!("   • Winners: {winner_count}");
    println!("   • Nominees: {}", nominee_count - winner_count);
    println!();
    println!("🎥 OTHER MOVIES:");
    println!(
        "   • Popular movies (>{} votes): {regular_count}",
        group_thousands(config.min_votes)
    );
    println!();
    if !records.is_empty() {
        let avg_rating =
            records.iter().map(|r| r.rating).sum::<f64>() / records.len() as f64;
        let avg_votes = records.iter().map(|r| r.votes).sum::<i64>() / records.len() as i64;
        println!("⭐ Average IMDb rating: {avg_rating:.2}");
        println!("👥 Average votes: {}", group_thousands(avg_votes));
    }
    println!("❌ Errors found: {}", errors.len());

    if !errors.is_empty() {
        println!("\n🔍 FIRST 10 ERRORS:");
        for error in errors.first(10) {
            println!("  - {error}");
        }
    }
    println!("{}", "=".repeat(80));
}
