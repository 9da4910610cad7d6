use anyhow::{Context, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use std::time::Duration;

/// One qualifying movie row from the titles relation.
#[derive(Debug, Clone)]
pub struct SourceMovieRow {
    pub id: i64,
    pub imdb_id: String,
    pub title: String,
    pub original_title: String,
    pub release_year: i64,
    pub rating: f64,
    pub votes: i64,
    pub runtime_minutes: Option<i64>,
}

#[derive(Clone)]
pub struct Db {
    pub pool: SqlitePool,
}

impl Db {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .connect(database_url)
            .await
            .with_context(|| format!("failed to connect to sqlite at {database_url}"))?;
        Ok(Self { pool })
    }

    /// All movies matching the collection criteria, most-voted first.
    pub async fn fetch_candidate_movies(
        &self,
        min_votes: i64,
        min_year: i64,
        max_year: i64,
    ) -> Result<Vec<SourceMovieRow>> {
        let rows = sqlx::query(
            r#"
            SELECT t.id,
                   t.unique_id AS imdb_id,
                   t.title,
                   t.original_title,
                   t.start_year,
                   t.rating,
                   t.votes,
                   t.runtime
            FROM titles t
            WHERE t.title_type = 'movie'
              AND t.votes >= ?
              AND t.rating IS NOT NULL
              AND t.start_year BETWEEN ? AND ?
            ORDER BY t.votes DESC, t.rating DESC
            "#,
        )
        .bind(min_votes)
        .bind(min_year)
        .bind(max_year)
        .fetch_all(&self.pool)
        .await
        .context("candidate movie query failed")?;

        let mut movies = Vec::with_capacity(rows.len());
        for row in rows {
            movies.push(SourceMovieRow {
                id: row.try_get("id")?,
                imdb_id: row
                    .try_get::<Option<String>, _>("imdb_id")?
                    .unwrap_or_default(),
                title: row
                    .try_get::<Option<String>, _>("title")?
                    .unwrap_or_default(),
                original_title: row
                    .try_get::<Option<String>, _>("original_title")?
                    .unwrap_or_default(),
                release_year: row.try_get("start_year")?,
                rating: row.try_get("rating")?,
                votes: row.try_get("votes")?,
                runtime_minutes: row.try_get("runtime")?,
            });
        }
        Ok(movies)
    }

    /// First title alias registered for the given region, if any.
    pub async fn regional_title(&self, title_id: i64, region: &str) -> Result<Option<String>> {
        let row = sqlx::query(
            "SELECT name FROM title_aliases WHERE title_id = ? AND region = ? LIMIT 1",
        )
        .bind(title_id)
        .bind(region)
        .fetch_optional(&self.pool)
        .await?;
        Ok(match row {
            Some(row) => row.try_get::<Option<String>, _>("name")?,
            None => None,
        })
    }

    pub async fn genres(&self, title_id: i64) -> Result<Vec<String>> {
        let rows = sqlx::query(
            r#"
            SELECT g.name
            FROM genres g
            JOIN title_genres tg ON tg.genre_id = g.id
            WHERE tg.title_id = ?
            "#,
        )
        .bind(title_id)
        .fetch_all(&self.pool)
        .await?;
        collect_names(rows)
    }

    pub async fn directors(&self, title_id: i64) -> Result<Vec<String>> {
        let rows = sqlx::query(
            r#"
            SELECT p.name
            FROM title_directors td
            JOIN people p ON p.id = td.person_id
            WHERE td.title_id = ?
            "#,
        )
        .bind(title_id)
        .fetch_all(&self.pool)
        .await?;
        collect_names(rows)
    }

    pub async fn writers(&self, title_id: i64) -> Result<Vec<String>> {
        let rows = sqlx::query(
            r#"
            SELECT p.name
            FROM title_writers tw
            JOIN people p ON p.id = tw.person_id
            WHERE tw.title_id = ?
            "#,
        )
        .bind(title_id)
        .fetch_all(&self.pool)
        .await?;
        collect_names(rows)
    }

    /// Top-5 billed cast, credit order ascending, actor/actress roles only.
    pub async fn main_cast(&self, title_id: i64) -> Result<Vec<String>> {
        let rows = sqlx::query(
            r#"
            SELECT p.name
            FROM title_principals tp
            JOIN people p ON p.id = tp.person_id
            WHERE tp.title_id = ?
              AND tp.principal_category IN ('actor', 'actress')
            ORDER BY tp.ordering ASC
            LIMIT 5
            "#,
        )
        .bind(title_id)
        .fetch_all(&self.pool)
        .await?;
        collect_names(rows)
    }
}

fn collect_names(rows: Vec<sqlx::sqlite::SqliteRow>) -> Result<Vec<String>> {
    let mut names = Vec::with_capacity(rows.len());
    for row in rows {
        if let Some(name) = row.try_get::<Option<String>, _>("name")? {
            names.push(name);
        }
    }
    Ok(names)
}
