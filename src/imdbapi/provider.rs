use anyhow::Result;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::cache::{ApiResponse, Endpoint, ResponseCache};
use super::fields::{self, BoxOfficeFormat, DetailsFormat};
use crate::errors::ErrorLog;

pub const DEFAULT_BASE_URL: &str = "https://api.imdbapi.dev";

/// Client for the free IMDb metadata API.
///
/// Two endpoints are used per title:
/// - `GET /titles/{id}` - general details (countries, languages, plot, metacritic)
/// - `GET /titles/{id}/boxOffice` - box office figures
#[derive(Debug, Clone)]
pub struct ImdbApiProvider {
    base_url: String,
    http: Client,
}

impl ImdbApiProvider {
    pub fn new(base_url: Option<&str>) -> Result<Self> {
        let base_url = base_url
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let http = Client::builder()
            .user_agent("MovieCollector/1.0")
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { base_url, http })
    }

    /// Resolve one field path for a title, reusing the per-run cache so each
    /// endpoint is hit at most once per id. Returns None for an empty id, an
    /// absent path, or a value the selected formatter rejects; never errors.
    pub async fn fetch_field(
        &self,
        cache: &mut ResponseCache,
        errors: &mut ErrorLog,
        imdb_id: &str,
        path: &[&str],
    ) -> Option<Value> {
        if imdb_id.trim().is_empty() {
            return None;
        }

        let details = cache
            .get_or_fetch(Endpoint::Details, imdb_id, errors, || {
                self.get_json(format!("/titles/{imdb_id}"))
            })
            .await;
        let box_office = cache
            .get_or_fetch(Endpoint::BoxOffice, imdb_id, errors, || {
                self.get_json(format!("/titles/{imdb_id}/boxOffice"))
            })
            .await;

        if path.is_empty() {
            return Some(merge_blobs(details, box_office));
        }

        if path[0] == "boxOffice" {
            let navigated = fields::navigate(box_office, &path[1..]);
            return match fields::box_office_format(path.get(1).copied()) {
                BoxOfficeFormat::Money => fields::format_money(&navigated).map(Value::String),
                BoxOfficeFormat::WeekendDate => {
                    fields::format_weekend_date(&navigated).map(Value::String)
                }
                BoxOfficeFormat::Raw => non_null(navigated),
            };
        }

        let navigated = fields::navigate(details, path);
        match fields::details_format(path[0]) {
            DetailsFormat::NameList => fields::format_name_list(&navigated).map(Value::String),
            DetailsFormat::Raw => non_null(navigated),
        }
    }

    async fn get_json(&self, path: String) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;
        let status = response.status();
        let body = if status.is_success() {
            Some(response.json::<Value>().await?)
        } else {
            None
        };
        Ok(ApiResponse { status, body })
    }
}

/// Details blob with the box-office blob nested under "boxOffice", when both
/// decoded to objects; otherwise the details blob as-is.
fn merge_blobs(details: Value, box_office: Value) -> Value {
    match (details, box_office) {
        (Value::Object(mut details_map), Value::Object(box_map)) => {
            details_map.insert("boxOffice".to_string(), Value::Object(box_map));
            Value::Object(details_map)
        }
        (details, _) => details,
    }
}

fn non_null(value: Value) -> Option<Value> {
    if value.is_null() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    struct StubApi {
        base_url: String,
        details_hits: Arc<AtomicUsize>,
        box_office_hits: Arc<AtomicUsize>,
    }

    /// Minimal HTTP fixture serving canned JSON for the two title endpoints.
    async fn spawn_stub() -> StubApi {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let details_hits = Arc::new(AtomicUsize::new(0));
        let box_office_hits = Arc::new(AtomicUsize::new(0));

        let details = details_hits.clone();
        let box_office = box_office_hits.clone();
        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };

                let mut buf = vec![0u8; 4096];
                let mut read = 0usize;
                loop {
                    match stream.read(&mut buf[read..]).await {
                        Ok(0) => break,
                        Ok(n) => {
                            read += n;
                            if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                                break;
                            }
                            if read == buf.len() {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }

                let request = String::from_utf8_lossy(&buf[..read]).to_string();
                let body = if request.contains("/boxOffice") {
                    box_office.fetch_add(1, Ordering::SeqCst);
                    json!({
                        "productionBudget": { "amount": 1234567, "currency": "USD" },
                        "worldwideGross": { "amount": 89000000, "currency": "USD" }
                    })
                } else {
                    details.fetch_add(1, Ordering::SeqCst);
                    json!({
                        "plot": "A test plot.",
                        "originCountries": [
                            { "name": "United States" },
                            { "name": "Brazil" }
                        ],
                        "metacritic": { "score": 88 }
                    })
                }
                .to_string();

                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        StubApi {
            base_url: format!("http://{addr}"),
            details_hits,
            box_office_hits,
        }
    }

    #[tokio::test]
    async fn reuses_cached_endpoint_responses_across_fields() {
        let stub = spawn_stub().await;
        let provider = ImdbApiProvider::new(Some(&stub.base_url)).unwrap();
        let mut cache = ResponseCache::new();
        let mut errors = ErrorLog::new();

        let budget = provider
            .fetch_field(
                &mut cache,
                &mut errors,
                "tt0000001",
                &["boxOffice", "productionBudget"],
            )
            .await;
        assert_eq!(budget, Some(json!("USD 1,234,567")));

        let countries = provider
            .fetch_field(&mut cache, &mut errors, "tt0000001", &["originCountries"])
            .await;
        assert_eq!(countries, Some(json!("United States, Brazil")));

        let score = provider
            .fetch_field(
                &mut cache,
                &mut errors,
                "tt0000001",
                &["metacritic", "score"],
            )
            .await;
        assert_eq!(score, Some(json!(88)));

        let synopsis = provider
            .fetch_field(&mut cache, &mut errors, "tt0000001", &["plot"])
            .await;
        assert_eq!(synopsis, Some(json!("A test plot.")));

        // Four field lookups, one underlying request per endpoint.
        assert_eq!(stub.details_hits.load(Ordering::SeqCst), 1);
        assert_eq!(stub.box_office_hits.load(Ordering::SeqCst), 1);
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn empty_identifier_short_circuits_without_requests() {
        let stub = spawn_stub().await;
        let provider = ImdbApiProvider::new(Some(&stub.base_url)).unwrap();
        let mut cache = ResponseCache::new();
        let mut errors = ErrorLog::new();

        let value = provider
            .fetch_field(&mut cache, &mut errors, "", &["plot"])
            .await;

        assert_eq!(value, None);
        assert_eq!(stub.details_hits.load(Ordering::SeqCst), 0);
        assert_eq!(stub.box_office_hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn absent_paths_resolve_to_none() {
        let stub = spawn_stub().await;
        let provider = ImdbApiProvider::new(Some(&stub.base_url)).unwrap();
        let mut cache = ResponseCache::new();
        let mut errors = ErrorLog::new();

        let date = provider
            .fetch_field(
                &mut cache,
                &mut errors,
                "tt0000002",
                &["boxOffice", "weekendEndDate"],
            )
            .await;
        assert_eq!(date, None);

        let deep = provider
            .fetch_field(
                &mut cache,
                &mut errors,
                "tt0000002",
                &["no", "such", "path"],
            )
            .await;
        assert_eq!(deep, None);
    }

    #[tokio::test]
    async fn empty_path_merges_both_blobs() {
        let stub = spawn_stub().await;
        let provider = ImdbApiProvider::new(Some(&stub.base_url)).unwrap();
        let mut cache = ResponseCache::new();
        let mut errors = ErrorLog::new();

        let merged = provider
            .fetch_field(&mut cache, &mut errors, "tt0000003", &[])
            .await
            .unwrap();

        assert_eq!(merged["plot"], json!("A test plot."));
        assert_eq!(
            merged["boxOffice"]["worldwideGross"]["amount"],
            json!(89000000)
        );
    }
}
