use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::future::Future;

use crate::errors::ErrorLog;

/// Decoded outcome of one API request, before cache classification.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Details,
    BoxOffice,
}

impl Endpoint {
    fn label(self) -> &'static str {
        match self {
            Endpoint::Details => "details",
            Endpoint::BoxOffice => "box office",
        }
    }
}

/// Per-run memo of API bodies, one bucket per endpoint kind.
///
/// Failures are cached as empty objects, so a key is fetched at most once per
/// run even when the first attempt fails.
#[derive(Debug, Default)]
pub struct ResponseCache {
    details: HashMap<String, Value>,
    box_office: HashMap<String, Value>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self {
            details: HashMap::new(),
            box_office: HashMap::new(),
        }
    }

    fn bucket_mut(&mut self, endpoint: Endpoint) -> &mut HashMap<String, Value> {
        match endpoint {
            Endpoint::Details => &mut self.details,
            Endpoint::BoxOffice => &mut self.box_office,
        }
    }

    /// Return the cached body for (endpoint, key), fetching once on a miss.
    /// Non-success statuses and transport errors are recorded and stored as
    /// empty objects.
    pub async fn get_or_fetch<F, Fut>(
        &mut self,
        endpoint: Endpoint,
        key: &str,
        errors: &mut ErrorLog,
        fetch: F,
    ) -> Value
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<ApiResponse>>,
    {
        if let Some(cached) = self.bucket_mut(endpoint).get(key) {
            return cached.clone();
        }

        let body = match fetch().await {
            Ok(response) if response.status.is_success() => response
                .body
                .filter(|body| !body.is_null())
                .unwrap_or_else(empty_object),
            Ok(response) => {
                errors.record(format!(
                    "IMDb API {} request for {key} returned status {}",
                    endpoint.label(),
                    response.status
                ));
                empty_object()
            }
            Err(err) => {
                errors.record(format!(
                    "IMDb API {} request for {key} failed: {err:#}",
                    endpoint.label()
                ));
                empty_object()
            }
        };

        self.bucket_mut(endpoint)
            .insert(key.to_string(), body.clone());
        body
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use serde_json::json;
    use std::cell::Cell;

    fn ok(body: Value) -> Result<ApiResponse> {
        Ok(ApiResponse {
            status: StatusCode::OK,
            body: Some(body),
        })
    }

    #[tokio::test]
    async fn hits_skip_the_fetch() {
        let mut cache = ResponseCache::new();
        let mut errors = ErrorLog::new();
        let calls = Cell::new(0usize);

        let first = cache
            .get_or_fetch(Endpoint::Details, "tt1", &mut errors, || {
                calls.set(calls.get() + 1);
                async { ok(json!({ "plot": "first" })) }
            })
            .await;
        let second = cache
            .get_or_fetch(Endpoint::Details, "tt1", &mut errors, || {
                calls.set(calls.get() + 1);
                async { ok(json!({ "plot": "second" })) }
            })
            .await;

        assert_eq!(calls.get(), 1);
        assert_eq!(first, second);
        assert_eq!(first, json!({ "plot": "first" }));
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn buckets_are_independent() {
        let mut cache = ResponseCache::new();
        let mut errors = ErrorLog::new();
        let calls = Cell::new(0usize);

        for endpoint in [Endpoint::Details, Endpoint::BoxOffice] {
            cache
                .get_or_fetch(endpoint, "tt1", &mut errors, || {
                    calls.set(calls.get() + 1);
                    async { ok(json!({})) }
                })
                .await;
        }

        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn failures_are_recorded_and_poison_the_key() {
        let mut cache = ResponseCache::new();
        let mut errors = ErrorLog::new();
        let calls = Cell::new(0usize);

        let value = cache
            .get_or_fetch(Endpoint::BoxOffice, "tt2", &mut errors, || {
                calls.set(calls.get() + 1);
                async { Err(anyhow!("connection refused")) }
            })
            .await;
        assert_eq!(value, json!({}));
        assert_eq!(errors.len(), 1);

        // The failed key is cached empty and never retried.
        let again = cache
            .get_or_fetch(Endpoint::BoxOffice, "tt2", &mut errors, || {
                calls.set(calls.get() + 1);
                async { ok(json!({ "amount": 1 })) }
            })
            .await;
        assert_eq!(again, json!({}));
        assert_eq!(calls.get(), 1);
        assert_eq!(errors.len(), 1);
    }

    #[tokio::test]
    async fn non_success_statuses_store_empty_objects() {
        let mut cache = ResponseCache::new();
        let mut errors = ErrorLog::new();

        let value = cache
            .get_or_fetch(Endpoint::Details, "tt3", &mut errors, || async {
                Ok(ApiResponse {
                    status: StatusCode::NOT_FOUND,
                    body: None,
                })
            })
            .await;

        assert_eq!(value, json!({}));
        assert_eq!(errors.len(), 1);
    }

    #[tokio::test]
    async fn null_bodies_default_to_empty_objects() {
        let mut cache = ResponseCache::new();
        let mut errors = ErrorLog::new();

        let value = cache
            .get_or_fetch(Endpoint::Details, "tt4", &mut errors, || async {
                ok(Value::Null)
            })
            .await;

        assert_eq!(value, json!({}));
        assert!(errors.is_empty());
    }
}
