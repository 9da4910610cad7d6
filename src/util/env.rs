//! Environment helpers: centralized dotenv loading and ergonomic getters.
//! Call `init_env()` once early in each binary (or rely on lazy Once).
use std::str::FromStr;
use std::sync::Once;

static INIT: Once = Once::new();

/// Load .env if present, exactly once. Safe to call many times.
pub fn init_env() {
    INIT.call_once(|| {
        let _ = dotenv::dotenv();
    });
}

/// Get optional env var (None if unset or empty).
pub fn env_opt(key: &str) -> Option<String> {
    init_env();
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

/// Get parsed value with default fallback.
pub fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    init_env();
    match std::env::var(key) {
        Ok(raw) => raw.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

/// Composed database URL (tries specific -> generic). Returns first found.
pub fn db_url() -> anyhow::Result<String> {
    if let Some(v) = env_opt("MOVIES_DB_URL") {
        return Ok(v);
    }
    if let Some(v) = env_opt("DATABASE_URL") {
        return Ok(v);
    }
    Err(anyhow::anyhow!(
        "no database URL configured; set MOVIES_DB_URL or DATABASE_URL"
    ))
}
