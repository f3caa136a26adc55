use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: String,
    /// Keyword table for the text aligner. Built-in table when unset.
    pub keywords_path: Option<String>,
    /// Narrative enhancer endpoint. Enhancement is skipped when unset.
    pub enhancer_url: Option<String>,
    pub enhancer_timeout_ms: u64,
    pub alignment_timeout_ms: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            catalog_path: require_env("CATALOG_PATH")?,
            keywords_path: optional_env("KEYWORDS_PATH"),
            enhancer_url: optional_env("ENHANCER_URL"),
            enhancer_timeout_ms: parse_env("ENHANCER_TIMEOUT_MS", 30_000)?,
            alignment_timeout_ms: parse_env("ALIGNMENT_TIMEOUT_MS", 2_000)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable names; the process environment is shared.

    #[test]
    fn test_parse_env_default_when_unset() {
        assert_eq!(parse_env::<u64>("COMPASS_TEST_UNSET_TIMEOUT", 42).unwrap(), 42);
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("COMPASS_TEST_PORT_OK", " 9090 ");
        assert_eq!(parse_env::<u16>("COMPASS_TEST_PORT_OK", 8080).unwrap(), 9090);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("COMPASS_TEST_PORT_BAD", "eighty");
        let err = parse_env::<u16>("COMPASS_TEST_PORT_BAD", 8080).unwrap_err();
        assert!(err.to_string().contains("COMPASS_TEST_PORT_BAD"));
    }

    #[test]
    fn test_optional_env_treats_blank_as_unset() {
        std::env::set_var("COMPASS_TEST_BLANK_URL", "  ");
        assert_eq!(optional_env("COMPASS_TEST_BLANK_URL"), None);
    }
}
