use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only `PORT` is validated strictly; every other setting has a default or is optional.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file standing in for the browser's local storage area.
    pub store_path: String,
    /// Optional upstream investment-coach backend. Local generation is used when unset.
    pub investment_api_url: Option<String>,
    /// Optional Anthropic key. The template advisor answers alone when unset.
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            store_path: std::env::var("FINSTART_STORE_PATH")
                .unwrap_or_else(|_| "finstart_storage.json".to_string()),
            investment_api_url: optional_env("INVESTMENT_API_URL"),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_env_blank_is_none() {
        std::env::set_var("FINSTART_TEST_BLANK", "   ");
        assert!(optional_env("FINSTART_TEST_BLANK").is_none());
        std::env::remove_var("FINSTART_TEST_BLANK");
    }

    #[test]
    fn test_optional_env_trims_value() {
        std::env::set_var("FINSTART_TEST_URL", " http://localhost:8000 ");
        assert_eq!(
            optional_env("FINSTART_TEST_URL").as_deref(),
            Some("http://localhost:8000")
        );
        std::env::remove_var("FINSTART_TEST_URL");
    }
}
