//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SHOP_FIXTURES` - Path to the YAML fixture file (default: fixtures/catalog.yaml)
//! - `SHOP_MAIN_PAGE_CATEGORIES` - Comma-separated category names (default: notebook,smartphone)
//! - `SHOP_PREFERRED_CATEGORY` - Category shown first on the main page
//! - `SHOP_MAIN_PAGE_LIMIT` - Products taken per category (default: 5)
//! - `SHOP_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `RUST_LOG` - Log filter (default: info)
//!
//! Command-line flags take precedence over these values.

use std::path::PathBuf;

use online_shop_core::MAIN_PAGE_LIMIT;
use thiserror::Error;

const DEFAULT_FIXTURES: &str = "fixtures/catalog.yaml";
const DEFAULT_CATEGORIES: &str = "notebook,smartphone";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Fixture file the shop is loaded from
    pub fixtures: PathBuf,
    /// Categories shown on the main page, in display order
    pub main_page_categories: Vec<String>,
    /// Category moved to the front of the main page
    pub preferred_category: Option<String>,
    /// Products taken per category
    pub main_page_limit: usize,
    /// Log output format
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let fixtures = PathBuf::from(get_or_default(&get, "SHOP_FIXTURES", DEFAULT_FIXTURES));
        let main_page_categories = parse_category_list(&get_or_default(
            &get,
            "SHOP_MAIN_PAGE_CATEGORIES",
            DEFAULT_CATEGORIES,
        ));
        let preferred_category = get_optional(&get, "SHOP_PREFERRED_CATEGORY");

        let main_page_limit = match get_optional(&get, "SHOP_MAIN_PAGE_LIMIT") {
            Some(value) => parse_limit(&value).map_err(|e| {
                ConfigError::InvalidEnvVar("SHOP_MAIN_PAGE_LIMIT".to_string(), e)
            })?,
            None => MAIN_PAGE_LIMIT,
        };

        let log_format = match get_optional(&get, "SHOP_LOG_FORMAT") {
            Some(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("SHOP_LOG_FORMAT".to_string(), e))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            fixtures,
            main_page_categories,
            preferred_category,
            main_page_limit,
            log_format,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional variable, treating blank values as unset.
fn get_optional(get: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    get(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Get a variable with a default value.
fn get_or_default(get: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    get_optional(get, key).unwrap_or_else(|| default.to_string())
}

/// Split a comma-separated category list, dropping blank entries.
pub fn parse_category_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Parse a per-category limit; zero is rejected.
///
/// # Errors
///
/// Returns a message if the value is not a positive integer.
pub fn parse_limit(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(e) => Err(e.to_string()),
    }
}
