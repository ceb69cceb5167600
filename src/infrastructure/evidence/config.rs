//! Evidence provider configuration

use std::path::PathBuf;

use serde::Deserialize;

use super::fact_check_db::DEFAULT_FACT_CHECK_BASE_URL;
use super::web_search::DEFAULT_WEB_SEARCH_BASE_URL;

/// Environment variable holding the Google API key
pub const GOOGLE_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Environment variable holding the Custom Search engine id
pub const GOOGLE_CX_ID_ENV: &str = "GOOGLE_CX_ID";

/// Configuration for all evidence providers
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub web_search: WebSearchConfig,
    #[serde(default)]
    pub fact_check: FactCheckConfig,
    /// Serve evidence from this fixture file instead of the network
    #[serde(default)]
    pub fixture_path: Option<PathBuf>,
}

impl ProvidersConfig {
    /// Fill missing credentials from the conventional Google variables
    pub fn with_env_fallback<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(GOOGLE_API_KEY_ENV).filter(|v| !v.trim().is_empty());

        if self.web_search.api_key.is_none() {
            self.web_search.api_key = api_key.clone();
        }
        if self.web_search.engine_id.is_none() {
            self.web_search.engine_id = lookup(GOOGLE_CX_ID_ENV).filter(|v| !v.trim().is_empty());
        }
        if self.fact_check.api_key.is_none() {
            self.fact_check.api_key = api_key;
        }
        self
    }
}

/// Google Custom Search settings
#[derive(Debug, Clone, Deserialize)]
pub struct WebSearchConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Programmable Search Engine id (`cx`)
    #[serde(default)]
    pub engine_id: Option<String>,
    #[serde(default = "default_web_search_base_url")]
    pub base_url: String,
    #[serde(default = "default_results_per_query")]
    pub results_per_query: u32,
}

/// Google Fact Check Tools settings
#[derive(Debug, Clone, Deserialize)]
pub struct FactCheckConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_fact_check_base_url")]
    pub base_url: String,
    /// Fixed language code; the claim's language is used when unset
    #[serde(default)]
    pub language_code: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_web_search_base_url() -> String {
    DEFAULT_WEB_SEARCH_BASE_URL.to_string()
}

fn default_fact_check_base_url() -> String {
    DEFAULT_FACT_CHECK_BASE_URL.to_string()
}

fn default_results_per_query() -> u32 {
    10
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            engine_id: None,
            base_url: default_web_search_base_url(),
            results_per_query: default_results_per_query(),
        }
    }
}

impl Default for FactCheckConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            base_url: default_fact_check_base_url(),
            language_code: None,
        }
    }
}
