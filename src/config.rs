use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for a scrape session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Search provider key; required for query-based search only
    #[serde(default)]
    pub serpapi_key: String,

    /// Summarization provider key; absence degrades to extractive summaries
    #[serde(default)]
    pub huggingface_key: String,

    /// Maximum number of concurrent page fetches
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Minimum trimmed article length, in characters, for an extraction
    /// to count as a success
    #[serde(default = "default_min_text_len")]
    pub min_text_len: usize,

    /// Timeout for each outbound request, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

/// Default value for max_concurrency
fn default_max_concurrency() -> usize {
    4
}

/// Default minimum article length
fn default_min_text_len() -> usize {
    50
}

/// Default request timeout
fn default_fetch_timeout_secs() -> u64 {
    30
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            serpapi_key: String::new(),
            huggingface_key: String::new(),
            max_concurrency: default_max_concurrency(),
            min_text_len: default_min_text_len(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl ScraperConfig {
    /// Build a configuration with provider keys taken from the
    /// SERPAPI_KEY and HUGGINGFACE_KEY environment variables.
    pub fn from_env() -> Self {
        Self {
            serpapi_key: std::env::var("SERPAPI_KEY").unwrap_or_default(),
            huggingface_key: std::env::var("HUGGINGFACE_KEY").unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
