use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Default output file for a session snapshot
pub const DEFAULT_RESULTS_FILE: &str = "scraper_results.json";

/// A successfully extracted article, keyed by source URL in the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Article title (may be empty)
    pub title: String,

    /// Extracted body text
    pub text: String,

    /// Publish date as found in page metadata, if any
    pub publish_date: Option<String>,

    /// Author names (possibly empty)
    pub authors: Vec<String>,

    /// Lead image URL, resolved absolute
    pub top_image: Option<String>,

    /// Original page URL, kept so provenance survives serialization
    pub source_url: String,
}

/// Point-in-time snapshot of a session, as persisted to disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultsSnapshot {
    /// URLs returned by the most recent search call
    pub search_results: Vec<String>,

    /// Extracted documents keyed by source URL, in insertion order
    pub content: IndexMap<String, ExtractedDocument>,

    /// Synopses keyed by source URL, plus the reserved "overall" key
    pub summaries: IndexMap<String, String>,

    /// URLs that failed extraction in the most recent batch
    pub failed_urls: Vec<String>,
}

impl ResultsSnapshot {
    /// Write the snapshot as pretty-printed JSON, overwriting `path`.
    ///
    /// Last successful write wins; there is no temp-file-then-rename step,
    /// so a crash mid-write can leave a truncated file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf, Box<dyn Error>> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        ::log::info!("Results saved to {}", path.display());
        Ok(path.to_path_buf())
    }

    /// Load a snapshot previously written by `save`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let contents = fs::read_to_string(path)?;
        let snapshot = serde_json::from_str(&contents)?;
        Ok(snapshot)
    }
}

/// Remove regular files from an output directory before a fresh run.
///
/// Per-file failures are logged and skipped; a missing directory is not
/// an error.
pub fn clear_data_dir(dir: impl AsRef<Path>) {
    let dir = dir.as_ref();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_file() {
            if let Err(e) = fs::remove_file(&path) {
                ::log::warn!("Failed to delete {}: {}", path.display(), e);
            }
        }
    }
}
