use thiserror::Error;

/// Errors from the search provider client.
///
/// Configuration problems (missing key, empty query) are detected before
/// any network attempt. An `Ok` but empty result list from a search is not
/// an error; it means the provider had no organic results for the query.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No search provider key configured.
    #[error("search API key is not set (SERPAPI_KEY)")]
    MissingApiKey,

    /// The query was empty or whitespace-only.
    #[error("search query is empty")]
    EmptyQuery,

    /// The request never produced a usable response.
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("search provider returned status {0}")]
    Status(reqwest::StatusCode),

    /// The provider response was not the expected JSON shape.
    #[error("could not parse search response: {0}")]
    Parse(String),
}

/// Errors from a single page extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The page could not be fetched.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),

    /// The page parsed, but its article text was below the minimum length.
    #[error("extracted text too short ({len} chars after trimming)")]
    ContentTooShort { len: usize },
}
