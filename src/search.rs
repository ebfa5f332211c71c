use crate::error::SearchError;
use serde::Serialize;
use url::Url;

const SEARCH_ENDPOINT: &str = "https://serpapi.com/search.json";

/// Upper bound on results per search call
pub const MAX_RESULTS: usize = 20;

/// Result count used when searching for replacement pages
const ALTERNATIVES_COUNT: usize = 3;

#[derive(Serialize)]
struct SearchQuery<'a> {
    q: &'a str,
    api_key: &'a str,
    num: usize,
}

/// Client for the web search provider (SerpAPI)
pub struct SearchClient {
    client: reqwest::Client,
    api_key: String,
}

impl SearchClient {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }

    /// Whether a provider key is configured
    pub fn has_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.api_key = key.into();
    }

    /// Searches the web and returns up to `count` organic result URLs.
    ///
    /// `count` is clamped to [1, MAX_RESULTS]. The key check happens
    /// before any network attempt. An Ok empty vector means the provider
    /// had no organic results for the query; provider or transport
    /// problems come back as distinct errors.
    pub async fn search(&self, query: &str, count: usize) -> Result<Vec<String>, SearchError> {
        if !self.has_key() {
            return Err(SearchError::MissingApiKey);
        }
        if query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        let count = count.clamp(1, MAX_RESULTS);

        let params = SearchQuery {
            q: query,
            api_key: &self.api_key,
            num: count,
        };
        let response = self
            .client
            .get(SEARCH_ENDPOINT)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        let body = response.text().await?;
        let body: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| SearchError::Parse(e.to_string()))?;

        let links: Vec<String> = match body.get("organic_results").and_then(|v| v.as_array()) {
            Some(results) => results
                .iter()
                .filter_map(|result| result.get("link").and_then(|link| link.as_str()))
                .map(str::to_string)
                .take(count)
                .collect(),
            None => Vec::new(),
        };

        if links.is_empty() {
            ::log::info!("No organic results for query: {}", query);
        } else {
            ::log::info!("Found {} results for query: {}", links.len(), query);
        }
        Ok(links)
    }

    /// Searches for replacement pages for a URL that failed to scrape.
    ///
    /// Without an explicit query, looks for other pages on the failed
    /// URL's domain.
    pub async fn suggest_alternatives(
        &self,
        failed_url: &str,
        query: Option<&str>,
    ) -> Result<Vec<String>, SearchError> {
        match query {
            Some(q) => self.search(q, ALTERNATIVES_COUNT).await,
            None => {
                self.search(&alternatives_query(failed_url), ALTERNATIVES_COUNT)
                    .await
            }
        }
    }
}

/// Builds the fallback query for a URL that failed to scrape
pub fn alternatives_query(failed_url: &str) -> String {
    let domain = Url::parse(failed_url)
        .ok()
        .and_then(|url| url.domain().map(str::to_string))
        .unwrap_or_else(|| failed_url.to_string());
    format!("site:{} information", domain)
}
