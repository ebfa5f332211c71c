// Re-export modules
pub mod config;
pub mod error;
pub mod parsers;
pub mod results;
pub mod scrape;
pub mod search;
pub mod summarize;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use error::{ExtractError, SearchError};
pub use results::{ExtractedDocument, ResultsSnapshot};

use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

use search::SearchClient;
use summarize::Summarizer;

/// Reserved summary-table key for the synopsis over all documents
pub const OVERALL_KEY: &str = "overall";

const USER_AGENT: &str = "Mozilla/5.0 (compatible; glean-page/0.1)";

/// One scrape session: search, extract, summarize, save.
///
/// The session owns all pipeline state — the last search results, the
/// content map, the summary table and the failed-URL list. State is
/// overwritten in place across cycles and persisted only on an explicit
/// `save_results`. Batch and summarize operations take `&mut self`, so a
/// session can only run one batch at a time.
pub struct Scraper {
    config: ScraperConfig,
    client: reqwest::Client,
    search: SearchClient,
    summarizer: Summarizer,
    search_results: Vec<String>,
    content: IndexMap<String, ExtractedDocument>,
    summaries: IndexMap<String, String>,
    failed_urls: Vec<String>,
}

impl Scraper {
    /// Create a session from the given configuration
    pub fn new(config: ScraperConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        let search = SearchClient::new(client.clone(), config.serpapi_key.clone());
        let summarizer = Summarizer::new(client.clone(), config.huggingface_key.clone());

        Self {
            config,
            client,
            search,
            summarizer,
            search_results: Vec::new(),
            content: IndexMap::new(),
            summaries: IndexMap::new(),
            failed_urls: Vec::new(),
        }
    }

    /// Create a session configured from the process environment
    pub fn from_env() -> Self {
        Self::new(ScraperConfig::from_env())
    }

    /// Set the search provider key
    pub fn set_serpapi_key(&mut self, key: impl Into<String>) {
        let key = key.into();
        self.config.serpapi_key = key.clone();
        self.search.set_key(key);
    }

    /// Set the summarization provider key
    pub fn set_huggingface_key(&mut self, key: impl Into<String>) {
        let key = key.into();
        self.config.huggingface_key = key.clone();
        self.summarizer.set_key(key);
    }

    /// Override the extraction fan-out
    pub fn set_max_concurrency(&mut self, value: usize) {
        self.config.max_concurrency = value.max(1);
    }

    /// URLs returned by the most recent search call
    pub fn search_results(&self) -> &[String] {
        &self.search_results
    }

    /// Extracted documents keyed by source URL, in insertion order
    pub fn content(&self) -> &IndexMap<String, ExtractedDocument> {
        &self.content
    }

    /// Synopses keyed by source URL, plus the reserved overall key
    pub fn summaries(&self) -> &IndexMap<String, String> {
        &self.summaries
    }

    /// URLs that failed extraction in the most recent batch
    pub fn failed_urls(&self) -> &[String] {
        &self.failed_urls
    }

    /// Clear all session state
    pub fn reset(&mut self) {
        self.search_results.clear();
        self.content.clear();
        self.summaries.clear();
        self.failed_urls.clear();
    }

    /// Search the web for `query` and cache the result URLs.
    ///
    /// The cached list is what `save_results` persists as
    /// `search_results`. Configuration problems (no key, empty query)
    /// surface as errors; an Ok empty vector means no organic results.
    pub async fn search_web(
        &mut self,
        query: &str,
        count: usize,
    ) -> Result<Vec<String>, SearchError> {
        let links = self.search.search(query, count).await?;
        self.search_results = links.clone();
        Ok(links)
    }

    /// Search for replacement pages for a URL that failed to scrape
    pub async fn suggest_alternative_resources(
        &self,
        failed_url: &str,
        query: Option<&str>,
    ) -> Result<Vec<String>, SearchError> {
        self.search.suggest_alternatives(failed_url, query).await
    }

    /// Scrape a list of URLs through a bounded worker pool.
    ///
    /// The failed-URL list is cleared first and reflects only this batch
    /// afterwards. Fetches overlap up to the configured fan-out, but both
    /// the returned successes and the failed list keep the input URL
    /// order regardless of completion order. Successful documents are
    /// also inserted into the content map, overwriting any earlier entry
    /// for the same URL.
    pub async fn batch_scrape(&mut self, urls: &[String]) -> Vec<(String, ExtractedDocument)> {
        self.failed_urls.clear();

        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrency.max(1)));
        let mut handles = Vec::with_capacity(urls.len());
        for url in urls {
            ::log::info!("Scraping: {}", url);
            let client = self.client.clone();
            let semaphore = Arc::clone(&semaphore);
            let url = url.clone();
            let min_text_len = self.config.min_text_len;
            handles.push(tokio::spawn(async move {
                let _permit = semaphore.acquire().await.unwrap();
                scrape::extract(&client, &url, min_text_len).await
            }));
        }

        let mut successes = Vec::new();
        for (url, handle) in urls.iter().zip(handles) {
            match handle.await {
                Ok(Ok(document)) => {
                    self.content.insert(url.clone(), document.clone());
                    successes.push((url.clone(), document));
                }
                Ok(Err(e)) => {
                    ::log::error!("Failed to scrape {}: {}", url, e);
                    self.failed_urls.push(url.clone());
                }
                Err(e) => {
                    ::log::error!("Scrape task for {} did not complete: {}", url, e);
                    self.failed_urls.push(url.clone());
                }
            }
        }

        ::log::info!(
            "Batch complete: {} scraped, {} failed",
            successes.len(),
            self.failed_urls.len()
        );
        successes
    }

    /// Summarize every scraped document, plus one overall synopsis.
    ///
    /// The summary table is rebuilt from scratch, iterating the content
    /// map in insertion order. The overall entry summarizes every title
    /// and body concatenated in that same order; an empty content map
    /// yields an empty table with no overall entry and no provider calls.
    pub async fn analyze_and_summarize(&mut self) -> &IndexMap<String, String> {
        self.summaries.clear();

        let mut all_text = String::new();
        for (url, document) in &self.content {
            ::log::info!("Summarizing: {}", url);
            let summary = self
                .summarizer
                .summarize(&document.text, summarize::DEFAULT_MAX_LENGTH)
                .await;
            self.summaries.insert(url.clone(), summary);

            all_text.push_str(&document.title);
            all_text.push('\n');
            all_text.push_str(&document.text);
            all_text.push_str("\n\n");
        }

        if !all_text.is_empty() {
            let overall = self
                .summarizer
                .summarize(&all_text, summarize::OVERALL_MAX_LENGTH)
                .await;
            self.summaries.insert(OVERALL_KEY.to_string(), overall);
        }

        &self.summaries
    }

    /// Point-in-time copy of the session state for persistence
    pub fn snapshot(&self) -> ResultsSnapshot {
        ResultsSnapshot {
            search_results: self.search_results.clone(),
            content: self.content.clone(),
            summaries: self.summaries.clone(),
            failed_urls: self.failed_urls.clone(),
        }
    }

    /// Write the session snapshot to `path`, overwriting any existing file
    pub fn save_results(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        self.snapshot().save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves the same HTML body for every connection on a loopback port
    async fn serve_html(body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                let body = body.clone();
                tokio::spawn(async move {
                    let mut request = [0u8; 1024];
                    let _ = stream.read(&mut request).await;
                    let response = format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });
        format!("http://{}/", addr)
    }

    fn article_html(title: &str) -> String {
        format!(
            "<html><head><title>{}</title></head><body><article>\
             <p>The quick brown fox jumps over the lazy dog near the river bank today.</p>\
             <p>It keeps running through the quiet field while the sun slowly sets in the west.</p>\
             </article></body></html>",
            title
        )
    }

    const SHORT_HTML: &str = "<html><body><p>too short</p></body></html>";

    // A port nothing listens on: connections are refused immediately
    const UNREACHABLE_URL: &str = "http://127.0.0.1:1/";

    #[tokio::test]
    async fn test_batch_scrape_separates_successes_and_failures() {
        let good = serve_html(article_html("Fixture article")).await;
        let short = serve_html(SHORT_HTML.to_string()).await;
        let bad = UNREACHABLE_URL.to_string();

        let mut scraper = Scraper::new(ScraperConfig::default());
        let urls = vec![good.clone(), short.clone(), bad.clone()];
        let successes = scraper.batch_scrape(&urls).await;

        assert_eq!(successes.len(), 1);
        assert_eq!(successes[0].0, good);
        assert!(scraper.content().contains_key(&good));
        assert!(!scraper.content().contains_key(&short));
        assert_eq!(scraper.failed_urls(), &[short, bad]);
    }

    #[tokio::test]
    async fn test_failed_list_reset_per_batch() {
        let mut scraper = Scraper::new(ScraperConfig::default());

        scraper.batch_scrape(&[UNREACHABLE_URL.to_string()]).await;
        assert_eq!(scraper.failed_urls().len(), 1);

        let good = serve_html(article_html("Second run")).await;
        scraper.batch_scrape(std::slice::from_ref(&good)).await;
        assert!(scraper.failed_urls().is_empty());
    }

    #[tokio::test]
    async fn test_batch_preserves_input_order() {
        let first = serve_html(article_html("First")).await;
        let second = serve_html(article_html("Second")).await;
        let third = serve_html(article_html("Third")).await;

        let mut scraper = Scraper::new(ScraperConfig::default());
        let urls = vec![third.clone(), first.clone(), second.clone()];
        let successes = scraper.batch_scrape(&urls).await;

        let returned: Vec<&String> = successes.iter().map(|(url, _)| url).collect();
        assert_eq!(returned, vec![&third, &first, &second]);
    }

    #[tokio::test]
    async fn test_summarize_empty_content_yields_empty_table() {
        let mut scraper = Scraper::new(ScraperConfig::default());
        let summaries = scraper.analyze_and_summarize().await;
        assert!(summaries.is_empty());
    }

    #[tokio::test]
    async fn test_summaries_cover_documents_and_overall() {
        let good = serve_html(article_html("Fixture article")).await;

        let mut scraper = Scraper::new(ScraperConfig::default());
        scraper.batch_scrape(std::slice::from_ref(&good)).await;

        let summaries = scraper.analyze_and_summarize().await.clone();
        assert_eq!(summaries.len(), 2);
        assert!(summaries.contains_key(&good));
        assert!(summaries.contains_key(OVERALL_KEY));

        // No summarization key configured, so both entries are extractive
        let document = &scraper.content()[&good];
        assert_eq!(summaries[&good], summarize::extractive(&document.text));
    }

    #[tokio::test]
    async fn test_rescrape_overwrites_content_entry() {
        let good = serve_html(article_html("Same page")).await;

        let mut scraper = Scraper::new(ScraperConfig::default());
        scraper.batch_scrape(std::slice::from_ref(&good)).await;
        scraper.batch_scrape(std::slice::from_ref(&good)).await;

        assert_eq!(scraper.content().len(), 1);
    }

    #[tokio::test]
    async fn test_reset_clears_all_state() {
        let good = serve_html(article_html("To be cleared")).await;

        let mut scraper = Scraper::new(ScraperConfig::default());
        scraper.batch_scrape(std::slice::from_ref(&good)).await;
        scraper.analyze_and_summarize().await;

        scraper.reset();
        assert!(scraper.search_results().is_empty());
        assert!(scraper.content().is_empty());
        assert!(scraper.summaries().is_empty());
        assert!(scraper.failed_urls().is_empty());
    }
}
