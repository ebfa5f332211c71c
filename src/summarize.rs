use crate::parsers::text;
use serde::{Deserialize, Serialize};
use std::error::Error;

const SUMMARY_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";

/// Provider input-size limit, in characters
pub const MAX_INPUT_CHARS: usize = 5000;

/// Synopsis length for per-document summaries
pub const DEFAULT_MAX_LENGTH: u32 = 500;

/// Synopsis length for the combined overall summary
pub const OVERALL_MAX_LENGTH: u32 = 1000;

const MIN_LENGTH: u32 = 100;
const FALLBACK_SENTENCES: usize = 5;

#[derive(Serialize)]
struct SummaryRequest<'a> {
    inputs: &'a str,
    parameters: SummaryParameters,
}

#[derive(Serialize)]
struct SummaryParameters {
    max_length: u32,
    min_length: u32,
}

#[derive(Deserialize)]
struct SummaryResponse {
    summary_text: String,
}

/// Client for the summarization provider, with a local extractive fallback
pub struct Summarizer {
    client: reqwest::Client,
    api_key: String,
}

impl Summarizer {
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

    /// Reduces `text` to a short synopsis.
    ///
    /// With no provider key the extractive fallback runs locally, and
    /// `max_length` has no effect. With a key, the input is truncated to
    /// the provider's size limit and sent off; any non-200 answer,
    /// transport error or unparseable body degrades to the same fallback
    /// on the truncated input. Nothing is cached between calls.
    pub async fn summarize(&self, text: &str, max_length: u32) -> String {
        if !self.has_key() {
            return extractive(text);
        }

        let input = text::truncate_chars(text, MAX_INPUT_CHARS);
        let request = SummaryRequest {
            inputs: input,
            parameters: SummaryParameters {
                max_length,
                min_length: MIN_LENGTH,
            },
        };

        match self.request_summary(&request).await {
            Ok(summary) => summary,
            Err(e) => {
                ::log::warn!("Summarization provider failed, using extractive fallback: {}", e);
                extractive(input)
            }
        }
    }

    async fn request_summary(
        &self,
        request: &SummaryRequest<'_>,
    ) -> Result<String, Box<dyn Error + Send + Sync>> {
        let response = self
            .client
            .post(SUMMARY_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let detail = response.text().await.unwrap_or_default();
            return Err(format!("status {}: {}", status, detail).into());
        }

        let mut summaries: Vec<SummaryResponse> = response.json().await?;
        if summaries.is_empty() {
            return Err("empty summary array in provider response".into());
        }
        Ok(summaries.remove(0).summary_text)
    }
}

/// Extractive summary: the first sentences of the text, verbatim
pub fn extractive(text: &str) -> String {
    text::leading_sentences(text, FALLBACK_SENTENCES)
}
