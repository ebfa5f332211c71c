use crate::error::ExtractError;
use crate::parsers::article;
use crate::results::ExtractedDocument;

/// Downloads and parses a single page into an article document.
///
/// One GET per call through the shared client, no retries. A page whose
/// trimmed article text is shorter than `min_text_len` characters counts
/// as a failure, the same as a transport error. The caller owns all
/// session bookkeeping; this function touches no shared state.
pub async fn extract(
    client: &reqwest::Client,
    url: &str,
    min_text_len: usize,
) -> Result<ExtractedDocument, ExtractError> {
    ::log::debug!("Fetching: {}", url);

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ExtractError::Status(status));
    }

    let html = response.text().await?;
    let document = article::parse(&html, url);

    let len = document.text.trim().chars().count();
    if len < min_text_len {
        ::log::warn!("No significant content found on {}", url);
        return Err(ExtractError::ContentTooShort { len });
    }

    ::log::debug!(
        "Extracted {} chars from {} (title: {:?})",
        len,
        url,
        document.title
    );
    Ok(document)
}
