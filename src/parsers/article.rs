use crate::parsers::text;
use crate::results::ExtractedDocument;
use scraper::{Html, Selector};
use url::Url;

/// Parses an article page into its structured fields.
///
/// Extraction is best-effort: missing metadata leaves the corresponding
/// field empty rather than failing the parse. Length enforcement is the
/// caller's concern.
pub fn parse(html: &str, url: &str) -> ExtractedDocument {
    let doc = Html::parse_document(html);

    let title = meta_content(&doc, r#"meta[property="og:title"]"#)
        .or_else(|| element_text(&doc, "title"))
        .or_else(|| element_text(&doc, "h1"))
        .unwrap_or_default();

    let publish_date = meta_content(&doc, r#"meta[property="article:published_time"]"#)
        .or_else(|| meta_content(&doc, r#"meta[itemprop="datePublished"]"#))
        .or_else(|| meta_content(&doc, r#"meta[name="date"]"#));

    let top_image = meta_content(&doc, r#"meta[property="og:image"]"#)
        .and_then(|src| resolve_image_url(url, &src));

    ExtractedDocument {
        title,
        text: body_text(&doc),
        publish_date,
        authors: authors(&doc),
        top_image,
        source_url: url.to_string(),
    }
}

/// Extracts the article body as paragraphs joined by blank lines.
///
/// Paragraphs inside an `article` or `main` container are preferred; pages
/// without one fall back to every paragraph in the document.
fn body_text(doc: &Html) -> String {
    for container in ["article p", "main p", "p"] {
        let selector = Selector::parse(container).unwrap();
        let paragraphs: Vec<String> = doc
            .select(&selector)
            .map(|p| text::collapse_whitespace(&p.text().collect::<Vec<_>>().join(" ")))
            .filter(|p| !p.is_empty())
            .collect();

        if !paragraphs.is_empty() {
            return paragraphs.join("\n\n");
        }
    }

    String::new()
}

/// First non-empty `content` attribute among elements matching `selector`
fn meta_content(doc: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector)
        .filter_map(|tag| tag.value().attr("content"))
        .map(str::trim)
        .find(|content| !content.is_empty())
        .map(str::to_string)
}

/// First non-empty text among elements matching `selector`
fn element_text(doc: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector)
        .map(|tag| text::collapse_whitespace(&tag.text().collect::<Vec<_>>().join(" ")))
        .find(|t| !t.is_empty())
}

/// Author names from meta tags and rel="author" links, deduplicated
fn authors(doc: &Html) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    let meta = Selector::parse(r#"meta[name="author"]"#).unwrap();
    for tag in doc.select(&meta) {
        if let Some(name) = tag.value().attr("content") {
            push_author(&mut names, name);
        }
    }

    let rel = Selector::parse(r#"a[rel="author"]"#).unwrap();
    for tag in doc.select(&rel) {
        let name = tag.text().collect::<String>();
        push_author(&mut names, &name);
    }

    names
}

fn push_author(names: &mut Vec<String>, raw: &str) {
    let name = raw.trim();
    if !name.is_empty() && !names.iter().any(|n| n == name) {
        names.push(name.to_string());
    }
}

/// Resolves a lead-image URL against the page URL when it is relative
fn resolve_image_url(page_url: &str, src: &str) -> Option<String> {
    match Url::parse(src) {
        Ok(absolute) => Some(absolute.to_string()),
        Err(_) => Url::parse(page_url)
            .and_then(|base| base.join(src))
            .map(|resolved| resolved.to_string())
            .ok(),
    }
}
