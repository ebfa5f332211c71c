use crate::parsers::article;

#[cfg(test)]
mod title_tests {
    use super::*;

    #[test]
    fn test_og_title_preferred_over_title_tag() {
        let html = r#"<html><head>
            <meta property="og:title" content="OG Title">
            <title>Tag Title</title>
            </head><body><p>Body.</p></body></html>"#;
        let doc = article::parse(html, "https://example.com/post");
        assert_eq!(doc.title, "OG Title");
    }

    #[test]
    fn test_title_tag_fallback() {
        let html = "<html><head><title>Tag Title</title></head><body><p>Body.</p></body></html>";
        let doc = article::parse(html, "https://example.com/post");
        assert_eq!(doc.title, "Tag Title");
    }

    #[test]
    fn test_heading_fallback_when_no_title_tag() {
        let html = "<html><body><h1>Heading Title</h1><p>Body.</p></body></html>";
        let doc = article::parse(html, "https://example.com/post");
        assert_eq!(doc.title, "Heading Title");
    }

    #[test]
    fn test_missing_title_is_empty() {
        let doc = article::parse("<html><body><p>Body.</p></body></html>", "https://example.com");
        assert!(doc.title.is_empty());
    }
}

#[cfg(test)]
mod body_tests {
    use super::*;

    #[test]
    fn test_article_paragraphs_joined_with_blank_line() {
        let html = "<html><body><article>\
            <p>First paragraph.</p>\
            <p>Second paragraph.</p>\
            </article></body></html>";
        let doc = article::parse(html, "https://example.com/post");
        assert_eq!(doc.text, "First paragraph.\n\nSecond paragraph.");
    }

    #[test]
    fn test_paragraph_fallback_outside_article() {
        let html = "<html><body><div><p>Standalone paragraph.</p></div></body></html>";
        let doc = article::parse(html, "https://example.com/post");
        assert_eq!(doc.text, "Standalone paragraph.");
    }

    #[test]
    fn test_article_paragraphs_exclude_sidebar() {
        let html = "<html><body>\
            <article><p>Story text.</p></article>\
            <aside><p>Unrelated sidebar.</p></aside>\
            </body></html>";
        let doc = article::parse(html, "https://example.com/post");
        assert_eq!(doc.text, "Story text.");
    }

    #[test]
    fn test_paragraph_whitespace_normalized() {
        let html = "<html><body><p>  Spread \n  across   lines.  </p></body></html>";
        let doc = article::parse(html, "https://example.com/post");
        assert_eq!(doc.text, "Spread across lines.");
    }

    #[test]
    fn test_empty_page() {
        let doc = article::parse("<html><body></body></html>", "https://example.com");
        assert!(doc.title.is_empty());
        assert!(doc.text.is_empty());
        assert!(doc.publish_date.is_none());
        assert!(doc.authors.is_empty());
        assert!(doc.top_image.is_none());
        assert_eq!(doc.source_url, "https://example.com");
    }
}

#[cfg(test)]
mod metadata_tests {
    use super::*;

    #[test]
    fn test_metadata_fields() {
        let html = r#"<html><head>
            <meta property="article:published_time" content="2024-05-01T10:00:00Z">
            <meta name="author" content="Jane Doe">
            <meta property="og:image" content="/images/lead.png">
            </head><body><p>Body.</p></body></html>"#;
        let doc = article::parse(html, "https://example.com/post/1");
        assert_eq!(doc.publish_date.as_deref(), Some("2024-05-01T10:00:00Z"));
        assert_eq!(doc.authors, vec!["Jane Doe"]);
        assert_eq!(
            doc.top_image.as_deref(),
            Some("https://example.com/images/lead.png")
        );
        assert_eq!(doc.source_url, "https://example.com/post/1");
    }

    #[test]
    fn test_absolute_image_url_kept() {
        let html = r#"<html><head>
            <meta property="og:image" content="https://cdn.example.com/x.png">
            </head><body><p>Body.</p></body></html>"#;
        let doc = article::parse(html, "https://example.com/post");
        assert_eq!(doc.top_image.as_deref(), Some("https://cdn.example.com/x.png"));
    }

    #[test]
    fn test_duplicate_authors_deduped() {
        let html = r#"<html><head>
            <meta name="author" content="Jane Doe">
            </head><body>
            <a rel="author" href="/authors/jane">Jane Doe</a>
            <a rel="author" href="/authors/joe">Joe Bloggs</a>
            <p>Body.</p></body></html>"#;
        let doc = article::parse(html, "https://example.com/post");
        assert_eq!(doc.authors, vec!["Jane Doe", "Joe Bloggs"]);
    }

    #[test]
    fn test_date_published_itemprop_fallback() {
        let html = r#"<html><head>
            <meta itemprop="datePublished" content="2023-11-12">
            </head><body><p>Body.</p></body></html>"#;
        let doc = article::parse(html, "https://example.com/post");
        assert_eq!(doc.publish_date.as_deref(), Some("2023-11-12"));
    }
}
