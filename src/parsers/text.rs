use regex::Regex;

/// Collapses all whitespace runs into single spaces and trims the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits text into sentences.
///
/// A sentence ends at a run of `.`, `!` or `?` (plus any trailing closing
/// quotes or brackets) followed by whitespace or the end of input.
/// Abbreviations are not special-cased; sentence text is kept verbatim,
/// terminators included.
pub fn split_sentences(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let boundary = Regex::new(r#"[.!?]+["')\]]*(\s+|$)"#).expect("sentence boundary pattern");

    let mut sentences = Vec::new();
    let mut start = 0;
    for found in boundary.find_iter(trimmed) {
        let sentence = trimmed[start..found.end()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        start = found.end();
    }

    // Anything after the last terminator is kept as a trailing fragment
    if start < trimmed.len() {
        let tail = trimmed[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }
    }

    sentences
}

/// Returns the first `count` sentences of `text`, joined by single spaces
pub fn leading_sentences(text: &str, count: usize) -> String {
    split_sentences(text)
        .into_iter()
        .take(count)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncates to at most `max_chars` characters, never splitting a
/// multi-byte character
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
