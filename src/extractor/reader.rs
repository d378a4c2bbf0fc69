use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::extractor::model::normalize_whitespace;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("valid selector"));

static PARAGRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("valid selector"));

/// Text of the first non-empty `<title>` element, whitespace-normalized.
pub fn title(document: &Html) -> Option<String> {
    for element in document.select(&TITLE_SELECTOR) {
        let text = normalize_whitespace(&element.text().collect::<String>());
        if !text.is_empty() {
            return Some(text);
        }
    }
    None
}

/// Text of every `<p>` element in document order, each whitespace-normalized,
/// empties discarded.
pub fn paragraphs(document: &Html) -> Vec<String> {
    document
        .select(&PARAGRAPH_SELECTOR)
        .map(|element| normalize_whitespace(&element.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect()
}
