pub mod model;
pub mod reader;

#[cfg(test)]
mod tests;

pub use model::{FALLBACK_TITLE, FetchedArticle};

use scraper::Html;

use crate::fetcher::types::PageResponse;

/// Number of leading paragraphs folded into the summary.
const SUMMARY_PARAGRAPHS: usize = 3;

/// Reduce a decoded page to an article. Total: missing or unparsable
/// structure falls back to `FALLBACK_TITLE` / an empty summary.
pub fn extract(source_url: &str, resp: &PageResponse) -> FetchedArticle {
    let document = Html::parse_document(&resp.body_utf8);

    let title = reader::title(&document).unwrap_or_else(|| FALLBACK_TITLE.to_string());
    let summary = reader::paragraphs(&document)
        .into_iter()
        .take(SUMMARY_PARAGRAPHS)
        .collect::<Vec<_>>()
        .join(" ");

    FetchedArticle {
        source_url: source_url.to_string(),
        title,
        summary,
    }
}
