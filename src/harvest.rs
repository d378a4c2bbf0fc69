use std::time::Duration;

use tracing::{debug, warn};

use crate::extractor::{self, FetchedArticle};
use crate::fetcher;

/// Fetch every URL in order, one at a time, reducing each page to an
/// article. A failed URL is logged and dropped; it never halts the loop
/// and never leaves a placeholder entry. Survivors keep input order.
pub async fn collect(urls: &[String], timeout: Duration) -> Vec<FetchedArticle> {
    let mut articles = Vec::new();

    for url in urls {
        debug!("fetching url: {}", url);
        match fetcher::fetch(url, timeout).await {
            Ok(response) => {
                debug!(
                    "fetched {} (status: {}, charset: {:?}, size: {} bytes, at: {})",
                    response.url_final,
                    response.status,
                    response.charset,
                    response.body_utf8.len(),
                    response.fetched_at,
                );
                articles.push(extractor::extract(url, &response));
            }
            Err(err) => {
                warn!("skipping url {} due to error: {}", url, err);
            }
        }
    }

    articles
}
