use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::extractor::FetchedArticle;

pub const DEFAULT_TOP_KEYWORDS: usize = 6;

/// Tokens at or below this length are discarded as noise.
const MAX_NOISE_LENGTH: usize = 3;

/// Common English function words excluded from ranking. Never mutated
/// after initialization.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "and", "for", "with", "from", "that", "this", "your", "their", "about", "into",
        "while", "have", "are", "you", "our", "but", "was", "has", "had", "will", "can", "they",
        "them", "its", "we", "of", "a", "an", "in", "on", "at", "to", "is", "it",
    ]
    .into_iter()
    .collect()
});

/// Rank the most frequent content words across all articles.
///
/// Tokens are lower-cased, stripped to alphabetic characters, and dropped
/// when empty, stop-listed, or too short. Ranking is by descending count;
/// ties keep the order in which a token first appeared in the stream
/// (summary then title, articles in input order), so output is
/// deterministic for a fixed input.
pub fn extract_keywords(articles: &[FetchedArticle], top_n: usize) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for article in articles {
        let words = article
            .summary
            .split_whitespace()
            .chain(article.title.split_whitespace());
        for word in words {
            let cleaned: String = word
                .to_lowercase()
                .chars()
                .filter(|ch| ch.is_alphabetic())
                .collect();
            if cleaned.chars().count() <= MAX_NOISE_LENGTH
                || STOP_WORDS.contains(cleaned.as_str())
            {
                continue;
            }
            let count = counts.entry(cleaned.clone()).or_insert(0);
            if *count == 0 {
                first_seen.push(cleaned);
            }
            *count += 1;
        }
    }

    // Stable sort: equal counts keep first-seen order.
    let mut ranked = first_seen;
    ranked.sort_by_key(|word| Reverse(counts[word.as_str()]));
    ranked.truncate(top_n);
    ranked
}
