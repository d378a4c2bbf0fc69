use serde::{Deserialize, Serialize};

/// Placeholder title for pages with no usable `<title>` element.
pub const FALLBACK_TITLE: &str = "Untitled";

/// One fetched web page reduced to the fields the blueprint needs.
///
/// Built once per successful fetch and never mutated; the harvest loop
/// keeps them in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchedArticle {
    /// The URL as listed in the sources file, not the post-redirect one.
    pub source_url: String,
    pub title: String,
    pub summary: String,
}

/// Collapse all runs of whitespace to single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  Hello    world  \n\n  Test  "), "Hello world Test");
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \t\n "), "");
    }
}
