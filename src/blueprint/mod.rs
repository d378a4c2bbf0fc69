use crate::extractor::FetchedArticle;
use crate::keywords::{DEFAULT_TOP_KEYWORDS, extract_keywords};

const EMPTY_KEYWORDS_NOTE: &str = "update once content is fetched";
const NO_SUMMARY_NOTE: &str = "No summary available.";

/// Renders the launch blueprint: fixed marketing prose with the brand
/// name, keyword ranking, article count, and reference listing
/// substituted in. Output is byte-identical for identical input.
#[derive(Debug, Clone)]
pub struct BlueprintBuilder {
    brand_name: String,
    top_keywords: usize,
}

impl BlueprintBuilder {
    pub fn new(brand_name: impl Into<String>) -> Self {
        Self {
            brand_name: brand_name.into(),
            top_keywords: DEFAULT_TOP_KEYWORDS,
        }
    }

    pub fn with_top_keywords(mut self, top_keywords: usize) -> Self {
        self.top_keywords = top_keywords;
        self
    }

    pub fn build(&self, articles: &[FetchedArticle]) -> String {
        let keywords = extract_keywords(articles, self.top_keywords);
        let hero_ingredients = if keywords.is_empty() {
            EMPTY_KEYWORDS_NOTE.to_string()
        } else {
            keywords.join(", ")
        };

        let brand = &self.brand_name;
        let mut lines: Vec<String> = vec![
            format!("# {brand} Launch Blueprint"),
            String::new(),
            "## Positioning and Brand Story".into(),
            "- Lead with sustainability: highlight certified organic ingredients and transparent sourcing.".into(),
            "- Emphasize softness: connect the butter concept to lip nourishment and comfort.".into(),
            "- Build trust: communicate testing, dermatologist alignment, and clean-label simplicity.".into(),
            String::new(),
            "## Product Messaging".into(),
            "- Core promise: glide-on lip butter made with planet-friendly botanicals and recyclable packaging.".into(),
            format!("- Hero ingredients surfaced from research: {hero_ingredients}."),
            "- Claims to validate: hydration longevity, feel-on-lips, and environmental footprint reduction.".into(),
            String::new(),
            "## Campaign Concepts".into(),
            format!("- \"Spread the Softness\": customer stories showing daily moments where {brand} fits naturally."),
            "- \"Traceable Butter\": interactive content tracing each ingredient back to its sustainable source.".into(),
            "- \"Pocket-sized Planet Care\": highlight refill or recycling incentives to close the loop.".into(),
            String::new(),
            "## Launch Checklist".into(),
            format!(
                "- Content curation: publish summaries of {} reference articles to demonstrate category fluency.",
                articles.len()
            ),
            "- Partnerships: line up sustainable suppliers and eco-certifications before main campaign.".into(),
            "- Channels: focus on TikTok/Instagram for education and TikTok Shop for conversion; support with email nurture.".into(),
            "- Measurement: track engagement rate, repeat purchase, and subscription opt-ins.".into(),
        ];

        if !articles.is_empty() {
            lines.push(String::new());
            lines.extend(format_articles(articles));
        }

        lines.join("\n")
    }
}

fn format_articles(articles: &[FetchedArticle]) -> Vec<String> {
    let mut lines = vec!["## Reference Articles".to_string()];
    for article in articles {
        let summary = if article.summary.is_empty() {
            NO_SUMMARY_NOTE
        } else {
            &article.summary
        };
        lines.push(format!(
            "- **{}** — {} (Source: {})",
            article.title, summary, article.source_url
        ));
    }
    lines
}
