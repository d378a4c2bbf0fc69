use chrono::Utc;
use reqwest::StatusCode;
use std::fs;
use url::Url;

use crate::extractor::{FALLBACK_TITLE, extract};
use crate::fetcher::types::{Charset, PageResponse};

#[test]
fn test_extract_article_fixture() {
    let html = fs::read_to_string("src/extractor/tests/fixtures/article.html")
        .expect("Failed to read test fixture");

    let response = create_test_response(html, "https://example.com/article");
    let article = extract("https://example.com/article", &response);

    assert_eq!(article.title, "Sustainable Lip Care Trends");
    assert_eq!(article.source_url, "https://example.com/article");
    // First three paragraphs only; navigation and footer text never appear.
    assert_eq!(
        article.summary,
        "Shoppers now expect organic ingredients in everyday balms. \
         Recyclable packaging is no longer a niche differentiator. \
         Brands that publish sourcing data earn outsized trust."
    );
    assert!(!article.summary.contains("fourth paragraph"));
}

#[test]
fn test_title_fallback() {
    let html = "<html><head></head><body><p>No title here.</p></body></html>".to_string();

    let response = create_test_response(html, "https://example.com/untitled");
    let article = extract("https://example.com/untitled", &response);

    assert_eq!(article.title, FALLBACK_TITLE);
    assert_eq!(article.summary, "No title here.");
}

#[test]
fn test_summary_truncated_to_three_paragraphs() {
    let html = "<html><body>\
        <p>One.</p><p>Two.</p><p>Three.</p><p>Four.</p><p>Five.</p>\
        </body></html>"
        .to_string();

    let response = create_test_response(html, "https://example.com/many");
    let article = extract("https://example.com/many", &response);

    assert_eq!(article.summary, "One. Two. Three.");
}

#[test]
fn test_no_paragraphs_yields_empty_summary() {
    let html = "<html><head><title>Bare</title></head><body><div>divs only</div></body></html>"
        .to_string();

    let response = create_test_response(html, "https://example.com/bare");
    let article = extract("https://example.com/bare", &response);

    assert_eq!(article.title, "Bare");
    assert_eq!(article.summary, "");
}

#[test]
fn test_malformed_html() {
    let html = "<html><head><title>Broken</title><body><p>Unclosed tags<div>More content"
        .to_string();

    let response = create_test_response(html, "https://example.com/broken");
    let article = extract("https://example.com/broken", &response);

    // Should handle malformed HTML gracefully
    assert_eq!(article.title, "Broken");
    assert!(article.summary.contains("Unclosed tags"));
}

#[test]
fn test_non_html_body_degrades_to_fallbacks() {
    let html = "{\"not\": \"html\"}".to_string();

    let response = create_test_response(html, "https://example.com/json");
    let article = extract("https://example.com/json", &response);

    assert_eq!(article.title, FALLBACK_TITLE);
    assert_eq!(article.summary, "");
}

fn create_test_response(html: String, url: &str) -> PageResponse {
    PageResponse {
        url_final: Url::parse(url).unwrap(),
        status: StatusCode::OK,
        body_utf8: html,
        charset: Charset::Utf8,
        fetched_at: Utc::now(),
    }
}
