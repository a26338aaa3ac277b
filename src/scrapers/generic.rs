//! Pattern-based extractor shared by outlets without a dedicated parser.
//!
//! These outlets render closings as plain "Name - STATUS" lines somewhere
//! in the page body, each with different surrounding markup. Rather than
//! chase per-site selectors, this extractor flattens the body text and
//! scans it for common closing shapes.

use super::{Source, fetch_page};
use crate::models::RawClosing;
use crate::utils::squish_whitespace;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::error::Error;
use tracing::{debug, instrument};

/// Closing shapes scanned in order over the flattened body text:
/// an org-suffixed name with a separator and status keyword, a bare
/// "is/will be closed" sentence, and an upper-case "NAME - CLOSED" line.
static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(
            r"(?i)([A-Z][A-Za-z\s]+(?:Schools?|District|Academy|County|University|College))\s*[-–:]\s*(closed|delayed?|early|2\s*hour|virtual|remote)",
        )
        .unwrap(),
        Regex::new(
            r"(?i)([A-Z][A-Za-z\s]+(?:Schools?|District|Academy|County))\s+(closed|is\s+closed|will\s+be\s+closed)",
        )
        .unwrap(),
        Regex::new(r"(?i)([A-Z][A-Za-z\s]+)\s*[-–]\s*(CLOSED|DELAYED|CLOSING)").unwrap(),
    ]
});

/// Fetch and extract closings from one generic source.
#[instrument(level = "info", skip_all, fields(source = %source.key))]
pub async fn scrape(source: &Source) -> Result<Vec<RawClosing>, Box<dyn Error>> {
    let html = fetch_page(source.url).await?;
    Ok(extract_closings(&html, source.key))
}

/// Scan the page body for closing patterns.
///
/// Deduplicates by lower-cased name within the page (the first pattern to
/// match a name wins) and discards names of five characters or fewer,
/// which are almost always pattern noise rather than organizations.
pub fn extract_closings(html: &str, source_key: &str) -> Vec<RawClosing> {
    let document = Html::parse_document(html);
    let body_selector = Selector::parse("body").unwrap();
    let full_text = squish_whitespace(
        &document
            .select(&body_selector)
            .flat_map(|body| body.text())
            .collect::<Vec<_>>()
            .join(" "),
    );

    let mut seen: HashSet<String> = HashSet::new();
    let mut closings = Vec::new();

    for pattern in PATTERNS.iter() {
        for caps in pattern.captures_iter(&full_text) {
            let name = caps[1].trim().to_string();
            let status_text = caps[2].trim().to_string();

            if name.len() <= 5 {
                continue;
            }
            if !seen.insert(name.to_lowercase()) {
                continue;
            }

            closings.push(RawClosing {
                name,
                status_text,
                source: source_key.to_string(),
            });
        }
    }

    debug!(count = closings.len(), source = %source_key, "Extracted closings from body text");
    closings
}
