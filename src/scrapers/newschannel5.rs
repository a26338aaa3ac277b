//! NewsChannel 5 Nashville closings parser.
//!
//! NewsChannel 5 marks its closings list up with `closing`/`delay` class
//! names on the entry containers, which lets us target the entries directly
//! instead of pattern-scanning the whole page. The generic extractor still
//! runs afterward as a safety net for entries that fall outside the marked
//! blocks, with the structure-aware matches taking precedence on name
//! collisions.

use super::{Source, fetch_page, generic, split_name_status};
use crate::models::RawClosing;
use crate::utils::squish_whitespace;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::error::Error;
use tracing::{debug, instrument};

/// Fetch and parse the NewsChannel 5 closings page.
#[instrument(level = "info", skip_all, fields(source = %source.key))]
pub async fn scrape(source: &Source) -> Result<Vec<RawClosing>, Box<dyn Error>> {
    let html = fetch_page(source.url).await?;
    Ok(extract_closings(&html, source.key))
}

/// Parse closing entries out of the page markup.
///
/// Walks `div`/`li`/`tr` elements whose class contains "closing" or
/// "delay", squishes each entry's text, and splits it into name and status
/// at the first status keyword. Generic-extractor results are appended for
/// names the marked blocks did not yield.
pub fn extract_closings(html: &str, source_key: &str) -> Vec<RawClosing> {
    let document = Html::parse_document(html);
    let entry_selector = Selector::parse("div, li, tr").unwrap();

    let mut closings = Vec::new();
    for element in document.select(&entry_selector) {
        let class = element.value().attr("class").unwrap_or("").to_lowercase();
        if !class.contains("closing") && !class.contains("delay") {
            continue;
        }

        let text = squish_whitespace(&element.text().collect::<Vec<_>>().join(" "));
        if text.is_empty() {
            continue;
        }
        if let Some((name, status_text)) = split_name_status(&text) {
            closings.push(RawClosing {
                name,
                status_text,
                source: source_key.to_string(),
            });
        }
    }
    debug!(count = closings.len(), "Parsed marked closing blocks");

    // Safety net: entries the markup walk missed, specific matches preferred.
    let seen: HashSet<String> = closings.iter().map(|c| c.name.to_lowercase()).collect();
    for closing in generic::extract_closings(html, source_key) {
        if !seen.contains(&closing.name.to_lowercase()) {
            closings.push(closing);
        }
    }

    closings
}
