//! Closings-page scrapers for the supported news outlets.
//!
//! # Supported sources
//!
//! | Key | Outlet | Parser |
//! |-----|--------|--------|
//! | `newschannel5` | NewsChannel 5 Nashville | [`newschannel5`] (marked closing blocks + generic fallback) |
//! | `wkrn` | WKRN News 2 | [`generic`] |
//! | `wbbj` | WBBJ-TV | [`generic`] |
//! | `wjhl` | WJHL Tri-Cities | [`generic`] |
//! | `local3` | Local 3 News Chattanooga | [`generic`] |
//! | `wreg` | WREG Memphis | [`generic`] |
//!
//! Each outlet marks up its closings list differently; NewsChannel 5 gets a
//! structure-aware parser while the rest share the pattern-based extractor
//! in [`generic`]. Scrapers are fail-open: a fetch or parse problem is
//! logged and yields zero records for that source, never a failed run.

use crate::models::RawClosing;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use tracing::{debug, error, info, instrument};

pub mod generic;
pub mod newschannel5;

/// One configured news outlet.
pub struct Source {
    /// Stable identifier recorded in `ClosingRecord::sources`.
    pub key: &'static str,
    /// Human-readable outlet name, for logs.
    pub name: &'static str,
    /// The outlet's closings page.
    pub url: &'static str,
}

/// The outlets scraped on every run.
pub const SOURCES: &[Source] = &[
    Source {
        key: "newschannel5",
        name: "NewsChannel 5 Nashville",
        url: "https://www.newschannel5.com/weather/school-closings-delays",
    },
    Source {
        key: "wkrn",
        name: "WKRN News 2",
        url: "https://www.wkrn.com/weather/closings/",
    },
    Source {
        key: "wbbj",
        name: "WBBJ-TV",
        url: "https://www.wbbjtv.com/weather/school-closings/",
    },
    Source {
        key: "wjhl",
        name: "WJHL Tri-Cities",
        url: "https://www.wjhl.com/weather/closings/",
    },
    Source {
        key: "local3",
        name: "Local 3 News Chattanooga",
        url: "https://www.local3news.com/local-weather/school-closings/",
    },
    Source {
        key: "wreg",
        name: "WREG Memphis",
        url: "https://wreg.com/weather/closings/",
    },
];

static CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .user_agent("Mozilla/5.0 (compatible; TNFireflyBot/1.0; +https://tnfirefly.com)")
        .build()
        .expect("reqwest client")
});

/// First status keyword in a closing line; everything before it is the
/// organization name, everything from it onward is the status text.
static STATUS_SPLIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(closed|closing|cancel\w*|no school|delayed?|late start|\d\s*-?\s*hour|early|dismissal|releasing|remote|virtual|online|modified|adjusted)\b",
    )
    .unwrap()
});

/// Fetch one closings page as text.
pub async fn fetch_page(url: &str) -> Result<String, Box<dyn Error>> {
    let body = CLIENT.get(url).send().await?.error_for_status()?.text().await?;
    debug!(%url, bytes = body.len(), "Fetched closings page");
    Ok(body)
}

/// Scrape one source, dispatching to its parser.
///
/// Failures are logged and produce an empty vector so one broken outlet
/// never sinks the run.
#[instrument(level = "info", skip_all, fields(source = %source.key))]
pub async fn scrape_source(source: &Source) -> Vec<RawClosing> {
    let result = match source.key {
        "newschannel5" => newschannel5::scrape(source).await,
        _ => generic::scrape(source).await,
    };

    match result {
        Ok(closings) => {
            info!(count = closings.len(), outlet = %source.name, "Scraped source");
            closings
        }
        Err(e) => {
            error!(error = %e, outlet = %source.name, url = %source.url, "Scrape failed; skipping source");
            Vec::new()
        }
    }
}

/// Split a squished closing line like `"Wilson County Schools - Closed"`
/// into `(name, status_text)` at the first status keyword.
///
/// Returns `None` when no keyword is present or the name left of it is too
/// short to be an organization name.
pub fn split_name_status(text: &str) -> Option<(String, String)> {
    let m = STATUS_SPLIT.find(text)?;
    let name = text[..m.start()]
        .trim()
        .trim_end_matches(['-', '–', '—', ':'])
        .trim()
        .to_string();
    let status_text = text[m.start()..].trim().to_string();
    if name.len() > 2 {
        Some((name, status_text))
    } else {
        None
    }
}
