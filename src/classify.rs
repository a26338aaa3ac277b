//! Status and region classification.
//!
//! Both classifiers are deterministic rule engines over fixed reference
//! data, total over arbitrary input, and fail open: text with no
//! recognizable status keyword is reported as CLOSED (overwhelmingly the
//! common case in this domain) and a name no table matches is reported as
//! region "Other" rather than dropped. Classification uncertainty surfaces
//! as a visible category an operator can audit, never as an error.

use crate::models::{Region, StatusKind};
use crate::tables;

/// Keyword groups tested in order against the upper-cased status text.
/// Group order is significant: "2 hour delay, building closed" is DELAYED.
const STATUS_GROUPS: &[(StatusKind, &[&str])] = &[
    (
        StatusKind::Delayed,
        &["2 HOUR", "2-HOUR", "TWO HOUR", "1 HOUR", "1-HOUR", "DELAY"],
    ),
    (
        StatusKind::EarlyDismissal,
        &["EARLY", "DISMISS", "CLOSING AT", "CLOSES AT"],
    ),
    (
        StatusKind::Remote,
        &["REMOTE", "VIRTUAL", "DISTANCE", "ONLINE"],
    ),
    (
        StatusKind::Closed,
        &["CLOSED", "CANCEL", "NO SCHOOL", "THROUGH"],
    ),
];

/// Map a free-text status phrase to a [`StatusKind`].
///
/// The upper-cased text is tested against the ordered keyword groups; the
/// first group with a match wins. Text matching no group (including the
/// empty string) is CLOSED.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(classify_status("2 hour delay"), StatusKind::Delayed);
/// assert_eq!(classify_status(""), StatusKind::Closed);
/// ```
pub fn classify_status(status_text: &str) -> StatusKind {
    let upper = status_text.to_uppercase();
    for (kind, keywords) in STATUS_GROUPS {
        if keywords.iter().any(|k| upper.contains(k)) {
            return *kind;
        }
    }
    StatusKind::Closed
}

/// Classifies organization names into Tennessee grand divisions using a
/// layered fallback lookup.
///
/// The three tables are ordered `(pattern, region)` slices scanned
/// top-to-bottom, first match wins. Layers are tried strictly in order:
///
/// 1. Exact district-table match (trimmed, case-sensitive)
/// 2. Partial district-table match (case-insensitive substring, both
///    directions, so "MNPS" and truncated names still hit)
/// 3. County name appearing in the organization name
/// 4. City name appearing in the organization name
/// 5. [`Region::Other`]
///
/// Substring containment trades a small false-positive risk for high
/// recall; the consequence of a miss is a wrong region tag, not data loss.
/// The tables are immutable after construction.
pub struct RegionClassifier {
    districts: &'static [(&'static str, Region)],
    counties: &'static [(&'static str, Region)],
    cities: &'static [(&'static str, Region)],
}

impl RegionClassifier {
    /// Build a classifier over caller-supplied tables (used by tests).
    pub fn new(
        districts: &'static [(&'static str, Region)],
        counties: &'static [(&'static str, Region)],
        cities: &'static [(&'static str, Region)],
    ) -> Self {
        RegionClassifier {
            districts,
            counties,
            cities,
        }
    }

    /// The classifier over the built-in Tennessee reference tables.
    pub fn tennessee() -> Self {
        RegionClassifier::new(
            tables::DISTRICT_REGIONS,
            tables::COUNTY_REGIONS,
            tables::CITY_REGIONS,
        )
    }

    /// Map an organization name to a [`Region`], never failing.
    ///
    /// Empty and whitespace-only names classify as [`Region::Other`]; the
    /// empty string would otherwise be a substring of every table key.
    pub fn classify(&self, name: &str) -> Region {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Region::Other;
        }

        for (key, region) in self.districts {
            if trimmed == *key {
                return *region;
            }
        }

        let upper = trimmed.to_uppercase();
        for (key, region) in self.districts {
            let key_upper = key.to_uppercase();
            if upper.contains(&key_upper) || key_upper.contains(&upper) {
                return *region;
            }
        }

        for (key, region) in self.counties {
            if upper.contains(&key.to_uppercase()) {
                return *region;
            }
        }

        for (key, region) in self.cities {
            if upper.contains(&key.to_uppercase()) {
                return *region;
            }
        }

        Region::Other
    }
}
