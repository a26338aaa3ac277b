//! Data models for raw scraped closings and their merged representations.
//!
//! This module defines the core data structures used throughout the application:
//! - [`RawClosing`]: One (name, status text) pair as extracted from a source page
//! - [`ClosingRecord`]: One merged, classified entry per organization
//! - [`ClosingsReport`]: The full output payload (metadata + sorted records)
//! - Taxonomies: [`StatusKind`] and [`Region`]
//!
//! Status kinds serialize in SCREAMING_SNAKE_CASE (`EARLY_DISMISSAL`) and
//! regions serialize as their display names (`"Middle Tennessee"`) to match
//! the JSON vocabulary consumers of `closings.json` already rely on.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A raw closing announcement as extracted from one news source.
///
/// This is the unprocessed input handed to the aggregation core. It is
/// ephemeral: once classified and merged it is not retained.
///
/// # Fields
///
/// * `name` - The organization name exactly as published by the source
/// * `status_text` - Free text describing the closure (may be empty)
/// * `source` - Key of the originating outlet (e.g. `"wkrn"`)
#[derive(Debug, Clone)]
pub struct RawClosing {
    /// Organization name as published by the source.
    pub name: String,
    /// Free-text closure description, e.g. "Closed due to weather".
    pub status_text: String,
    /// Identifier of the originating outlet.
    pub source: String,
}

/// Normalized closure category.
///
/// `Modified` is part of the taxonomy and the serialized vocabulary but the
/// keyword rule engine never produces it; unrecognized text falls back to
/// `Closed` (see [`crate::classify::classify_status`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusKind {
    Closed,
    Delayed,
    EarlyDismissal,
    Remote,
    Modified,
}

impl StatusKind {
    /// The serialized form of this kind, e.g. `"EARLY_DISMISSAL"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Closed => "CLOSED",
            StatusKind::Delayed => "DELAYED",
            StatusKind::EarlyDismissal => "EARLY_DISMISSAL",
            StatusKind::Remote => "REMOTE",
            StatusKind::Modified => "MODIFIED",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three Tennessee grand divisions, or `Other` for names the
/// reference tables cannot place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Region {
    #[serde(rename = "East Tennessee")]
    East,
    #[serde(rename = "Middle Tennessee")]
    Middle,
    #[serde(rename = "West Tennessee")]
    West,
    #[serde(rename = "Other")]
    Other,
}

impl Region {
    /// The display (and serialized) name of this region.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::East => "East Tennessee",
            Region::Middle => "Middle Tennessee",
            Region::West => "West Tennessee",
            Region::Other => "Other",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One merged, classified closing entry for a single organization.
///
/// Created the first time its `dedup_key` is seen during an aggregation run
/// and mutated by later raw records sharing that key: `sources` accumulates
/// (insertion order, no duplicates) and `status_detail` is replaced only by
/// strictly longer text. `status` and `region` keep their first
/// classification.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClosingRecord {
    /// URL-safe slug of the dedup key.
    pub id: String,
    /// Display name: the first-seen raw name for this key.
    pub name: String,
    /// Normalized closure category.
    pub status: StatusKind,
    /// The most informative (longest) raw status text observed for this key.
    pub status_detail: String,
    /// Grand division the organization was classified into.
    pub region: Region,
    /// Outlets that reported this organization, in first-report order.
    pub sources: Vec<String>,
    /// Normalized name used as the merge identity.
    pub dedup_key: String,
}

/// Metadata block of a [`ClosingsReport`].
#[derive(Debug, Deserialize, Serialize)]
pub struct ReportMeta {
    /// Aggregation completion time, ISO-8601 UTC.
    pub generated_at: String,
    /// Number of emitted records.
    pub total_closings: usize,
    /// Count per observed status kind.
    pub by_status: BTreeMap<String, usize>,
    /// Count per observed region.
    pub by_region: BTreeMap<String, usize>,
    /// Sources that contributed at least one record, in first-appearance order.
    pub sources: Vec<String>,
}

/// The full output payload written to `closings.json`.
///
/// `closings` is sorted by display name ascending (ordinal comparison).
#[derive(Debug, Deserialize, Serialize)]
pub struct ClosingsReport {
    pub meta: ReportMeta,
    pub closings: Vec<ClosingRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_closing_creation() {
        let raw = RawClosing {
            name: "Wilson County Schools".to_string(),
            status_text: "Closed".to_string(),
            source: "wkrn".to_string(),
        };
        assert_eq!(raw.name, "Wilson County Schools");
        assert_eq!(raw.source, "wkrn");
    }

    #[test]
    fn test_status_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&StatusKind::EarlyDismissal).unwrap(),
            "\"EARLY_DISMISSAL\""
        );
        assert_eq!(serde_json::to_string(&StatusKind::Closed).unwrap(), "\"CLOSED\"");
    }

    #[test]
    fn test_status_kind_deserialization() {
        let kind: StatusKind = serde_json::from_str("\"MODIFIED\"").unwrap();
        assert_eq!(kind, StatusKind::Modified);
    }

    #[test]
    fn test_region_serialization() {
        assert_eq!(
            serde_json::to_string(&Region::Middle).unwrap(),
            "\"Middle Tennessee\""
        );
        assert_eq!(serde_json::to_string(&Region::Other).unwrap(), "\"Other\"");
    }

    #[test]
    fn test_closing_record_round_trip() {
        let record = ClosingRecord {
            id: "wilson".to_string(),
            name: "Wilson County Schools".to_string(),
            status: StatusKind::Delayed,
            status_detail: "2 hour delay".to_string(),
            region: Region::Middle,
            sources: vec!["wkrn".to_string(), "newschannel5".to_string()],
            dedup_key: "wilson".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"DELAYED\""));
        assert!(json.contains("\"Middle Tennessee\""));

        let back: ClosingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status, StatusKind::Delayed);
        assert_eq!(back.sources.len(), 2);
    }

    #[test]
    fn test_report_serialization() {
        let report = ClosingsReport {
            meta: ReportMeta {
                generated_at: "2026-01-05T12:00:00Z".to_string(),
                total_closings: 0,
                by_status: BTreeMap::new(),
                by_region: BTreeMap::new(),
                sources: vec![],
            },
            closings: vec![],
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"generated_at\""));
        assert!(json.contains("\"total_closings\":0"));
    }
}
