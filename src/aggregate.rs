//! Merge/dedup engine and report assembly.
//!
//! Pure, single-pass, synchronous computation over an in-memory sequence.
//! The accumulation map lives and dies inside one [`aggregate`] call, so
//! independent runs need no coordination.

use crate::classify::{RegionClassifier, classify_status};
use crate::models::{ClosingRecord, ClosingsReport, RawClosing, ReportMeta};
use crate::normalize::{key_slug, normalize_key};
use chrono::{SecondsFormat, Utc};
use itertools::Itertools;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Fold raw closings into one [`ClosingRecord`] per dedup key.
///
/// Input order is the only ordering input: the first raw record for a key
/// fixes the display name and the status/region classification. Later
/// records for the same key extend `sources` (insertion order, no
/// duplicates) and replace `status_detail` only when strictly longer —
/// longer text is assumed more informative. Ties keep the existing value,
/// so the result is order-independent for the detail field.
///
/// The output is sorted by display name ascending.
pub fn aggregate(raw_records: Vec<RawClosing>, regions: &RegionClassifier) -> Vec<ClosingRecord> {
    let mut merged: HashMap<String, ClosingRecord> = HashMap::new();

    for raw in raw_records {
        let key = normalize_key(&raw.name);
        match merged.entry(key) {
            Entry::Vacant(slot) => {
                let status = classify_status(&raw.status_text);
                let region = regions.classify(&raw.name);
                let record = ClosingRecord {
                    id: key_slug(slot.key()),
                    dedup_key: slot.key().clone(),
                    name: raw.name,
                    status,
                    status_detail: raw.status_text,
                    region,
                    sources: vec![raw.source],
                };
                slot.insert(record);
            }
            Entry::Occupied(mut entry) => {
                let record = entry.get_mut();
                if !record.sources.contains(&raw.source) {
                    record.sources.push(raw.source);
                }
                if raw.status_text.len() > record.status_detail.len() {
                    record.status_detail = raw.status_text;
                }
                // status/region deliberately keep their first classification.
            }
        }
    }

    let mut records: Vec<ClosingRecord> = merged.into_values().collect();
    records.sort_by(|a, b| a.name.cmp(&b.name));
    records
}

/// Assemble the output payload from the merged records.
///
/// Counts cover observed status kinds and regions only; `meta.sources`
/// lists every source that contributed at least one record, in first
/// appearance order over the sorted records.
pub fn build_report(closings: Vec<ClosingRecord>) -> ClosingsReport {
    let mut by_status: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_region: BTreeMap<String, usize> = BTreeMap::new();
    for record in &closings {
        *by_status.entry(record.status.as_str().to_string()).or_insert(0) += 1;
        *by_region.entry(record.region.as_str().to_string()).or_insert(0) += 1;
    }

    let sources: Vec<String> = closings
        .iter()
        .flat_map(|record| record.sources.iter().cloned())
        .unique()
        .collect();

    ClosingsReport {
        meta: ReportMeta {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            total_closings: closings.len(),
            by_status,
            by_region,
            sources,
        },
        closings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Region, StatusKind};

    fn raw(name: &str, status_text: &str, source: &str) -> RawClosing {
        RawClosing {
            name: name.to_string(),
            status_text: status_text.to_string(),
            source: source.to_string(),
        }
    }

    #[test]
    fn test_empty_input_empty_output() {
        let records = aggregate(vec![], &RegionClassifier::tennessee());
        assert!(records.is_empty());

        let report = build_report(records);
        assert_eq!(report.meta.total_closings, 0);
        assert!(report.meta.sources.is_empty());
    }

    #[test]
    fn test_longest_detail_wins_either_order() {
        let classifier = RegionClassifier::tennessee();

        let forward = aggregate(
            vec![
                raw("Wilson County Schools", "Closed", "A"),
                raw("Wilson County Schools", "Closed - water main break", "B"),
            ],
            &classifier,
        );
        let backward = aggregate(
            vec![
                raw("Wilson County Schools", "Closed - water main break", "B"),
                raw("Wilson County Schools", "Closed", "A"),
            ],
            &classifier,
        );

        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].status_detail, "Closed - water main break");
        assert_eq!(backward[0].status_detail, "Closed - water main break");
    }

    #[test]
    fn test_detail_tie_keeps_existing() {
        let records = aggregate(
            vec![
                raw("Wilson County Schools", "Shut", "A"),
                raw("Wilson County Schools", "Snow", "B"),
            ],
            &RegionClassifier::tennessee(),
        );
        assert_eq!(records[0].status_detail, "Shut");
    }

    #[test]
    fn test_source_accumulation_no_duplicates() {
        let records = aggregate(
            vec![
                raw("Knox County Schools", "Closed", "A"),
                raw("Knox County Schools", "Closed", "B"),
                raw("Knox County Schools", "Closed", "A"),
            ],
            &RegionClassifier::tennessee(),
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sources, vec!["A", "B"]);
    }

    #[test]
    fn test_first_classification_wins() {
        // A later record with different status text never rewrites status.
        let records = aggregate(
            vec![
                raw("Knox County Schools", "2 hour delay", "A"),
                raw("Knox County Schools", "Closed until further notice", "B"),
            ],
            &RegionClassifier::tennessee(),
        );
        assert_eq!(records[0].status, StatusKind::Delayed);
        // The longer text still wins the detail field.
        assert_eq!(records[0].status_detail, "Closed until further notice");
    }

    #[test]
    fn test_display_name_is_first_seen() {
        let records = aggregate(
            vec![
                raw("MAURY COUNTY SCHOOLS", "Closed", "A"),
                raw("Maury County Schools", "Closed today", "B"),
            ],
            &RegionClassifier::tennessee(),
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "MAURY COUNTY SCHOOLS");
    }

    #[test]
    fn test_disjoint_keys_counts_sum_to_total() {
        let records = aggregate(
            vec![
                raw("Knox County Schools", "Closed", "wjhl"),
                raw("Wilson County Schools", "2 hour delay", "wkrn"),
                raw("Shelby County Schools", "Virtual learning day", "wreg"),
            ],
            &RegionClassifier::tennessee(),
        );
        assert_eq!(records.len(), 3);

        let report = build_report(records);
        assert_eq!(report.meta.total_closings, 3);
        assert_eq!(
            report.meta.by_status.values().sum::<usize>(),
            report.meta.total_closings
        );
        assert_eq!(
            report.meta.by_region.values().sum::<usize>(),
            report.meta.total_closings
        );
        assert_eq!(report.meta.by_status["DELAYED"], 1);
        assert_eq!(report.meta.by_region["East Tennessee"], 1);
        assert_eq!(report.meta.by_region["West Tennessee"], 1);
    }

    #[test]
    fn test_output_sorted_by_name() {
        let records = aggregate(
            vec![
                raw("Wilson County Schools", "Closed", "A"),
                raw("Knox County Schools", "Closed", "A"),
                raw("Maury County Schools", "Closed", "A"),
            ],
            &RegionClassifier::tennessee(),
        );
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Knox County Schools", "Maury County Schools", "Wilson County Schools"]
        );
    }

    #[test]
    fn test_sources_meta_first_appearance_order() {
        let records = aggregate(
            vec![
                raw("Wilson County Schools", "Closed", "wkrn"),
                raw("Knox County Schools", "Closed", "wjhl"),
                raw("Wilson County Schools", "Closed today", "newschannel5"),
            ],
            &RegionClassifier::tennessee(),
        );
        let report = build_report(records);
        // Sorted records: Knox (wjhl) then Wilson (wkrn, newschannel5).
        assert_eq!(report.meta.sources, vec!["wjhl", "wkrn", "newschannel5"]);
    }

    #[test]
    fn test_end_to_end_merge_scenario() {
        let records = aggregate(
            vec![
                raw("Maury County Public Schools", "Closed", "X"),
                raw("Maury County Schools", "Closed due to weather", "Y"),
            ],
            &RegionClassifier::tennessee(),
        );

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.name, "Maury County Public Schools");
        assert_eq!(record.region, Region::Middle);
        assert_eq!(record.status, StatusKind::Closed);
        assert_eq!(record.status_detail, "Closed due to weather");
        assert_eq!(record.sources, vec!["X", "Y"]);
        assert_eq!(record.dedup_key, "maury");
        assert_eq!(record.id, "maury");
    }

    #[test]
    fn test_empty_name_is_processed_not_rejected() {
        let records = aggregate(
            vec![raw("", "Closed", "A"), raw("  ", "Closed early", "B")],
            &RegionClassifier::tennessee(),
        );
        // Both normalize to the empty key and merge.
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].region, Region::Other);
        assert_eq!(records[0].dedup_key, "");
    }
}
