//! End-of-run console summary.

use crate::models::ClosingsReport;
use tracing::info;

/// Log the run summary: total record count, then per-region and per-status
/// breakdowns. "Other" counts are the signal that the reference tables need
/// new entries.
pub fn log_summary(report: &ClosingsReport) {
    info!(
        total = report.meta.total_closings,
        sources = report.meta.sources.len(),
        "Aggregation summary"
    );
    for (region, count) in &report.meta.by_region {
        info!(region = %region, count, "Closings by region");
    }
    for (status, count) in &report.meta.by_status {
        info!(status = %status, count, "Closings by status");
    }
}
