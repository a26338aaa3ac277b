//! Output generation for the aggregated closings report.
//!
//! # Submodules
//!
//! - [`json`]: Writes the [`crate::models::ClosingsReport`] to `closings.json`
//! - [`summary`]: End-of-run console summary (totals, per-region, per-status)

pub mod json;
pub mod summary;
