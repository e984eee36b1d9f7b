//! Status engine — the two-pass resolver pipeline and its entry point.
//!
//! One call per load: normalize, resolve the chained customer's suffix
//! chains, classify everything else by date, reduce to the summary.
//! Fully sequential, no shared state; every run recomputes from scratch.

pub mod date_fallback;
pub mod suffix_chain;

use crate::aggregate::{self, AggregateSummary};
use crate::config::EngineConfig;
use crate::domain::{OrderLine, RawOrderRecord};
use crate::normalize::{normalize, QualityIssue};
use chrono::NaiveDateTime;

/// Output of one full computation run.
#[derive(Debug, Clone)]
pub struct ComputeOutput {
    /// The working dataset with every status populated.
    pub lines: Vec<OrderLine>,
    pub summary: AggregateSummary,
    /// Per-row data problems encountered along the way.
    pub issues: Vec<QualityIssue>,
}

/// Run the whole pipeline over raw records.
///
/// `reference` fixes the Late/Pending boundary for the entire run; pass
/// the captured "now" (or any instant, for reproducible tests). Pure:
/// same records, reference, and config always produce the same output.
pub fn compute_orders(
    records: &[RawOrderRecord],
    reference: NaiveDateTime,
    config: &EngineConfig,
) -> ComputeOutput {
    let outcome = normalize(records, config);
    let mut lines = outcome.lines;
    let mut issues = outcome.issues;

    let resolutions = suffix_chain::resolve(&lines, &config.chained_customer, &mut issues);
    date_fallback::resolve(&mut lines, &resolutions, reference);

    let summary = aggregate::summarize(&lines);

    ComputeOutput {
        lines,
        summary,
        issues,
    }
}
