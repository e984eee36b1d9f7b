//! Markdown run reports — the aggregate summary rendered for humans.
//!
//! Covers what the dashboard charts show: order counts per status with
//! share-of-total percentages, and total value per status.

use crate::runner::RunResult;
use ordertrack_core::domain::OrderStatus;

/// Generate a Markdown report for one pipeline run.
pub fn generate_report(result: &RunResult) -> String {
    let mut md = String::with_capacity(1024);
    let summary = &result.summary;

    md.push_str("# Order Status Report\n\n");

    // Metadata
    md.push_str("## Metadata\n\n");
    md.push_str("| Field | Value |\n");
    md.push_str("| --- | --- |\n");
    md.push_str(&format!("| Source | {} |\n", result.source));
    md.push_str(&format!("| Reference | {} |\n", result.reference));
    md.push_str(&format!("| Rows | {} |\n", summary.row_count));
    md.push_str(&format!("| Distinct Orders | {} |\n", summary.distinct_orders));
    md.push_str(&format!("| Dataset Hash | {} |\n", result.dataset_hash));
    md.push('\n');

    // Orders by status
    md.push_str("## Orders by Status\n\n");
    md.push_str("| Status | Rows | Share | Total Value |\n");
    md.push_str("| --- | ---: | ---: | ---: |\n");
    for status in OrderStatus::ALL {
        let bucket = summary.of(status);
        let share = if summary.row_count > 0 {
            bucket.count as f64 / summary.row_count as f64 * 100.0
        } else {
            0.0
        };
        md.push_str(&format!(
            "| {} | {} | {:.1}% | {:.2} |\n",
            status, bucket.count, share, bucket.total_value
        ));
    }
    md.push_str(&format!(
        "| **Total** | {} | 100.0% | {:.2} |\n",
        summary.row_count, summary.total_value
    ));
    md.push('\n');

    // Data quality
    if !result.data_quality_warnings.is_empty() {
        md.push_str("## Data Quality\n\n");
        for warning in &result.data_quality_warnings {
            md.push_str(&format!("- {warning}\n"));
        }
        md.push('\n');
    }

    md
}
