//! Normalization pass — numeric coercion, derived totals, exclusion
//! filters, and date parsing.
//!
//! Coercion failures on price/quantity and on the permissive date fields
//! are documented cleaning policy, not faults. An unparseable order date
//! is a per-row data-quality issue and the row is excluded, since the
//! late/pending logic downstream depends on it.

use crate::config::EngineConfig;
use crate::domain::{OrderLine, OrderStatus, RawOrderRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A per-row data problem recorded during normalization or resolution.
///
/// Issues never abort a run: the affected row is excluded or carried with
/// degraded data, and the caller decides how to surface the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityIssue {
    /// Zero-based index of the row in the collection the reporting stage
    /// was processing: the raw input for normalization issues, the
    /// working set for resolution issues.
    pub row: usize,
    pub order_number: String,
    pub kind: QualityIssueKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QualityIssueKind {
    /// The order date did not match the day-first format.
    UnparseableOrderDate { value: String },
    /// A chained-customer order number with a suffix that is not `base-NN`.
    MalformedSuffix { value: String },
}

impl fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            QualityIssueKind::UnparseableOrderDate { value } => write!(
                f,
                "row {}: order '{}' has unparseable order date '{}'; row excluded",
                self.row, self.order_number, value
            ),
            QualityIssueKind::MalformedSuffix { value } => write!(
                f,
                "row {}: order '{}' has malformed suffix in '{}'; excluded from chain back-fill",
                self.row, self.order_number, value
            ),
        }
    }
}

/// Output of the normalization pass.
#[derive(Debug, Clone, Default)]
pub struct NormalizeOutcome {
    pub lines: Vec<OrderLine>,
    pub issues: Vec<QualityIssue>,
}

/// Normalize raw records into cleaned order lines.
///
/// Every surviving line starts `Pending`; the status engine overwrites
/// that in the resolve passes.
pub fn normalize(records: &[RawOrderRecord], config: &EngineConfig) -> NormalizeOutcome {
    let mut outcome = NormalizeOutcome::default();

    for (row, record) in records.iter().enumerate() {
        if config.is_excluded_unit(record.unit_of_measure.trim()) {
            continue;
        }
        if config.is_excluded_customer(record.customer.trim()) {
            continue;
        }

        let order_date = match parse_day_first(&record.order_date) {
            Some(date) => date,
            None => {
                outcome.issues.push(QualityIssue {
                    row,
                    order_number: record.order_number.trim().to_string(),
                    kind: QualityIssueKind::UnparseableOrderDate {
                        value: record.order_date.trim().to_string(),
                    },
                });
                continue;
            }
        };

        let unit_price = parse_number(&record.unit_price);
        let quantity = parse_number(&record.quantity);

        let mut line = OrderLine {
            order_number: record.order_number.trim().to_string(),
            customer: record.customer.trim().to_string(),
            unit_price,
            quantity,
            total_value: 0.0,
            order_date,
            invoiced_date: parse_permissive(&record.invoiced_date),
            expected_delivery: parse_permissive(&record.expected_delivery),
            status: OrderStatus::Pending,
            extra: record.extra.clone(),
        };
        line.recompute_total();
        outcome.lines.push(line);
    }

    outcome
}

/// Coerce a cell to a number. Empty or unparseable values become 0.0.
///
/// Accepts plain decimals ("1234.56") and the source data's pt-BR
/// comma-decimal form ("1.234,56").
fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    if let Ok(v) = s.parse::<f64>() {
        if v.is_finite() {
            return v;
        }
        return 0.0;
    }
    if s.contains(',') {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '.')
            .map(|c| if c == ',' { '.' } else { c })
            .collect();
        if let Ok(v) = normalized.parse::<f64>() {
            if v.is_finite() {
                return v;
            }
        }
    }
    0.0
}

/// Strict day-first parse for the order date.
fn parse_day_first(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%d/%m/%Y").ok()
}

/// Permissive parse for the invoiced and expected-delivery dates.
///
/// Tries a small list of formats seen in the source exports; anything
/// else (including an empty cell) is `None`.
fn parse_permissive(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    const FORMATS: [&str; 3] = ["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y"];
    for fmt in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }
    // Timestamped variants, e.g. "2024-03-15 00:00:00".
    const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%d/%m/%Y %H:%M:%S"];
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    None
}
