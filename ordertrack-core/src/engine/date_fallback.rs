//! Date-based fallback resolver for rows outside the suffix chain.
//!
//! Invoiced means delivered; otherwise the expected delivery date decides
//! between late and pending. The reference instant is captured once per
//! run and passed in, so every row in a pass sees the same boundary.

use crate::domain::{OrderLine, OrderStatus, Resolution};
use chrono::{NaiveDateTime, NaiveTime};

/// Write the final status onto every line.
///
/// Rows the suffix-chain resolver marked `Resolved` take that status
/// verbatim; the rest are classified against `reference`.
pub fn resolve(lines: &mut [OrderLine], resolutions: &[Resolution], reference: NaiveDateTime) {
    debug_assert_eq!(lines.len(), resolutions.len());
    for (line, resolution) in lines.iter_mut().zip(resolutions) {
        line.status = match resolution {
            Resolution::Resolved(status) => *status,
            Resolution::Unresolved => classify(line, reference),
        };
    }
}

/// Date-based classification for one line.
///
/// The expected date is compared at midnight, so a line due today counts
/// late once the reference instant has passed midnight. A missing
/// expected date can never be late.
fn classify(line: &OrderLine, reference: NaiveDateTime) -> OrderStatus {
    if line.invoiced_date.is_some() {
        return OrderStatus::Delivered;
    }
    match line.expected_delivery {
        Some(expected) if expected.and_time(NaiveTime::MIN) < reference => OrderStatus::Late,
        _ => OrderStatus::Pending,
    }
}
