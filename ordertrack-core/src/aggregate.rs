//! Aggregate summary — pure reduction over the resolved dataset.

use crate::domain::{OrderLine, OrderStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Row count and value sum for one status bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub count: usize,
    pub total_value: f64,
}

/// Summary of one computation run, consumed by reporting and any
/// presentation layer. Presentation may filter or group further but must
/// not recompute statuses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// Count of distinct order numbers.
    pub distinct_orders: usize,
    /// Total rows in the working dataset.
    pub row_count: usize,
    /// Sum of `total_value` over all rows.
    pub total_value: f64,
    pub pending: StatusBreakdown,
    pub late: StatusBreakdown,
    pub delivered: StatusBreakdown,
}

impl AggregateSummary {
    pub fn of(&self, status: OrderStatus) -> &StatusBreakdown {
        match status {
            OrderStatus::Pending => &self.pending,
            OrderStatus::Late => &self.late,
            OrderStatus::Delivered => &self.delivered,
        }
    }

    fn of_mut(&mut self, status: OrderStatus) -> &mut StatusBreakdown {
        match status {
            OrderStatus::Pending => &mut self.pending,
            OrderStatus::Late => &mut self.late,
            OrderStatus::Delivered => &mut self.delivered,
        }
    }
}

/// Reduce the resolved dataset to its summary. No side effects.
pub fn summarize(lines: &[OrderLine]) -> AggregateSummary {
    let mut summary = AggregateSummary {
        row_count: lines.len(),
        ..AggregateSummary::default()
    };

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for line in lines {
        seen.insert(line.order_number.as_str());
        summary.total_value += line.total_value;
        let bucket = summary.of_mut(line.status);
        bucket.count += 1;
        bucket.total_value += line.total_value;
    }
    summary.distinct_orders = seen.len();

    summary
}
