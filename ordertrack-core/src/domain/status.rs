//! Delivery status and the transient resolution state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery lifecycle state of an order line. Derived, never input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Not yet invoiced and not past its expected delivery date.
    Pending,
    /// Not yet invoiced and past its expected delivery date.
    Late,
    /// Invoiced, or implied delivered by a higher chain suffix.
    Delivered,
}

impl OrderStatus {
    /// All statuses, in display order. The aggregate whitelist.
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Late,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Late => "Late",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-row state sequencing the two resolver passes.
///
/// The suffix-chain resolver marks every chained-customer row `Resolved`;
/// the date fallback then classifies only the rows still `Unresolved`.
/// This never outlives one computation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Unresolved,
    Resolved(OrderStatus),
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}
