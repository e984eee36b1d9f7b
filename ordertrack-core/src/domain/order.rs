//! Order-line records, raw and normalized.

use super::status::OrderStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One unprocessed spreadsheet row. Every field is kept as the literal
/// cell text; the normalizer does all coercion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawOrderRecord {
    pub order_number: String,
    /// Customer trade name. One distinguished value triggers suffix chaining.
    pub customer: String,
    pub unit_price: String,
    pub quantity: String,
    pub unit_of_measure: String,
    pub order_date: String,
    pub invoiced_date: String,
    pub expected_delivery: String,
    /// Values of retained pass-through columns, aligned with the table's
    /// extra headers.
    pub extra: Vec<String>,
}

/// One normalized order line with its derived delivery status.
///
/// Constructed once per load; a run recomputes every status from scratch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub order_number: String,
    pub customer: String,
    pub unit_price: f64,
    pub quantity: f64,
    /// Derived projection of `unit_price × quantity`. Recompute after
    /// mutating either factor.
    pub total_value: f64,
    pub order_date: NaiveDate,
    /// `None` means "not yet invoiced", not a fault.
    pub invoiced_date: Option<NaiveDate>,
    pub expected_delivery: Option<NaiveDate>,
    pub status: OrderStatus,
    pub extra: Vec<String>,
}

impl OrderLine {
    pub fn recompute_total(&mut self) {
        self.total_value = self.unit_price * self.quantity;
    }
}
