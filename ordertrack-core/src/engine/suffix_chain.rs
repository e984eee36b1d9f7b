//! Suffix-chain resolver for the chained customer's orders.
//!
//! Order numbers for this customer encode a sequence of partial
//! shipments: a bare number is a single complete order, and `base-NN` is
//! the NNth increment of a multi-part order. The presence of a suffix
//! implies every lower increment, and the bare base, was already
//! delivered; the highest suffix present is the one still open.
//!
//! The resolver builds a status map keyed by literal order-number strings
//! in two passes, then applies it per row. The back-fill pass only ever
//! writes `Delivered` and never reads prior values, so the final statuses
//! are identical under any input row order.

use crate::domain::{OrderLine, OrderNumber, OrderStatus, Resolution};
use crate::normalize::{QualityIssue, QualityIssueKind};
use std::collections::HashMap;

/// Resolve the chained customer's rows.
///
/// Returns one `Resolution` per input line, index-aligned: every
/// chained-customer row comes back `Resolved` (so the date fallback never
/// touches it), all other rows `Unresolved`. Malformed order numbers are
/// recorded as quality issues, contribute nothing to the map, and resolve
/// to the row's prior status.
pub fn resolve(
    lines: &[OrderLine],
    chained_customer: &str,
    issues: &mut Vec<QualityIssue>,
) -> Vec<Resolution> {
    let mut statuses: HashMap<String, OrderStatus> = HashMap::new();

    // First pass: seed the map. A suffixed number marks its bare base
    // delivered and itself pending; a bare number not already present
    // marks itself delivered.
    for (row, line) in lines.iter().enumerate() {
        if line.customer != chained_customer {
            continue;
        }
        match OrderNumber::parse(&line.order_number) {
            Ok(OrderNumber::Suffixed { base, .. }) => {
                statuses.insert(base, OrderStatus::Delivered);
                statuses.insert(line.order_number.clone(), OrderStatus::Pending);
            }
            Ok(OrderNumber::Bare { base }) => {
                statuses.entry(base).or_insert(OrderStatus::Delivered);
            }
            Err(_) => {
                issues.push(QualityIssue {
                    row,
                    order_number: line.order_number.clone(),
                    kind: QualityIssueKind::MalformedSuffix {
                        value: line.order_number.clone(),
                    },
                });
            }
        }
    }

    // Second pass: back-fill. Every increment below a present suffix is
    // delivered, overriding any Pending seeded above. The suffix itself
    // stays pending: it is the newest, not-yet-delivered increment.
    for line in lines {
        if line.customer != chained_customer {
            continue;
        }
        if let Ok(OrderNumber::Suffixed { base, suffix }) = OrderNumber::parse(&line.order_number) {
            for n in 0..suffix {
                statuses.insert(OrderNumber::suffix_key(&base, n), OrderStatus::Delivered);
            }
        }
    }

    // Apply: literal lookup per chained row; a miss keeps the row's prior
    // status (the Pending default set by normalization).
    lines
        .iter()
        .map(|line| {
            if line.customer == chained_customer {
                let status = statuses
                    .get(line.order_number.as_str())
                    .copied()
                    .unwrap_or(line.status);
                Resolution::Resolved(status)
            } else {
                Resolution::Unresolved
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn line(order_number: &str, customer: &str) -> OrderLine {
        OrderLine {
            order_number: order_number.into(),
            customer: customer.into(),
            unit_price: 1.0,
            quantity: 1.0,
            total_value: 1.0,
            order_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            invoiced_date: None,
            expected_delivery: None,
            status: OrderStatus::Pending,
            extra: vec![],
        }
    }

    fn resolve_statuses(numbers: &[&str]) -> Vec<OrderStatus> {
        let lines: Vec<OrderLine> = numbers.iter().map(|n| line(n, "COLINA")).collect();
        let mut issues = Vec::new();
        resolve(&lines, "COLINA", &mut issues)
            .into_iter()
            .map(|r| match r {
                Resolution::Resolved(s) => s,
                Resolution::Unresolved => panic!("chained row left unresolved"),
            })
            .collect()
    }

    #[test]
    fn chain_marks_only_highest_suffix_pending() {
        let statuses = resolve_statuses(&["100", "100-00", "100-01", "100-02"]);
        assert_eq!(
            statuses,
            vec![
                OrderStatus::Delivered,
                OrderStatus::Delivered,
                OrderStatus::Delivered,
                OrderStatus::Pending,
            ]
        );
    }

    #[test]
    fn bare_only_order_is_delivered() {
        assert_eq!(resolve_statuses(&["500"]), vec![OrderStatus::Delivered]);
    }

    #[test]
    fn suffix_implies_missing_bare_base_delivered() {
        // The bare "200" row is present but "200-00" is not: the back-fill
        // still covers it.
        let statuses = resolve_statuses(&["200", "200-01"]);
        assert_eq!(
            statuses,
            vec![OrderStatus::Delivered, OrderStatus::Pending]
        );
    }

    #[test]
    fn lower_suffix_without_its_own_row_does_not_matter() {
        // Only the newest increment appears in the data.
        assert_eq!(resolve_statuses(&["300-04"]), vec![OrderStatus::Pending]);
    }

    #[test]
    fn independent_chains_do_not_interfere() {
        let statuses = resolve_statuses(&["100-01", "200", "100-00", "300-00"]);
        assert_eq!(
            statuses,
            vec![
                OrderStatus::Pending,   // 100-01: highest of chain 100
                OrderStatus::Delivered, // 200: bare
                OrderStatus::Delivered, // 100-00: back-filled by 100-01
                OrderStatus::Pending,   // 300-00: highest of chain 300
            ]
        );
    }

    #[test]
    fn result_is_order_independent() {
        let forward = resolve_statuses(&["100", "100-00", "100-01", "100-02"]);
        let mut reversed = resolve_statuses(&["100-02", "100-01", "100-00", "100"]);
        reversed.reverse();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn repeated_identical_keys_are_idempotent() {
        let statuses = resolve_statuses(&["100-02", "100-02", "100-01"]);
        assert_eq!(
            statuses,
            vec![
                OrderStatus::Pending,
                OrderStatus::Pending,
                OrderStatus::Delivered,
            ]
        );
    }

    #[test]
    fn unpadded_literal_is_not_backfilled() {
        // Back-fill keys are zero-padded; the literal "100-2" never
        // matches "100-02", so the row keeps its own seeded status.
        let statuses = resolve_statuses(&["100-2", "100-03"]);
        assert_eq!(statuses, vec![OrderStatus::Pending, OrderStatus::Pending]);
    }

    #[test]
    fn wide_suffix_backfills_past_two_digits() {
        let statuses = resolve_statuses(&["400-100", "400-99"]);
        assert_eq!(
            statuses,
            vec![OrderStatus::Pending, OrderStatus::Delivered]
        );
    }

    #[test]
    fn malformed_suffix_is_reported_and_stays_pending() {
        let lines = vec![line("100-XY", "COLINA"), line("100-01", "COLINA")];
        let mut issues = Vec::new();
        let resolutions = resolve(&lines, "COLINA", &mut issues);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].row, 0);
        assert_eq!(
            issues[0].kind,
            QualityIssueKind::MalformedSuffix {
                value: "100-XY".into()
            }
        );
        // The malformed row resolves to its prior default.
        assert_eq!(resolutions[0], Resolution::Resolved(OrderStatus::Pending));
        // The rest of the chain still resolves.
        assert_eq!(resolutions[1], Resolution::Resolved(OrderStatus::Pending));
    }

    #[test]
    fn other_customers_are_left_unresolved() {
        let lines = vec![line("100-01", "ACME"), line("100-01", "COLINA")];
        let mut issues = Vec::new();
        let resolutions = resolve(&lines, "COLINA", &mut issues);
        assert_eq!(resolutions[0], Resolution::Unresolved);
        assert!(resolutions[1].is_resolved());
    }

    #[test]
    fn chained_rows_ignore_invoice_dates() {
        // Suffix chaining fully overrides the date-based fallback.
        let mut l = line("100-01", "COLINA");
        l.invoiced_date = Some(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        let mut issues = Vec::new();
        let resolutions = resolve(&[l], "COLINA", &mut issues);
        assert_eq!(resolutions[0], Resolution::Resolved(OrderStatus::Pending));
    }
}
