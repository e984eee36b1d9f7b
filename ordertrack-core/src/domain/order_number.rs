//! The order-number grammar: a bare base, or a base plus an increment suffix.
//!
//! Chained-customer order numbers encode partial shipments as `base-NN`:
//! the highest suffix present is the only undelivered increment, and its
//! existence implies every lower suffix (and the bare base) was delivered.

use thiserror::Error;

/// A parsed order number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderNumber {
    /// Single-shipment order, e.g. `"1234"`.
    Bare { base: String },
    /// The `suffix`th increment of a multi-part order, e.g. `"1234-02"`.
    Suffixed { base: String, suffix: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderNumberError {
    #[error("order number '{0}' has a non-numeric suffix")]
    NonNumericSuffix(String),
    #[error("order number '{0}' has an empty base")]
    EmptyBase(String),
}

impl OrderNumber {
    /// Parse the literal spreadsheet value.
    ///
    /// The grammar has exactly one optional `-NN` component. A second `-`,
    /// an empty or non-numeric suffix, and an empty base are all parse
    /// errors; callers classify those as per-row data-quality problems.
    pub fn parse(raw: &str) -> Result<OrderNumber, OrderNumberError> {
        match raw.split_once('-') {
            None => {
                if raw.is_empty() {
                    return Err(OrderNumberError::EmptyBase(raw.to_string()));
                }
                Ok(OrderNumber::Bare {
                    base: raw.to_string(),
                })
            }
            Some((base, suffix)) => {
                if base.is_empty() {
                    return Err(OrderNumberError::EmptyBase(raw.to_string()));
                }
                let suffix = suffix
                    .parse::<u32>()
                    .map_err(|_| OrderNumberError::NonNumericSuffix(raw.to_string()))?;
                Ok(OrderNumber::Suffixed {
                    base: base.to_string(),
                    suffix,
                })
            }
        }
    }

    pub fn base(&self) -> &str {
        match self {
            OrderNumber::Bare { base } => base,
            OrderNumber::Suffixed { base, .. } => base,
        }
    }

    /// Key form of the `n`th increment of `base`, zero-padded to at least
    /// two digits: `suffix_key("1234", 3)` is `"1234-03"`.
    pub fn suffix_key(base: &str, n: u32) -> String {
        format!("{base}-{n:02}")
    }
}
