//! Ordertrack Core — normalization, status resolution, and aggregation.
//!
//! This crate contains the heart of the order-tracking pipeline:
//! - Domain types (raw records, order lines, order numbers, statuses)
//! - Normalization (numeric/date coercion, exclusion filters, derived totals)
//! - Two-pass status engine (suffix-chain resolver, date fallback)
//! - Aggregate summary reduction
//!
//! No I/O lives here. The runner crate owns files and artifacts; any
//! presentation layer consumes the resolved dataset and summary.

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod engine;
pub mod normalize;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: core types are Send + Sync.
    ///
    /// Each load is an independent computation, but callers may hand the
    /// resolved dataset to other threads (a UI worker, a server handler).
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::RawOrderRecord>();
        require_sync::<domain::RawOrderRecord>();
        require_send::<domain::OrderLine>();
        require_sync::<domain::OrderLine>();
        require_send::<domain::OrderStatus>();
        require_sync::<domain::OrderStatus>();
        require_send::<config::EngineConfig>();
        require_sync::<config::EngineConfig>();
        require_send::<normalize::QualityIssue>();
        require_sync::<normalize::QualityIssue>();
        require_send::<aggregate::AggregateSummary>();
        require_sync::<aggregate::AggregateSummary>();
        require_send::<engine::ComputeOutput>();
        require_sync::<engine::ComputeOutput>();
    }
}
