//! # Metric Calculator
//!
//! Per-record derived monetary values.
//!
//! ## Where Metrics Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Derived Metric Flow                                 │
//! │                                                                         │
//! │  SaleRecord ──┬──► line_revenue() ──┬──► Summary.total_revenue         │
//! │               │                     └──► export column "lineRevenue"   │
//! │               │                                                         │
//! │               └──► line_profit() ───┬──► Summary.total_profit          │
//! │                                     └──► export column "lineProfit"    │
//! │                                                                         │
//! │  Both are recomputed on demand and never persisted.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The numeric fields these functions read have already passed through the
//! lenient deserialization boundary ([`crate::lenient`]), so garbage stored
//! by earlier versions arrives here as 0 / `None` and the totals always
//! compute.

use crate::types::SaleRecord;

// =============================================================================
// Per-Record Metrics
// =============================================================================

/// Revenue for one sale line: `quantity * unit_price - discount`.
pub fn line_revenue(record: &SaleRecord) -> f64 {
    record.quantity as f64 * record.unit_price - record.discount
}

/// Profit for one sale line.
///
/// With a known per-unit cost this is
/// `quantity * (unit_price - cost) - discount`. When the cost is unknown
/// the line's profit equals its revenue: unknown cost is treated as zero
/// cost. That fallback is a business rule of the journal, not an omission;
/// it keeps profit totals meaningful for stores that never enter costs.
pub fn line_profit(record: &SaleRecord) -> f64 {
    match record.cost_per_unit {
        Some(cost) => record.quantity as f64 * (record.unit_price - cost) - record.discount,
        None => line_revenue(record),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
