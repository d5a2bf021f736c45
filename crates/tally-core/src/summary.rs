//! # Summary Aggregator
//!
//! Reduces a record set into the totals the dashboard shows. Summaries are
//! derived values: recomputed on demand, never persisted.
//!
//! ## Two Views
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Summary Views                                    │
//! │                                                                         │
//! │  filtered records ────────────► summarize() ──────────► overall totals │
//! │  (from FilterCriteria::apply)                                           │
//! │                                                                         │
//! │  all records + today ─────────► summarize_today() ────► today's totals │
//! │  (fixed date == today equality, independent of FilterCriteria)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::metrics::{line_profit, line_revenue};
use crate::types::{CustomerType, SaleRecord};

// =============================================================================
// Summary
// =============================================================================

/// Aggregate financial and count totals over a record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sum of line revenue across the set.
    pub total_revenue: f64,

    /// Sum of line profit across the set.
    pub total_profit: f64,

    /// Records sold to new customers.
    pub new_customer_count: usize,

    /// Records sold to returning customers.
    pub returning_customer_count: usize,
}

// =============================================================================
// Aggregation
// =============================================================================

/// Sums revenue and profit and buckets records by customer type.
///
/// Exactly two buckets exist: `New` counts as new, everything else counts
/// as returning. Validation keeps a third value from ever occurring; the
/// bucket policy mirrors the else-branch the journal has always used.
///
/// Accepts any iterator of borrowed records, so both a full slice and the
/// borrowed view produced by the filter engine work:
///
/// ```
/// use tally_core::filter::FilterCriteria;
/// use tally_core::summary::summarize;
///
/// let records: Vec<tally_core::SaleRecord> = Vec::new();
/// let overall = summarize(&records);
/// let filtered = summarize(FilterCriteria::default().apply(&records));
/// assert_eq!(overall, filtered);
/// ```
pub fn summarize<'a, I>(records: I) -> Summary
where
    I: IntoIterator<Item = &'a SaleRecord>,
{
    let mut summary = Summary::default();

    for record in records {
        summary.total_revenue += line_revenue(record);
        summary.total_profit += line_profit(record);
        match record.customer_type {
            CustomerType::New => summary.new_customer_count += 1,
            CustomerType::Returning => summary.returning_customer_count += 1,
        }
    }

    summary
}

/// Totals for the caller-supplied current date only.
///
/// This is a fixed equality on `date`, not a [`crate::filter::FilterCriteria`]
/// query; the dashboard's "today" tiles never inherit the list's filters.
pub fn summarize_today(records: &[SaleRecord], today: NaiveDate) -> Summary {
    summarize(records.iter().filter(|record| record.date == today))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentMethod;

    fn record(date: &str, ct: CustomerType, quantity: i64, unit_price: f64) -> SaleRecord {
        SaleRecord {
            id: format!("{date}-{quantity}"),
            date: date.parse().unwrap(),
            customer_type: ct,
            item_name: "Item".to_string(),
            quantity,
            unit_price,
            cost_per_unit: None,
            discount: 0.0,
            payment_method: PaymentMethod::Cash,
            notes: None,
        }
    }

    #[test]
    fn test_empty_set_sums_to_zero() {
        let records: Vec<SaleRecord> = Vec::new();
        assert_eq!(summarize(&records), Summary::default());
    }

    #[test]
    fn test_totals_and_buckets() {
        let mut priced = record("2025-01-01", CustomerType::New, 2, 500.0);
        priced.cost_per_unit = Some(200.0);
        let records = vec![
            priced,
            record("2025-01-02", CustomerType::Returning, 1, 250.0),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.total_revenue, 1250.0);
        // 600 from the costed line, 250 from the unknown-cost line.
        assert_eq!(summary.total_profit, 850.0);
        assert_eq!(summary.new_customer_count, 1);
        assert_eq!(summary.returning_customer_count, 1);
    }

    #[test]
    fn test_bucket_counts_cover_every_record() {
        let records = vec![
            record("2025-01-01", CustomerType::New, 1, 10.0),
            record("2025-01-02", CustomerType::Returning, 1, 10.0),
            record("2025-01-03", CustomerType::Returning, 1, 10.0),
            record("2025-01-04", CustomerType::New, 1, 10.0),
        ];
        let summary = summarize(&records);
        assert_eq!(
            summary.new_customer_count + summary.returning_customer_count,
            records.len()
        );
    }

    #[test]
    fn test_today_view_is_a_date_equality() {
        let records = vec![
            record("2025-03-01", CustomerType::New, 1, 100.0),
            record("2025-03-02", CustomerType::New, 1, 40.0),
            record("2025-03-02", CustomerType::Returning, 2, 30.0),
        ];

        let today = "2025-03-02".parse().unwrap();
        let summary = summarize_today(&records, today);
        assert_eq!(summary.total_revenue, 100.0);
        assert_eq!(summary.new_customer_count, 1);
        assert_eq!(summary.returning_customer_count, 1);

        let other_day = "2025-03-03".parse().unwrap();
        assert_eq!(summarize_today(&records, other_day), Summary::default());
    }
}
