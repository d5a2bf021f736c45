//! # Legacy Schema Conversion
//!
//! The previous version of this tool was a launch tracker: each entry held
//! a `launchDate`, a `result` bucket, and a signed `pnl`. This module is
//! the pure half of the one-shot migration that turns those entries into
//! sale records. Reading the deprecated store keys and erasing them
//! afterwards is tally-store's job.
//!
//! ## Conversion
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Legacy Record Conversion                            │
//! │                                                                         │
//! │  { launchDate, result, pnl } ──► SaleDraft {                            │
//! │                                    date:        launchDate, or today   │
//! │                                                 when absent/unreadable │
//! │                                    customer:    "returningcustomers"   │
//! │                                                 → Returning,           │
//! │                                                 anything else → New    │
//! │                                    item_name:   "Sale"                 │
//! │                                    quantity:    1                      │
//! │                                    unit_price:  |lenient(pnl)|         │
//! │                                    cost:        unknown                │
//! │                                    discount:    0                      │
//! │                                    payment:     cash                   │
//! │                                    notes:       migration marker       │
//! │                                  }                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The legacy `result` field conflates `null` with `"newcustomers"`; both
//! map to `New`. That quirk is preserved deliberately rather than guessed
//! around, so migrated data means exactly what the old tool recorded.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::lenient::number_or_zero;
use crate::types::{CustomerType, PaymentMethod, SaleDraft};

// =============================================================================
// Constants
// =============================================================================

/// Item name given to every migrated record.
pub const MIGRATED_ITEM_NAME: &str = "Sale";

/// Note marking a record as produced by migration.
pub const MIGRATED_NOTE: &str = "Migrated from launch tracker";

/// The legacy `result` value that maps to a returning customer.
const RETURNING_RESULT: &str = "returningcustomers";

// =============================================================================
// Legacy Record
// =============================================================================

/// One entry of the deprecated schema. Read-only input to migration; never
/// persisted after it.
///
/// Field types are tolerant: `pnl` was stored both as a number and as a
/// numeric string, and either text field may be missing entirely.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyRecord {
    /// ISO date of the launch, when recorded.
    #[serde(default)]
    pub launch_date: Option<String>,

    /// `null`, `"newcustomers"`, or `"returningcustomers"`.
    #[serde(default)]
    pub result: Option<String>,

    /// Profit-and-loss figure, number or numeric text.
    #[serde(default)]
    pub pnl: Value,
}

// =============================================================================
// Conversion
// =============================================================================

/// Converts the deprecated blob into current-schema drafts.
///
/// `None`, unparseable JSON, and a non-array blob all yield an empty vec;
/// migration never fails. `today` stands in for launch dates that are
/// absent or unreadable.
pub fn convert_legacy(blob: Option<&str>, today: NaiveDate) -> Vec<SaleDraft> {
    let Some(blob) = blob else {
        return Vec::new();
    };

    let records: Vec<LegacyRecord> = match serde_json::from_str(blob) {
        Ok(records) => records,
        Err(_) => return Vec::new(),
    };

    records
        .into_iter()
        .map(|record| convert_record(record, today))
        .collect()
}

/// Converts a single legacy record.
fn convert_record(record: LegacyRecord, today: NaiveDate) -> SaleDraft {
    let revenue = number_or_zero(&record.pnl).abs();

    let customer_type = match record.result.as_deref() {
        Some(RETURNING_RESULT) => CustomerType::Returning,
        // null and "newcustomers" land here together, as the old tool
        // recorded them.
        _ => CustomerType::New,
    };

    let date = record
        .launch_date
        .as_deref()
        .and_then(|raw| raw.parse::<NaiveDate>().ok())
        .unwrap_or(today);

    SaleDraft {
        date,
        customer_type,
        item_name: MIGRATED_ITEM_NAME.to_string(),
        quantity: 1,
        unit_price: revenue,
        cost_per_unit: None,
        discount: 0.0,
        payment_method: PaymentMethod::Cash,
        notes: Some(MIGRATED_NOTE.to_string()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        "2025-06-15".parse().unwrap()
    }

    #[test]
    fn test_absent_blob_yields_nothing() {
        assert!(convert_legacy(None, today()).is_empty());
    }

    #[test]
    fn test_garbage_blob_yields_nothing() {
        assert!(convert_legacy(Some("not json"), today()).is_empty());
        assert!(convert_legacy(Some("{\"not\":\"an array\"}"), today()).is_empty());
    }

    #[test]
    fn test_returning_result_with_text_pnl() {
        let blob = r#"[{"launchDate":"2024-05-01","result":"returningcustomers","pnl":"-150"}]"#;
        let drafts = convert_legacy(Some(blob), today());
        assert_eq!(drafts.len(), 1);

        let draft = &drafts[0];
        assert_eq!(draft.customer_type, CustomerType::Returning);
        assert_eq!(draft.unit_price, 150.0);
        assert_eq!(draft.date, "2024-05-01".parse().unwrap());
        assert_eq!(draft.item_name, MIGRATED_ITEM_NAME);
        assert_eq!(draft.quantity, 1);
        assert_eq!(draft.cost_per_unit, None);
        assert_eq!(draft.discount, 0.0);
        assert_eq!(draft.payment_method, PaymentMethod::Cash);
        assert_eq!(draft.notes.as_deref(), Some(MIGRATED_NOTE));
    }

    #[test]
    fn test_null_and_newcustomers_both_map_to_new() {
        let blob = r#"[
            {"launchDate":"2024-01-01","result":null,"pnl":100},
            {"launchDate":"2024-01-02","result":"newcustomers","pnl":200}
        ]"#;
        let drafts = convert_legacy(Some(blob), today());
        assert_eq!(drafts.len(), 2);
        assert!(drafts
            .iter()
            .all(|d| d.customer_type == CustomerType::New));
    }

    #[test]
    fn test_non_numeric_pnl_becomes_zero() {
        let blob = r#"[{"launchDate":"2024-03-01","result":null,"pnl":"n/a"}]"#;
        let drafts = convert_legacy(Some(blob), today());
        assert_eq!(drafts[0].unit_price, 0.0);
    }

    #[test]
    fn test_missing_or_bad_date_falls_back_to_today() {
        let blob = r#"[
            {"result":null,"pnl":10},
            {"launchDate":"soon","result":null,"pnl":20}
        ]"#;
        let drafts = convert_legacy(Some(blob), today());
        assert!(drafts.iter().all(|d| d.date == today()));
    }
}
