//! # Domain Types
//!
//! Core domain types for the Tally sales journal.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   SaleRecord    │   │    SaleDraft    │   │     Summary     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  all record     │   │  total_revenue  │       │
//! │  │  date           │   │  fields except  │   │  total_profit   │       │
//! │  │  item_name      │   │  id; the shape  │   │  new/returning  │       │
//! │  │  quantity       │   │  the UI submits │   │  counts         │       │
//! │  │  unit_price ... │   │  for create/    │   │  (summary.rs)   │       │
//! │  └─────────────────┘   │  update         │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  CustomerType   │   │  PaymentMethod  │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  New            │   │  Cash           │                             │
//! │  │  Returning      │   │  Card           │                             │
//! │  └─────────────────┘   │  Transfer       │                             │
//! │                        │  Other          │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Contract
//! All types serialize with camelCase field names (`itemName`, `unitPrice`,
//! `costPerUnit`). The persisted blob and the UI layer both use these names,
//! which are the names the previous version of the tool stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lenient;

// =============================================================================
// Customer Type
// =============================================================================

/// Whether the sale went to a first-time or a returning customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    /// First purchase from this customer.
    New,
    /// Repeat customer.
    Returning,
}

impl CustomerType {
    /// The lowercase wire/export form.
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerType::New => "new",
            CustomerType::Returning => "returning",
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Physical cash payment. The default for migrated records.
    Cash,
    /// Card payment on an external terminal.
    Card,
    /// Bank transfer.
    Transfer,
    /// Anything the till drawer has no button for.
    Other,
}

impl PaymentMethod {
    /// The lowercase wire/export form.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Transfer => "transfer",
            PaymentMethod::Other => "other",
        }
    }
}

// =============================================================================
// Sale Record
// =============================================================================

/// A single recorded sale transaction. The core persisted entity.
///
/// ## Identity
/// `id` is a UUID v4 string assigned by the repository at creation. It is
/// immutable and never reused, even across delete/recreate cycles.
///
/// ## Lenient Numeric Fields
/// The numeric fields deserialize through [`crate::lenient`]: a blob that
/// stores `"quantity": "2"` or `"unitPrice": "n/a"` still loads, with
/// unreadable values coerced to 0 (or `None` for the optional cost). Records
/// admitted through validation never contain such values; the coercion
/// exists so data written by earlier versions keeps rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    /// Unique identifier (UUID v4), assigned at creation.
    pub id: String,

    /// Calendar date of the sale (ISO `YYYY-MM-DD` on the wire).
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// New or returning customer.
    pub customer_type: CustomerType,

    /// What was sold. Non-empty.
    #[serde(default)]
    pub item_name: String,

    /// Units sold. At least 1 for admitted records.
    #[serde(default, deserialize_with = "lenient::i64_or_zero")]
    pub quantity: i64,

    /// Price per unit. Non-negative.
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub unit_price: f64,

    /// Cost per unit, when known. `None` means "unknown cost".
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub cost_per_unit: Option<f64>,

    /// Flat discount applied to the line. Defaults to 0.
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub discount: f64,

    /// How the customer paid.
    pub payment_method: PaymentMethod,

    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl SaleRecord {
    /// Builds a record from a draft plus its assigned id.
    ///
    /// Only the repository calls this after validation; the draft's fields
    /// are taken verbatim.
    pub fn from_draft(id: impl Into<String>, draft: SaleDraft) -> Self {
        SaleRecord {
            id: id.into(),
            date: draft.date,
            customer_type: draft.customer_type,
            item_name: draft.item_name,
            quantity: draft.quantity,
            unit_price: draft.unit_price,
            cost_per_unit: draft.cost_per_unit,
            discount: draft.discount,
            payment_method: draft.payment_method,
            notes: draft.notes,
        }
    }

    /// The id-less draft form, used to pre-fill an edit form.
    pub fn to_draft(&self) -> SaleDraft {
        SaleDraft {
            date: self.date,
            customer_type: self.customer_type,
            item_name: self.item_name.clone(),
            quantity: self.quantity,
            unit_price: self.unit_price,
            cost_per_unit: self.cost_per_unit,
            discount: self.discount,
            payment_method: self.payment_method,
            notes: self.notes.clone(),
        }
    }
}

// =============================================================================
// Sale Draft
// =============================================================================

/// The field values the UI submits for create/update: a [`SaleRecord`]
/// without the `id`.
///
/// Drafts pass through [`crate::validation::validate_draft`] before the
/// repository admits them; an update replaces the whole stored record with
/// the draft (there is no partial-field patch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleDraft {
    /// Calendar date of the sale.
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// New or returning customer.
    pub customer_type: CustomerType,

    /// What was sold.
    pub item_name: String,

    /// Units sold.
    pub quantity: i64,

    /// Price per unit.
    pub unit_price: f64,

    /// Cost per unit, when known.
    #[serde(default)]
    pub cost_per_unit: Option<f64>,

    /// Flat discount applied to the line.
    #[serde(default)]
    pub discount: f64,

    /// How the customer paid.
    pub payment_method: PaymentMethod,

    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_json() -> serde_json::Value {
        json!({
            "id": "r-1",
            "date": "2025-01-01",
            "customerType": "new",
            "itemName": "Soap",
            "quantity": 2,
            "unitPrice": 500.0,
            "costPerUnit": null,
            "discount": 0.0,
            "paymentMethod": "cash",
            "notes": null
        })
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let record: SaleRecord = serde_json::from_value(record_json()).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, record_json());
    }

    #[test]
    fn test_lenient_load_of_garbled_numerics() {
        let record: SaleRecord = serde_json::from_value(json!({
            "id": "r-2",
            "date": "2024-11-30",
            "customerType": "returning",
            "itemName": "Cream",
            "quantity": "2",
            "unitPrice": "oops",
            "costPerUnit": "n/a",
            "paymentMethod": "cash"
        }))
        .unwrap();

        assert_eq!(record.quantity, 2);
        assert_eq!(record.unit_price, 0.0);
        assert_eq!(record.cost_per_unit, None);
        assert_eq!(record.discount, 0.0);
        assert_eq!(record.notes, None);
    }

    #[test]
    fn test_unknown_payment_method_fails_structurally() {
        // Leniency is reserved for numeric fields; a record with an
        // unrecognized enum value is malformed, and the repository's load
        // path turns that into the empty collection.
        let mut value = record_json();
        value["paymentMethod"] = json!("cheque");
        assert!(serde_json::from_value::<SaleRecord>(value).is_err());
    }

    #[test]
    fn test_draft_round_trip_preserves_fields() {
        let record: SaleRecord = serde_json::from_value(record_json()).unwrap();
        let rebuilt = SaleRecord::from_draft(record.id.clone(), record.to_draft());
        assert_eq!(rebuilt, record);
    }

    #[test]
    fn test_enum_wire_forms() {
        assert_eq!(CustomerType::New.as_str(), "new");
        assert_eq!(CustomerType::Returning.as_str(), "returning");
        assert_eq!(PaymentMethod::Cash.as_str(), "cash");
        assert_eq!(
            serde_json::to_value(PaymentMethod::Transfer).unwrap(),
            json!("transfer")
        );
    }
}
