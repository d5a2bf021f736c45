//! # Filter Engine
//!
//! Evaluates a transient criteria object against a record set, producing a
//! filtered view for display or export. Pure: no side effects, no mutation
//! of the input, borrowed results only.
//!
//! ## Predicate Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Filter Evaluation                                 │
//! │                                                                         │
//! │  record ──► date_from <= date? ──► date <= date_to? ──► customer       │
//! │             (when set)             (when set)           matches?        │
//! │                                                            │            │
//! │             search text found in ◄── payment matches? ◄────┘            │
//! │             itemName + notes?                                           │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │          all yes → keep          any no → drop                          │
//! │                                                                         │
//! │  Predicates are conjunctive; evaluation order never changes the        │
//! │  result set.                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{CustomerType, PaymentMethod, SaleRecord};

// =============================================================================
// Criteria Sentinels
// =============================================================================

/// Customer-type criterion with the `"all"` sentinel the UI sends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CustomerFilter {
    /// Match every customer type.
    #[default]
    All,
    New,
    Returning,
}

impl CustomerFilter {
    /// Exact match unless the sentinel is `All`.
    pub fn matches(&self, customer_type: CustomerType) -> bool {
        match self {
            CustomerFilter::All => true,
            CustomerFilter::New => customer_type == CustomerType::New,
            CustomerFilter::Returning => customer_type == CustomerType::Returning,
        }
    }
}

/// Payment-method criterion with the `"all"` sentinel the UI sends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFilter {
    /// Match every payment method.
    #[default]
    All,
    Cash,
    Card,
    Transfer,
    Other,
}

impl PaymentFilter {
    /// Exact match unless the sentinel is `All`.
    pub fn matches(&self, method: PaymentMethod) -> bool {
        match self {
            PaymentFilter::All => true,
            PaymentFilter::Cash => method == PaymentMethod::Cash,
            PaymentFilter::Card => method == PaymentMethod::Card,
            PaymentFilter::Transfer => method == PaymentMethod::Transfer,
            PaymentFilter::Other => method == PaymentMethod::Other,
        }
    }
}

// =============================================================================
// Filter Criteria
// =============================================================================

/// One query's worth of narrowing. Constructed per query, never persisted.
///
/// The default value (`All` sentinels, no bounds, empty search) matches
/// every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Inclusive lower date bound, when set.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub date_from: Option<NaiveDate>,

    /// Inclusive upper date bound, when set.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub date_to: Option<NaiveDate>,

    /// Customer-type criterion.
    #[serde(default)]
    pub customer_type: CustomerFilter,

    /// Payment-method criterion.
    #[serde(default)]
    pub payment_method: PaymentFilter,

    /// Case-insensitive substring searched in item name and notes.
    /// Empty matches everything.
    #[serde(default)]
    pub search_text: String,
}

impl FilterCriteria {
    /// Evaluates the criteria against a record set.
    ///
    /// Returns borrowed matches in input order; the input is never mutated.
    pub fn apply<'a>(&self, records: &'a [SaleRecord]) -> Vec<&'a SaleRecord> {
        let needle = self.search_text.trim().to_lowercase();
        records
            .iter()
            .filter(|record| self.keeps(record, &needle))
            .collect()
    }

    /// Single-record test with the search needle pre-lowered.
    fn keeps(&self, record: &SaleRecord, needle: &str) -> bool {
        if let Some(from) = self.date_from {
            if record.date < from {
                return false;
            }
        }

        if let Some(to) = self.date_to {
            if record.date > to {
                return false;
            }
        }

        if !self.customer_type.matches(record.customer_type) {
            return false;
        }

        if !self.payment_method.matches(record.payment_method) {
            return false;
        }

        if !needle.is_empty() {
            let haystack = format!(
                "{} {}",
                record.item_name,
                record.notes.as_deref().unwrap_or("")
            )
            .to_lowercase();
            if !haystack.contains(needle) {
                return false;
            }
        }

        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
