//! # Export Serializer
//!
//! Renders a record set into delimited tabular text for download. A pure
//! serializer: it builds an immutable string and knows nothing about files,
//! downloads, or filenames (the UI layer owns those).
//!
//! ## Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Export Format                                   │
//! │                                                                         │
//! │  date,customerType,itemName,quantity,unitPrice,costPerUnit,discount,   │
//! │  paymentMethod,notes,lineRevenue,lineProfit                             │
//! │  2025-01-01,new,"Soap",2,500,,0,cash,"",1000,1000                       │
//! │                                                                         │
//! │  • fixed column order, derived metrics last                             │
//! │  • the two free-text columns (itemName, notes) are always quoted,       │
//! │    internal quotes doubled                                              │
//! │  • unknown costPerUnit is an empty field                                │
//! │  • the header row is always present; whether an empty export is worth   │
//! │    downloading at all is the caller's decision                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The csv crate is deliberately not used here: its quoting policy is per
//! writer, while this format quotes exactly the two text columns no matter
//! what they contain.

use crate::metrics::{line_profit, line_revenue};
use crate::types::SaleRecord;

// =============================================================================
// Format Constants
// =============================================================================

/// Fixed column order of the export, derived metrics last.
pub const EXPORT_COLUMNS: [&str; 11] = [
    "date",
    "customerType",
    "itemName",
    "quantity",
    "unitPrice",
    "costPerUnit",
    "discount",
    "paymentMethod",
    "notes",
    "lineRevenue",
    "lineProfit",
];

// =============================================================================
// Serialization
// =============================================================================

/// Serializes a record set as delimited text.
///
/// Each row carries the stored fields plus the derived `lineRevenue` and
/// `lineProfit` columns. Rows are newline-terminated; the header row is
/// emitted even for an empty set.
pub fn to_delimited_text(records: &[SaleRecord]) -> String {
    let mut out = String::new();
    out.push_str(&EXPORT_COLUMNS.join(","));
    out.push('\n');

    for record in records {
        let row = [
            record.date.to_string(),
            record.customer_type.as_str().to_string(),
            quote_text(&record.item_name),
            record.quantity.to_string(),
            format_number(record.unit_price),
            record
                .cost_per_unit
                .map(format_number)
                .unwrap_or_default(),
            format_number(record.discount),
            record.payment_method.as_str().to_string(),
            quote_text(record.notes.as_deref().unwrap_or("")),
            format_number(line_revenue(record)),
            format_number(line_profit(record)),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Wraps a text field in quotes, doubling any internal quote characters.
fn quote_text(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Plain decimal form of a numeric column (no trailing `.0` for integers).
fn format_number(value: f64) -> String {
    value.to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
