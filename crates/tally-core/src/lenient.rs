//! # Lenient Numeric Parsing
//!
//! The previous version of this tool stored everything in a browser
//! key-value store, where a "number" could just as easily arrive as
//! `1500`, `"1500"`, `"-150"`, or `"n/a"`. Financial totals must stay
//! computable over that data, so every numeric read from untrusted blobs
//! goes through these helpers: anything that cannot be read as a number
//! becomes 0 (or `None` for optional fields).
//!
//! This is a deliberate business rule, not defensive sloppiness: the
//! journal must always render, never crash, regardless of stored-data
//! corruption.
//!
//! ## Where It Applies
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Lenient Parse Boundary                               │
//! │                                                                         │
//! │  persisted sales blob ──► serde deserializers below ──► typed fields   │
//! │                                                                         │
//! │  legacy "pnl" value ─────► number_or_zero() ──────────► migrated price │
//! │                                                                         │
//! │  Past this boundary the numeric fields of a SaleRecord are plain       │
//! │  i64/f64 values and the metric calculator never sees garbage.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// =============================================================================
// Value Coercion
// =============================================================================

/// Reads a JSON value as a number, coercing anything unreadable to 0.
///
/// ## Coercion Table
/// - number            -> itself
/// - numeric string    -> parsed value (whitespace trimmed)
/// - everything else   -> 0
pub fn number_or_zero(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Reads a JSON value as an optional number.
///
/// Unlike [`number_or_zero`] this keeps "absent" distinct from "zero":
/// `null`, a missing field, or garbage all come back as `None`. Used for
/// the optional per-unit cost, where `None` means "unknown cost" and the
/// profit calculation falls back to revenue. (Coercing garbage cost to 0
/// would produce the same profit, since zero cost also makes profit equal
/// revenue; `None` keeps the record honest about what was stored.)
pub fn number_or_none(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

// =============================================================================
// Serde Deserializers
// =============================================================================
// Attached to SaleRecord's numeric fields with #[serde(deserialize_with)].
// They accept whatever JSON shape is present and coerce instead of failing,
// so one garbled field never collapses the whole collection to empty.

/// Deserializes an `f64`, coercing non-numeric input to 0.
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_or_zero(&value))
}

/// Deserializes an `i64`, coercing non-numeric input to 0.
///
/// Fractional input truncates toward zero, matching how the original tool
/// read quantities.
pub fn i64_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_or_zero(&value) as i64)
}

/// Deserializes an `Option<f64>`, mapping non-numeric input to `None`.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_or_none(&value))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_or_zero_accepts_numbers() {
        assert_eq!(number_or_zero(&json!(1500)), 1500.0);
        assert_eq!(number_or_zero(&json!(-150.5)), -150.5);
        assert_eq!(number_or_zero(&json!(0)), 0.0);
    }

    #[test]
    fn test_number_or_zero_parses_strings() {
        assert_eq!(number_or_zero(&json!("1500")), 1500.0);
        assert_eq!(number_or_zero(&json!("-150")), -150.0);
        assert_eq!(number_or_zero(&json!("  42.5  ")), 42.5);
    }

    #[test]
    fn test_number_or_zero_coerces_garbage() {
        assert_eq!(number_or_zero(&json!("n/a")), 0.0);
        assert_eq!(number_or_zero(&json!("")), 0.0);
        assert_eq!(number_or_zero(&json!(null)), 0.0);
        assert_eq!(number_or_zero(&json!(true)), 0.0);
        assert_eq!(number_or_zero(&json!({"nested": 1})), 0.0);
    }

    #[test]
    fn test_number_or_none_keeps_absence() {
        assert_eq!(number_or_none(&json!(200)), Some(200.0));
        assert_eq!(number_or_none(&json!("200")), Some(200.0));
        assert_eq!(number_or_none(&json!(null)), None);
        assert_eq!(number_or_none(&json!("unknown")), None);
    }

    #[test]
    fn test_deserializers_via_struct() {
        #[derive(serde::Deserialize)]
        struct Probe {
            #[serde(deserialize_with = "i64_or_zero")]
            quantity: i64,
            #[serde(deserialize_with = "f64_or_zero")]
            unit_price: f64,
            #[serde(default, deserialize_with = "opt_f64")]
            cost: Option<f64>,
        }

        let probe: Probe =
            serde_json::from_value(json!({"quantity": "3", "unit_price": "oops", "cost": "12.5"}))
                .unwrap();
        assert_eq!(probe.quantity, 3);
        assert_eq!(probe.unit_price, 0.0);
        assert_eq!(probe.cost, Some(12.5));

        let probe: Probe =
            serde_json::from_value(json!({"quantity": 2.9, "unit_price": 500, "cost": null}))
                .unwrap();
        assert_eq!(probe.quantity, 2);
        assert_eq!(probe.unit_price, 500.0);
        assert_eq!(probe.cost, None);
    }
}
