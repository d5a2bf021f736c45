//! # Validation Module
//!
//! Business rule validation for submitted sale drafts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI form (out of scope here)                                  │
//! │  ├── Field presence, basic format checks                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Business rules on the typed draft                                 │
//! │  └── Collects every failed field into ValidationErrors                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Repository admission                                         │
//! │  └── create/update re-run validate_draft, so no invalid record is     │
//! │      ever admitted to the collection regardless of caller discipline  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Type-level rules (date format, enum membership) are already enforced by
//! the typed draft itself; this module checks the value-level rules.

use crate::error::{ValidationError, ValidationErrors, ValidationResult};
use crate::types::SaleDraft;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the item name.
///
/// ## Rules
/// - Must not be empty after trimming
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "itemName".to_string(),
        });
    }

    Ok(())
}

/// Validates a quantity.
///
/// ## Rules
/// - Must be an integer >= 1
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 1 {
        return Err(ValidationError::MustBeAtLeast {
            field: "quantity".to_string(),
            min: 1,
        });
    }

    Ok(())
}

/// Validates the unit price.
///
/// ## Rules
/// - Must be a finite number >= 0 (zero is allowed: giveaways happen)
pub fn validate_unit_price(unit_price: f64) -> ValidationResult<()> {
    if !unit_price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "unitPrice".to_string(),
        });
    }

    if unit_price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "unitPrice".to_string(),
        });
    }

    Ok(())
}

/// Validates the optional cost per unit.
///
/// ## Rules
/// - Absent is fine ("unknown cost")
/// - When present, must be a finite number >= 0
pub fn validate_cost_per_unit(cost: Option<f64>) -> ValidationResult<()> {
    let Some(cost) = cost else {
        return Ok(());
    };

    if !cost.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "costPerUnit".to_string(),
        });
    }

    if cost < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "costPerUnit".to_string(),
        });
    }

    Ok(())
}

/// Validates the discount.
///
/// ## Rules
/// - Must be a finite number. Negative discounts (surcharges) are allowed,
///   matching what the tool has always accepted.
pub fn validate_discount(discount: f64) -> ValidationResult<()> {
    if !discount.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "discount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Draft Validation
// =============================================================================

/// Checks every business rule on a submitted draft.
///
/// All rules run; the error carries one entry per failed field so the UI
/// can mark the whole form in a single pass.
pub fn validate_draft(draft: &SaleDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let checks = [
        validate_item_name(&draft.item_name),
        validate_quantity(draft.quantity),
        validate_unit_price(draft.unit_price),
        validate_cost_per_unit(draft.cost_per_unit),
        validate_discount(draft.discount),
    ];

    for check in checks {
        if let Err(error) = check {
            errors.push(error);
        }
    }

    errors.into_result()
}

// =============================================================================
// Unit Tests
// =============================================================================
