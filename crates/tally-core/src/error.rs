//! # Error Types
//!
//! Validation error types for tally-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Error Propagation                                 │
//! │                                                                         │
//! │  validation helpers (validation.rs)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ValidationError   ← one failed rule, tagged with its field            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ValidationErrors  ← every failed field for one submitted draft        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI layer renders field_messages() next to the form inputs             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation is the only failure the domain layer surfaces. Every other
//! problem (missing blob, corrupt blob, garbage numerics) is resolved
//! locally as "empty" or "zero" so the journal always renders.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// A single failed validation rule.
///
/// The `field` carries the UI-facing (camelCase) field name, e.g.
/// `"itemName"`, so the error list doubles as a field-to-message mapping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is below its minimum.
    #[error("{field} must be at least {min}")]
    MustBeAtLeast { field: String, min: i64 },

    /// Numeric value may not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Numeric value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

impl ValidationError {
    /// The UI-facing name of the field this error is attached to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::MustBeAtLeast { field, .. }
            | ValidationError::MustBeNonNegative { field }
            | ValidationError::NotFinite { field } => field,
        }
    }
}

// =============================================================================
// Validation Errors (aggregate)
// =============================================================================

/// Every failed rule for one submitted draft.
///
/// A draft is checked against all rules before the result is reported, so
/// the UI can mark every offending field in one pass instead of surfacing
/// failures one at a time.
#[derive(Debug, Clone, Default, Error)]
#[error("validation failed: {}", .errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty collector.
    pub fn new() -> Self {
        ValidationErrors { errors: Vec::new() }
    }

    /// Records one failed rule.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// True when no rule failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// All recorded failures.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Field-to-message pairs for form display.
    pub fn field_messages(&self) -> Vec<(String, String)> {
        self.errors
            .iter()
            .map(|e| (e.field().to_string(), e.to_string()))
            .collect()
    }

    /// Collapses the collector into a `Result`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        ValidationErrors {
            errors: vec![error],
        }
    }
}

/// Result type for single-rule validators.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
