//! # tally-core: Pure Business Logic for Tally
//!
//! Tally is a sales journal for a small retail operation. This crate is
//! its core: the transaction data model and every rule that derives,
//! filters, summarizes, converts, or serializes records. All of it is pure
//! functions over typed values with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tally Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       UI Shell (out of scope)                   │   │
//! │  │    record form ──► list + filters ──► summary tiles ──► export  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ serde / ts-rs surface                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 ★ tally-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  types   │ │ metrics  │ │  filter  │ │ summary  │          │   │
//! │  │   │ records  │ │ revenue  │ │ criteria │ │  totals  │          │   │
//! │  │   └──────────┘ │  profit  │ └──────────┘ └──────────┘          │   │
//! │  │   ┌──────────┐ └──────────┘ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │validation│ ┌──────────┐ │  export  │ │ migrate  │          │   │
//! │  │   │  rules   │ │ lenient  │ │   CSV    │ │  legacy  │          │   │
//! │  │   └──────────┘ │  parse   │ └──────────┘ └──────────┘          │   │
//! │  │                └──────────┘                                     │   │
//! │  │   NO I/O • NO CLOCK • NO STORE ACCESS • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                tally-store (persistence layer)                  │   │
//! │  │        blob store, sale repository, one-shot migration          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (SaleRecord, SaleDraft, enums)
//! - [`error`] - Validation error types
//! - [`validation`] - Business rule validation over drafts
//! - [`lenient`] - Lenient numeric parsing for untrusted blobs
//! - [`metrics`] - Per-record revenue and profit
//! - [`filter`] - Criteria evaluation over record sets
//! - [`summary`] - Aggregate totals
//! - [`export`] - Delimited-text serialization
//! - [`migrate`] - Legacy-schema conversion (pure half)
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output; even "today" is a
//!    parameter rather than a clock read
//! 2. **No I/O**: store access and file writes live in tally-store
//! 3. **Never Fatal**: bad stored data degrades to zero/empty, never panics
//! 4. **Explicit Errors**: validation failures are typed, per-field values
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{metrics, validation, CustomerType, PaymentMethod, SaleDraft, SaleRecord};
//!
//! let draft = SaleDraft {
//!     date: "2025-01-01".parse().unwrap(),
//!     customer_type: CustomerType::New,
//!     item_name: "Soap".to_string(),
//!     quantity: 2,
//!     unit_price: 500.0,
//!     cost_per_unit: Some(200.0),
//!     discount: 0.0,
//!     payment_method: PaymentMethod::Cash,
//!     notes: None,
//! };
//! validation::validate_draft(&draft).unwrap();
//!
//! let record = SaleRecord::from_draft("some-id", draft);
//! assert_eq!(metrics::line_revenue(&record), 1000.0);
//! assert_eq!(metrics::line_profit(&record), 600.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod export;
pub mod filter;
pub mod lenient;
pub mod metrics;
pub mod migrate;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::SaleRecord` instead of
// `use tally_core::types::SaleRecord`

pub use error::{ValidationError, ValidationErrors};
pub use filter::{CustomerFilter, FilterCriteria, PaymentFilter};
pub use summary::Summary;
pub use types::{CustomerType, PaymentMethod, SaleDraft, SaleRecord};
