//! # tally-store: Persistence Layer for Tally
//!
//! This crate owns everything that touches storage for the Tally sales
//! journal: the blob-store seam, the sale repository, the one-shot legacy
//! migration, and the `Journal` composition root that wires them together
//! at startup.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tally Data Flow                                 │
//! │                                                                         │
//! │  UI shell action (save record, delete, export)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tally-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐   ┌────────────────┐   ┌────────────────┐   │   │
//! │  │   │   Journal    │──►│ SaleRepository │──►│   BlobStore    │   │   │
//! │  │   │ (journal.rs) │   │(repository.rs) │   │   (store.rs)   │   │   │
//! │  │   │              │   │                │   │                │   │   │
//! │  │   │ startup      │   │ CRUD + bulk    │   │ MemoryStore    │   │   │
//! │  │   │ wiring,      │   │ ops, persist   │   │ FileStore      │   │   │
//! │  │   │ migration    │   │ after every    │   │ (one JSON      │   │   │
//! │  │   │ trigger      │   │ mutation       │   │  file)         │   │   │
//! │  │   └──────────────┘   └────────────────┘   └────────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tally-core: validation, metrics, filters, summaries, export            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - `BlobStore` trait, key constants, `MemoryStore`, `FileStore`
//! - [`repository`] - the canonical collection and its operations
//! - [`migration`] - one-shot legacy migration runner
//! - [`journal`] - composition root
//!
//! ## Usage
//!
//! ```rust
//! use tally_store::{Journal, MemoryStore};
//!
//! let journal = Journal::open(MemoryStore::new());
//! assert!(journal.records().is_empty());
//!
//! // All mutation flows through the repository:
//! // journal.repository_mut().create(draft)?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod journal;
pub mod migration;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use journal::Journal;
pub use migration::run_legacy_migration;
pub use repository::SaleRepository;
pub use store::{BlobStore, FileStore, MemoryStore};
pub use store::{LEGACY_AUX_KEYS, LEGACY_SALES_KEY, SALES_KEY};
