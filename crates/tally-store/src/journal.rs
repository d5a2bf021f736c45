//! # Journal Composition Root
//!
//! Startup wiring: open the store, load the repository, run the legacy
//! migration exactly once. The UI shell holds one `Journal` for the life
//! of the session and reaches everything through it.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Journal Startup                                   │
//! │                                                                         │
//! │  Journal::open(store)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SaleRepository::load ── reads SALES_KEY, corrupt/absent → empty        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  run_legacy_migration ── no-op unless deprecated keys hold data         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ready: UI renders journal.records(), mutates via repository_mut()      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use tally_core::SaleRecord;

use crate::migration::run_legacy_migration;
use crate::repository::SaleRepository;
use crate::store::BlobStore;

/// The assembled journal: repository plus completed startup migration.
#[derive(Debug)]
pub struct Journal<S: BlobStore> {
    repository: SaleRepository<S>,
}

impl<S: BlobStore> Journal<S> {
    /// Opens the journal over `store`, using the local calendar date for
    /// migrated records that carry no usable date.
    pub fn open(store: S) -> Self {
        Journal::open_at(store, chrono::Local::now().date_naive())
    }

    /// Opens the journal with an explicit "today". Lets tests and callers
    /// with their own clock policy pin the migration date fallback.
    pub fn open_at(store: S, today: NaiveDate) -> Self {
        let mut repository = SaleRepository::load(store);
        run_legacy_migration(&mut repository, today);
        Journal { repository }
    }

    /// The full current record collection.
    pub fn records(&self) -> &[SaleRecord] {
        self.repository.read_all()
    }

    /// Read access to the repository.
    pub fn repository(&self) -> &SaleRepository<S> {
        &self.repository
    }

    /// Mutating access to the repository. All writes go through here; the
    /// borrow checker keeps the collection free of outside aliases.
    pub fn repository_mut(&mut self) -> &mut SaleRepository<S> {
        &mut self.repository
    }

    /// Tears the journal down to its repository, e.g. to recover the
    /// backing store.
    pub fn into_repository(self) -> SaleRepository<S> {
        self.repository
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
