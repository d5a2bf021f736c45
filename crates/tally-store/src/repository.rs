//! # Sale Repository
//!
//! Owns the canonical in-memory sale collection and mirrors it into the
//! blob store after every successful mutation.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Repository Ownership                                │
//! │                                                                         │
//! │  SaleRepository<S>                                                      │
//! │    ├── records: Vec<SaleRecord>   ← THE collection; nothing else        │
//! │    │                                holds or mutates it                 │
//! │    └── store: S                   ← passive mirror, rewritten whole     │
//! │                                     after every mutation                │
//! │                                                                         │
//! │  create ──► validate ──► assign UUID ──► push ──► persist               │
//! │  update ──► validate ──► find id ──► replace whole record ──► persist   │
//! │  delete ──► retain others ──► persist        (unknown id: quiet no-op)  │
//! │                                                                         │
//! │  &mut self on every mutation makes external aliasing a compile error.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Admission Invariant
//! Every record in the collection has a unique, non-empty id and passed
//! draft validation on its way in. `create`/`update` re-run validation
//! themselves, so the invariant holds regardless of caller discipline.

use tracing::{debug, warn};
use uuid::Uuid;

use tally_core::error::ValidationErrors;
use tally_core::validation::validate_draft;
use tally_core::{SaleDraft, SaleRecord};

use crate::store::{BlobStore, SALES_KEY};

// =============================================================================
// Id Generation
// =============================================================================

/// Generates a fresh record id.
///
/// UUID v4 gives uniqueness without coordination: ids never collide with
/// live records and are never reused, even across delete/recreate cycles.
fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Sale Repository
// =============================================================================

/// Repository for sale records over any [`BlobStore`].
#[derive(Debug)]
pub struct SaleRepository<S: BlobStore> {
    records: Vec<SaleRecord>,
    store: S,
}

impl<S: BlobStore> SaleRepository<S> {
    /// Loads the collection from the store.
    ///
    /// An absent blob is the normal first run; a corrupt blob degrades to
    /// an empty collection with a warning. Neither is an error: the
    /// journal must always come up.
    pub fn load(store: S) -> Self {
        let records = match store.get(SALES_KEY) {
            None => Vec::new(),
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(records) => records,
                Err(error) => {
                    warn!(%error, "sales blob is corrupt, starting empty");
                    Vec::new()
                }
            },
        };

        debug!(count = records.len(), "loaded sale collection");
        SaleRepository { records, store }
    }

    /// Validates and admits a new record.
    ///
    /// Assigns a fresh id, appends, persists, and returns the stored
    /// record. An existing id is never overwritten.
    pub fn create(&mut self, draft: SaleDraft) -> Result<SaleRecord, ValidationErrors> {
        validate_draft(&draft)?;

        let record = SaleRecord::from_draft(new_record_id(), draft);
        debug!(id = %record.id, item = %record.item_name, "creating sale record");

        self.records.push(record.clone());
        self.persist();
        Ok(record)
    }

    /// Bulk ingest, used by legacy migration.
    ///
    /// Valid drafts are admitted, invalid ones skipped with a warning, and
    /// the store is written once at the end. Returns the admitted count.
    pub fn create_many(&mut self, drafts: Vec<SaleDraft>) -> usize {
        let mut admitted = 0;

        for draft in drafts {
            match validate_draft(&draft) {
                Ok(()) => {
                    self.records
                        .push(SaleRecord::from_draft(new_record_id(), draft));
                    admitted += 1;
                }
                Err(errors) => {
                    warn!(%errors, "skipping invalid draft during bulk ingest");
                }
            }
        }

        if admitted > 0 {
            self.persist();
        }
        admitted
    }

    /// Replaces the record with `id` wholesale, preserving the id.
    ///
    /// An unknown `id` is a quiet no-op: the UI only ever offers ids it
    /// was handed, so "not found" is not an error here and callers must
    /// not rely on update confirming existence. There is no partial-field
    /// patch; the draft replaces every field.
    pub fn update(&mut self, id: &str, draft: SaleDraft) -> Result<(), ValidationErrors> {
        validate_draft(&draft)?;

        let Some(slot) = self.records.iter_mut().find(|record| record.id == id) else {
            debug!(%id, "update target not found, ignoring");
            return Ok(());
        };

        *slot = SaleRecord::from_draft(id, draft);
        debug!(%id, "replaced sale record");
        self.persist();
        Ok(())
    }

    /// Removes the record with `id` if present; quiet no-op otherwise.
    pub fn delete(&mut self, id: &str) {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);

        if self.records.len() < before {
            debug!(%id, "deleted sale record");
            self.persist();
        } else {
            debug!(%id, "delete target not found, ignoring");
        }
    }

    /// Bulk reset: empties the collection.
    pub fn clear(&mut self) {
        debug!(count = self.records.len(), "clearing sale collection");
        self.records.clear();
        self.persist();
    }

    /// Returns the record with `id`, if present.
    pub fn find_by_id(&self, id: &str) -> Option<&SaleRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// The full current collection.
    ///
    /// Ordering reflects the current in-memory sequence and is not
    /// guaranteed to survive a store round trip.
    pub fn read_all(&self) -> &[SaleRecord] {
        &self.records
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rewrites the whole collection into the store as one JSON blob.
    ///
    /// Runs after every successful mutation; there is no batching and no
    /// dirty flag. Serialization of these types cannot realistically fail,
    /// but a failure would log and skip the write rather than panic.
    pub fn persist(&mut self) {
        match serde_json::to_string(&self.records) {
            Ok(blob) => self.store.set(SALES_KEY, &blob),
            Err(error) => warn!(%error, "could not serialize sale collection"),
        }
    }

    /// Consumes the repository, handing back the store. Used to re-open a
    /// journal over the same backing storage.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Store access for the migration runner.
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Mutable store access for the migration runner.
    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use tally_core::{CustomerType, PaymentMethod};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn draft(item: &str, quantity: i64, unit_price: f64) -> SaleDraft {
        SaleDraft {
            date: "2025-01-01".parse().unwrap(),
            customer_type: CustomerType::New,
            item_name: item.to_string(),
            quantity,
            unit_price,
            cost_per_unit: None,
            discount: 0.0,
            payment_method: PaymentMethod::Cash,
            notes: None,
        }
    }

    #[test]
    fn test_create_assigns_unique_ids_and_persists() {
        init_tracing();
        let mut repo = SaleRepository::load(MemoryStore::new());

        let a = repo.create(draft("Soap", 2, 500.0)).unwrap();
        let b = repo.create(draft("Cream", 1, 300.0)).unwrap();

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(repo.len(), 2);
        assert!(repo.store().get(SALES_KEY).unwrap().contains("Soap"));
    }

    #[test]
    fn test_create_rejects_invalid_draft() {
        let mut repo = SaleRepository::load(MemoryStore::new());
        let errors = repo.create(draft("", 0, -1.0)).unwrap_err();
        assert_eq!(errors.errors().len(), 3);
        assert!(repo.is_empty());
        // Nothing was persisted either.
        assert_eq!(repo.store().get(SALES_KEY), None);
    }

    #[test]
    fn test_update_replaces_whole_record() {
        let mut repo = SaleRepository::load(MemoryStore::new());
        let created = repo.create(draft("Soap", 2, 500.0)).unwrap();

        let mut replacement = draft("Cream", 5, 120.0);
        replacement.notes = Some("bulk order".to_string());
        repo.update(&created.id, replacement).unwrap();

        let stored = repo.find_by_id(&created.id).unwrap();
        assert_eq!(stored.item_name, "Cream");
        assert_eq!(stored.quantity, 5);
        assert_eq!(stored.notes.as_deref(), Some("bulk order"));
        assert_eq!(stored.id, created.id);
    }

    #[test]
    fn test_update_unknown_id_is_silent_noop() {
        let mut repo = SaleRepository::load(MemoryStore::new());
        repo.create(draft("Soap", 2, 500.0)).unwrap();

        let before = repo.read_all().to_vec();
        repo.update("no-such-id", draft("Cream", 1, 10.0)).unwrap();
        assert_eq!(repo.read_all(), &before[..]);
    }

    #[test]
    fn test_delete_unknown_id_is_silent_noop() {
        let mut repo = SaleRepository::load(MemoryStore::new());
        repo.create(draft("Soap", 2, 500.0)).unwrap();

        repo.delete("no-such-id");
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_ids_never_reused_across_delete_recreate() {
        let mut repo = SaleRepository::load(MemoryStore::new());
        let first = repo.create(draft("Soap", 1, 10.0)).unwrap();
        repo.delete(&first.id);

        let second = repo.create(draft("Soap", 1, 10.0)).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_clear_empties_collection_and_blob() {
        let mut repo = SaleRepository::load(MemoryStore::new());
        repo.create(draft("Soap", 1, 10.0)).unwrap();
        repo.create(draft("Cream", 1, 20.0)).unwrap();

        repo.clear();
        assert!(repo.is_empty());
        assert_eq!(repo.store().get(SALES_KEY).unwrap(), "[]");
    }

    #[test]
    fn test_round_trip_through_store() {
        let mut repo = SaleRepository::load(MemoryStore::new());
        let mut costed = draft("Soap", 2, 500.0);
        costed.cost_per_unit = Some(200.0);
        repo.create(costed).unwrap();
        repo.create(draft("Cream", 1, 300.0)).unwrap();

        let original = repo.read_all().to_vec();
        let reloaded = SaleRepository::load(repo.into_store());
        assert_eq!(reloaded.read_all(), &original[..]);
    }

    #[test]
    fn test_load_corrupt_blob_starts_empty() {
        init_tracing();
        let store = MemoryStore::from_entries([(SALES_KEY, "{{{ not json")]);
        let repo = SaleRepository::load(store);
        assert!(repo.is_empty());
    }

    #[test]
    fn test_load_tolerates_garbled_numeric_fields() {
        // One record with a stringly quantity and junk price: the record
        // loads with coerced values instead of nuking the collection.
        let blob = r#"[{
            "id": "legacy-1",
            "date": "2024-12-01",
            "customerType": "returning",
            "itemName": "Soap",
            "quantity": "2",
            "unitPrice": "oops",
            "paymentMethod": "cash"
        }]"#;
        let repo = SaleRepository::load(MemoryStore::from_entries([(SALES_KEY, blob)]));

        assert_eq!(repo.len(), 1);
        let record = repo.find_by_id("legacy-1").unwrap();
        assert_eq!(record.quantity, 2);
        assert_eq!(record.unit_price, 0.0);
    }

    #[test]
    fn test_create_many_skips_invalid_and_persists_once() {
        let mut repo = SaleRepository::load(MemoryStore::new());
        let admitted = repo.create_many(vec![
            draft("Soap", 1, 10.0),
            draft("", 1, 10.0),
            draft("Cream", 2, 20.0),
        ]);

        assert_eq!(admitted, 2);
        assert_eq!(repo.len(), 2);
    }
}
