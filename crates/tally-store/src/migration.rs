//! # Legacy Migration Runner
//!
//! One-shot migration from the deprecated launch-tracker keys to the
//! current sale collection. The conversion itself is pure and lives in
//! [`tally_core::migrate`]; this module is the store-facing half that
//! reads, ingests, and erases.
//!
//! ## Migration Process
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Migration Process                                  │
//! │                                                                         │
//! │  Journal startup                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.get(LEGACY_SALES_KEY)                                            │
//! │       │                                                                 │
//! │       ├── None? → return 0        (the usual case after the first run:  │
//! │       │                            erasing the keys is what makes the   │
//! │       │                            migration idempotent)                │
//! │       ▼                                                                 │
//! │  convert_legacy(blob, today) → drafts                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repository.create_many(drafts)   (validates, appends, persists once)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  erase LEGACY_SALES_KEY + every LEGACY_AUX_KEYS entry                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use tracing::info;

use tally_core::migrate::convert_legacy;

use crate::repository::SaleRepository;
use crate::store::{BlobStore, LEGACY_AUX_KEYS, LEGACY_SALES_KEY};

/// Runs the legacy migration against the repository's store.
///
/// Returns the number of records folded into the collection. Unreadable
/// legacy data migrates as zero records but still erases the deprecated
/// keys; there is nothing actionable left in them and migration must not
/// keep re-finding the same garbage on every startup.
pub fn run_legacy_migration<S: BlobStore>(
    repository: &mut SaleRepository<S>,
    today: NaiveDate,
) -> usize {
    let Some(blob) = repository.store().get(LEGACY_SALES_KEY) else {
        return 0;
    };

    let drafts = convert_legacy(Some(&blob), today);
    let migrated = repository.create_many(drafts);

    let store = repository.store_mut();
    store.remove(LEGACY_SALES_KEY);
    for key in LEGACY_AUX_KEYS {
        store.remove(key);
    }

    info!(migrated, "legacy launch data migrated and erased");
    migrated
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, SALES_KEY};
    use tally_core::CustomerType;

    fn today() -> NaiveDate {
        "2025-06-15".parse().unwrap()
    }

    fn legacy_store() -> MemoryStore {
        MemoryStore::from_entries([
            (
                LEGACY_SALES_KEY,
                r#"[
                    {"launchDate":"2024-05-01","result":"returningcustomers","pnl":"-150"},
                    {"launchDate":"2024-06-01","result":null,"pnl":320}
                ]"#,
            ),
            (LEGACY_AUX_KEYS[0], "{}"),
            (LEGACY_AUX_KEYS[1], "{}"),
        ])
    }

    #[test]
    fn test_migrates_and_erases_every_deprecated_key() {
        let mut repo = SaleRepository::load(legacy_store());
        let migrated = run_legacy_migration(&mut repo, today());

        assert_eq!(migrated, 2);
        assert_eq!(repo.len(), 2);

        let returning: Vec<_> = repo
            .read_all()
            .iter()
            .filter(|r| r.customer_type == CustomerType::Returning)
            .collect();
        assert_eq!(returning.len(), 1);
        assert_eq!(returning[0].unit_price, 150.0);

        // Migrated records were persisted under the current key...
        assert!(repo.store().get(SALES_KEY).is_some());
        // ...and every deprecated key is gone.
        assert_eq!(repo.store().get(LEGACY_SALES_KEY), None);
        for key in LEGACY_AUX_KEYS {
            assert_eq!(repo.store().get(key), None);
        }
    }

    #[test]
    fn test_second_run_is_a_noop() {
        let mut repo = SaleRepository::load(legacy_store());
        let first = run_legacy_migration(&mut repo, today());
        let second = run_legacy_migration(&mut repo, today());

        assert_eq!(first, 2);
        assert_eq!(second, 0);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_no_legacy_data_is_a_noop() {
        let mut repo = SaleRepository::load(MemoryStore::new());
        assert_eq!(run_legacy_migration(&mut repo, today()), 0);
        assert!(repo.is_empty());
    }

    #[test]
    fn test_garbage_legacy_blob_still_erases_keys() {
        let store = MemoryStore::from_entries([(LEGACY_SALES_KEY, "not json at all")]);
        let mut repo = SaleRepository::load(store);

        assert_eq!(run_legacy_migration(&mut repo, today()), 0);
        assert!(repo.is_empty());
        assert_eq!(repo.store().get(LEGACY_SALES_KEY), None);
    }

    #[test]
    fn test_migrated_records_coexist_with_existing_ones() {
        use tally_core::{PaymentMethod, SaleDraft};

        let mut repo = SaleRepository::load(legacy_store());
        repo.create(SaleDraft {
            date: "2025-01-01".parse().unwrap(),
            customer_type: CustomerType::New,
            item_name: "Soap".to_string(),
            quantity: 1,
            unit_price: 10.0,
            cost_per_unit: None,
            discount: 0.0,
            payment_method: PaymentMethod::Cash,
            notes: None,
        })
        .unwrap();

        let migrated = run_legacy_migration(&mut repo, today());
        assert_eq!(migrated, 2);
        assert_eq!(repo.len(), 3);
    }
}
