//! # Blob Store
//!
//! The string-keyed key-value store the journal persists into, plus the two
//! shipped implementations.
//!
//! ## Store Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       BlobStore Contract                                │
//! │                                                                         │
//! │  get(key)    ──► Some(blob) | None                                     │
//! │  set(key, v) ──► ()   writes are synchronous and fire-and-forget:      │
//! │  remove(key) ──► ()   a failed backend write is indistinguishable      │
//! │                       from success (implementations log and move on)   │
//! │                                                                         │
//! │  The journal keeps the whole sale collection as ONE blob under         │
//! │  SALES_KEY; the deprecated tool's keys exist only until migration      │
//! │  erases them.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;

use tracing::warn;

// =============================================================================
// Store Keys
// =============================================================================

/// Key holding the whole current-schema sale collection as one JSON blob.
pub const SALES_KEY: &str = "tally.sales";

/// Key the deprecated launch tracker stored its entries under.
pub const LEGACY_SALES_KEY: &str = "launches";

/// Remaining keys of the deprecated tool, erased wholesale by migration.
pub const LEGACY_AUX_KEYS: [&str; 2] = ["launches.draft", "launches.filters"];

// =============================================================================
// BlobStore Trait
// =============================================================================

/// A string-keyed blob store.
///
/// This is the seam the UI shell plugs its platform storage into. `set`
/// and `remove` are infallible by contract: persistence is a passive
/// mirror of the in-memory collection, and a write that quietly fails is
/// an accepted limitation of the design, not an error to surface.
pub trait BlobStore {
    /// Returns the blob stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous blob.
    fn set(&mut self, key: &str, value: &str);

    /// Removes the blob under `key`, if any.
    fn remove(&mut self, key: &str);
}

// =============================================================================
// MemoryStore
// =============================================================================

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Creates a store pre-seeded with entries. Test convenience.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        MemoryStore {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

// =============================================================================
// FileStore
// =============================================================================

/// Store backed by a single JSON file: a flat `{ key: blob }` map.
///
/// The whole map is rewritten after every `set`/`remove`, matching the
/// synchronous write-after-every-mutation model of the journal. An
/// unreadable or corrupt file on open starts the store empty; failed
/// writes log a warning and are otherwise invisible, per the trait
/// contract.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`, reading the existing map if one is there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries: BTreeMap<String, String> = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(error) => {
                    warn!(path = %path.display(), %error, "store file is corrupt, starting empty");
                    BTreeMap::new()
                }
            },
            // Absent file is the normal first run.
            Err(_) => BTreeMap::new(),
        };

        FileStore { path, entries }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Rewrites the backing file from the in-memory map.
    fn flush(&self) {
        let raw = match serde_json::to_string_pretty(&self.entries) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "could not serialize store map");
                return;
            }
        };

        if let Err(error) = fs::write(&self.path, raw) {
            warn!(path = %self.path.display(), %error, "store write failed");
        }
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
