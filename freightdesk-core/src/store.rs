//! Persistent key-value storage seam.
//!
//! The schedule page only ever touches two fixed keys. Platform crates
//! provide the backing store; [`MemoryStore`] serves hosts and tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::constants::{LAST_CRITERIA_KEY, SCHEDULE_DATA_KEY};

/// Fixed record slots in the persistent store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// Fingerprint of the criteria the cached batch was generated for
    LastCriteria,
    /// The cached sailing batch
    ScheduleData,
}

impl StoreKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LastCriteria => LAST_CRITERIA_KEY,
            Self::ScheduleData => SCHEDULE_DATA_KEY,
        }
    }
}

/// Trait for abstracting the browser's local key-value store.
/// Records are text-encoded structured values.
pub trait ScheduleStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read a record.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable or the stored text does
    /// not decode as `T`.
    fn get<T>(&self, key: StoreKey) -> Result<Option<T>, Self::Error>
    where
        T: DeserializeOwned;

    /// Write a record, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or written.
    fn put<T>(&self, key: StoreKey, record: &T) -> Result<(), Self::Error>
    where
        T: Serialize;
}

/// In-process store. Clones share the same backing map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<StoreKey, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text held under `key`.
    #[must_use]
    pub fn raw(&self, key: StoreKey) -> Option<String> {
        self.entries.borrow().get(&key).cloned()
    }

    /// Overwrite the raw text under `key`, bypassing encoding.
    pub fn insert_raw(&self, key: StoreKey, text: impl Into<String>) {
        self.entries.borrow_mut().insert(key, text.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl ScheduleStore for MemoryStore {
    type Error = serde_json::Error;

    fn get<T>(&self, key: StoreKey) -> Result<Option<T>, Self::Error>
    where
        T: DeserializeOwned,
    {
        self.entries
            .borrow()
            .get(&key)
            .map(|text| serde_json::from_str(text))
            .transpose()
    }

    fn put<T>(&self, key: StoreKey, record: &T) -> Result<(), Self::Error>
    where
        T: Serialize,
    {
        let text = serde_json::to_string(record)?;
        self.entries.borrow_mut().insert(key, text);
        Ok(())
    }
}
