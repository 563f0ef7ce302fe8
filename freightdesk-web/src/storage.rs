//! Browser-backed schedule store.
//!
//! Records live in `localStorage` under the two fixed keys as JSON text.
//! Host builds (SSR and tests) keep them in a per-thread map instead.

use freightdesk_core::{ScheduleStore, StoreKey};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<crate::dom::DomError> for WebStorageError {
    fn from(err: crate::dom::DomError) -> Self {
        Self::Storage(err.to_string())
    }
}

/// `localStorage`-backed [`ScheduleStore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebScheduleStore;

impl ScheduleStore for WebScheduleStore {
    type Error = WebStorageError;

    fn get<T>(&self, key: StoreKey) -> Result<Option<T>, Self::Error>
    where
        T: DeserializeOwned,
    {
        match read_text(key)? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    fn put<T>(&self, key: StoreKey, record: &T) -> Result<(), Self::Error>
    where
        T: Serialize,
    {
        let text = serde_json::to_string(record)?;
        write_text(key, &text)
    }
}

#[cfg(target_arch = "wasm32")]
fn read_text(key: StoreKey) -> Result<Option<String>, WebStorageError> {
    crate::dom::local_storage()?
        .get_item(key.as_str())
        .map_err(|err| WebStorageError::Storage(crate::dom::js_error_message(&err)))
}

#[cfg(target_arch = "wasm32")]
fn write_text(key: StoreKey, text: &str) -> Result<(), WebStorageError> {
    crate::dom::local_storage()?
        .set_item(key.as_str(), text)
        .map_err(|err| WebStorageError::Storage(crate::dom::js_error_message(&err)))
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static HOST_STORE: std::cell::RefCell<std::collections::HashMap<StoreKey, String>> =
        std::cell::RefCell::new(std::collections::HashMap::new());
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(clippy::unnecessary_wraps)]
fn read_text(key: StoreKey) -> Result<Option<String>, WebStorageError> {
    Ok(HOST_STORE.with(|map| map.borrow().get(&key).cloned()))
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(clippy::unnecessary_wraps)]
fn write_text(key: StoreKey, text: &str) -> Result<(), WebStorageError> {
    HOST_STORE.with(|map| map.borrow_mut().insert(key, text.to_string()));
    Ok(())
}

/// Drop every host-side record. Browser storage is left alone.
#[cfg(not(target_arch = "wasm32"))]
pub fn clear_host_store() {
    HOST_STORE.with(|map| map.borrow_mut().clear());
}
