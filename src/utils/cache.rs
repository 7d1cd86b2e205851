//! sessionStorage cache for fetched data.
//!
//! Entries live for the browser tab, so a reload within the session skips
//! the network while a new visit starts fresh.

use serde::{Serialize, de::DeserializeOwned};

use super::dom;
use crate::core::error::StorageError;

/// Get cached data from sessionStorage.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::session_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Store data in sessionStorage.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), StorageError> {
    let storage = dom::session_storage().ok_or(StorageError::Unavailable)?;
    let json = serde_json::to_string(data).map_err(|e| StorageError::Serialize(e.to_string()))?;
    storage
        .set_item(key, &json)
        .map_err(|_| StorageError::WriteFailed)
}

/// Drop a cached entry.
pub fn remove(key: &str) {
    if let Some(storage) = dom::session_storage() {
        let _ = storage.remove_item(key);
    }
}
