use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Load a JSON record.
///
/// A missing key and a stored value that does not deserialize both yield
/// `Ok(None)`: unreadable data is treated as no data. Only a failing store
/// read is an error.
pub async fn load_record<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = store.get(key).await? else {
        tracing::debug!(key, "no stored record");
        return Ok(None);
    };

    match serde_json::from_str::<T>(&raw) {
        Ok(value) => {
            tracing::debug!(key, "record loaded");
            Ok(Some(value))
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "stored record is unreadable, starting fresh");
            Ok(None)
        }
    }
}

/// Serialize `value` and write it as the full record for `key`.
pub async fn save_record<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_string(value)?;
    store.set(key, body).await
}
