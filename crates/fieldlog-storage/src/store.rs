use std::future::Future;
use std::pin::Pin;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Durable string-to-string store, namespaced by key.
///
/// `set` replaces the whole value for a key. Callers never write deltas,
/// so repeating a failed `set` with the same value is always safe.
pub trait KeyValueStore: Send + Sync {
    /// Read the value for `key`. `None` = never written.
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>, StorageError>>;

    /// Replace the value for `key`.
    fn set<'a>(&'a self, key: &'a str, value: String) -> BoxFuture<'a, Result<(), StorageError>>;
}
