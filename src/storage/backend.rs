//! Key-value slot store abstraction.
//!
//! This module defines the [`KeyValueStore`] trait: a synchronous, string-keyed
//! store of string values. It is the only persistence primitive the post store
//! depends on, so the on-disk backend and the in-memory test backend are
//! interchangeable.
//!
//! # Design Philosophy
//!
//! The trait is deliberately as small as a browser's local storage: whole values
//! are read and overwritten, there is no partial update and no transaction.

use crate::domain::error::{Result, WandernotesError};

/// Abstraction over synchronous key-value persistence.
///
/// # Implementations
///
/// - [`FileStore`](crate::storage::FileStore): one file per slot, atomic writes (default)
/// - [`MemoryStore`](crate::storage::MemoryStore): process-local map
///
/// # Examples
///
/// ```
/// use wandernotes::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.set("greeting", "hello")?;
/// assert_eq!(store.get("greeting")?.as_deref(), Some("hello"));
/// # Ok::<(), wandernotes::WandernotesError>(())
/// ```
pub trait KeyValueStore: Send {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the slot has never been written or was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites the slot `key` with `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. The previous value must be left
    /// intact in that case.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes the slot `key`. Removing an absent slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be removed.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Returns `true` if the slot `key` holds a value, readable or not.
    ///
    /// # Errors
    ///
    /// Returns an error if existence cannot be determined.
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Copies the stored value of `from` into `to`, byte for byte where the
    /// backend allows it.
    ///
    /// Backends that can hold values they cannot decode should override this
    /// so that such values can still be preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if `from` is absent or either side fails.
    fn copy(&mut self, from: &str, to: &str) -> Result<()> {
        let value = self.get(from)?.ok_or_else(|| {
            WandernotesError::Storage(format!("slot '{from}' is empty"))
        })?;
        self.set(to, &value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }

    fn contains(&self, key: &str) -> Result<bool> {
        (**self).contains(key)
    }

    fn copy(&mut self, from: &str, to: &str) -> Result<()> {
        (**self).copy(from, to)
    }
}
