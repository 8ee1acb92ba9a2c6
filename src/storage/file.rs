//! File-based slot store.
//!
//! Each slot is a file `<key>.json` inside a data directory. Writes go to a
//! temporary file first and are renamed into place, so a crash never leaves a
//! half-written slot behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: one `read_to_string` per call, no caching
//! - **Write**: O(n) in the value size, always a full overwrite
//! - **Best for**: a few slots, human-readable contents

use crate::domain::error::{Result, WandernotesError};
use crate::storage::backend::KeyValueStore;
use std::path::{Path, PathBuf};

/// Directory-backed key-value store.
///
/// # Thread Safety
///
/// This type is `Send` but holds no locks. It is meant to have exactly one
/// writer, matching the single-user model.
///
/// # Layout
///
/// ```text
/// <dir>/
///   wandernotes_posts.json          ← JSON array of posts
///   wandernotes_posts.corrupt.json  ← last unreadable payload, if any
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory holding one file per slot.
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use wandernotes::storage::FileStore;
    /// use std::path::PathBuf;
    ///
    /// let store = FileStore::open(PathBuf::from("/tmp/wandernotes"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn open(dir: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?dir, "opening file store");
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory the slots live in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    ///
    /// Keys are used as file stems, so anything outside `[A-Za-z0-9._-]` is
    /// replaced with `_`.
    #[must_use]
    pub fn slot_path(&self, key: &str) -> PathBuf {
        let stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{stem}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        let _span = tracing::debug_span!("file_store_get", path = ?path).entered();

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(bytes = contents.len(), "slot read");
                Ok(Some(contents))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("slot not found");
                Ok(None)
            }
            Err(e) => Err(WandernotesError::Storage(format!(
                "failed to read slot '{key}': {e}"
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key);
        let _span = tracing::debug_span!("file_store_set", path = ?path, bytes = value.len()).entered();

        let tmp_path = path.with_extension("json.tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, value).map_err(|e| {
            WandernotesError::Storage(format!("failed to write slot '{key}': {e}"))
        })?;

        tracing::trace!("renaming temporary file to final location");
        if let Err(e) = std::fs::rename(&tmp_path, &path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(WandernotesError::Storage(format!(
                "failed to replace slot '{key}': {e}"
            )));
        }

        tracing::debug!("slot saved");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.slot_path(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn contains(&self, key: &str) -> Result<bool> {
        let path = self.slot_path(key);
        path.try_exists().map_err(|e| {
            WandernotesError::Storage(format!("failed to inspect slot '{key}': {e}"))
        })
    }

    /// Copies the raw file, so payloads that are not valid UTF-8 survive.
    fn copy(&mut self, from: &str, to: &str) -> Result<()> {
        let source = self.slot_path(from);
        let target = self.slot_path(to);
        let _span = tracing::debug_span!("file_store_copy", from = ?source, to = ?target).entered();

        let tmp_path = target.with_extension("json.tmp");
        std::fs::copy(&source, &tmp_path).map_err(|e| {
            WandernotesError::Storage(format!("failed to copy slot '{from}': {e}"))
        })?;

        if let Err(e) = std::fs::rename(&tmp_path, &target) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(WandernotesError::Storage(format!(
                "failed to replace slot '{to}': {e}"
            )));
        }

        tracing::debug!("slot copied");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_slot_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.get("nothing").unwrap(), None);
    }

    #[test]
    fn set_overwrites_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path().join("nested")).unwrap();

        store.set("slot", "first").unwrap();
        store.set("slot", "second").unwrap();

        assert_eq!(store.get("slot").unwrap().as_deref(), Some("second"));
        let names: Vec<String> = std::fs::read_dir(store.dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["slot.json".to_string()]);
    }

    #[test]
    fn keys_are_sanitized_into_file_stems() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(
            store.slot_path("../etc/passwd"),
            dir.path().join(".._etc_passwd.json")
        );
    }

    #[test]
    fn copy_preserves_bytes_that_are_not_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path().to_path_buf()).unwrap();
        let raw = b"[{\"title\":\"caf\xe9\"}]";
        std::fs::write(store.slot_path("posts"), raw).unwrap();

        assert!(store.get("posts").is_err());
        assert!(store.contains("posts").unwrap());
        assert!(!store.contains("backup").unwrap());

        store.copy("posts", "backup").unwrap();
        assert_eq!(std::fs::read(store.slot_path("backup")).unwrap(), raw);
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path().to_path_buf()).unwrap();
        store.set("slot", "value").unwrap();
        store.remove("slot").unwrap();
        store.remove("slot").unwrap();
        assert_eq!(store.get("slot").unwrap(), None);
    }
}
