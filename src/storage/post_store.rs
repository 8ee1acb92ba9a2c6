//! The post store: sole owner of the post collection.
//!
//! [`PostStore`] keeps the working collection in memory and mirrors every
//! mutation to a single slot of a [`KeyValueStore`]. The whole collection is
//! serialized on each write; there is no partial update.
//!
//! # Load Policy
//!
//! The store never starts broken:
//!
//! | Slot state            | Result                                          |
//! |-----------------------|-------------------------------------------------|
//! | absent                | samples seeded and written                      |
//! | valid JSON array      | loaded as-is                                    |
//! | unparseable           | payload copied to a backup slot, samples seeded |
//! | unreadable            | same as unparseable                             |
//! | backup fails          | samples in memory only, writes refused          |
//!
//! Backups never overwrite each other: the first goes to
//! [`CORRUPT_BACKUP_SLOT`], later ones to `wandernotes_posts.corrupt.1`, `.2`
//! and so on.

use crate::domain::error::{Result, WandernotesError};
use crate::domain::{generate_id, Post, PostDraft};
use crate::storage::backend::KeyValueStore;
use crate::storage::codec::{decode_posts, encode_posts, encode_posts_pretty};
use crate::storage::samples::sample_posts;
use chrono::{DateTime, Utc};

/// Slot holding the serialized post collection.
pub const POSTS_SLOT: &str = "wandernotes_posts";

/// First slot receiving a payload that could not be loaded.
pub const CORRUPT_BACKUP_SLOT: &str = "wandernotes_posts.corrupt";

/// File name used for JSON exports.
pub const EXPORT_FILE_NAME: &str = "wandernotes_posts.json";

/// How the working collection was established by [`PostStore::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The slot held a valid collection.
    Loaded {
        /// Number of posts read.
        count: usize,
    },
    /// The slot was empty; sample posts were seeded.
    Seeded,
    /// The slot could not be used; sample posts were seeded instead.
    Recovered {
        /// Why the stored payload was rejected.
        reason: String,
        /// Whether the rejected payload was copied to a backup slot.
        backed_up: bool,
    },
}

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send>;

/// Owner of the post collection and its persistence.
///
/// Other components only ever see `&[Post]` snapshots through [`list`](Self::list).
///
/// # Examples
///
/// ```
/// use wandernotes::domain::{Mood, PostDraft};
/// use wandernotes::storage::{MemoryStore, PostStore};
///
/// let mut store = PostStore::open(MemoryStore::default());
/// assert_eq!(store.list().len(), 2); // samples
///
/// let post = store.create(PostDraft::new("Evening Walk", "Pune", "Quiet lanes", Mood::Relax))?;
/// assert_eq!(store.list()[0].id, post.id);
/// # Ok::<(), wandernotes::WandernotesError>(())
/// ```
pub struct PostStore<S> {
    /// Persistence primitive.
    backend: S,
    /// Working collection in storage order (newest insert first).
    posts: Vec<Post>,
    /// Source of creation timestamps.
    clock: Clock,
    /// Set when the slot was rejected and could not be backed up.
    write_block: Option<String>,
}

impl<S: KeyValueStore> PostStore<S> {
    /// Creates an empty store over `backend` without reading it.
    ///
    /// Call [`load`](Self::load) to establish the working collection.
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            posts: Vec::new(),
            clock: Box::new(Utc::now),
            write_block: None,
        }
    }

    /// Creates a store over `backend` and loads it.
    pub fn open(backend: S) -> Self {
        let mut store = Self::new(backend);
        store.load();
        store
    }

    /// Replaces the timestamp source used for new posts and samples.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Reads the persisted collection into memory.
    ///
    /// Never fails: missing or unusable data is replaced by the built-in
    /// samples (see the module docs). Loading twice without an intervening
    /// mutation yields the same collection.
    pub fn load(&mut self) -> LoadOutcome {
        let _span = tracing::debug_span!("post_store_load", slot = POSTS_SLOT).entered();
        self.write_block = None;

        let raw = match self.backend.get(POSTS_SLOT) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "posts slot unreadable, reseeding");
                return self.recover(e.to_string());
            }
        };

        let Some(raw) = raw else {
            tracing::debug!("no persisted posts, seeding samples");
            self.seed();
            return LoadOutcome::Seeded;
        };

        match decode_posts(&raw) {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "posts loaded");
                let count = posts.len();
                self.posts = posts;
                LoadOutcome::Loaded { count }
            }
            Err(e) => {
                tracing::warn!(error = %e, bytes = raw.len(), "persisted posts unparseable, reseeding");
                self.recover(e.to_string())
            }
        }
    }

    /// Backs up the rejected slot and seeds the samples.
    ///
    /// If the backup cannot be made the samples stay in memory and every
    /// later write is refused, so the rejected slot is never overwritten.
    fn recover(&mut self, reason: String) -> LoadOutcome {
        match self.back_up_slot() {
            Ok(slot) => {
                tracing::info!(backup = %slot, "rejected payload backed up");
                self.seed();
                LoadOutcome::Recovered {
                    reason,
                    backed_up: true,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to back up rejected payload, writes disabled");
                self.posts = sample_posts((self.clock)());
                self.write_block = Some(format!(
                    "stored posts could not be read or backed up ({reason})"
                ));
                LoadOutcome::Recovered {
                    reason,
                    backed_up: false,
                }
            }
        }
    }

    /// Copies the posts slot into the first unused backup slot.
    fn back_up_slot(&mut self) -> Result<String> {
        let mut slot = CORRUPT_BACKUP_SLOT.to_string();
        let mut n = 1;
        while self.backend.contains(&slot)? {
            slot = format!("{CORRUPT_BACKUP_SLOT}.{n}");
            n += 1;
        }
        self.backend.copy(POSTS_SLOT, &slot)?;
        Ok(slot)
    }

    /// Seeds the samples and writes them, logging a failed write.
    fn seed(&mut self) {
        self.posts = sample_posts((self.clock)());
        if let Err(e) = self.persist() {
            tracing::warn!(error = %e, "failed to persist seeded samples");
        }
    }

    /// Creates a post from `draft`, inserts it at the head and persists.
    ///
    /// # Errors
    ///
    /// - [`Validation`](crate::WandernotesError::Validation) if title, location
    ///   or content is blank; nothing is changed or written.
    /// - [`Storage`](crate::WandernotesError::Storage) if the write fails; the
    ///   post stays in memory for the rest of the session.
    pub fn create(&mut self, draft: PostDraft) -> Result<Post> {
        let _span = tracing::debug_span!("post_store_create",
            title = %draft.title.trim(),
            mood = %draft.mood,
            has_photo = !draft.photo.is_empty()
        ).entered();

        draft.validate()?;

        let now = (self.clock)();
        let mut id = generate_id(now);
        while self.posts.iter().any(|p| p.id == id) {
            tracing::debug!(id = %id, "id collision, drawing again");
            id = generate_id(now);
        }

        let post = Post::from_draft(draft, id, now);
        self.posts.insert(0, post.clone());
        tracing::debug!(id = %post.id, count = self.posts.len(), "post created");

        self.persist()?;
        Ok(post)
    }

    /// Removes the post with `id`.
    ///
    /// Returns whether a post was removed. Nothing is written when the id is
    /// unknown.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the write fails; the removal is kept in memory.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let _span = tracing::debug_span!("post_store_delete", id = %id).entered();

        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        if self.posts.len() == before {
            tracing::debug!("post not found");
            return Ok(false);
        }

        tracing::debug!(count = self.posts.len(), "post deleted");
        self.persist()?;
        Ok(true)
    }

    /// Removes every post and persists the empty collection.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the write fails; memory is cleared regardless.
    pub fn clear_all(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("post_store_clear_all", count = self.posts.len()).entered();
        self.posts.clear();
        self.persist()
    }

    /// Serializes the whole collection and overwrites the posts slot.
    ///
    /// # Errors
    ///
    /// Returns a storage error if serialization or the write fails, or if
    /// writes are disabled because the stored posts could not be backed up.
    pub fn persist(&mut self) -> Result<()> {
        if let Some(reason) = &self.write_block {
            return Err(WandernotesError::Storage(reason.clone()));
        }
        let payload = encode_posts(&self.posts)?;
        self.backend.set(POSTS_SLOT, &payload)?;
        tracing::debug!(count = self.posts.len(), bytes = payload.len(), "posts persisted");
        Ok(())
    }

    /// The working collection in storage order.
    #[must_use]
    pub fn list(&self) -> &[Post] {
        &self.posts
    }

    /// Looks up a post by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Pretty-printed JSON of the whole collection, as written to
    /// [`EXPORT_FILE_NAME`].
    ///
    /// # Errors
    ///
    /// Returns a storage error if serialization fails.
    pub fn export_json(&self) -> Result<String> {
        encode_posts_pretty(&self.posts)
    }

    /// The underlying slot store.
    #[must_use]
    pub fn backend(&self) -> &S {
        &self.backend
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for PostStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostStore")
            .field("backend", &self.backend)
            .field("posts", &self.posts.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Mood, WandernotesError};
    use crate::storage::MemoryStore;
    use chrono::TimeZone;
    use std::collections::HashSet;

    /// Slot store whose writes always fail.
    #[derive(Debug, Default)]
    struct ReadOnlyStore {
        inner: MemoryStore,
    }

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(WandernotesError::Storage("quota exceeded".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(WandernotesError::Storage("quota exceeded".to_string()))
        }
    }

    /// Slot store that cannot read anything and counts write attempts.
    #[derive(Debug, Default)]
    struct UnreadableStore {
        writes: usize,
    }

    impl KeyValueStore for UnreadableStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(WandernotesError::Storage("stream did not contain valid UTF-8".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            self.writes += 1;
            Ok(())
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            self.writes += 1;
            Ok(())
        }
    }

    fn draft(title: &str) -> PostDraft {
        PostDraft::new(title, "Pune, India", "Quiet lanes after the rain.", Mood::Relax)
    }

    #[test]
    fn first_load_seeds_and_persists_samples() {
        let mut store = PostStore::new(MemoryStore::default());
        assert_eq!(store.load(), LoadOutcome::Seeded);

        let titles: Vec<&str> = store.list().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Sunrise at Tiger Hill", "Street Food Crawl"]);
        assert!(store.backend().get(POSTS_SLOT).unwrap().is_some());
    }

    #[test]
    fn load_is_idempotent() {
        let mut store = PostStore::open(MemoryStore::default());
        let first = store.list().to_vec();
        assert_eq!(store.load(), LoadOutcome::Loaded { count: 2 });
        assert_eq!(store.list(), first.as_slice());
    }

    #[test]
    fn unparseable_payload_is_backed_up_and_replaced() {
        let backend = MemoryStore::with_slot(POSTS_SLOT, "{not json");
        let mut store = PostStore::new(backend);

        let outcome = store.load();

        assert!(matches!(outcome, LoadOutcome::Recovered { backed_up: true, .. }));
        assert_eq!(store.list().len(), 2);
        assert_eq!(
            store.backend().get(CORRUPT_BACKUP_SLOT).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn repeated_corruption_keeps_every_backup() {
        let mut store = PostStore::new(MemoryStore::with_slot(POSTS_SLOT, "first garbage"));
        store.load();
        store.backend.set(POSTS_SLOT, "second garbage").unwrap();
        store.load();
        store.backend.set(POSTS_SLOT, "third garbage").unwrap();
        store.load();

        let backend = store.backend();
        assert_eq!(backend.get(CORRUPT_BACKUP_SLOT).unwrap().as_deref(), Some("first garbage"));
        assert_eq!(
            backend.get("wandernotes_posts.corrupt.1").unwrap().as_deref(),
            Some("second garbage")
        );
        assert_eq!(
            backend.get("wandernotes_posts.corrupt.2").unwrap().as_deref(),
            Some("third garbage")
        );
    }

    #[test]
    fn unbacked_unreadable_slot_is_never_overwritten() {
        let mut store = PostStore::new(UnreadableStore::default());

        let outcome = store.load();
        assert!(matches!(outcome, LoadOutcome::Recovered { backed_up: false, .. }));
        assert_eq!(store.list().len(), 2);

        let err = store.create(draft("Evening Walk")).unwrap_err();
        assert!(matches!(err, WandernotesError::Storage(_)));
        assert_eq!(store.list()[0].title, "Evening Walk");
        assert!(store.clear_all().is_err());
        assert_eq!(store.backend().writes, 0);
    }

    #[test]
    fn loosely_typed_records_load_without_recovery() {
        let payload = r#"[{"id":"a","title":"Tea","mood":null},{"id":7,"title":"Bus"}]"#;
        let mut store = PostStore::new(MemoryStore::with_slot(POSTS_SLOT, payload));

        assert_eq!(store.load(), LoadOutcome::Loaded { count: 2 });
        let titles: Vec<&str> = store.list().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Tea", "Bus"]);
        assert!(!store.backend().contains(CORRUPT_BACKUP_SLOT).unwrap());
    }

    #[test]
    fn empty_array_is_a_valid_empty_collection() {
        let mut store = PostStore::new(MemoryStore::with_slot(POSTS_SLOT, "[]"));
        assert_eq!(store.load(), LoadOutcome::Loaded { count: 0 });
        assert!(store.list().is_empty());
    }

    #[test]
    fn create_inserts_at_head_with_fresh_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap();
        let mut store = PostStore::new(MemoryStore::default()).with_clock(move || at);
        store.load();

        let post = store.create(draft("Evening Walk")).unwrap();

        assert_eq!(store.list()[0], post);
        assert_eq!(post.date, "2024-06-01T18:00:00.000Z");
        let persisted = decode_posts(&store.backend().get(POSTS_SLOT).unwrap().unwrap()).unwrap();
        assert_eq!(persisted, store.list());
    }

    #[test]
    fn invalid_create_changes_nothing() {
        let mut store = PostStore::open(MemoryStore::default());
        let before = store.backend().get(POSTS_SLOT).unwrap();

        for bad in [
            PostDraft::new("  ", "Pune", "text", Mood::Relax),
            PostDraft::new("Title", "", "text", Mood::Relax),
            PostDraft::new("Title", "Pune", "\n\t", Mood::Relax),
        ] {
            let err = store.create(bad).unwrap_err();
            assert!(matches!(err, WandernotesError::Validation(_)));
        }

        assert_eq!(store.list().len(), 2);
        assert_eq!(store.backend().get(POSTS_SLOT).unwrap(), before);
    }

    #[test]
    fn sequential_creates_get_distinct_ids() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 18, 0, 0).unwrap();
        let mut store = PostStore::new(MemoryStore::default()).with_clock(move || at);
        store.load();

        for i in 0..300 {
            store.create(draft(&format!("Post {i}"))).unwrap();
        }

        let ids: HashSet<&str> = store.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), store.list().len());
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut store = PostStore::open(MemoryStore::default());
        let target = store.list()[1].id.clone();

        assert!(store.delete(&target).unwrap());
        assert_eq!(store.list().len(), 1);
        assert!(store.get(&target).is_none());

        assert!(!store.delete(&target).unwrap());
        assert!(!store.delete("missing").unwrap());
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn clear_all_persists_empty_collection() {
        let mut store = PostStore::open(MemoryStore::default());
        store.clear_all().unwrap();

        assert!(store.list().is_empty());
        assert_eq!(store.backend().get(POSTS_SLOT).unwrap().as_deref(), Some("[]"));
        assert_eq!(store.load(), LoadOutcome::Loaded { count: 0 });
    }

    #[test]
    fn failed_write_keeps_memory_authoritative() {
        let mut store = PostStore::open(ReadOnlyStore::default());
        assert_eq!(store.list().len(), 2);

        let err = store.create(draft("Evening Walk")).unwrap_err();
        assert!(matches!(err, WandernotesError::Storage(_)));
        assert_eq!(store.list().len(), 3);
        assert_eq!(store.list()[0].title, "Evening Walk");

        let id = store.list()[0].id.clone();
        assert!(store.delete(&id).is_err());
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn export_is_pretty_json_of_everything() {
        let store = PostStore::open(MemoryStore::default());
        let json = store.export_json().unwrap();

        assert!(json.contains("\n  {\n    \"id\""));
        assert_eq!(decode_posts(&json).unwrap(), store.list());
    }
}
