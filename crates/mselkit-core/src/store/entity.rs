// ── Generic reactive entity store ──
//
// One insertion-ordered collection per entity type, with push-based
// change notification via `watch` channels. Every mutation rebuilds the
// snapshot, re-resolves the active record, and bumps a version counter
// before the lock is released, so subscribers observe mutations in
// store order.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use tokio::sync::watch;

use crate::model::{Patchable, Record, RecordId};
use crate::stream::EntityStream;

struct Inner<T> {
    /// id -> record, iterated in insertion order.
    records: IndexMap<RecordId, Arc<T>>,
    /// The single "currently selected" id, if any. May dangle after a
    /// remove; the active stream then resolves to `None`.
    active_id: Option<RecordId>,
}

/// A reactive collection for a single entity type.
///
/// Holds records keyed by [`RecordId`] in insertion order. Mutations
/// notify all current subscribers synchronously through `watch`
/// channels: the full snapshot, the resolved active record, the loading
/// flag, and a version counter that bumps on every mutation.
pub struct EntityStore<T: Record> {
    inner: RwLock<Inner<T>>,
    snapshot: watch::Sender<Arc<Vec<Arc<T>>>>,
    active: watch::Sender<Option<Arc<T>>>,
    loading: watch::Sender<bool>,
    version: watch::Sender<u64>,
}

impl<T: Record> EntityStore<T> {
    pub fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        let (active, _) = watch::channel(None);
        let (loading, _) = watch::channel(false);
        let (version, _) = watch::channel(0u64);

        Self {
            inner: RwLock::new(Inner {
                records: IndexMap::new(),
                active_id: None,
            }),
            snapshot,
            active,
            loading,
            version,
        }
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Replace the entire collection, preserving the given order.
    /// Duplicate ids in the input collapse to the last occurrence.
    pub fn set(&self, records: Vec<T>) {
        let mut inner = self.write();
        inner.records = records
            .into_iter()
            .map(|r| (r.record_id(), Arc::new(r)))
            .collect();
        self.notify(&inner);
    }

    /// Insert one record. On a duplicate id this is a silent no-op: the
    /// existing record is kept and returned.
    pub fn add(&self, record: T) -> Arc<T> {
        let id = record.record_id();
        let mut inner = self.write();
        if let Some(existing) = inner.records.get(&id) {
            return Arc::clone(existing);
        }
        let arc = Arc::new(record);
        inner.records.insert(id, Arc::clone(&arc));
        self.notify(&inner);
        arc
    }

    /// Insert-or-replace a full record (server responses supersede local
    /// state). An existing record keeps its collection position.
    pub fn insert(&self, record: T) -> Arc<T> {
        let id = record.record_id();
        let arc = Arc::new(record);
        let mut inner = self.write();
        inner.records.insert(id, Arc::clone(&arc));
        self.notify(&inner);
        arc
    }

    /// Insert-or-merge: on an existing id the patch's set fields
    /// overwrite and unset fields are untouched; on a missing id the
    /// patch is materialized into a fresh record keyed by `id`.
    pub fn upsert(&self, id: &RecordId, patch: &T::Patch) -> Arc<T>
    where
        T: Patchable,
    {
        let mut inner = self.write();
        let existing = inner.records.get(id).cloned();
        let arc = match existing {
            Some(current) => {
                let mut updated = T::clone(&current);
                updated.apply_patch(patch);
                Arc::new(updated)
            }
            None => Arc::new(T::from_patch(id, patch)),
        };
        inner.records.insert(id.clone(), Arc::clone(&arc));
        self.notify(&inner);
        arc
    }

    /// Remove a record by id. Returns the removed record if it existed.
    pub fn remove(&self, id: &RecordId) -> Option<Arc<T>> {
        let mut inner = self.write();
        let removed = inner.records.shift_remove(id);
        if removed.is_some() {
            self.notify(&inner);
        }
        removed
    }

    /// Remove all records.
    pub fn clear(&self) {
        let mut inner = self.write();
        inner.records.clear();
        self.notify(&inner);
    }

    /// Record the single "currently selected" id (or clear it).
    pub fn set_active(&self, id: Option<&RecordId>) {
        let mut inner = self.write();
        inner.active_id = id.cloned();
        self.notify(&inner);
    }

    /// Toggle the busy flag consumed by spinners/status lines.
    pub fn set_loading(&self, loading: bool) {
        self.loading.send_modify(|l| *l = loading);
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub fn get(&self, id: &RecordId) -> Option<Arc<T>> {
        self.read().records.get(id).cloned()
    }

    /// The resolved active record, if the active id points at one.
    pub fn active(&self) -> Option<Arc<T>> {
        self.active.borrow().clone()
    }

    pub fn active_id(&self) -> Option<RecordId> {
        self.read().active_id.clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().records.is_empty()
    }

    /// All current ids, in insertion order.
    pub fn record_ids(&self) -> Vec<RecordId> {
        self.read().records.keys().cloned().collect()
    }

    /// Get the current snapshot (cheap `Arc` clone).
    pub fn snapshot(&self) -> Arc<Vec<Arc<T>>> {
        self.snapshot.borrow().clone()
    }

    /// Mutation counter; bumps on every set/add/insert/upsert/remove/
    /// clear/set_active.
    pub fn version(&self) -> u64 {
        *self.version.borrow()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<Arc<T>>>> {
        self.snapshot.subscribe()
    }

    /// A subscription handle over the raw (insertion-ordered) collection.
    pub fn stream(&self) -> EntityStream<T> {
        EntityStream::new(self.subscribe())
    }

    pub fn subscribe_active(&self) -> watch::Receiver<Option<Arc<T>>> {
        self.active.subscribe()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn read(&self) -> RwLockReadGuard<'_, Inner<T>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner<T>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Rebuild the snapshot, re-resolve the active record, and bump the
    /// version. Called with the write lock held so emissions happen in
    /// mutation order. `send_modify` updates unconditionally, even with
    /// zero receivers.
    fn notify(&self, inner: &Inner<T>) {
        let values: Vec<Arc<T>> = inner.records.values().cloned().collect();
        self.snapshot.send_modify(|snap| *snap = Arc::new(values));

        let resolved = inner
            .active_id
            .as_ref()
            .and_then(|id| inner.records.get(id).cloned());
        self.active.send_modify(|a| *a = resolved);

        self.version.send_modify(|v| *v += 1);
    }
}

impl<T: Record> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::Patchable;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Note {
        id: String,
        name: String,
    }

    impl Note {
        fn new(id: &str, name: &str) -> Self {
            Self {
                id: id.into(),
                name: name.into(),
            }
        }
    }

    impl Record for Note {
        fn record_id(&self) -> RecordId {
            RecordId::from(self.id.as_str())
        }
    }

    #[derive(Debug, Clone, Default)]
    struct NotePatch {
        name: Option<String>,
    }

    impl Patchable for Note {
        type Patch = NotePatch;

        fn apply_patch(&mut self, patch: &Self::Patch) {
            if let Some(name) = &patch.name {
                self.name = name.clone();
            }
        }

        fn from_patch(id: &RecordId, patch: &Self::Patch) -> Self {
            Self {
                id: id.to_string(),
                name: patch.name.clone().unwrap_or_default(),
            }
        }
    }

    fn names(snapshot: &Arc<Vec<Arc<Note>>>) -> Vec<String> {
        snapshot.iter().map(|n| n.name.clone()).collect()
    }

    #[test]
    fn add_preserves_insertion_order() {
        let store: EntityStore<Note> = EntityStore::new();
        store.add(Note::new("1", "Bravo"));
        store.add(Note::new("2", "Alpha"));

        assert_eq!(names(&store.snapshot()), vec!["Bravo", "Alpha"]);
    }

    #[test]
    fn add_is_a_silent_noop_on_duplicate_id() {
        let store: EntityStore<Note> = EntityStore::new();
        store.add(Note::new("1", "first"));
        let kept = store.add(Note::new("1", "second"));

        assert_eq!(kept.name, "first");
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(&RecordId::from("1")).unwrap().name,
            "first"
        );
    }

    #[test]
    fn set_replaces_the_whole_collection() {
        let store: EntityStore<Note> = EntityStore::new();
        store.add(Note::new("1", "old"));

        store.set(vec![Note::new("2", "a"), Note::new("3", "b")]);

        assert_eq!(store.len(), 2);
        assert!(store.get(&RecordId::from("1")).is_none());
        assert_eq!(names(&store.snapshot()), vec!["a", "b"]);
    }

    #[test]
    fn upsert_merges_on_existing_id() {
        let store: EntityStore<Note> = EntityStore::new();
        store.add(Note::new("1", "Bravo"));

        store.upsert(
            &RecordId::from("1"),
            &NotePatch {
                name: Some("Zulu".into()),
            },
        );

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&RecordId::from("1")).unwrap().name, "Zulu");
    }

    #[test]
    fn upsert_leaves_unset_fields_untouched() {
        let store: EntityStore<Note> = EntityStore::new();
        store.add(Note::new("1", "Bravo"));

        store.upsert(&RecordId::from("1"), &NotePatch::default());

        assert_eq!(store.get(&RecordId::from("1")).unwrap().name, "Bravo");
    }

    #[test]
    fn upsert_behaves_as_add_on_missing_id() {
        let store: EntityStore<Note> = EntityStore::new();

        store.upsert(
            &RecordId::from("9"),
            &NotePatch {
                name: Some("fresh".into()),
            },
        );

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&RecordId::from("9")).unwrap().name, "fresh");
    }

    #[test]
    fn insert_replaces_in_place() {
        let store: EntityStore<Note> = EntityStore::new();
        store.add(Note::new("1", "a"));
        store.add(Note::new("2", "b"));

        store.insert(Note::new("1", "a2"));

        // Replaced record keeps its position.
        assert_eq!(names(&store.snapshot()), vec!["a2", "b"]);
    }

    #[test]
    fn remove_returns_the_record_and_drops_it() {
        let store: EntityStore<Note> = EntityStore::new();
        store.add(Note::new("1", "a"));
        store.add(Note::new("2", "b"));

        let removed = store.remove(&RecordId::from("1")).unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(names(&store.snapshot()), vec!["b"]);

        // Removing again is a no-op.
        assert!(store.remove(&RecordId::from("1")).is_none());
    }

    #[test]
    fn replayed_sequence_reflects_exactly_the_implied_records() {
        let store: EntityStore<Note> = EntityStore::new();
        store.add(Note::new("1", "Bravo"));
        store.add(Note::new("2", "Alpha"));
        store.upsert(
            &RecordId::from("1"),
            &NotePatch {
                name: Some("Zulu".into()),
            },
        );
        store.remove(&RecordId::from("2"));

        let snap = store.snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].id, "1");
        assert_eq!(snap[0].name, "Zulu");
    }

    #[test]
    fn active_record_tracks_the_pointer() {
        let store: EntityStore<Note> = EntityStore::new();
        store.add(Note::new("1", "a"));

        assert!(store.active().is_none());

        store.set_active(Some(&RecordId::from("1")));
        assert_eq!(store.active().unwrap().name, "a");

        store.set_active(None);
        assert!(store.active().is_none());
    }

    #[test]
    fn active_resolves_to_none_after_remove() {
        let store: EntityStore<Note> = EntityStore::new();
        store.add(Note::new("1", "a"));
        store.set_active(Some(&RecordId::from("1")));

        store.remove(&RecordId::from("1"));
        assert!(store.active().is_none());
    }

    #[test]
    fn loading_flag_round_trips() {
        let store: EntityStore<Note> = EntityStore::new();
        assert!(!store.is_loading());
        store.set_loading(true);
        assert!(store.is_loading());
        store.set_loading(false);
        assert!(!store.is_loading());
    }

    #[test]
    fn every_mutation_bumps_the_version() {
        let store: EntityStore<Note> = EntityStore::new();
        let v0 = store.version();

        store.add(Note::new("1", "a"));
        store.insert(Note::new("1", "a2"));
        store.remove(&RecordId::from("1"));

        assert_eq!(store.version(), v0 + 3);
    }

    #[test]
    fn subscribers_see_the_latest_snapshot() {
        let store: EntityStore<Note> = EntityStore::new();
        let rx = store.subscribe();

        store.add(Note::new("1", "a"));
        store.add(Note::new("2", "b"));

        assert_eq!(names(&rx.borrow()), vec!["a", "b"]);
    }
}
