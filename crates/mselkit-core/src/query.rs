// ── Entity queries ──
//
// Read-only reactive views over one store: the full collection under
// the entity's default sort, one record by id, the active record, and
// the loading flag.

use std::sync::Arc;

use tokio::sync::watch;

use crate::model::{Record, RecordId};
use crate::store::EntityStore;
use crate::stream::RecordStream;
use crate::view::{ListColumns, ListParams, SortSpec, visible};

/// A read-only reactive view over an [`EntityStore`].
///
/// Queries are cheap to create and hold no locks: they subscribe to the
/// store's watch channels at construction and observe every subsequent
/// mutation.
pub struct EntityQuery<T: Record + ListColumns> {
    snapshot: watch::Receiver<Arc<Vec<Arc<T>>>>,
    active: watch::Receiver<Option<Arc<T>>>,
    loading: watch::Receiver<bool>,
}

impl<T: Record + ListColumns> EntityQuery<T> {
    pub fn new(store: &EntityStore<T>) -> Self {
        Self {
            snapshot: store.subscribe(),
            active: store.subscribe_active(),
            loading: store.subscribe_loading(),
        }
    }

    /// The full collection as a live stream, sorted by the entity's
    /// default column and direction on every emission.
    pub fn select_all(&self) -> SortedStream<T> {
        SortedStream::new(self.snapshot.clone(), T::default_sort())
    }

    /// A live stream of one record, resolved by linear search on every
    /// store mutation.
    pub fn select_by_id(&self, id: impl Into<RecordId>) -> RecordStream<T> {
        RecordStream::by_id(self.snapshot.clone(), id.into())
    }

    /// A live stream of the store's active record.
    pub fn select_active(&self) -> RecordStream<T> {
        RecordStream::active(self.active.clone())
    }

    /// A live view of the store's loading flag.
    pub fn select_loading(&self) -> watch::Receiver<bool> {
        self.loading.clone()
    }
}

/// A collection subscription that re-sorts every emission.
pub struct SortedStream<T: Record + ListColumns> {
    receiver: watch::Receiver<Arc<Vec<Arc<T>>>>,
    sort: SortSpec,
}

impl<T: Record + ListColumns> SortedStream<T> {
    fn new(receiver: watch::Receiver<Arc<Vec<Arc<T>>>>, sort: SortSpec) -> Self {
        Self { receiver, sort }
    }

    fn project(&self, snapshot: &[Arc<T>]) -> Vec<Arc<T>> {
        let params = ListParams {
            sort: Some(self.sort.clone()),
            ..ListParams::default()
        };
        visible(snapshot, &params)
    }

    /// The latest snapshot, sorted.
    pub fn latest(&self) -> Vec<Arc<T>> {
        let snapshot = self.receiver.borrow().clone();
        self.project(&snapshot)
    }

    /// Wait for the next store mutation, returning the sorted snapshot.
    /// Returns `None` once the store has been dropped.
    pub async fn changed(&mut self) -> Option<Vec<Arc<T>>> {
        self.receiver.changed().await.ok()?;
        let snapshot = self.receiver.borrow_and_update().clone();
        Some(self.project(&snapshot))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{Team, UpdateTeamRequest};
    use uuid::Uuid;

    fn team(n: u128, name: &str) -> Team {
        Team {
            id: Uuid::from_u128(n),
            name: name.into(),
            short_name: name.to_lowercase(),
            email: None,
        }
    }

    fn names(rows: &[Arc<Team>]) -> Vec<String> {
        rows.iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn select_all_sorts_by_the_default_column() {
        let store = EntityStore::new();
        store.add(team(1, "Bravo"));
        store.add(team(2, "Alpha"));

        let query = EntityQuery::new(&store);
        assert_eq!(names(&query.select_all().latest()), vec!["Alpha", "Bravo"]);
    }

    #[test]
    fn select_all_resorts_after_upsert() {
        let store = EntityStore::new();
        store.add(team(1, "Bravo"));
        store.add(team(2, "Alpha"));

        store.upsert(
            &RecordId::Uuid(Uuid::from_u128(1)),
            &UpdateTeamRequest {
                name: Some("Zulu".into()),
                ..UpdateTeamRequest::default()
            },
        );

        let query = EntityQuery::new(&store);
        assert_eq!(names(&query.select_all().latest()), vec!["Alpha", "Zulu"]);
    }

    #[test]
    fn select_all_drops_removed_records() {
        let store = EntityStore::new();
        store.add(team(1, "Zulu"));
        store.add(team(2, "Alpha"));
        store.remove(&RecordId::Uuid(Uuid::from_u128(2)));

        let query = EntityQuery::new(&store);
        assert_eq!(names(&query.select_all().latest()), vec!["Zulu"]);
    }

    #[test]
    fn select_by_id_resolves_and_tracks_absence() {
        let store = EntityStore::new();
        store.add(team(1, "Alpha"));

        let query = EntityQuery::new(&store);
        let by_id = query.select_by_id(Uuid::from_u128(1));
        assert_eq!(by_id.latest().unwrap().name, "Alpha");

        store.remove(&RecordId::Uuid(Uuid::from_u128(1)));
        assert!(by_id.latest().is_none());
    }

    #[test]
    fn select_active_follows_the_pointer() {
        let store = EntityStore::new();
        store.add(team(1, "Alpha"));

        let query = EntityQuery::new(&store);
        let active = query.select_active();
        assert!(active.latest().is_none());

        store.set_active(Some(&RecordId::Uuid(Uuid::from_u128(1))));
        assert_eq!(active.latest().unwrap().name, "Alpha");
    }

    #[tokio::test]
    async fn select_all_emits_on_every_mutation() {
        let store = EntityStore::new();
        let query = EntityQuery::new(&store);
        let mut all = query.select_all();

        store.add(team(1, "Bravo"));
        let rows = all.changed().await.unwrap();
        assert_eq!(names(&rows), vec!["Bravo"]);

        store.add(team(2, "Alpha"));
        let rows = all.changed().await.unwrap();
        assert_eq!(names(&rows), vec!["Alpha", "Bravo"]);
    }

    #[tokio::test]
    async fn select_loading_tracks_the_flag() {
        let store: EntityStore<Team> = EntityStore::new();
        let query = EntityQuery::new(&store);
        let mut loading = query.select_loading();

        assert!(!*loading.borrow_and_update());
        store.set_loading(true);
        loading.changed().await.unwrap();
        assert!(*loading.borrow_and_update());
    }
}
