// ── Bulk refresh application logic ──
//
// Applies a full per-MSEL fetch into the DataStore without the brief
// empty state that clear-then-insert would cause.

use std::collections::HashSet;

use chrono::Utc;

use super::DataStore;
use super::entity::EntityStore;
use crate::model::{
    Card, CardTeam, CiteAction, CiteRole, DataField, DataValue, Invitation, Move,
    PlayerApplication, Record, RecordId, ScenarioEvent, Team, Unit,
};

/// Insert all incoming records, then prune any existing ids not in the
/// incoming set.
fn insert_and_prune<T: Record>(store: &EntityStore<T>, records: Vec<T>) {
    let incoming: HashSet<RecordId> = records.iter().map(Record::record_id).collect();
    for record in records {
        store.insert(record);
    }
    for existing in store.record_ids() {
        if !incoming.contains(&existing) {
            store.remove(&existing);
        }
    }
}

/// Everything fetched for one MSEL during a refresh cycle.
pub struct MselSnapshot {
    pub scenario_events: Vec<ScenarioEvent>,
    pub data_fields: Vec<DataField>,
    pub data_values: Vec<DataValue>,
    pub teams: Vec<Team>,
    pub units: Vec<Unit>,
    pub moves: Vec<Move>,
    pub cards: Vec<Card>,
    pub card_teams: Vec<CardTeam>,
    pub cite_roles: Vec<CiteRole>,
    pub cite_actions: Vec<CiteAction>,
    pub invitations: Vec<Invitation>,
    pub player_applications: Vec<PlayerApplication>,
}

impl DataStore {
    /// Apply a full per-MSEL refresh.
    ///
    /// Insert-then-prune: incoming records are inserted first, then any
    /// ids not present in the incoming set are removed, so subscribers
    /// never observe a transient empty collection mid-refresh.
    pub fn apply_msel_snapshot(&self, snap: MselSnapshot) {
        insert_and_prune(self.scenario_events(), snap.scenario_events);
        insert_and_prune(self.data_fields(), snap.data_fields);
        insert_and_prune(self.data_values(), snap.data_values);
        insert_and_prune(self.teams(), snap.teams);
        insert_and_prune(self.units(), snap.units);
        insert_and_prune(self.moves(), snap.moves);
        insert_and_prune(self.cards(), snap.cards);
        insert_and_prune(self.card_teams(), snap.card_teams);
        insert_and_prune(self.cite_roles(), snap.cite_roles);
        insert_and_prune(self.cite_actions(), snap.cite_actions);
        insert_and_prune(self.invitations(), snap.invitations);
        insert_and_prune(self.player_applications(), snap.player_applications);

        let _ = self.last_refresh.send(Some(Utc::now()));
    }
}
