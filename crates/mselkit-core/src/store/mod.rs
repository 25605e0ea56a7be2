// ── Central reactive data store ──
//
// One EntityStore per entity type. Mutations are broadcast to
// subscribers via `watch` channels inside each store.

mod entity;
mod refresh;

pub use entity::EntityStore;
pub use refresh::MselSnapshot;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::model::{
    Card, CardTeam, Catalog, CatalogInject, CiteAction, CiteRole, DataField, DataOption,
    DataValue, Inject, InjectType, Invitation, Move, Msel, MselTeam, MselUnit, Permission,
    PlayerApplication, ScenarioEvent, Team, Unit,
};

/// Central reactive store for all MSEL domain entities.
///
/// Owned by the [`Workbench`](crate::Workbench) and shared by `Arc` —
/// nothing here is process-global. Each collection is an independent
/// [`EntityStore`] with its own subscribers, active pointer, and
/// loading flag.
pub struct DataStore {
    msels: EntityStore<Msel>,
    scenario_events: EntityStore<ScenarioEvent>,
    data_fields: EntityStore<DataField>,
    data_options: EntityStore<DataOption>,
    data_values: EntityStore<DataValue>,
    teams: EntityStore<Team>,
    units: EntityStore<Unit>,
    msel_teams: EntityStore<MselTeam>,
    msel_units: EntityStore<MselUnit>,
    catalogs: EntityStore<Catalog>,
    injects: EntityStore<Inject>,
    inject_types: EntityStore<InjectType>,
    catalog_injects: EntityStore<CatalogInject>,
    moves: EntityStore<Move>,
    cards: EntityStore<Card>,
    card_teams: EntityStore<CardTeam>,
    cite_roles: EntityStore<CiteRole>,
    cite_actions: EntityStore<CiteAction>,
    invitations: EntityStore<Invitation>,
    player_applications: EntityStore<PlayerApplication>,
    permissions: EntityStore<Permission>,
    pub(crate) last_refresh: watch::Sender<Option<DateTime<Utc>>>,
}

impl DataStore {
    pub fn new() -> Self {
        let (last_refresh, _) = watch::channel(None);

        Self {
            msels: EntityStore::new(),
            scenario_events: EntityStore::new(),
            data_fields: EntityStore::new(),
            data_options: EntityStore::new(),
            data_values: EntityStore::new(),
            teams: EntityStore::new(),
            units: EntityStore::new(),
            msel_teams: EntityStore::new(),
            msel_units: EntityStore::new(),
            catalogs: EntityStore::new(),
            injects: EntityStore::new(),
            inject_types: EntityStore::new(),
            catalog_injects: EntityStore::new(),
            moves: EntityStore::new(),
            cards: EntityStore::new(),
            card_teams: EntityStore::new(),
            cite_roles: EntityStore::new(),
            cite_actions: EntityStore::new(),
            invitations: EntityStore::new(),
            player_applications: EntityStore::new(),
            permissions: EntityStore::new(),
            last_refresh,
        }
    }

    // ── Collection accessors ─────────────────────────────────────────

    pub fn msels(&self) -> &EntityStore<Msel> {
        &self.msels
    }

    pub fn scenario_events(&self) -> &EntityStore<ScenarioEvent> {
        &self.scenario_events
    }

    pub fn data_fields(&self) -> &EntityStore<DataField> {
        &self.data_fields
    }

    pub fn data_options(&self) -> &EntityStore<DataOption> {
        &self.data_options
    }

    pub fn data_values(&self) -> &EntityStore<DataValue> {
        &self.data_values
    }

    pub fn teams(&self) -> &EntityStore<Team> {
        &self.teams
    }

    pub fn units(&self) -> &EntityStore<Unit> {
        &self.units
    }

    pub fn msel_teams(&self) -> &EntityStore<MselTeam> {
        &self.msel_teams
    }

    pub fn msel_units(&self) -> &EntityStore<MselUnit> {
        &self.msel_units
    }

    pub fn catalogs(&self) -> &EntityStore<Catalog> {
        &self.catalogs
    }

    pub fn injects(&self) -> &EntityStore<Inject> {
        &self.injects
    }

    pub fn inject_types(&self) -> &EntityStore<InjectType> {
        &self.inject_types
    }

    pub fn catalog_injects(&self) -> &EntityStore<CatalogInject> {
        &self.catalog_injects
    }

    pub fn moves(&self) -> &EntityStore<Move> {
        &self.moves
    }

    pub fn cards(&self) -> &EntityStore<Card> {
        &self.cards
    }

    pub fn card_teams(&self) -> &EntityStore<CardTeam> {
        &self.card_teams
    }

    pub fn cite_roles(&self) -> &EntityStore<CiteRole> {
        &self.cite_roles
    }

    pub fn cite_actions(&self) -> &EntityStore<CiteAction> {
        &self.cite_actions
    }

    pub fn invitations(&self) -> &EntityStore<Invitation> {
        &self.invitations
    }

    pub fn player_applications(&self) -> &EntityStore<PlayerApplication> {
        &self.player_applications
    }

    pub fn permissions(&self) -> &EntityStore<Permission> {
        &self.permissions
    }

    // ── Metadata ─────────────────────────────────────────────────────

    /// When the open MSEL's collections were last fully refreshed, or
    /// `None` if no refresh has run yet.
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.borrow()
    }

    /// How long ago the last full refresh occurred, or `None` if never.
    pub fn data_age(&self) -> Option<chrono::Duration> {
        self.last_refresh().map(|t| Utc::now() - t)
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}
