//! Domain records and the traits the store layer needs from them.
//!
//! The record types themselves live in `mselkit-api` (the server owns the
//! schema; the client binds to it directly). This module re-exports them
//! and attaches the store-facing traits: [`Record`] for identity and
//! [`Patchable`] for insert-or-merge semantics.

mod identity;
mod patches;

pub use identity::RecordId;

// Re-export every wire model at the domain layer so consumers only
// import from mselkit-core.
pub use mselkit_api::models::{
    Card, CardTeam, Catalog, CatalogInject, CiteAction, CiteRole, CreateCardRequest,
    CreateCardTeamRequest, CreateCatalogInjectRequest, CreateCatalogRequest,
    CreateCiteActionRequest, CreateCiteRoleRequest, CreateDataFieldRequest,
    CreateDataOptionRequest, CreateDataValueRequest, CreateInjectRequest, CreateInjectTypeRequest,
    CreateInvitationRequest, CreateMoveRequest, CreateMselRequest, CreateMselTeamRequest,
    CreateMselUnitRequest, CreatePlayerApplicationRequest, CreateScenarioEventRequest,
    CreateTeamRequest, CreateUnitRequest, DataField, DataFieldType, DataOption, DataValue, Inject,
    InjectType, Invitation, Move, Msel, MselStatus, MselTeam, MselUnit, Permission,
    PlayerApplication, ScenarioEvent, Team, Unit, UpdateCardRequest, UpdateCardTeamRequest,
    UpdateCatalogRequest, UpdateCiteActionRequest, UpdateCiteRoleRequest, UpdateDataFieldRequest,
    UpdateDataOptionRequest, UpdateDataValueRequest, UpdateInjectRequest, UpdateInjectTypeRequest,
    UpdateInvitationRequest, UpdateMoveRequest, UpdateMselRequest, UpdateScenarioEventRequest,
    UpdateTeamRequest, UpdateUnitRequest,
};

/// A value the store layer can hold: cloneable, shareable across tasks,
/// and carrying its own collection-unique id.
pub trait Record: Clone + Send + Sync + 'static {
    fn record_id(&self) -> RecordId;
}

/// Insert-or-merge support for a record type.
///
/// The patch type is the same `Update*` struct the server's update
/// endpoint takes: `Some` fields overwrite, `None` fields are untouched.
/// Applying a patch to a missing id materializes a fresh record from it.
pub trait Patchable: Record {
    type Patch: Clone + Send + Sync + 'static;

    /// Merge the patch's set fields into an existing record.
    fn apply_patch(&mut self, patch: &Self::Patch);

    /// Build a new record from a patch, defaulting unset fields.
    fn from_patch(id: &RecordId, patch: &Self::Patch) -> Self;
}

/// Implement [`Record`] for wire models carrying a `pub id: Uuid` field.
macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {$(
        impl Record for $ty {
            fn record_id(&self) -> RecordId {
                RecordId::Uuid(self.id)
            }
        }
    )*};
}

impl_record!(
    Msel,
    ScenarioEvent,
    DataField,
    DataOption,
    DataValue,
    Team,
    Unit,
    MselTeam,
    MselUnit,
    Catalog,
    Inject,
    InjectType,
    CatalogInject,
    Move,
    Card,
    CardTeam,
    CiteRole,
    CiteAction,
    Invitation,
    PlayerApplication,
    Permission,
);
