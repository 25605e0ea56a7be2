//! Wire models for the MSEL server API.
//!
//! These mirror the server's JSON contracts field-for-field (camelCase on
//! the wire). They double as the domain records consumed by
//! `mselkit-core` — the server owns the schema, the client binds to it
//! directly.

mod access;
mod catalog;
mod cite;
mod event;
mod field;
mod msel;
mod org;
mod timeline;

pub use access::{
    CreateInvitationRequest, CreatePlayerApplicationRequest, Invitation, Permission,
    PlayerApplication, UpdateInvitationRequest,
};
pub use catalog::{
    Catalog, CatalogInject, CreateCatalogInjectRequest, CreateCatalogRequest, CreateInjectRequest,
    CreateInjectTypeRequest, Inject, InjectType, UpdateCatalogRequest, UpdateInjectRequest,
    UpdateInjectTypeRequest,
};
pub use cite::{
    CiteAction, CiteRole, CreateCiteActionRequest, CreateCiteRoleRequest, UpdateCiteActionRequest,
    UpdateCiteRoleRequest,
};
pub use event::{CreateScenarioEventRequest, ScenarioEvent, UpdateScenarioEventRequest};
pub use field::{
    CreateDataFieldRequest, CreateDataOptionRequest, CreateDataValueRequest, DataField,
    DataFieldType, DataOption, DataValue, UpdateDataFieldRequest, UpdateDataOptionRequest,
    UpdateDataValueRequest,
};
pub use msel::{CreateMselRequest, Msel, MselStatus, UpdateMselRequest};
pub use org::{
    CreateMselTeamRequest, CreateMselUnitRequest, CreateTeamRequest, CreateUnitRequest, MselTeam,
    MselUnit, Team, Unit, UpdateTeamRequest, UpdateUnitRequest,
};
pub use timeline::{
    Card, CardTeam, CreateCardRequest, CreateCardTeamRequest, CreateMoveRequest, Move,
    UpdateCardRequest, UpdateCardTeamRequest, UpdateMoveRequest,
};
