//! Data services: one per entity family, pairing the REST client with
//! the store.
//!
//! Every service follows the same sequence: issue one REST call, and on
//! success mutate the store so all subscribed views re-render. Loads
//! that fail leave the collection empty AND return the error — nothing
//! is swallowed. There is no retry, no rollback, and no optimistic
//! update: the store changes only after the server confirms.

mod access;
mod catalogs;
mod cite;
mod events;
mod fields;
mod msels;
mod org;
mod timeline;

pub use access::{InvitationService, PermissionService, PlayerApplicationService};
pub use catalogs::{CatalogInjectService, CatalogService, InjectService, InjectTypeService};
pub use cite::{CiteActionService, CiteRoleService};
pub use events::ScenarioEventService;
pub use fields::{DataFieldService, DataOptionService, DataValueService};
pub use msels::MselService;
pub use org::{MselTeamService, MselUnitService, TeamService, UnitService};
pub use timeline::{CardService, CardTeamService, MoveService};

use std::future::Future;

use tracing::warn;

use crate::error::CoreError;
use crate::model::Record;
use crate::store::EntityStore;

/// Shared load sequence: set loading, fetch, replace the collection.
/// On failure the collection is reset to empty and the error surfaces.
pub(crate) async fn load_into<T, F>(store: &EntityStore<T>, fut: F) -> Result<(), CoreError>
where
    T: Record,
    F: Future<Output = Result<Vec<T>, mselkit_api::Error>>,
{
    store.set_loading(true);
    match fut.await {
        Ok(records) => {
            store.set(records);
            store.set_loading(false);
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "collection load failed; resetting to empty");
            store.set(Vec::new());
            store.set_loading(false);
            Err(e.into())
        }
    }
}
