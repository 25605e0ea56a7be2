// ── Team / unit services ──
//
// Teams and units are global; MSEL membership is a separate
// association record managed by its own service.

use std::sync::Arc;

use uuid::Uuid;

use mselkit_api::ApiClient;

use super::load_into;
use crate::error::CoreError;
use crate::model::{
    CreateMselTeamRequest, CreateMselUnitRequest, CreateTeamRequest, CreateUnitRequest, MselTeam,
    MselUnit, RecordId, Team, Unit, UpdateTeamRequest, UpdateUnitRequest,
};
use crate::query::EntityQuery;
use crate::store::DataStore;
use crate::view::{ListParams, ListView};

pub struct TeamService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl TeamService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    pub async fn load(&self) -> Result<(), CoreError> {
        load_into(self.store.teams(), self.api.list_teams()).await
    }

    /// Load only the teams attached to one MSEL.
    pub async fn load_by_msel(&self, msel_id: &Uuid) -> Result<(), CoreError> {
        load_into(self.store.teams(), self.api.list_teams_by_msel(msel_id)).await
    }

    pub async fn create(&self, request: &CreateTeamRequest) -> Result<Arc<Team>, CoreError> {
        let created = self.api.create_team(request).await?;
        Ok(self.store.teams().add(created))
    }

    pub async fn update(
        &self,
        id: &Uuid,
        request: &UpdateTeamRequest,
    ) -> Result<Arc<Team>, CoreError> {
        let updated = self.api.update_team(id, request).await?;
        Ok(self.store.teams().insert(updated))
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_team(id).await?;
        self.store.teams().remove(&RecordId::Uuid(*id));
        Ok(())
    }

    pub fn query(&self) -> EntityQuery<Team> {
        EntityQuery::new(self.store.teams())
    }

    pub fn view(&self, params: ListParams) -> ListView<Team> {
        ListView::new(self.store.teams().subscribe(), params)
    }
}

pub struct UnitService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl UnitService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    pub async fn load(&self) -> Result<(), CoreError> {
        load_into(self.store.units(), self.api.list_units()).await
    }

    pub async fn load_by_msel(&self, msel_id: &Uuid) -> Result<(), CoreError> {
        load_into(self.store.units(), self.api.list_units_by_msel(msel_id)).await
    }

    pub async fn create(&self, request: &CreateUnitRequest) -> Result<Arc<Unit>, CoreError> {
        let created = self.api.create_unit(request).await?;
        Ok(self.store.units().add(created))
    }

    pub async fn update(
        &self,
        id: &Uuid,
        request: &UpdateUnitRequest,
    ) -> Result<Arc<Unit>, CoreError> {
        let updated = self.api.update_unit(id, request).await?;
        Ok(self.store.units().insert(updated))
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_unit(id).await?;
        self.store.units().remove(&RecordId::Uuid(*id));
        Ok(())
    }

    pub fn query(&self) -> EntityQuery<Unit> {
        EntityQuery::new(self.store.units())
    }

    pub fn view(&self, params: ListParams) -> ListView<Unit> {
        ListView::new(self.store.units().subscribe(), params)
    }
}

/// Attach/detach teams to an MSEL.
pub struct MselTeamService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl MselTeamService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    pub async fn load_by_msel(&self, msel_id: &Uuid) -> Result<(), CoreError> {
        load_into(self.store.msel_teams(), self.api.list_msel_teams(msel_id)).await
    }

    pub async fn add(&self, request: &CreateMselTeamRequest) -> Result<Arc<MselTeam>, CoreError> {
        let created = self.api.create_msel_team(request).await?;
        Ok(self.store.msel_teams().add(created))
    }

    pub async fn remove(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_msel_team(id).await?;
        self.store.msel_teams().remove(&RecordId::Uuid(*id));
        Ok(())
    }
}

/// Attach/detach units to an MSEL.
pub struct MselUnitService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl MselUnitService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    pub async fn load_by_msel(&self, msel_id: &Uuid) -> Result<(), CoreError> {
        load_into(self.store.msel_units(), self.api.list_msel_units(msel_id)).await
    }

    pub async fn add(&self, request: &CreateMselUnitRequest) -> Result<Arc<MselUnit>, CoreError> {
        let created = self.api.create_msel_unit(request).await?;
        Ok(self.store.msel_units().add(created))
    }

    pub async fn remove(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_msel_unit(id).await?;
        self.store.msel_units().remove(&RecordId::Uuid(*id));
        Ok(())
    }
}
