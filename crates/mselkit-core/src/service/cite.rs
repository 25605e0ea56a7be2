// ── CITE role / action services ──

use std::sync::Arc;

use uuid::Uuid;

use mselkit_api::ApiClient;

use super::load_into;
use crate::error::CoreError;
use crate::model::{
    CiteAction, CiteRole, CreateCiteActionRequest, CreateCiteRoleRequest, RecordId,
    UpdateCiteActionRequest, UpdateCiteRoleRequest,
};
use crate::query::EntityQuery;
use crate::store::DataStore;
use crate::view::{ListParams, ListView};

pub struct CiteRoleService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl CiteRoleService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    pub async fn load_by_msel(&self, msel_id: &Uuid) -> Result<(), CoreError> {
        load_into(self.store.cite_roles(), self.api.list_cite_roles(msel_id)).await
    }

    pub async fn create(
        &self,
        request: &CreateCiteRoleRequest,
    ) -> Result<Arc<CiteRole>, CoreError> {
        let created = self.api.create_cite_role(request).await?;
        Ok(self.store.cite_roles().add(created))
    }

    pub async fn update(
        &self,
        id: &Uuid,
        request: &UpdateCiteRoleRequest,
    ) -> Result<Arc<CiteRole>, CoreError> {
        let updated = self.api.update_cite_role(id, request).await?;
        Ok(self.store.cite_roles().insert(updated))
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_cite_role(id).await?;
        self.store.cite_roles().remove(&RecordId::Uuid(*id));
        Ok(())
    }

    pub fn query(&self) -> EntityQuery<CiteRole> {
        EntityQuery::new(self.store.cite_roles())
    }

    pub fn view(&self, params: ListParams) -> ListView<CiteRole> {
        ListView::new(self.store.cite_roles().subscribe(), params)
    }
}

pub struct CiteActionService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl CiteActionService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    pub async fn load_by_msel(&self, msel_id: &Uuid) -> Result<(), CoreError> {
        load_into(
            self.store.cite_actions(),
            self.api.list_cite_actions(msel_id),
        )
        .await
    }

    pub async fn create(
        &self,
        request: &CreateCiteActionRequest,
    ) -> Result<Arc<CiteAction>, CoreError> {
        let created = self.api.create_cite_action(request).await?;
        Ok(self.store.cite_actions().add(created))
    }

    pub async fn update(
        &self,
        id: &Uuid,
        request: &UpdateCiteActionRequest,
    ) -> Result<Arc<CiteAction>, CoreError> {
        let updated = self.api.update_cite_action(id, request).await?;
        Ok(self.store.cite_actions().insert(updated))
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_cite_action(id).await?;
        self.store.cite_actions().remove(&RecordId::Uuid(*id));
        Ok(())
    }

    pub fn query(&self) -> EntityQuery<CiteAction> {
        EntityQuery::new(self.store.cite_actions())
    }

    pub fn view(&self, params: ListParams) -> ListView<CiteAction> {
        ListView::new(self.store.cite_actions().subscribe(), params)
    }
}
