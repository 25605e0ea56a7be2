// ── Catalog / inject / inject-type services ──

use std::sync::Arc;

use uuid::Uuid;

use mselkit_api::ApiClient;

use super::load_into;
use crate::error::CoreError;
use crate::model::{
    Catalog, CatalogInject, CreateCatalogInjectRequest, CreateCatalogRequest, CreateInjectRequest,
    CreateInjectTypeRequest, Inject, InjectType, RecordId, UpdateCatalogRequest,
    UpdateInjectRequest, UpdateInjectTypeRequest,
};
use crate::query::EntityQuery;
use crate::store::DataStore;
use crate::view::{ListParams, ListView};

pub struct CatalogService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl CatalogService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    pub async fn load(&self) -> Result<(), CoreError> {
        load_into(self.store.catalogs(), self.api.list_catalogs()).await
    }

    pub async fn create(&self, request: &CreateCatalogRequest) -> Result<Arc<Catalog>, CoreError> {
        let created = self.api.create_catalog(request).await?;
        Ok(self.store.catalogs().add(created))
    }

    pub async fn update(
        &self,
        id: &Uuid,
        request: &UpdateCatalogRequest,
    ) -> Result<Arc<Catalog>, CoreError> {
        let updated = self.api.update_catalog(id, request).await?;
        Ok(self.store.catalogs().insert(updated))
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_catalog(id).await?;
        self.store.catalogs().remove(&RecordId::Uuid(*id));
        Ok(())
    }

    pub fn query(&self) -> EntityQuery<Catalog> {
        EntityQuery::new(self.store.catalogs())
    }

    pub fn view(&self, params: ListParams) -> ListView<Catalog> {
        ListView::new(self.store.catalogs().subscribe(), params)
    }
}

pub struct InjectService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl InjectService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    /// Load the injects of one catalog, replacing the collection.
    pub async fn load_by_catalog(&self, catalog_id: &Uuid) -> Result<(), CoreError> {
        load_into(self.store.injects(), self.api.list_injects(catalog_id)).await
    }

    pub async fn create(&self, request: &CreateInjectRequest) -> Result<Arc<Inject>, CoreError> {
        let created = self.api.create_inject(request).await?;
        Ok(self.store.injects().add(created))
    }

    pub async fn update(
        &self,
        id: &Uuid,
        request: &UpdateInjectRequest,
    ) -> Result<Arc<Inject>, CoreError> {
        let updated = self.api.update_inject(id, request).await?;
        Ok(self.store.injects().insert(updated))
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_inject(id).await?;
        self.store.injects().remove(&RecordId::Uuid(*id));
        Ok(())
    }

    pub fn query(&self) -> EntityQuery<Inject> {
        EntityQuery::new(self.store.injects())
    }

    pub fn view(&self, params: ListParams) -> ListView<Inject> {
        ListView::new(self.store.injects().subscribe(), params)
    }
}

pub struct InjectTypeService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl InjectTypeService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    pub async fn load(&self) -> Result<(), CoreError> {
        load_into(self.store.inject_types(), self.api.list_inject_types()).await
    }

    pub async fn create(
        &self,
        request: &CreateInjectTypeRequest,
    ) -> Result<Arc<InjectType>, CoreError> {
        let created = self.api.create_inject_type(request).await?;
        Ok(self.store.inject_types().add(created))
    }

    pub async fn update(
        &self,
        id: &Uuid,
        request: &UpdateInjectTypeRequest,
    ) -> Result<Arc<InjectType>, CoreError> {
        let updated = self.api.update_inject_type(id, request).await?;
        Ok(self.store.inject_types().insert(updated))
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_inject_type(id).await?;
        self.store.inject_types().remove(&RecordId::Uuid(*id));
        Ok(())
    }

    pub fn query(&self) -> EntityQuery<InjectType> {
        EntityQuery::new(self.store.inject_types())
    }
}

/// Attach/detach injects to a catalog.
pub struct CatalogInjectService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl CatalogInjectService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    pub async fn add(
        &self,
        request: &CreateCatalogInjectRequest,
    ) -> Result<Arc<CatalogInject>, CoreError> {
        let created = self.api.create_catalog_inject(request).await?;
        Ok(self.store.catalog_injects().add(created))
    }

    pub async fn remove(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_catalog_inject(id).await?;
        self.store.catalog_injects().remove(&RecordId::Uuid(*id));
        Ok(())
    }
}
