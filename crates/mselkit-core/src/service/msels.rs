// ── MSEL data service ──

use std::sync::Arc;

use bytes::Bytes;
use uuid::Uuid;

use mselkit_api::ApiClient;

use super::load_into;
use crate::error::CoreError;
use crate::model::{CreateMselRequest, Msel, RecordId, UpdateMselRequest};
use crate::query::EntityQuery;
use crate::store::DataStore;
use crate::view::{ListParams, ListView};

/// CRUD, copy, and download for MSELs.
pub struct MselService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl MselService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    /// Load every MSEL visible to the caller.
    pub async fn load(&self) -> Result<(), CoreError> {
        load_into(self.store.msels(), self.api.list_msels()).await
    }

    /// Load only the MSELs the caller owns or participates in.
    pub async fn load_mine(&self) -> Result<(), CoreError> {
        load_into(self.store.msels(), self.api.list_my_msels()).await
    }

    pub async fn create(&self, request: &CreateMselRequest) -> Result<Arc<Msel>, CoreError> {
        let created = self.api.create_msel(request).await?;
        Ok(self.store.msels().add(created))
    }

    pub async fn update(
        &self,
        id: &Uuid,
        request: &UpdateMselRequest,
    ) -> Result<Arc<Msel>, CoreError> {
        let updated = self.api.update_msel(id, request).await?;
        Ok(self.store.msels().insert(updated))
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_msel(id).await?;
        self.store.msels().remove(&RecordId::Uuid(*id));
        Ok(())
    }

    /// Server-side deep copy; the new copy lands in the store.
    pub async fn copy(&self, id: &Uuid) -> Result<Arc<Msel>, CoreError> {
        let copied = self.api.copy_msel(id).await?;
        Ok(self.store.msels().add(copied))
    }

    /// Download the MSEL as an xlsx workbook. Nothing is stored.
    pub async fn download(&self, id: &Uuid) -> Result<Bytes, CoreError> {
        Ok(self.api.download_msel(id).await?)
    }

    pub fn query(&self) -> EntityQuery<Msel> {
        EntityQuery::new(self.store.msels())
    }

    pub fn view(&self, params: ListParams) -> ListView<Msel> {
        ListView::new(self.store.msels().subscribe(), params)
    }
}
