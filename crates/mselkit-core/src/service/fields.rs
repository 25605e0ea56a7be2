// ── Data field / option / value services ──

use std::sync::Arc;

use uuid::Uuid;

use mselkit_api::ApiClient;

use super::load_into;
use crate::error::CoreError;
use crate::model::{
    CreateDataFieldRequest, CreateDataOptionRequest, CreateDataValueRequest, DataField,
    DataOption, DataValue, RecordId, UpdateDataFieldRequest, UpdateDataOptionRequest,
    UpdateDataValueRequest,
};
use crate::query::EntityQuery;
use crate::store::DataStore;
use crate::view::{ListParams, ListView};

/// CRUD for the typed columns of an MSEL's event list.
pub struct DataFieldService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl DataFieldService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    pub async fn load_by_msel(&self, msel_id: &Uuid) -> Result<(), CoreError> {
        load_into(self.store.data_fields(), self.api.list_data_fields(msel_id)).await
    }

    pub async fn create(
        &self,
        request: &CreateDataFieldRequest,
    ) -> Result<Arc<DataField>, CoreError> {
        let created = self.api.create_data_field(request).await?;
        Ok(self.store.data_fields().add(created))
    }

    pub async fn update(
        &self,
        id: &Uuid,
        request: &UpdateDataFieldRequest,
    ) -> Result<Arc<DataField>, CoreError> {
        let updated = self.api.update_data_field(id, request).await?;
        Ok(self.store.data_fields().insert(updated))
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_data_field(id).await?;
        self.store.data_fields().remove(&RecordId::Uuid(*id));
        Ok(())
    }

    pub fn query(&self) -> EntityQuery<DataField> {
        EntityQuery::new(self.store.data_fields())
    }

    pub fn view(&self, params: ListParams) -> ListView<DataField> {
        ListView::new(self.store.data_fields().subscribe(), params)
    }
}

/// CRUD for the choices of list-sourced data fields.
pub struct DataOptionService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl DataOptionService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    /// Load the options of one data field, replacing the collection.
    pub async fn load_by_field(&self, field_id: &Uuid) -> Result<(), CoreError> {
        load_into(
            self.store.data_options(),
            self.api.list_data_options(field_id),
        )
        .await
    }

    pub async fn create(
        &self,
        request: &CreateDataOptionRequest,
    ) -> Result<Arc<DataOption>, CoreError> {
        let created = self.api.create_data_option(request).await?;
        Ok(self.store.data_options().add(created))
    }

    pub async fn update(
        &self,
        id: &Uuid,
        request: &UpdateDataOptionRequest,
    ) -> Result<Arc<DataOption>, CoreError> {
        let updated = self.api.update_data_option(id, request).await?;
        Ok(self.store.data_options().insert(updated))
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_data_option(id).await?;
        self.store.data_options().remove(&RecordId::Uuid(*id));
        Ok(())
    }

    pub fn query(&self) -> EntityQuery<DataOption> {
        EntityQuery::new(self.store.data_options())
    }
}

/// CRUD for the per-event cells.
pub struct DataValueService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl DataValueService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    pub async fn load_by_msel(&self, msel_id: &Uuid) -> Result<(), CoreError> {
        load_into(self.store.data_values(), self.api.list_data_values(msel_id)).await
    }

    pub async fn create(
        &self,
        request: &CreateDataValueRequest,
    ) -> Result<Arc<DataValue>, CoreError> {
        let created = self.api.create_data_value(request).await?;
        Ok(self.store.data_values().add(created))
    }

    pub async fn update(
        &self,
        id: &Uuid,
        request: &UpdateDataValueRequest,
    ) -> Result<Arc<DataValue>, CoreError> {
        let updated = self.api.update_data_value(id, request).await?;
        Ok(self.store.data_values().insert(updated))
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_data_value(id).await?;
        self.store.data_values().remove(&RecordId::Uuid(*id));
        Ok(())
    }

    /// The cell a scenario event holds for one data field, if any.
    /// Plain linear search over the snapshot, resolved at render time.
    pub fn value_for(&self, event_id: &Uuid, field_id: &Uuid) -> Option<Arc<DataValue>> {
        self.store
            .data_values()
            .snapshot()
            .iter()
            .find(|v| v.scenario_event_id == *event_id && v.data_field_id == *field_id)
            .cloned()
    }
}
