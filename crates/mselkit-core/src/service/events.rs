// ── Scenario event data service ──

use std::sync::Arc;

use uuid::Uuid;

use mselkit_api::ApiClient;

use super::load_into;
use crate::error::CoreError;
use crate::model::{
    CreateScenarioEventRequest, RecordId, ScenarioEvent, UpdateScenarioEventRequest,
};
use crate::query::EntityQuery;
use crate::store::DataStore;
use crate::view::{ListParams, ListView};

/// CRUD for the rows of one MSEL's event list.
pub struct ScenarioEventService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl ScenarioEventService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    /// Load the events of one MSEL, replacing the collection.
    pub async fn load_by_msel(&self, msel_id: &Uuid) -> Result<(), CoreError> {
        load_into(
            self.store.scenario_events(),
            self.api.list_scenario_events(msel_id),
        )
        .await
    }

    pub async fn create(
        &self,
        request: &CreateScenarioEventRequest,
    ) -> Result<Arc<ScenarioEvent>, CoreError> {
        let created = self.api.create_scenario_event(request).await?;
        Ok(self.store.scenario_events().add(created))
    }

    pub async fn update(
        &self,
        id: &Uuid,
        request: &UpdateScenarioEventRequest,
    ) -> Result<Arc<ScenarioEvent>, CoreError> {
        let updated = self.api.update_scenario_event(id, request).await?;
        Ok(self.store.scenario_events().insert(updated))
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_scenario_event(id).await?;
        self.store.scenario_events().remove(&RecordId::Uuid(*id));
        Ok(())
    }

    pub fn query(&self) -> EntityQuery<ScenarioEvent> {
        EntityQuery::new(self.store.scenario_events())
    }

    pub fn view(&self, params: ListParams) -> ListView<ScenarioEvent> {
        ListView::new(self.store.scenario_events().subscribe(), params)
    }
}
