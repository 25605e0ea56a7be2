// ── Invitation / application / permission services ──

use std::sync::Arc;

use uuid::Uuid;

use mselkit_api::ApiClient;

use super::load_into;
use crate::error::CoreError;
use crate::model::{
    CreateInvitationRequest, CreatePlayerApplicationRequest, Invitation, Permission,
    PlayerApplication, RecordId, UpdateInvitationRequest,
};
use crate::query::EntityQuery;
use crate::store::DataStore;
use crate::view::{ListParams, ListView};

pub struct InvitationService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl InvitationService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    pub async fn load_by_msel(&self, msel_id: &Uuid) -> Result<(), CoreError> {
        load_into(self.store.invitations(), self.api.list_invitations(msel_id)).await
    }

    pub async fn create(
        &self,
        request: &CreateInvitationRequest,
    ) -> Result<Arc<Invitation>, CoreError> {
        let created = self.api.create_invitation(request).await?;
        Ok(self.store.invitations().add(created))
    }

    pub async fn update(
        &self,
        id: &Uuid,
        request: &UpdateInvitationRequest,
    ) -> Result<Arc<Invitation>, CoreError> {
        let updated = self.api.update_invitation(id, request).await?;
        Ok(self.store.invitations().insert(updated))
    }

    /// Deactivate without deleting, so redeemed links stay auditable.
    pub async fn deactivate(&self, id: &Uuid) -> Result<Arc<Invitation>, CoreError> {
        let request = UpdateInvitationRequest {
            was_deactivated: Some(true),
            ..UpdateInvitationRequest::default()
        };
        self.update(id, &request).await
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_invitation(id).await?;
        self.store.invitations().remove(&RecordId::Uuid(*id));
        Ok(())
    }

    pub fn query(&self) -> EntityQuery<Invitation> {
        EntityQuery::new(self.store.invitations())
    }

    pub fn view(&self, params: ListParams) -> ListView<Invitation> {
        ListView::new(self.store.invitations().subscribe(), params)
    }
}

pub struct PlayerApplicationService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl PlayerApplicationService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    pub async fn load_by_msel(&self, msel_id: &Uuid) -> Result<(), CoreError> {
        load_into(
            self.store.player_applications(),
            self.api.list_player_applications(msel_id),
        )
        .await
    }

    pub async fn create(
        &self,
        request: &CreatePlayerApplicationRequest,
    ) -> Result<Arc<PlayerApplication>, CoreError> {
        let created = self.api.create_player_application(request).await?;
        Ok(self.store.player_applications().add(created))
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_player_application(id).await?;
        self.store.player_applications().remove(&RecordId::Uuid(*id));
        Ok(())
    }

    pub fn query(&self) -> EntityQuery<PlayerApplication> {
        EntityQuery::new(self.store.player_applications())
    }
}

/// Read-only permission lookups.
pub struct PermissionService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl PermissionService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    pub async fn load(&self) -> Result<(), CoreError> {
        load_into(self.store.permissions(), self.api.list_permissions()).await
    }

    /// Load the calling user's grants.
    pub async fn load_mine(&self) -> Result<(), CoreError> {
        load_into(self.store.permissions(), self.api.my_permissions()).await
    }

    /// Whether the loaded grants include a named permission.
    pub fn has(&self, name: &str) -> bool {
        self.store
            .permissions()
            .snapshot()
            .iter()
            .any(|p| p.name == name)
    }

    pub fn query(&self) -> EntityQuery<Permission> {
        EntityQuery::new(self.store.permissions())
    }
}
