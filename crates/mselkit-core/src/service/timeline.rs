// ── Move / card services ──

use std::sync::Arc;

use uuid::Uuid;

use mselkit_api::ApiClient;

use super::load_into;
use crate::error::CoreError;
use crate::model::{
    Card, CardTeam, CreateCardRequest, CreateCardTeamRequest, CreateMoveRequest, Move, RecordId,
    UpdateCardRequest, UpdateCardTeamRequest, UpdateMoveRequest,
};
use crate::query::EntityQuery;
use crate::store::DataStore;
use crate::view::{ListParams, ListView};

pub struct MoveService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl MoveService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    pub async fn load_by_msel(&self, msel_id: &Uuid) -> Result<(), CoreError> {
        load_into(self.store.moves(), self.api.list_moves(msel_id)).await
    }

    pub async fn create(&self, request: &CreateMoveRequest) -> Result<Arc<Move>, CoreError> {
        let created = self.api.create_move(request).await?;
        Ok(self.store.moves().add(created))
    }

    pub async fn update(
        &self,
        id: &Uuid,
        request: &UpdateMoveRequest,
    ) -> Result<Arc<Move>, CoreError> {
        let updated = self.api.update_move(id, request).await?;
        Ok(self.store.moves().insert(updated))
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_move(id).await?;
        self.store.moves().remove(&RecordId::Uuid(*id));
        Ok(())
    }

    pub fn query(&self) -> EntityQuery<Move> {
        EntityQuery::new(self.store.moves())
    }

    pub fn view(&self, params: ListParams) -> ListView<Move> {
        ListView::new(self.store.moves().subscribe(), params)
    }
}

pub struct CardService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl CardService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    pub async fn load_by_msel(&self, msel_id: &Uuid) -> Result<(), CoreError> {
        load_into(self.store.cards(), self.api.list_cards(msel_id)).await
    }

    pub async fn create(&self, request: &CreateCardRequest) -> Result<Arc<Card>, CoreError> {
        let created = self.api.create_card(request).await?;
        Ok(self.store.cards().add(created))
    }

    pub async fn update(
        &self,
        id: &Uuid,
        request: &UpdateCardRequest,
    ) -> Result<Arc<Card>, CoreError> {
        let updated = self.api.update_card(id, request).await?;
        Ok(self.store.cards().insert(updated))
    }

    pub async fn delete(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_card(id).await?;
        self.store.cards().remove(&RecordId::Uuid(*id));
        Ok(())
    }

    pub fn query(&self) -> EntityQuery<Card> {
        EntityQuery::new(self.store.cards())
    }

    pub fn view(&self, params: ListParams) -> ListView<Card> {
        ListView::new(self.store.cards().subscribe(), params)
    }
}

/// Per-team visibility flags for cards.
pub struct CardTeamService {
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
}

impl CardTeamService {
    pub(crate) fn new(api: Arc<ApiClient>, store: Arc<DataStore>) -> Self {
        Self { api, store }
    }

    pub async fn load_by_msel(&self, msel_id: &Uuid) -> Result<(), CoreError> {
        load_into(self.store.card_teams(), self.api.list_card_teams(msel_id)).await
    }

    pub async fn add(&self, request: &CreateCardTeamRequest) -> Result<Arc<CardTeam>, CoreError> {
        let created = self.api.create_card_team(request).await?;
        Ok(self.store.card_teams().add(created))
    }

    pub async fn update(
        &self,
        id: &Uuid,
        request: &UpdateCardTeamRequest,
    ) -> Result<Arc<CardTeam>, CoreError> {
        let updated = self.api.update_card_team(id, request).await?;
        Ok(self.store.card_teams().insert(updated))
    }

    pub async fn remove(&self, id: &Uuid) -> Result<(), CoreError> {
        self.api.delete_card_team(id).await?;
        self.store.card_teams().remove(&RecordId::Uuid(*id));
        Ok(())
    }
}
