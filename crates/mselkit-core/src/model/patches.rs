// ── Patchable impls ──
//
// Merge semantics per field: `Some` overwrites, `None` is untouched.
// Optional record fields can therefore be set but never cleared through
// a patch, matching the update endpoints' behavior.

use uuid::Uuid;

use super::identity::RecordId;
use super::{
    Card, Catalog, DataField, DataValue, Inject, Move, Msel, Patchable, ScenarioEvent, Team, Unit,
    UpdateCardRequest, UpdateCatalogRequest, UpdateDataFieldRequest, UpdateDataValueRequest,
    UpdateInjectRequest, UpdateMoveRequest, UpdateMselRequest, UpdateScenarioEventRequest,
    UpdateTeamRequest, UpdateUnitRequest,
};

/// The UUID a materialized record takes when the caller keyed it by a
/// raw string id. The store keys on the passed id either way.
fn uuid_of(id: &RecordId) -> Uuid {
    id.as_uuid().copied().unwrap_or_else(Uuid::nil)
}

impl Patchable for Msel {
    type Patch = UpdateMselRequest;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(start_time) = patch.start_time {
            self.start_time = Some(start_time);
        }
        if let Some(metadata) = &patch.header_row_metadata {
            self.header_row_metadata = Some(metadata.clone());
        }
        if let Some(is_template) = patch.is_template {
            self.is_template = is_template;
        }
    }

    fn from_patch(id: &RecordId, patch: &Self::Patch) -> Self {
        Self {
            id: uuid_of(id),
            name: patch.name.clone().unwrap_or_default(),
            description: patch.description.clone(),
            status: patch.status.unwrap_or_default(),
            start_time: patch.start_time,
            header_row_metadata: patch.header_row_metadata.clone(),
            is_template: patch.is_template.unwrap_or_default(),
            created_by: None,
            date_created: None,
            date_modified: None,
        }
    }
}

impl Patchable for ScenarioEvent {
    type Patch = UpdateScenarioEventRequest;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        if let Some(row_index) = patch.row_index {
            self.row_index = row_index;
        }
        if let Some(row_metadata) = &patch.row_metadata {
            self.row_metadata = Some(row_metadata.clone());
        }
        if let Some(delta_seconds) = patch.delta_seconds {
            self.delta_seconds = delta_seconds;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(is_hidden) = patch.is_hidden {
            self.is_hidden = is_hidden;
        }
    }

    fn from_patch(id: &RecordId, patch: &Self::Patch) -> Self {
        Self {
            id: uuid_of(id),
            msel_id: Uuid::nil(),
            row_index: patch.row_index.unwrap_or_default(),
            row_metadata: patch.row_metadata.clone(),
            delta_seconds: patch.delta_seconds.unwrap_or_default(),
            status: patch.status.unwrap_or_default(),
            is_hidden: patch.is_hidden.unwrap_or_default(),
            created_by: None,
            date_created: None,
            date_modified: None,
        }
    }
}

impl Patchable for DataField {
    type Patch = UpdateDataFieldRequest;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(data_type) = patch.data_type {
            self.data_type = data_type;
        }
        if let Some(display_order) = patch.display_order {
            self.display_order = display_order;
        }
        if let Some(chosen) = patch.is_chosen_from_list {
            self.is_chosen_from_list = chosen;
        }
        if let Some(on_list) = patch.on_scenario_event_list {
            self.on_scenario_event_list = on_list;
        }
        if let Some(on_view) = patch.on_exercise_view {
            self.on_exercise_view = on_view;
        }
    }

    fn from_patch(id: &RecordId, patch: &Self::Patch) -> Self {
        Self {
            id: uuid_of(id),
            msel_id: Uuid::nil(),
            name: patch.name.clone().unwrap_or_default(),
            data_type: patch.data_type.unwrap_or_default(),
            display_order: patch.display_order.unwrap_or_default(),
            is_chosen_from_list: patch.is_chosen_from_list.unwrap_or_default(),
            on_scenario_event_list: patch.on_scenario_event_list.unwrap_or_default(),
            on_exercise_view: patch.on_exercise_view.unwrap_or_default(),
            column_metadata: None,
        }
    }
}

impl Patchable for DataValue {
    type Patch = UpdateDataValueRequest;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        if let Some(value) = &patch.value {
            self.value = Some(value.clone());
        }
        if let Some(cell_metadata) = &patch.cell_metadata {
            self.cell_metadata = Some(cell_metadata.clone());
        }
    }

    fn from_patch(id: &RecordId, patch: &Self::Patch) -> Self {
        Self {
            id: uuid_of(id),
            scenario_event_id: Uuid::nil(),
            data_field_id: Uuid::nil(),
            value: patch.value.clone(),
            cell_metadata: patch.cell_metadata.clone(),
        }
    }
}

impl Patchable for Team {
    type Patch = UpdateTeamRequest;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(short_name) = &patch.short_name {
            self.short_name = short_name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = Some(email.clone());
        }
    }

    fn from_patch(id: &RecordId, patch: &Self::Patch) -> Self {
        Self {
            id: uuid_of(id),
            name: patch.name.clone().unwrap_or_default(),
            short_name: patch.short_name.clone().unwrap_or_default(),
            email: patch.email.clone(),
        }
    }
}

impl Patchable for Unit {
    type Patch = UpdateUnitRequest;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(short_name) = &patch.short_name {
            self.short_name = short_name.clone();
        }
    }

    fn from_patch(id: &RecordId, patch: &Self::Patch) -> Self {
        Self {
            id: uuid_of(id),
            name: patch.name.clone().unwrap_or_default(),
            short_name: patch.short_name.clone().unwrap_or_default(),
        }
    }
}

impl Patchable for Move {
    type Patch = UpdateMoveRequest;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        if let Some(move_number) = patch.move_number {
            self.move_number = move_number;
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(delta_seconds) = patch.delta_seconds {
            self.delta_seconds = delta_seconds;
        }
        if let Some(situation_time) = patch.situation_time {
            self.situation_time = Some(situation_time);
        }
        if let Some(situation_description) = &patch.situation_description {
            self.situation_description = Some(situation_description.clone());
        }
    }

    fn from_patch(id: &RecordId, patch: &Self::Patch) -> Self {
        Self {
            id: uuid_of(id),
            msel_id: Uuid::nil(),
            move_number: patch.move_number.unwrap_or_default(),
            description: patch.description.clone(),
            delta_seconds: patch.delta_seconds.unwrap_or_default(),
            situation_time: patch.situation_time,
            situation_description: patch.situation_description.clone(),
        }
    }
}

impl Patchable for Card {
    type Patch = UpdateCardRequest;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(move_number) = patch.move_number {
            self.move_number = move_number;
        }
        if let Some(inject_number) = patch.inject_number {
            self.inject_number = inject_number;
        }
    }

    fn from_patch(id: &RecordId, patch: &Self::Patch) -> Self {
        Self {
            id: uuid_of(id),
            msel_id: Uuid::nil(),
            name: patch.name.clone().unwrap_or_default(),
            description: patch.description.clone(),
            move_number: patch.move_number.unwrap_or_default(),
            inject_number: patch.inject_number.unwrap_or_default(),
        }
    }
}

impl Patchable for Catalog {
    type Patch = UpdateCatalogRequest;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(inject_type_id) = patch.inject_type_id {
            self.inject_type_id = inject_type_id;
        }
        if let Some(is_public) = patch.is_public {
            self.is_public = is_public;
        }
    }

    fn from_patch(id: &RecordId, patch: &Self::Patch) -> Self {
        Self {
            id: uuid_of(id),
            name: patch.name.clone().unwrap_or_default(),
            description: patch.description.clone(),
            inject_type_id: patch.inject_type_id.unwrap_or_else(Uuid::nil),
            is_public: patch.is_public.unwrap_or_default(),
            created_by: None,
            date_created: None,
        }
    }
}

impl Patchable for Inject {
    type Patch = UpdateInjectRequest;

    fn apply_patch(&mut self, patch: &Self::Patch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
    }

    fn from_patch(id: &RecordId, patch: &Self::Patch) -> Self {
        Self {
            id: uuid_of(id),
            inject_type_id: Uuid::nil(),
            name: patch.name.clone().unwrap_or_default(),
            description: patch.description.clone(),
            created_by: None,
            date_created: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::MselStatus;

    #[test]
    fn apply_patch_overwrites_only_set_fields() {
        let id = Uuid::new_v4();
        let mut msel = Msel::from_patch(
            &RecordId::Uuid(id),
            &UpdateMselRequest {
                name: Some("Original".into()),
                description: Some("keep me".into()),
                ..UpdateMselRequest::default()
            },
        );

        msel.apply_patch(&UpdateMselRequest {
            status: Some(MselStatus::Approved),
            ..UpdateMselRequest::default()
        });

        assert_eq!(msel.name, "Original");
        assert_eq!(msel.description.as_deref(), Some("keep me"));
        assert_eq!(msel.status, MselStatus::Approved);
    }

    #[test]
    fn from_patch_defaults_unset_fields() {
        let event = ScenarioEvent::from_patch(
            &RecordId::from("row-3"),
            &UpdateScenarioEventRequest {
                row_index: Some(3),
                ..UpdateScenarioEventRequest::default()
            },
        );

        assert_eq!(event.row_index, 3);
        assert_eq!(event.delta_seconds, 0);
        assert_eq!(event.status, MselStatus::Pending);
        assert!(!event.is_hidden);
    }
}
