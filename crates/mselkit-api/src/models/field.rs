// ── Data field / option / value wire models ──
//
// Data fields are the typed columns of an MSEL's event list; data values
// are the per-event cells; data options are the choices for list-sourced
// fields.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Value type of a data field column.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum DataFieldType {
    #[default]
    Text,
    Numeric,
    Date,
    Boolean,
    Select,
    Url,
}

/// A typed column on an MSEL's scenario-event list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataField {
    pub id: Uuid,
    pub msel_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub data_type: DataFieldType,
    /// Column position on the event list.
    pub display_order: i32,
    /// Values are picked from this field's data options.
    #[serde(default)]
    pub is_chosen_from_list: bool,
    /// Shown on the scenario-event list view.
    #[serde(default)]
    pub on_scenario_event_list: bool,
    /// Shown on the exercise view.
    #[serde(default)]
    pub on_exercise_view: bool,
    /// Spreadsheet column metadata carried through xlsx import/export.
    #[serde(default)]
    pub column_metadata: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDataFieldRequest {
    pub msel_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub data_type: DataFieldType,
    pub display_order: i32,
    #[serde(default)]
    pub is_chosen_from_list: bool,
    #[serde(default)]
    pub on_scenario_event_list: bool,
    #[serde(default)]
    pub on_exercise_view: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDataFieldRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataFieldType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_chosen_from_list: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_scenario_event_list: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_exercise_view: Option<bool>,
}

// ── Data options ───────────────────────────────────────────────────

/// One selectable choice for a list-sourced data field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataOption {
    pub id: Uuid,
    pub data_field_id: Uuid,
    pub option_name: String,
    pub option_value: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDataOptionRequest {
    pub data_field_id: Uuid,
    pub option_name: String,
    pub option_value: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDataOptionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
}

// ── Data values ────────────────────────────────────────────────────

/// One cell: the value a scenario event holds for a data field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataValue {
    pub id: Uuid,
    pub scenario_event_id: Uuid,
    pub data_field_id: Uuid,
    #[serde(default)]
    pub value: Option<String>,
    /// Spreadsheet cell metadata carried through xlsx import/export.
    #[serde(default)]
    pub cell_metadata: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDataValueRequest {
    pub scenario_event_id: Uuid,
    pub data_field_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDataValueRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_metadata: Option<String>,
}
