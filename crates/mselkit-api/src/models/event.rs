// ── Scenario event wire models ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::msel::MselStatus;

/// One row of an MSEL: an event scheduled relative to exercise start.
///
/// The event's visible content lives in its [`DataValue`](super::DataValue)
/// cells, one per data field defined on the parent MSEL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioEvent {
    pub id: Uuid,
    pub msel_id: Uuid,
    /// Position of this event's row on the event list.
    pub row_index: i32,
    /// Spreadsheet row metadata carried through xlsx import/export.
    #[serde(default)]
    pub row_metadata: Option<String>,
    /// Offset from exercise start at which the event executes.
    #[serde(default)]
    pub delta_seconds: i64,
    #[serde(default)]
    pub status: MselStatus,
    /// Hidden rows are excluded from participant-facing views.
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub created_by: Option<Uuid>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScenarioEventRequest {
    pub msel_id: Uuid,
    pub row_index: i32,
    #[serde(default)]
    pub delta_seconds: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MselStatus>,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScenarioEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MselStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
}
