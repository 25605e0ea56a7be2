// ── CITE evaluation wire models ──

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An evaluation role a team fills during the exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CiteRole {
    pub id: Uuid,
    pub msel_id: Uuid,
    pub team_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCiteRoleRequest {
    pub msel_id: Uuid,
    pub team_id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCiteRoleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An evaluation checklist action tied to a move and inject number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CiteAction {
    pub id: Uuid,
    pub msel_id: Uuid,
    pub team_id: Uuid,
    pub move_number: i32,
    pub inject_number: i32,
    pub action_number: i32,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCiteActionRequest {
    pub msel_id: Uuid,
    pub team_id: Uuid,
    pub move_number: i32,
    pub inject_number: i32,
    pub action_number: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCiteActionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inject_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
