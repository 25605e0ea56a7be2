// ── Move / card wire models ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A numbered phase of the exercise timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub id: Uuid,
    pub msel_id: Uuid,
    pub move_number: i32,
    #[serde(default)]
    pub description: Option<String>,
    /// Offset from exercise start at which the move begins.
    #[serde(default)]
    pub delta_seconds: i64,
    /// Simulated wall-clock time of the move's situation brief.
    #[serde(default)]
    pub situation_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub situation_description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMoveRequest {
    pub msel_id: Uuid,
    pub move_number: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub delta_seconds: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situation_description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMoveRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situation_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situation_description: Option<String>,
}

// ── Cards ──────────────────────────────────────────────────────────

/// A participant-facing card grouping injects within a move.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Uuid,
    pub msel_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub move_number: i32,
    pub inject_number: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    pub msel_id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub move_number: i32,
    pub inject_number: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inject_number: Option<i32>,
}

/// Visibility of a card to one team.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTeam {
    pub id: Uuid,
    pub card_id: Uuid,
    pub team_id: Uuid,
    #[serde(default)]
    pub is_shown_on_wall: bool,
    #[serde(default)]
    pub can_post_articles: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardTeamRequest {
    pub card_id: Uuid,
    pub team_id: Uuid,
    #[serde(default)]
    pub is_shown_on_wall: bool,
    #[serde(default)]
    pub can_post_articles: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardTeamRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_shown_on_wall: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_post_articles: Option<bool>,
}
