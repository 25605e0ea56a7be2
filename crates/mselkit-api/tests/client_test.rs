#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mselkit_api::models::{CreateTeamRequest, MselStatus, UpdateMselRequest};
use mselkit_api::{ApiClient, Error, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let token = secrecy::SecretString::from("test-token".to_string());
    let client = ApiClient::from_token(&server.uri(), &token, &TransportConfig::default()).unwrap();
    (server, client)
}

// ── Auth header ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_bearer_token_sent_on_every_request() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/msels"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let msels = client.list_msels().await.unwrap();
    assert!(msels.is_empty());
}

#[tokio::test]
async fn test_unauthorized_maps_to_invalid_token() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/msels"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.list_msels().await;
    assert!(
        matches!(result, Err(Error::InvalidToken)),
        "expected InvalidToken, got: {result:?}"
    );
}

// ── MSEL endpoints ──────────────────────────────────────────────────

#[tokio::test]
async fn test_list_msels() {
    let (server, client) = setup().await;

    let body = json!([{
        "id": "11111111-1111-1111-1111-111111111111",
        "name": "Operation Sentinel",
        "description": "Regional response exercise",
        "status": "InProgress",
        "isTemplate": false
    }]);

    Mock::given(method("GET"))
        .and(path("/api/msels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let msels = client.list_msels().await.unwrap();

    assert_eq!(msels.len(), 1);
    assert_eq!(msels[0].name, "Operation Sentinel");
    assert_eq!(msels[0].status, MselStatus::InProgress);
    assert!(!msels[0].is_template);
}

#[tokio::test]
async fn test_update_msel_serializes_only_set_fields() {
    let (server, client) = setup().await;
    let id: Uuid = "11111111-1111-1111-1111-111111111111".parse().unwrap();

    let request = UpdateMselRequest {
        name: Some("Renamed".into()),
        ..UpdateMselRequest::default()
    };

    Mock::given(method("PUT"))
        .and(path(format!("/api/msels/{id}")))
        .and(body_json(json!({"name": "Renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": id,
            "name": "Renamed",
            "status": "Pending"
        })))
        .mount(&server)
        .await;

    let updated = client.update_msel(&id, &request).await.unwrap();
    assert_eq!(updated.name, "Renamed");
}

#[tokio::test]
async fn test_delete_msel_accepts_no_content() {
    let (server, client) = setup().await;
    let id: Uuid = "22222222-2222-2222-2222-222222222222".parse().unwrap();

    Mock::given(method("DELETE"))
        .and(path(format!("/api/msels/{id}")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client.delete_msel(&id).await.unwrap();
}

#[tokio::test]
async fn test_download_msel_returns_raw_bytes() {
    let (server, client) = setup().await;
    let id: Uuid = "33333333-3333-3333-3333-333333333333".parse().unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/api/msels/{id}/xlsx")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PK\x03\x04fake-xlsx".to_vec()))
        .mount(&server)
        .await;

    let bytes = client.download_msel(&id).await.unwrap();
    assert!(bytes.starts_with(b"PK"));
}

// ── Parent-scoped lists ─────────────────────────────────────────────

#[tokio::test]
async fn test_list_scenario_events_by_msel() {
    let (server, client) = setup().await;
    let msel_id: Uuid = "44444444-4444-4444-4444-444444444444".parse().unwrap();

    let body = json!([
        {
            "id": "55555555-5555-5555-5555-555555555555",
            "mselId": msel_id,
            "rowIndex": 1,
            "deltaSeconds": 300,
            "status": "Approved",
            "isHidden": false
        },
        {
            "id": "66666666-6666-6666-6666-666666666666",
            "mselId": msel_id,
            "rowIndex": 2
        }
    ]);

    Mock::given(method("GET"))
        .and(path(format!("/api/msels/{msel_id}/scenario-events")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let events = client.list_scenario_events(&msel_id).await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].delta_seconds, 300);
    assert_eq!(events[0].status, MselStatus::Approved);
    // Omitted optional fields fall back to defaults.
    assert_eq!(events[1].delta_seconds, 0);
    assert_eq!(events[1].status, MselStatus::Pending);
}

// ── Error envelope ──────────────────────────────────────────────────

#[tokio::test]
async fn test_problem_body_is_parsed() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/teams"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "title": "Bad Request",
            "status": 400,
            "detail": "short name is required"
        })))
        .mount(&server)
        .await;

    let request = CreateTeamRequest {
        name: "Blue Cell".into(),
        short_name: String::new(),
        email: None,
    };
    let result = client.create_team(&request).await;

    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "short name is required");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_helper() {
    let (server, client) = setup().await;
    let id: Uuid = "77777777-7777-7777-7777-777777777777".parse().unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/api/msels/{id}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "title": "Not Found",
            "status": 404
        })))
        .mount(&server)
        .await;

    let err = client.get_msel(&id).await.unwrap_err();
    assert!(err.is_not_found(), "expected not-found, got: {err:?}");
}

#[tokio::test]
async fn test_deserialization_error_carries_body_preview() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/msels"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client.list_msels().await.unwrap_err();
    match err {
        Error::Deserialization { message, body } => {
            assert!(message.contains("body preview"));
            assert!(body.contains("<html>"));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
