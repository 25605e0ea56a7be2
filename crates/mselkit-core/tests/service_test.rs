#![allow(clippy::unwrap_used)]
// Integration tests for the data services: REST call → store mutation,
// with failures surfaced instead of swallowed.

use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mselkit_core::model::{CreateTeamRequest, RecordId, UpdateMselRequest};
use mselkit_core::{CoreError, ServerConfig, Workbench};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Workbench) {
    let server = MockServer::start().await;
    let config = ServerConfig::oneshot(
        server.uri().parse().unwrap(),
        secrecy::SecretString::from("test-token".to_string()),
    );
    let workbench = Workbench::new(config).unwrap();
    (server, workbench)
}

fn msel_json(id: Uuid, name: &str) -> serde_json::Value {
    json!({ "id": id, "name": name, "status": "Pending" })
}

// ── Loads ───────────────────────────────────────────────────────────

#[tokio::test]
async fn load_replaces_the_collection() {
    let (server, workbench) = setup().await;
    let id_a = Uuid::from_u128(1);
    let id_b = Uuid::from_u128(2);

    Mock::given(method("GET"))
        .and(path("/api/msels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            msel_json(id_a, "Bravo"),
            msel_json(id_b, "Alpha"),
        ])))
        .mount(&server)
        .await;

    workbench.msels().load().await.unwrap();

    let store = workbench.store();
    assert_eq!(store.msels().len(), 2);
    assert!(!store.msels().is_loading());

    // Default sort puts Alpha first even though Bravo arrived first.
    let sorted = workbench.msels().query().select_all().latest();
    assert_eq!(sorted[0].name, "Alpha");
    assert_eq!(sorted[1].name, "Bravo");
}

#[tokio::test]
async fn failed_load_empties_the_collection_and_surfaces_the_error() {
    let (server, workbench) = setup().await;

    // Prime the store so we can observe the reset.
    Mock::given(method("GET"))
        .and(path("/api/msels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            msel_json(Uuid::from_u128(1), "Existing"),
        ])))
        .expect(1)
        .mount(&server)
        .await;
    workbench.msels().load().await.unwrap();
    assert_eq!(workbench.store().msels().len(), 1);
    server.reset().await;

    Mock::given(method("GET"))
        .and(path("/api/msels"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "title": "Internal Server Error",
            "status": 500
        })))
        .mount(&server)
        .await;

    let result = workbench.msels().load().await;

    assert!(
        matches!(result, Err(CoreError::Api { .. })),
        "expected surfaced Api error, got: {result:?}"
    );
    assert!(workbench.store().msels().is_empty());
    assert!(!workbench.store().msels().is_loading());
}

// ── Writes ──────────────────────────────────────────────────────────

#[tokio::test]
async fn create_adds_the_server_response_to_the_store() {
    let (server, workbench) = setup().await;
    let id = Uuid::from_u128(7);

    Mock::given(method("POST"))
        .and(path("/api/teams"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": id,
            "name": "Blue Cell",
            "shortName": "blue"
        })))
        .mount(&server)
        .await;

    let request = CreateTeamRequest {
        name: "Blue Cell".into(),
        short_name: "blue".into(),
        email: None,
    };
    let created = workbench.teams().create(&request).await.unwrap();

    assert_eq!(created.name, "Blue Cell");
    assert_eq!(workbench.store().teams().len(), 1);
}

#[tokio::test]
async fn failed_create_leaves_the_store_untouched() {
    let (server, workbench) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/teams"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "title": "Bad Request",
            "status": 400,
            "detail": "name already in use"
        })))
        .mount(&server)
        .await;

    let request = CreateTeamRequest {
        name: "Blue Cell".into(),
        short_name: "blue".into(),
        email: None,
    };
    let result = workbench.teams().create(&request).await;

    assert!(result.is_err());
    assert!(workbench.store().teams().is_empty());
}

#[tokio::test]
async fn update_replaces_the_stored_record() {
    let (server, workbench) = setup().await;
    let id = Uuid::from_u128(3);

    Mock::given(method("GET"))
        .and(path("/api/msels"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([msel_json(id, "Before")])),
        )
        .mount(&server)
        .await;
    workbench.msels().load().await.unwrap();

    Mock::given(method("PUT"))
        .and(path(format!("/api/msels/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(msel_json(id, "After")))
        .mount(&server)
        .await;

    let request = UpdateMselRequest {
        name: Some("After".into()),
        ..UpdateMselRequest::default()
    };
    workbench.msels().update(&id, &request).await.unwrap();

    let stored = workbench.store().msels().get(&RecordId::Uuid(id)).unwrap();
    assert_eq!(stored.name, "After");
    assert_eq!(workbench.store().msels().len(), 1);
}

#[tokio::test]
async fn delete_removes_the_record_after_server_confirmation() {
    let (server, workbench) = setup().await;
    let id = Uuid::from_u128(4);

    Mock::given(method("GET"))
        .and(path("/api/msels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([msel_json(id, "Doomed")])))
        .mount(&server)
        .await;
    workbench.msels().load().await.unwrap();

    Mock::given(method("DELETE"))
        .and(path(format!("/api/msels/{id}")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    workbench.msels().delete(&id).await.unwrap();
    assert!(workbench.store().msels().is_empty());
}

#[tokio::test]
async fn failed_delete_keeps_the_record() {
    let (server, workbench) = setup().await;
    let id = Uuid::from_u128(5);

    Mock::given(method("GET"))
        .and(path("/api/msels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([msel_json(id, "Kept")])))
        .mount(&server)
        .await;
    workbench.msels().load().await.unwrap();

    Mock::given(method("DELETE"))
        .and(path(format!("/api/msels/{id}")))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let result = workbench.msels().delete(&id).await;
    assert!(matches!(result, Err(CoreError::PermissionDenied { .. })));
    assert_eq!(workbench.store().msels().len(), 1);
}

// ── Workbench lifecycle ─────────────────────────────────────────────

#[tokio::test]
async fn open_msel_loads_every_collection_and_sets_active() {
    let (server, workbench) = setup().await;
    let msel_id = Uuid::from_u128(9);
    let team_id = Uuid::from_u128(10);

    Mock::given(method("GET"))
        .and(path(format!("/api/msels/{msel_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(msel_json(msel_id, "Sentinel")))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/msels/{msel_id}/scenario-events")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": Uuid::from_u128(11),
            "mselId": msel_id,
            "rowIndex": 1
        }])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/msels/{msel_id}/teams")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": team_id,
            "name": "Blue Cell",
            "shortName": "blue"
        }])))
        .mount(&server)
        .await;

    // Remaining core collections are present but empty.
    for endpoint in [
        "data-fields",
        "data-values",
        "units",
        "moves",
        "cards",
    ] {
        Mock::given(method("GET"))
            .and(path(format!("/api/msels/{msel_id}/{endpoint}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
    }

    // Feature endpoints answer 404 (disabled): treated as empty.
    for endpoint in [
        "card-teams",
        "cite-roles",
        "cite-actions",
        "invitations",
        "player-applications",
    ] {
        Mock::given(method("GET"))
            .and(path(format!("/api/msels/{msel_id}/{endpoint}")))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
    }

    workbench.open_msel(&msel_id).await.unwrap();

    let store = workbench.store();
    assert_eq!(store.msels().active().unwrap().name, "Sentinel");
    assert_eq!(store.scenario_events().len(), 1);
    assert_eq!(store.teams().len(), 1);
    assert!(store.cite_roles().is_empty());

    workbench.close_msel();
    assert!(store.msels().active().is_none());
}
