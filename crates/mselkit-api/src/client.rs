// Hand-crafted async HTTP client for the MSEL server REST API.
//
// Base path: /api/
// Auth: Authorization: Bearer <token> (minted by an external identity
// provider — this crate never performs the login flow itself).

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::Error;
use crate::models::*;
use crate::transport::TransportConfig;

// ── Error response shape from the server ─────────────────────────────

/// ASP.NET-style problem body: `{"title": ..., "status": ..., "detail": ...}`.
#[derive(serde::Deserialize)]
struct ProblemBody {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the MSEL server API.
///
/// Holds a `reqwest::Client` with the bearer token installed as a default
/// header, plus the normalized base URL ending in `/api/`.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a bearer token and transport config.
    ///
    /// Injects `Authorization: Bearer …` as a sensitive default header on
    /// every request.
    pub fn from_token(
        base_url: &str,
        token: &secrecy::SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|e| Error::Authentication {
                message: format!("invalid token header value: {e}"),
            })?;
        auth_value.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth_value);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(base_url)?;

        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Ensure the base URL ends with `/api/` so relative joins work.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();

        if path.ends_with("/api") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/api/"));
        }

        Ok(url)
    }

    /// Join a relative path (e.g. `"msels"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/api/`, so joining `msels/…` works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn get_bytes(&self, path: &str) -> Result<bytes::Bytes, Error> {
        let url = self.url(path);
        debug!("GET {url} (binary)");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if status.is_success() {
            Ok(resp.bytes().await?)
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let resp = self.http.post(url).send().await?;
        self.handle_response(resp).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path);
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(200)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Error::InvalidToken;
        }

        let raw = resp.text().await.unwrap_or_default();

        if status == reqwest::StatusCode::FORBIDDEN {
            return Error::Forbidden {
                message: if raw.is_empty() {
                    "insufficient permissions".into()
                } else {
                    raw
                },
            };
        }

        if let Ok(problem) = serde_json::from_str::<ProblemBody>(&raw) {
            let message = problem
                .detail
                .or(problem.title)
                .unwrap_or_else(|| status.to_string());
            Error::Api {
                status: status.as_u16(),
                message,
            }
        } else {
            Error::Api {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
            }
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── MSELs ────────────────────────────────────────────────────────

    pub async fn list_msels(&self) -> Result<Vec<Msel>, Error> {
        self.get("msels").await
    }

    /// MSELs the caller owns or participates in.
    pub async fn list_my_msels(&self) -> Result<Vec<Msel>, Error> {
        self.get("my-msels").await
    }

    pub async fn get_msel(&self, msel_id: &Uuid) -> Result<Msel, Error> {
        self.get(&format!("msels/{msel_id}")).await
    }

    pub async fn create_msel(&self, request: &CreateMselRequest) -> Result<Msel, Error> {
        self.post("msels", request).await
    }

    pub async fn update_msel(
        &self,
        msel_id: &Uuid,
        request: &UpdateMselRequest,
    ) -> Result<Msel, Error> {
        self.put(&format!("msels/{msel_id}"), request).await
    }

    pub async fn delete_msel(&self, msel_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("msels/{msel_id}")).await
    }

    /// Server-side deep copy of an MSEL; returns the new copy.
    pub async fn copy_msel(&self, msel_id: &Uuid) -> Result<Msel, Error> {
        self.post_empty(&format!("msels/{msel_id}/copy")).await
    }

    /// Download an MSEL as an xlsx workbook.
    pub async fn download_msel(&self, msel_id: &Uuid) -> Result<bytes::Bytes, Error> {
        self.get_bytes(&format!("msels/{msel_id}/xlsx")).await
    }

    // ── Scenario events ──────────────────────────────────────────────

    pub async fn list_scenario_events(&self, msel_id: &Uuid) -> Result<Vec<ScenarioEvent>, Error> {
        self.get(&format!("msels/{msel_id}/scenario-events")).await
    }

    pub async fn create_scenario_event(
        &self,
        request: &CreateScenarioEventRequest,
    ) -> Result<ScenarioEvent, Error> {
        self.post("scenario-events", request).await
    }

    pub async fn update_scenario_event(
        &self,
        event_id: &Uuid,
        request: &UpdateScenarioEventRequest,
    ) -> Result<ScenarioEvent, Error> {
        self.put(&format!("scenario-events/{event_id}"), request)
            .await
    }

    pub async fn delete_scenario_event(&self, event_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("scenario-events/{event_id}")).await
    }

    // ── Data fields ──────────────────────────────────────────────────

    pub async fn list_data_fields(&self, msel_id: &Uuid) -> Result<Vec<DataField>, Error> {
        self.get(&format!("msels/{msel_id}/data-fields")).await
    }

    pub async fn create_data_field(
        &self,
        request: &CreateDataFieldRequest,
    ) -> Result<DataField, Error> {
        self.post("data-fields", request).await
    }

    pub async fn update_data_field(
        &self,
        field_id: &Uuid,
        request: &UpdateDataFieldRequest,
    ) -> Result<DataField, Error> {
        self.put(&format!("data-fields/{field_id}"), request).await
    }

    pub async fn delete_data_field(&self, field_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("data-fields/{field_id}")).await
    }

    // ── Data options ─────────────────────────────────────────────────

    pub async fn list_data_options(&self, field_id: &Uuid) -> Result<Vec<DataOption>, Error> {
        self.get(&format!("data-fields/{field_id}/options")).await
    }

    pub async fn create_data_option(
        &self,
        request: &CreateDataOptionRequest,
    ) -> Result<DataOption, Error> {
        self.post("data-options", request).await
    }

    pub async fn update_data_option(
        &self,
        option_id: &Uuid,
        request: &UpdateDataOptionRequest,
    ) -> Result<DataOption, Error> {
        self.put(&format!("data-options/{option_id}"), request)
            .await
    }

    pub async fn delete_data_option(&self, option_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("data-options/{option_id}")).await
    }

    // ── Data values ──────────────────────────────────────────────────

    pub async fn list_data_values(&self, msel_id: &Uuid) -> Result<Vec<DataValue>, Error> {
        self.get(&format!("msels/{msel_id}/data-values")).await
    }

    pub async fn create_data_value(
        &self,
        request: &CreateDataValueRequest,
    ) -> Result<DataValue, Error> {
        self.post("data-values", request).await
    }

    pub async fn update_data_value(
        &self,
        value_id: &Uuid,
        request: &UpdateDataValueRequest,
    ) -> Result<DataValue, Error> {
        self.put(&format!("data-values/{value_id}"), request).await
    }

    pub async fn delete_data_value(&self, value_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("data-values/{value_id}")).await
    }

    // ── Teams ────────────────────────────────────────────────────────

    pub async fn list_teams(&self) -> Result<Vec<Team>, Error> {
        self.get("teams").await
    }

    /// Teams attached to one MSEL (resolved through msel-team associations).
    pub async fn list_teams_by_msel(&self, msel_id: &Uuid) -> Result<Vec<Team>, Error> {
        self.get(&format!("msels/{msel_id}/teams")).await
    }

    pub async fn create_team(&self, request: &CreateTeamRequest) -> Result<Team, Error> {
        self.post("teams", request).await
    }

    pub async fn update_team(
        &self,
        team_id: &Uuid,
        request: &UpdateTeamRequest,
    ) -> Result<Team, Error> {
        self.put(&format!("teams/{team_id}"), request).await
    }

    pub async fn delete_team(&self, team_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("teams/{team_id}")).await
    }

    pub async fn list_msel_teams(&self, msel_id: &Uuid) -> Result<Vec<MselTeam>, Error> {
        self.get(&format!("msels/{msel_id}/msel-teams")).await
    }

    pub async fn create_msel_team(
        &self,
        request: &CreateMselTeamRequest,
    ) -> Result<MselTeam, Error> {
        self.post("msel-teams", request).await
    }

    pub async fn delete_msel_team(&self, msel_team_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("msel-teams/{msel_team_id}")).await
    }

    // ── Units ────────────────────────────────────────────────────────

    pub async fn list_units(&self) -> Result<Vec<Unit>, Error> {
        self.get("units").await
    }

    pub async fn list_units_by_msel(&self, msel_id: &Uuid) -> Result<Vec<Unit>, Error> {
        self.get(&format!("msels/{msel_id}/units")).await
    }

    pub async fn create_unit(&self, request: &CreateUnitRequest) -> Result<Unit, Error> {
        self.post("units", request).await
    }

    pub async fn update_unit(
        &self,
        unit_id: &Uuid,
        request: &UpdateUnitRequest,
    ) -> Result<Unit, Error> {
        self.put(&format!("units/{unit_id}"), request).await
    }

    pub async fn delete_unit(&self, unit_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("units/{unit_id}")).await
    }

    pub async fn list_msel_units(&self, msel_id: &Uuid) -> Result<Vec<MselUnit>, Error> {
        self.get(&format!("msels/{msel_id}/msel-units")).await
    }

    pub async fn create_msel_unit(
        &self,
        request: &CreateMselUnitRequest,
    ) -> Result<MselUnit, Error> {
        self.post("msel-units", request).await
    }

    pub async fn delete_msel_unit(&self, msel_unit_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("msel-units/{msel_unit_id}")).await
    }

    // ── Catalogs ─────────────────────────────────────────────────────

    pub async fn list_catalogs(&self) -> Result<Vec<Catalog>, Error> {
        self.get("catalogs").await
    }

    pub async fn get_catalog(&self, catalog_id: &Uuid) -> Result<Catalog, Error> {
        self.get(&format!("catalogs/{catalog_id}")).await
    }

    pub async fn create_catalog(&self, request: &CreateCatalogRequest) -> Result<Catalog, Error> {
        self.post("catalogs", request).await
    }

    pub async fn update_catalog(
        &self,
        catalog_id: &Uuid,
        request: &UpdateCatalogRequest,
    ) -> Result<Catalog, Error> {
        self.put(&format!("catalogs/{catalog_id}"), request).await
    }

    pub async fn delete_catalog(&self, catalog_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("catalogs/{catalog_id}")).await
    }

    // ── Injects ──────────────────────────────────────────────────────

    /// Injects belonging to one catalog.
    pub async fn list_injects(&self, catalog_id: &Uuid) -> Result<Vec<Inject>, Error> {
        self.get(&format!("catalogs/{catalog_id}/injects")).await
    }

    pub async fn create_inject(&self, request: &CreateInjectRequest) -> Result<Inject, Error> {
        self.post("injects", request).await
    }

    pub async fn update_inject(
        &self,
        inject_id: &Uuid,
        request: &UpdateInjectRequest,
    ) -> Result<Inject, Error> {
        self.put(&format!("injects/{inject_id}"), request).await
    }

    pub async fn delete_inject(&self, inject_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("injects/{inject_id}")).await
    }

    pub async fn create_catalog_inject(
        &self,
        request: &CreateCatalogInjectRequest,
    ) -> Result<CatalogInject, Error> {
        self.post("catalog-injects", request).await
    }

    pub async fn delete_catalog_inject(&self, catalog_inject_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("catalog-injects/{catalog_inject_id}"))
            .await
    }

    // ── Inject types ─────────────────────────────────────────────────

    pub async fn list_inject_types(&self) -> Result<Vec<InjectType>, Error> {
        self.get("inject-types").await
    }

    pub async fn create_inject_type(
        &self,
        request: &CreateInjectTypeRequest,
    ) -> Result<InjectType, Error> {
        self.post("inject-types", request).await
    }

    pub async fn update_inject_type(
        &self,
        inject_type_id: &Uuid,
        request: &UpdateInjectTypeRequest,
    ) -> Result<InjectType, Error> {
        self.put(&format!("inject-types/{inject_type_id}"), request)
            .await
    }

    pub async fn delete_inject_type(&self, inject_type_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("inject-types/{inject_type_id}")).await
    }

    // ── Moves ────────────────────────────────────────────────────────

    pub async fn list_moves(&self, msel_id: &Uuid) -> Result<Vec<Move>, Error> {
        self.get(&format!("msels/{msel_id}/moves")).await
    }

    pub async fn create_move(&self, request: &CreateMoveRequest) -> Result<Move, Error> {
        self.post("moves", request).await
    }

    pub async fn update_move(
        &self,
        move_id: &Uuid,
        request: &UpdateMoveRequest,
    ) -> Result<Move, Error> {
        self.put(&format!("moves/{move_id}"), request).await
    }

    pub async fn delete_move(&self, move_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("moves/{move_id}")).await
    }

    // ── Cards ────────────────────────────────────────────────────────

    pub async fn list_cards(&self, msel_id: &Uuid) -> Result<Vec<Card>, Error> {
        self.get(&format!("msels/{msel_id}/cards")).await
    }

    pub async fn create_card(&self, request: &CreateCardRequest) -> Result<Card, Error> {
        self.post("cards", request).await
    }

    pub async fn update_card(
        &self,
        card_id: &Uuid,
        request: &UpdateCardRequest,
    ) -> Result<Card, Error> {
        self.put(&format!("cards/{card_id}"), request).await
    }

    pub async fn delete_card(&self, card_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("cards/{card_id}")).await
    }

    pub async fn list_card_teams(&self, msel_id: &Uuid) -> Result<Vec<CardTeam>, Error> {
        self.get(&format!("msels/{msel_id}/card-teams")).await
    }

    pub async fn create_card_team(
        &self,
        request: &CreateCardTeamRequest,
    ) -> Result<CardTeam, Error> {
        self.post("card-teams", request).await
    }

    pub async fn update_card_team(
        &self,
        card_team_id: &Uuid,
        request: &UpdateCardTeamRequest,
    ) -> Result<CardTeam, Error> {
        self.put(&format!("card-teams/{card_team_id}"), request)
            .await
    }

    pub async fn delete_card_team(&self, card_team_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("card-teams/{card_team_id}")).await
    }

    // ── CITE roles / actions ─────────────────────────────────────────

    pub async fn list_cite_roles(&self, msel_id: &Uuid) -> Result<Vec<CiteRole>, Error> {
        self.get(&format!("msels/{msel_id}/cite-roles")).await
    }

    pub async fn create_cite_role(
        &self,
        request: &CreateCiteRoleRequest,
    ) -> Result<CiteRole, Error> {
        self.post("cite-roles", request).await
    }

    pub async fn update_cite_role(
        &self,
        role_id: &Uuid,
        request: &UpdateCiteRoleRequest,
    ) -> Result<CiteRole, Error> {
        self.put(&format!("cite-roles/{role_id}"), request).await
    }

    pub async fn delete_cite_role(&self, role_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("cite-roles/{role_id}")).await
    }

    pub async fn list_cite_actions(&self, msel_id: &Uuid) -> Result<Vec<CiteAction>, Error> {
        self.get(&format!("msels/{msel_id}/cite-actions")).await
    }

    pub async fn create_cite_action(
        &self,
        request: &CreateCiteActionRequest,
    ) -> Result<CiteAction, Error> {
        self.post("cite-actions", request).await
    }

    pub async fn update_cite_action(
        &self,
        action_id: &Uuid,
        request: &UpdateCiteActionRequest,
    ) -> Result<CiteAction, Error> {
        self.put(&format!("cite-actions/{action_id}"), request)
            .await
    }

    pub async fn delete_cite_action(&self, action_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("cite-actions/{action_id}")).await
    }

    // ── Invitations ──────────────────────────────────────────────────

    pub async fn list_invitations(&self, msel_id: &Uuid) -> Result<Vec<Invitation>, Error> {
        self.get(&format!("msels/{msel_id}/invitations")).await
    }

    pub async fn create_invitation(
        &self,
        request: &CreateInvitationRequest,
    ) -> Result<Invitation, Error> {
        self.post("invitations", request).await
    }

    pub async fn update_invitation(
        &self,
        invitation_id: &Uuid,
        request: &UpdateInvitationRequest,
    ) -> Result<Invitation, Error> {
        self.put(&format!("invitations/{invitation_id}"), request)
            .await
    }

    pub async fn delete_invitation(&self, invitation_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("invitations/{invitation_id}")).await
    }

    // ── Player applications ──────────────────────────────────────────

    pub async fn list_player_applications(
        &self,
        msel_id: &Uuid,
    ) -> Result<Vec<PlayerApplication>, Error> {
        self.get(&format!("msels/{msel_id}/player-applications"))
            .await
    }

    pub async fn create_player_application(
        &self,
        request: &CreatePlayerApplicationRequest,
    ) -> Result<PlayerApplication, Error> {
        self.post("player-applications", request).await
    }

    pub async fn delete_player_application(&self, application_id: &Uuid) -> Result<(), Error> {
        self.delete(&format!("player-applications/{application_id}"))
            .await
    }

    // ── Permissions ──────────────────────────────────────────────────

    pub async fn list_permissions(&self) -> Result<Vec<Permission>, Error> {
        self.get("permissions").await
    }

    /// Permissions granted to the calling user. Doubles as the connect
    /// probe: a 401 here means the token is no good.
    pub async fn my_permissions(&self) -> Result<Vec<Permission>, Error> {
        self.get("permissions/mine").await
    }
}
