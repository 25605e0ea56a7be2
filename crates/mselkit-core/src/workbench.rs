// ── Workbench facade ──
//
// The application-state container: owns the DataStore and ApiClient,
// vends per-entity services and queries, and manages lifecycle
// (connect, open an MSEL, periodic refresh, disconnect). Nothing is
// process-global; consumers share a Workbench by cloning it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use mselkit_api::{ApiClient, TlsMode, TransportConfig};

use crate::config::{ServerConfig, TlsVerification};
use crate::error::CoreError;
use crate::model::RecordId;
use crate::service::{
    CardService, CardTeamService, CatalogInjectService, CatalogService, CiteActionService,
    CiteRoleService, DataFieldService, DataOptionService, DataValueService, InjectService,
    InjectTypeService, InvitationService, MoveService, MselService, MselTeamService,
    MselUnitService, PermissionService, PlayerApplicationService, ScenarioEventService,
    TeamService, UnitService,
};
use crate::store::{DataStore, MselSnapshot};

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<WorkbenchInner>`. [`connect()`](Self::connect)
/// validates the token and primes the MSEL list; [`open_msel()`](Self::open_msel)
/// selects an MSEL and loads all of its collections concurrently.
#[derive(Clone)]
pub struct Workbench {
    inner: Arc<WorkbenchInner>,
}

struct WorkbenchInner {
    config: ServerConfig,
    api: Arc<ApiClient>,
    store: Arc<DataStore>,
    cancel: CancellationToken,
    refresh_handle: Mutex<Option<JoinHandle<()>>>,
}

impl Workbench {
    /// Create a Workbench from configuration. Does NOT talk to the
    /// server — call [`connect()`](Self::connect) for that.
    pub fn new(config: ServerConfig) -> Result<Self, CoreError> {
        let transport = build_transport(&config);
        let api = ApiClient::from_token(config.url.as_str(), &config.token, &transport)?;

        Ok(Self {
            inner: Arc::new(WorkbenchInner {
                config,
                api: Arc::new(api),
                store: Arc::new(DataStore::new()),
                cancel: CancellationToken::new(),
                refresh_handle: Mutex::new(None),
            }),
        })
    }

    /// Lightweight constructor for single CLI invocations: identical
    /// wiring, background refresh forced off.
    pub fn oneshot(mut config: ServerConfig) -> Result<Self, CoreError> {
        config.refresh_interval_secs = 0;
        Self::new(config)
    }

    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Access the underlying DataStore.
    pub fn store(&self) -> &Arc<DataStore> {
        &self.inner.store
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Validate the token with a probe request, prime the permission
    /// and MSEL collections, and start the periodic refresh task if
    /// configured.
    pub async fn connect(&self) -> Result<(), CoreError> {
        self.permissions().load_mine().await?;
        self.msels().load().await?;

        let interval_secs = self.inner.config.refresh_interval_secs;
        if interval_secs > 0 {
            let workbench = self.clone();
            let cancel = self.inner.cancel.child_token();
            let handle = tokio::spawn(refresh_task(workbench, interval_secs, cancel));
            *self.inner.refresh_handle.lock().await = Some(handle);
        }

        info!("connected to MSEL server");
        Ok(())
    }

    /// Select an MSEL as active and load all of its collections.
    pub async fn open_msel(&self, msel_id: &Uuid) -> Result<(), CoreError> {
        let msel = self.inner.api.get_msel(msel_id).await?;
        self.inner.store.msels().insert(msel);
        self.inner
            .store
            .msels()
            .set_active(Some(&RecordId::Uuid(*msel_id)));
        self.refresh_open_msel().await
    }

    /// Deselect the active MSEL. Its collections stay loaded until the
    /// next open replaces them.
    pub fn close_msel(&self) {
        self.inner.store.msels().set_active(None);
    }

    /// Re-fetch every collection of the active MSEL and apply them
    /// insert-then-prune. A no-op when nothing is open.
    pub async fn refresh_open_msel(&self) -> Result<(), CoreError> {
        let Some(active) = self.inner.store.msels().active() else {
            return Ok(());
        };
        let msel_id = active.id;
        let api = &self.inner.api;

        let (events_res, fields_res, values_res, teams_res, units_res, moves_res, cards_res) = tokio::join!(
            api.list_scenario_events(&msel_id),
            api.list_data_fields(&msel_id),
            api.list_data_values(&msel_id),
            api.list_teams_by_msel(&msel_id),
            api.list_units_by_msel(&msel_id),
            api.list_moves(&msel_id),
            api.list_cards(&msel_id),
        );
        let (card_teams_res, roles_res, actions_res, invitations_res, apps_res) = tokio::join!(
            api.list_card_teams(&msel_id),
            api.list_cite_roles(&msel_id),
            api.list_cite_actions(&msel_id),
            api.list_invitations(&msel_id),
            api.list_player_applications(&msel_id),
        );

        let snapshot = MselSnapshot {
            // Core collections — failure is fatal.
            scenario_events: events_res?,
            data_fields: fields_res?,
            data_values: values_res?,
            teams: teams_res?,
            units: units_res?,
            moves: moves_res?,
            cards: cards_res?,
            // Feature endpoints — a disabled feature answers 404.
            card_teams: unwrap_or_empty("card-teams", card_teams_res),
            cite_roles: unwrap_or_empty("cite-roles", roles_res),
            cite_actions: unwrap_or_empty("cite-actions", actions_res),
            invitations: unwrap_or_empty("invitations", invitations_res),
            player_applications: unwrap_or_empty("player-applications", apps_res),
        };

        self.inner.store.apply_msel_snapshot(snapshot);
        debug!(msel_id = %msel_id, "msel collections refreshed");
        Ok(())
    }

    /// Stop the periodic refresh task and wait for it to finish.
    /// In-flight requests are not aborted.
    pub async fn disconnect(&self) {
        self.inner.cancel.cancel();
        if let Some(handle) = self.inner.refresh_handle.lock().await.take() {
            let _ = handle.await;
        }
        debug!("disconnected");
    }

    // ── Service accessors ────────────────────────────────────────────

    pub fn msels(&self) -> MselService {
        MselService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn scenario_events(&self) -> ScenarioEventService {
        ScenarioEventService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn data_fields(&self) -> DataFieldService {
        DataFieldService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn data_options(&self) -> DataOptionService {
        DataOptionService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn data_values(&self) -> DataValueService {
        DataValueService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn teams(&self) -> TeamService {
        TeamService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn units(&self) -> UnitService {
        UnitService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn msel_teams(&self) -> MselTeamService {
        MselTeamService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn msel_units(&self) -> MselUnitService {
        MselUnitService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn catalogs(&self) -> CatalogService {
        CatalogService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn injects(&self) -> InjectService {
        InjectService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn inject_types(&self) -> InjectTypeService {
        InjectTypeService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn catalog_injects(&self) -> CatalogInjectService {
        CatalogInjectService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn moves(&self) -> MoveService {
        MoveService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn cards(&self) -> CardService {
        CardService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn card_teams(&self) -> CardTeamService {
        CardTeamService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn cite_roles(&self) -> CiteRoleService {
        CiteRoleService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn cite_actions(&self) -> CiteActionService {
        CiteActionService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn invitations(&self) -> InvitationService {
        InvitationService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn player_applications(&self) -> PlayerApplicationService {
        PlayerApplicationService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }

    pub fn permissions(&self) -> PermissionService {
        PermissionService::new(Arc::clone(&self.inner.api), Arc::clone(&self.inner.store))
    }
}

// ── Helpers ─────────────────────────────────────────────────────────

fn build_transport(config: &ServerConfig) -> TransportConfig {
    TransportConfig {
        tls: match &config.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        },
        timeout: config.timeout,
    }
}

/// Treat a failed feature-endpoint fetch as an empty collection.
fn unwrap_or_empty<T>(endpoint: &str, result: Result<Vec<T>, mselkit_api::Error>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) if e.is_not_found() => {
            debug!(endpoint, "endpoint unavailable; treating as empty");
            Vec::new()
        }
        Err(e) => {
            warn!(endpoint, error = %e, "fetch failed; treating as empty");
            Vec::new()
        }
    }
}

/// Periodic refresh loop for the open MSEL.
async fn refresh_task(workbench: Workbench, interval_secs: u64, cancel: CancellationToken) {
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    // The first tick fires immediately; the connect path already loaded.
    interval.tick().await;

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            _ = interval.tick() => {
                if let Err(e) = workbench.refresh_open_msel().await {
                    warn!(error = %e, "periodic refresh failed");
                }
            }
        }
    }
}
