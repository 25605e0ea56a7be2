//! Reactive data layer between `mselkit-api` and UI consumers.
//!
//! This crate owns the client-side state, derived views, and lifecycle
//! for MSEL planning tools:
//!
//! - **[`Workbench`]** — Central facade managing the full lifecycle:
//!   [`connect()`](Workbench::connect) validates the token and primes the
//!   MSEL list, [`open_msel()`](Workbench::open_msel) selects one MSEL and
//!   loads all of its collections concurrently, with optional periodic
//!   refresh. [`Workbench::oneshot()`] covers single CLI invocations.
//!
//! - **[`EntityStore<T>`](EntityStore)** — One generic, insertion-ordered
//!   reactive collection per entity type: `set`/`add`/`upsert`/`insert`/
//!   `remove`/`set_active`/`set_loading`, every mutation notifying all
//!   current subscribers through `watch` channels, in mutation order.
//!   [`DataStore`] aggregates the per-entity stores.
//!
//! - **[`EntityQuery<T>`](EntityQuery)** — Read-only reactive views:
//!   `select_all()` (default-sorted), `select_by_id()`, `select_active()`,
//!   `select_loading()`.
//!
//! - **[`ListView<T>`](ListView)** — The derived visible list: a pure
//!   filter → sort → paginate projection ([`visible`]) recomputed on any
//!   change to the collection or its [`ListParams`] (which round-trip
//!   through URL query pairs for shareable list state).
//!
//! - **Data services** ([`service`]) — One per entity family, pairing
//!   the REST client with the store: load/create/update/delete, where
//!   the store mutates only after the server confirms and every failure
//!   surfaces as a [`CoreError`].

pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod service;
pub mod store;
pub mod stream;
pub mod view;
mod workbench;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ServerConfig, TlsVerification};
pub use error::CoreError;
pub use model::{Patchable, Record, RecordId};
pub use query::{EntityQuery, SortedStream};
pub use store::{DataStore, EntityStore, MselSnapshot};
pub use stream::{EntityStream, EntityWatchStream, RecordStream};
pub use view::{ListColumns, ListParams, ListView, SortDirection, SortSpec, visible};
pub use workbench::Workbench;

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Card, CardTeam, Catalog, CatalogInject, CiteAction, CiteRole, DataField, DataFieldType,
    DataOption, DataValue, Inject, InjectType, Invitation, Move, Msel, MselStatus, MselTeam,
    MselUnit, Permission, PlayerApplication, ScenarioEvent, Team, Unit,
};
