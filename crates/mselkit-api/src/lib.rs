//! Async Rust client for the MSEL exercise-planning server REST API.
//!
//! This crate is deliberately thin: typed request/response models that
//! mirror the server's JSON contracts, one method per endpoint, and a
//! shared transport layer. All business logic (stores, derived views,
//! lifecycle) lives in `mselkit-core`.
//!
//! ```no_run
//! use mselkit_api::{ApiClient, TransportConfig};
//!
//! # async fn demo() -> Result<(), mselkit_api::Error> {
//! let token = secrecy::SecretString::from("eyJhbGci...".to_string());
//! let client = ApiClient::from_token(
//!     "https://msel.example.com",
//!     &token,
//!     &TransportConfig::default(),
//! )?;
//! let msels = client.list_msels().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::ApiClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
