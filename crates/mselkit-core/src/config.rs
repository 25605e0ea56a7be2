// ── Runtime connection configuration ──
//
// These types describe *how* to reach an MSEL server. They carry the
// access token and connection tuning, but never touch disk. The CLI
// constructs a `ServerConfig` from its config file and hands it in.

use secrecy::SecretString;
use url::Url;

/// TLS verification strategy.
#[derive(Debug, Clone, Default)]
pub enum TlsVerification {
    /// System CA store (strict). Default.
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-signed deployments).
    DangerAcceptInvalid,
}

impl PartialEq for TlsVerification {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::SystemDefaults, Self::SystemDefaults)
            | (Self::DangerAcceptInvalid, Self::DangerAcceptInvalid) => true,
            (Self::CustomCa(a), Self::CustomCa(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for TlsVerification {}

/// Configuration for connecting to a single MSEL server.
///
/// Built by the CLI or config crate, passed to `Workbench` -- core never
/// reads config files.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server base URL (e.g., `https://msel.example.com`).
    pub url: Url,
    /// Bearer token minted by the external identity provider.
    pub token: SecretString,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: std::time::Duration,
    /// How often to refresh the open MSEL's collections (seconds). 0 = never.
    pub refresh_interval_secs: u64,
}

impl ServerConfig {
    /// A config suitable for one-off CLI invocations: no background refresh.
    pub fn oneshot(url: Url, token: SecretString) -> Self {
        Self {
            url,
            token,
            tls: TlsVerification::default(),
            timeout: std::time::Duration::from_secs(30),
            refresh_interval_secs: 0,
        }
    }
}
