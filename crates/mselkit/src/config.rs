//! `GlobalOpts`-aware configuration resolution for the CLI.
//!
//! Layering, lowest to highest precedence: config file profile, env
//! vars (via clap), explicit CLI flags.

use std::time::Duration;

use secrecy::SecretString;

use mselkit_config::{Config, Profile, config_path, resolve_token};
use mselkit_core::{ServerConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use mselkit_config::{load_config_or_default, save_config};

/// The profile name to use: flag/env first, then the file's default.
pub fn active_profile_name(global: &GlobalOpts, cfg: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `ServerConfig` from the config file, profile, and CLI overrides.
pub fn build_server_config(global: &GlobalOpts) -> Result<ServerConfig, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    if let Some(profile) = cfg.profiles.get(&profile_name) {
        return resolve_profile(profile, &profile_name, global);
    }

    // No profile found -- build from CLI flags / env vars alone.
    let url_str = global.server.as_deref().ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;

    let url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    let token = global
        .token
        .as_ref()
        .map(|t| SecretString::from(t.clone()))
        .ok_or_else(|| CliError::NoToken {
            profile: profile_name,
        })?;

    Ok(ServerConfig {
        url,
        token,
        tls: tls_from_flag(global.insecure),
        timeout: Duration::from_secs(global.timeout),
        refresh_interval_secs: 0,
    })
}

/// Resolve a named profile with CLI flag overrides applied on top.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<ServerConfig, CliError> {
    let url_str = global.server.as_deref().unwrap_or(&profile.server);
    let url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    let token = match &global.token {
        Some(t) => SecretString::from(t.clone()),
        None => resolve_token(profile, profile_name)?,
    };

    let insecure = global.insecure || profile.insecure.unwrap_or(false);
    let tls = if insecure {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    let timeout = Duration::from_secs(profile.timeout.unwrap_or(global.timeout));

    Ok(ServerConfig {
        url,
        token,
        tls,
        timeout,
        refresh_interval_secs: profile.refresh_interval.unwrap_or(0),
    })
}

fn tls_from_flag(insecure: bool) -> TlsVerification {
    if insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        TlsVerification::SystemDefaults
    }
}
