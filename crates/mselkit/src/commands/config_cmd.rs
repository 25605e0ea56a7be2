//! Config command handlers. These run without a server connection.

use mselkit_config::{Profile, config_path, load_config_or_default, save_config, store_token};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init { server, name } => {
            let mut cfg = load_config_or_default();
            cfg.profiles.insert(
                name.clone(),
                Profile {
                    server,
                    token: None,
                    token_env: None,
                    ca_cert: None,
                    insecure: if global.insecure { Some(true) } else { None },
                    timeout: None,
                    refresh_interval: None,
                },
            );
            if cfg.default_profile.is_none() {
                cfg.default_profile = Some(name.clone());
            }
            save_config(&cfg)?;
            output::print_output(
                &format!("wrote profile '{name}' to {}", config_path().display()),
                global.quiet,
            );
        }

        ConfigCommand::Show => {
            let cfg = load_config_or_default();
            let mut lines = vec![format!(
                "default_profile: {}",
                cfg.default_profile.as_deref().unwrap_or("-")
            )];
            let mut names: Vec<&String> = cfg.profiles.keys().collect();
            names.sort();
            for name in names {
                let p = &cfg.profiles[name];
                lines.push(format!("[{name}]"));
                lines.push(format!("  server: {}", p.server));
                lines.push(format!(
                    "  token: {}",
                    if p.token.is_some() {
                        "<redacted>"
                    } else if p.token_env.is_some() {
                        "<from env>"
                    } else {
                        "<keyring or unset>"
                    }
                ));
                if let Some(insecure) = p.insecure {
                    lines.push(format!("  insecure: {insecure}"));
                }
            }
            output::print_output(&lines.join("\n"), global.quiet);
        }

        ConfigCommand::Path => {
            output::print_output(&config_path().display().to_string(), global.quiet);
        }

        ConfigCommand::SetToken { token } => {
            let cfg = load_config_or_default();
            let profile_name = crate::config::active_profile_name(global, &cfg);
            let value = token
                .or_else(|| std::env::var("MSEL_TOKEN").ok())
                .ok_or_else(|| CliError::Validation {
                    field: "token".into(),
                    reason: "pass --token or set MSEL_TOKEN".into(),
                })?;
            store_token(&profile_name, &value)?;
            output::print_output(
                &format!("stored token for profile '{profile_name}' in the system keyring"),
                global.quiet,
            );
        }
    }

    Ok(())
}
