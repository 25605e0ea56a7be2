//! MSEL command handlers.

use std::sync::Arc;

use tabled::Tabled;

use mselkit_core::model::{CreateMselRequest, UpdateMselRequest};
use mselkit_core::{Msel, Workbench};

use crate::cli::{GlobalOpts, MselArgs, MselCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct MselRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Template")]
    template: String,
    #[tabled(rename = "Start")]
    start: String,
}

impl From<&Arc<Msel>> for MselRow {
    fn from(m: &Arc<Msel>) -> Self {
        Self {
            id: m.id.to_string(),
            name: m.name.clone(),
            status: m.status.to_string(),
            template: if m.is_template { "yes" } else { "no" }.into(),
            start: m
                .start_time
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".into()),
        }
    }
}

fn msel_detail(m: &Arc<Msel>) -> String {
    [
        format!("ID:          {}", m.id),
        format!("Name:        {}", m.name),
        format!("Description: {}", m.description.as_deref().unwrap_or("-")),
        format!("Status:      {}", m.status),
        format!("Template:    {}", m.is_template),
        format!(
            "Start:       {}",
            m.start_time
                .map_or_else(|| "-".into(), |t| t.to_rfc3339())
        ),
        format!(
            "Created:     {}",
            m.date_created
                .map_or_else(|| "-".into(), |t| t.to_rfc3339())
        ),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    workbench: &Workbench,
    args: MselArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let service = workbench.msels();

    match args.command {
        MselCommand::List { list, mine } => {
            if mine {
                service.load_mine().await?;
            } else {
                service.load().await?;
            }
            let rows = service.view(util::list_params(&list)).current();
            let rendered =
                output::render_list(&global.output, &rows, |__r| MselRow::from(__r), |m| m.id.to_string());
            output::print_output(&rendered, global.quiet);
        }

        MselCommand::Show { id } => {
            workbench.open_msel(&id).await?;
            let store = workbench.store();
            let Some(msel) = store.msels().active() else {
                return Err(CliError::NotFound {
                    resource_type: "msel".into(),
                    identifier: id.to_string(),
                    list_command: "msel list".into(),
                });
            };
            let rendered =
                output::render_single(&global.output, &msel, msel_detail, |m| m.id.to_string());
            output::print_output(&rendered, global.quiet);
            if matches!(global.output, crate::cli::OutputFormat::Table) {
                let summary = format!(
                    "Events: {}  Fields: {}  Teams: {}  Moves: {}  Cards: {}",
                    store.scenario_events().len(),
                    store.data_fields().len(),
                    store.teams().len(),
                    store.moves().len(),
                    store.cards().len(),
                );
                output::print_output(&summary, global.quiet);
            }
        }

        MselCommand::Create {
            name,
            description,
            template,
        } => {
            let request = CreateMselRequest {
                name,
                description,
                status: None,
                start_time: None,
                is_template: template,
            };
            let created = service.create(&request).await?;
            output::print_output(&output::notice(&format!("created msel {}", created.id), &global.color), global.quiet);
        }

        MselCommand::Update {
            id,
            name,
            description,
            status,
        } => {
            let status = status.as_deref().map(util::parse_status).transpose()?;
            let request = UpdateMselRequest {
                name,
                description,
                status,
                ..UpdateMselRequest::default()
            };
            let updated = service.update(&id, &request).await?;
            output::print_output(&output::notice(&format!("updated msel {}", updated.id), &global.color), global.quiet);
        }

        MselCommand::Delete { id } => {
            if !util::confirm(&format!("Delete msel {id}? This cannot be undone."), global.yes)? {
                util::aborted(global.quiet);
                return Ok(());
            }
            service.delete(&id).await?;
            output::print_output(&output::notice(&format!("deleted msel {id}"), &global.color), global.quiet);
        }

        MselCommand::Copy { id } => {
            if !util::confirm(&format!("Copy msel {id}?"), global.yes)? {
                util::aborted(global.quiet);
                return Ok(());
            }
            let copy = service.copy(&id).await?;
            output::print_output(&output::notice(&format!("copied msel {id} -> {}", copy.id), &global.color), global.quiet);
        }

        MselCommand::Download { id, out } => {
            let bytes = service
                .download(&id)
                .await
                .map_err(|e| CliError::DownloadFailed {
                    reason: e.to_string(),
                })?;
            let path = out.unwrap_or_else(|| std::path::PathBuf::from(format!("{id}.xlsx")));
            std::fs::write(&path, &bytes)?;
            output::print_output(
                &format!("wrote {} bytes to {}", bytes.len(), path.display()),
                global.quiet,
            );
        }
    }

    Ok(())
}
