//! Team command handlers.

use std::sync::Arc;

use tabled::Tabled;

use mselkit_core::model::{CreateMselTeamRequest, CreateTeamRequest, UpdateTeamRequest};
use mselkit_core::{Team, Workbench};

use crate::cli::{GlobalOpts, TeamArgs, TeamCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Short")]
    short_name: String,
    #[tabled(rename = "Email")]
    email: String,
}

impl From<&Arc<Team>> for TeamRow {
    fn from(t: &Arc<Team>) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name.clone(),
            short_name: t.short_name.clone(),
            email: t.email.clone().unwrap_or_else(|| "-".into()),
        }
    }
}

pub async fn handle(
    workbench: &Workbench,
    args: TeamArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let service = workbench.teams();

    match args.command {
        TeamCommand::List { list, msel } => {
            match msel {
                Some(msel_id) => service.load_by_msel(&msel_id).await?,
                None => service.load().await?,
            }
            let rows = service.view(util::list_params(&list)).current();
            let rendered =
                output::render_list(&global.output, &rows, |__r| TeamRow::from(__r), |t| t.id.to_string());
            output::print_output(&rendered, global.quiet);
        }

        TeamCommand::Create {
            name,
            short_name,
            email,
        } => {
            let request = CreateTeamRequest {
                name,
                short_name,
                email,
            };
            let created = service.create(&request).await?;
            output::print_output(&format!("created team {}", created.id), global.quiet);
        }

        TeamCommand::Update {
            id,
            name,
            short_name,
            email,
        } => {
            let request = UpdateTeamRequest {
                name,
                short_name,
                email,
            };
            let updated = service.update(&id, &request).await?;
            output::print_output(&format!("updated team {}", updated.id), global.quiet);
        }

        TeamCommand::Delete { id } => {
            if !util::confirm(&format!("Delete team {id}?"), global.yes)? {
                util::aborted(global.quiet);
                return Ok(());
            }
            service.delete(&id).await?;
            output::print_output(&format!("deleted team {id}"), global.quiet);
        }

        TeamCommand::Attach { team_id, msel } => {
            let request = CreateMselTeamRequest {
                msel_id: msel,
                team_id,
            };
            let created = workbench.msel_teams().add(&request).await?;
            output::print_output(
                &format!("attached team {team_id} to msel {msel} ({})", created.id),
                global.quiet,
            );
        }

        TeamCommand::Detach { msel_team_id } => {
            workbench.msel_teams().remove(&msel_team_id).await?;
            output::print_output(&format!("detached {msel_team_id}"), global.quiet);
        }
    }

    Ok(())
}
