//! CITE role and action command handlers.

use std::sync::Arc;

use tabled::Tabled;

use mselkit_core::model::{CreateCiteActionRequest, CreateCiteRoleRequest};
use mselkit_core::{CiteAction, CiteRole, Workbench};

use crate::cli::{CiteArgs, CiteCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct RoleRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Team")]
    team: String,
}

impl From<&Arc<CiteRole>> for RoleRow {
    fn from(r: &Arc<CiteRole>) -> Self {
        Self {
            id: r.id.to_string(),
            name: r.name.clone(),
            team: r.team_id.to_string(),
        }
    }
}

#[derive(Tabled)]
struct ActionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Move")]
    move_number: i32,
    #[tabled(rename = "Inject")]
    inject_number: i32,
    #[tabled(rename = "Action")]
    action_number: i32,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Arc<CiteAction>> for ActionRow {
    fn from(a: &Arc<CiteAction>) -> Self {
        Self {
            id: a.id.to_string(),
            move_number: a.move_number,
            inject_number: a.inject_number,
            action_number: a.action_number,
            description: a.description.clone().unwrap_or_else(|| "-".into()),
        }
    }
}

pub async fn handle(
    workbench: &Workbench,
    args: CiteArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CiteCommand::Roles { list } => {
            let msel_id = util::require_msel(args.msel)?;
            let service = workbench.cite_roles();
            service.load_by_msel(&msel_id).await?;
            let rows = service.view(util::list_params(&list)).current();
            let rendered =
                output::render_list(&global.output, &rows, |__r| RoleRow::from(__r), |r| r.id.to_string());
            output::print_output(&rendered, global.quiet);
        }

        CiteCommand::CreateRole { name, team } => {
            let msel_id = util::require_msel(args.msel)?;
            let request = CreateCiteRoleRequest {
                msel_id,
                team_id: team,
                name,
            };
            let created = workbench.cite_roles().create(&request).await?;
            output::print_output(&format!("created cite role {}", created.id), global.quiet);
        }

        CiteCommand::DeleteRole { id } => {
            if !util::confirm(&format!("Delete cite role {id}?"), global.yes)? {
                util::aborted(global.quiet);
                return Ok(());
            }
            workbench.cite_roles().delete(&id).await?;
            output::print_output(&format!("deleted cite role {id}"), global.quiet);
        }

        CiteCommand::Actions { list } => {
            let msel_id = util::require_msel(args.msel)?;
            let service = workbench.cite_actions();
            service.load_by_msel(&msel_id).await?;
            let rows = service.view(util::list_params(&list)).current();
            let rendered =
                output::render_list(&global.output, &rows, |__r| ActionRow::from(__r), |a| a.id.to_string());
            output::print_output(&rendered, global.quiet);
        }

        CiteCommand::CreateAction {
            team,
            move_number,
            inject_number,
            action_number,
            description,
        } => {
            let msel_id = util::require_msel(args.msel)?;
            let request = CreateCiteActionRequest {
                msel_id,
                team_id: team,
                move_number,
                inject_number,
                action_number,
                description,
            };
            let created = workbench.cite_actions().create(&request).await?;
            output::print_output(&format!("created cite action {}", created.id), global.quiet);
        }

        CiteCommand::DeleteAction { id } => {
            if !util::confirm(&format!("Delete cite action {id}?"), global.yes)? {
                util::aborted(global.quiet);
                return Ok(());
            }
            workbench.cite_actions().delete(&id).await?;
            output::print_output(&format!("deleted cite action {id}"), global.quiet);
        }
    }

    Ok(())
}
