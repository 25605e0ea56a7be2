//! Invitation command handlers.

use std::sync::Arc;

use tabled::Tabled;

use mselkit_core::model::CreateInvitationRequest;
use mselkit_core::{Invitation, Workbench};

use crate::cli::{GlobalOpts, InvitationArgs, InvitationCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct InvitationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Domain")]
    domain: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Uses")]
    uses: String,
    #[tabled(rename = "Active")]
    active: String,
}

impl From<&Arc<Invitation>> for InvitationRow {
    fn from(i: &Arc<Invitation>) -> Self {
        let uses = if i.max_users_allowed > 0 {
            format!("{}/{}", i.user_count, i.max_users_allowed)
        } else {
            i.user_count.to_string()
        };
        Self {
            id: i.id.to_string(),
            domain: i.email_domain.clone().unwrap_or_else(|| "any".into()),
            team: i
                .team_id
                .map_or_else(|| "-".into(), |t| t.to_string()),
            uses,
            active: if i.was_deactivated { "no" } else { "yes" }.into(),
        }
    }
}

pub async fn handle(
    workbench: &Workbench,
    args: InvitationArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let service = workbench.invitations();

    match args.command {
        InvitationCommand::List { list } => {
            let msel_id = util::require_msel(args.msel)?;
            service.load_by_msel(&msel_id).await?;
            let rows = service.view(util::list_params(&list)).current();
            let rendered = output::render_list(&global.output, &rows, |__r| InvitationRow::from(__r), |i| {
                i.id.to_string()
            });
            output::print_output(&rendered, global.quiet);
        }

        InvitationCommand::Create {
            email_domain,
            team,
            max_users,
        } => {
            let msel_id = util::require_msel(args.msel)?;
            let request = CreateInvitationRequest {
                msel_id,
                team_id: team,
                email_domain,
                expiration_date_time: None,
                max_users_allowed: max_users,
            };
            let created = service.create(&request).await?;
            output::print_output(&format!("created invitation {}", created.id), global.quiet);
        }

        InvitationCommand::Deactivate { id } => {
            service.deactivate(&id).await?;
            output::print_output(&format!("deactivated invitation {id}"), global.quiet);
        }

        InvitationCommand::Delete { id } => {
            if !util::confirm(&format!("Delete invitation {id}?"), global.yes)? {
                util::aborted(global.quiet);
                return Ok(());
            }
            service.delete(&id).await?;
            output::print_output(&format!("deleted invitation {id}"), global.quiet);
        }
    }

    Ok(())
}
