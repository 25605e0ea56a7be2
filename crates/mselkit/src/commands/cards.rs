//! Card command handlers.

use std::sync::Arc;

use tabled::Tabled;

use mselkit_core::model::{CreateCardRequest, UpdateCardRequest};
use mselkit_core::{Card, Workbench};

use crate::cli::{CardArgs, CardCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Move")]
    move_number: i32,
    #[tabled(rename = "Inject")]
    inject_number: i32,
}

impl From<&Arc<Card>> for CardRow {
    fn from(c: &Arc<Card>) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
            move_number: c.move_number,
            inject_number: c.inject_number,
        }
    }
}

pub async fn handle(
    workbench: &Workbench,
    args: CardArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let service = workbench.cards();

    match args.command {
        CardCommand::List { list } => {
            let msel_id = util::require_msel(args.msel)?;
            service.load_by_msel(&msel_id).await?;
            let rows = service.view(util::list_params(&list)).current();
            let rendered =
                output::render_list(&global.output, &rows, |__r| CardRow::from(__r), |c| c.id.to_string());
            output::print_output(&rendered, global.quiet);
        }

        CardCommand::Create {
            name,
            description,
            move_number,
            inject_number,
        } => {
            let msel_id = util::require_msel(args.msel)?;
            let request = CreateCardRequest {
                msel_id,
                name,
                description,
                move_number,
                inject_number,
            };
            let created = service.create(&request).await?;
            output::print_output(&format!("created card {}", created.id), global.quiet);
        }

        CardCommand::Update {
            id,
            name,
            description,
            move_number,
            inject_number,
        } => {
            let request = UpdateCardRequest {
                name,
                description,
                move_number,
                inject_number,
            };
            let updated = service.update(&id, &request).await?;
            output::print_output(&format!("updated card {}", updated.id), global.quiet);
        }

        CardCommand::Delete { id } => {
            if !util::confirm(&format!("Delete card {id}?"), global.yes)? {
                util::aborted(global.quiet);
                return Ok(());
            }
            service.delete(&id).await?;
            output::print_output(&format!("deleted card {id}"), global.quiet);
        }
    }

    Ok(())
}
