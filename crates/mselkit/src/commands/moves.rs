//! Move command handlers.

use std::sync::Arc;

use tabled::Tabled;

use mselkit_core::model::{CreateMoveRequest, UpdateMoveRequest};
use mselkit_core::{Move, Workbench};

use crate::cli::{GlobalOpts, MoveArgs, MoveCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct MoveRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Move")]
    number: i32,
    #[tabled(rename = "Offset (s)")]
    delta: i64,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Arc<Move>> for MoveRow {
    fn from(m: &Arc<Move>) -> Self {
        Self {
            id: m.id.to_string(),
            number: m.move_number,
            delta: m.delta_seconds,
            description: m.description.clone().unwrap_or_else(|| "-".into()),
        }
    }
}

pub async fn handle(
    workbench: &Workbench,
    args: MoveArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let service = workbench.moves();

    match args.command {
        MoveCommand::List { list } => {
            let msel_id = util::require_msel(args.msel)?;
            service.load_by_msel(&msel_id).await?;
            let rows = service.view(util::list_params(&list)).current();
            let rendered =
                output::render_list(&global.output, &rows, |__r| MoveRow::from(__r), |m| m.id.to_string());
            output::print_output(&rendered, global.quiet);
        }

        MoveCommand::Create {
            number,
            description,
            delta,
        } => {
            let msel_id = util::require_msel(args.msel)?;
            let request = CreateMoveRequest {
                msel_id,
                move_number: number,
                description,
                delta_seconds: delta,
                situation_time: None,
                situation_description: None,
            };
            let created = service.create(&request).await?;
            output::print_output(&format!("created move {}", created.id), global.quiet);
        }

        MoveCommand::Update {
            id,
            number,
            description,
            delta,
        } => {
            let request = UpdateMoveRequest {
                move_number: number,
                description,
                delta_seconds: delta,
                ..UpdateMoveRequest::default()
            };
            let updated = service.update(&id, &request).await?;
            output::print_output(&format!("updated move {}", updated.id), global.quiet);
        }

        MoveCommand::Delete { id } => {
            if !util::confirm(&format!("Delete move {id}?"), global.yes)? {
                util::aborted(global.quiet);
                return Ok(());
            }
            service.delete(&id).await?;
            output::print_output(&format!("deleted move {id}"), global.quiet);
        }
    }

    Ok(())
}
