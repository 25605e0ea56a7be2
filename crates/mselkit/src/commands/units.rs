//! Unit command handlers.

use std::sync::Arc;

use tabled::Tabled;

use mselkit_core::model::{CreateMselUnitRequest, CreateUnitRequest, UpdateUnitRequest};
use mselkit_core::{Unit, Workbench};

use crate::cli::{GlobalOpts, UnitArgs, UnitCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct UnitRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Short")]
    short_name: String,
}

impl From<&Arc<Unit>> for UnitRow {
    fn from(u: &Arc<Unit>) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name.clone(),
            short_name: u.short_name.clone(),
        }
    }
}

pub async fn handle(
    workbench: &Workbench,
    args: UnitArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let service = workbench.units();

    match args.command {
        UnitCommand::List { list, msel } => {
            match msel {
                Some(msel_id) => service.load_by_msel(&msel_id).await?,
                None => service.load().await?,
            }
            let rows = service.view(util::list_params(&list)).current();
            let rendered =
                output::render_list(&global.output, &rows, |__r| UnitRow::from(__r), |u| u.id.to_string());
            output::print_output(&rendered, global.quiet);
        }

        UnitCommand::Create { name, short_name } => {
            let request = CreateUnitRequest { name, short_name };
            let created = service.create(&request).await?;
            output::print_output(&format!("created unit {}", created.id), global.quiet);
        }

        UnitCommand::Update {
            id,
            name,
            short_name,
        } => {
            let request = UpdateUnitRequest { name, short_name };
            let updated = service.update(&id, &request).await?;
            output::print_output(&format!("updated unit {}", updated.id), global.quiet);
        }

        UnitCommand::Delete { id } => {
            if !util::confirm(&format!("Delete unit {id}?"), global.yes)? {
                util::aborted(global.quiet);
                return Ok(());
            }
            service.delete(&id).await?;
            output::print_output(&format!("deleted unit {id}"), global.quiet);
        }

        UnitCommand::Attach { unit_id, msel } => {
            let request = CreateMselUnitRequest {
                msel_id: msel,
                unit_id,
            };
            let created = workbench.msel_units().add(&request).await?;
            output::print_output(
                &format!("attached unit {unit_id} to msel {msel} ({})", created.id),
                global.quiet,
            );
        }

        UnitCommand::Detach { msel_unit_id } => {
            workbench.msel_units().remove(&msel_unit_id).await?;
            output::print_output(&format!("detached {msel_unit_id}"), global.quiet);
        }
    }

    Ok(())
}
