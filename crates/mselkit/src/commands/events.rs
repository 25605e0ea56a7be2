//! Scenario event command handlers.

use std::sync::Arc;

use tabled::Tabled;

use mselkit_core::model::{CreateScenarioEventRequest, UpdateScenarioEventRequest};
use mselkit_core::{ScenarioEvent, Workbench};

use crate::cli::{EventArgs, EventCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Row")]
    row: i32,
    #[tabled(rename = "Offset (s)")]
    delta: i64,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Hidden")]
    hidden: String,
}

impl From<&Arc<ScenarioEvent>> for EventRow {
    fn from(e: &Arc<ScenarioEvent>) -> Self {
        Self {
            id: e.id.to_string(),
            row: e.row_index,
            delta: e.delta_seconds,
            status: e.status.to_string(),
            hidden: if e.is_hidden { "yes" } else { "no" }.into(),
        }
    }
}

pub async fn handle(
    workbench: &Workbench,
    args: EventArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let service = workbench.scenario_events();

    match args.command {
        EventCommand::List { list } => {
            let msel_id = util::require_msel(args.msel)?;
            service.load_by_msel(&msel_id).await?;
            let rows = service.view(util::list_params(&list)).current();
            let rendered =
                output::render_list(&global.output, &rows, |__r| EventRow::from(__r), |e| e.id.to_string());
            output::print_output(&rendered, global.quiet);
        }

        EventCommand::Create { row, delta, hidden } => {
            let msel_id = util::require_msel(args.msel)?;
            let request = CreateScenarioEventRequest {
                msel_id,
                row_index: row,
                delta_seconds: delta,
                status: None,
                is_hidden: hidden,
            };
            let created = service.create(&request).await?;
            output::print_output(&format!("created event {}", created.id), global.quiet);
        }

        EventCommand::Update {
            id,
            row,
            delta,
            status,
            hidden,
        } => {
            let status = status.as_deref().map(util::parse_status).transpose()?;
            let request = UpdateScenarioEventRequest {
                row_index: row,
                delta_seconds: delta,
                status,
                is_hidden: hidden,
                ..UpdateScenarioEventRequest::default()
            };
            let updated = service.update(&id, &request).await?;
            output::print_output(&format!("updated event {}", updated.id), global.quiet);
        }

        EventCommand::Delete { id } => {
            if !util::confirm(&format!("Delete event {id}?"), global.yes)? {
                util::aborted(global.quiet);
                return Ok(());
            }
            service.delete(&id).await?;
            output::print_output(&format!("deleted event {id}"), global.quiet);
        }
    }

    Ok(())
}
