//! Data field command handlers.

use std::sync::Arc;

use tabled::Tabled;

use mselkit_core::model::{CreateDataFieldRequest, UpdateDataFieldRequest};
use mselkit_core::{DataField, DataOption, Workbench};

use crate::cli::{FieldArgs, FieldCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Order")]
    order: i32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    data_type: String,
    #[tabled(rename = "From List")]
    from_list: String,
}

impl From<&Arc<DataField>> for FieldRow {
    fn from(f: &Arc<DataField>) -> Self {
        Self {
            id: f.id.to_string(),
            order: f.display_order,
            name: f.name.clone(),
            data_type: f.data_type.to_string(),
            from_list: if f.is_chosen_from_list { "yes" } else { "no" }.into(),
        }
    }
}

#[derive(Tabled)]
struct OptionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Order")]
    order: i32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl From<&Arc<DataOption>> for OptionRow {
    fn from(o: &Arc<DataOption>) -> Self {
        Self {
            id: o.id.to_string(),
            order: o.display_order,
            name: o.option_name.clone(),
            value: o.option_value.clone(),
        }
    }
}

pub async fn handle(
    workbench: &Workbench,
    args: FieldArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let service = workbench.data_fields();

    match args.command {
        FieldCommand::List { list } => {
            let msel_id = util::require_msel(args.msel)?;
            service.load_by_msel(&msel_id).await?;
            let rows = service.view(util::list_params(&list)).current();
            let rendered =
                output::render_list(&global.output, &rows, |__r| FieldRow::from(__r), |f| f.id.to_string());
            output::print_output(&rendered, global.quiet);
        }

        FieldCommand::Create {
            name,
            data_type,
            order,
            from_list,
        } => {
            let msel_id = util::require_msel(args.msel)?;
            let request = CreateDataFieldRequest {
                msel_id,
                name,
                data_type: util::parse_data_type(&data_type)?,
                display_order: order,
                is_chosen_from_list: from_list,
                on_scenario_event_list: true,
                on_exercise_view: false,
            };
            let created = service.create(&request).await?;
            output::print_output(&format!("created field {}", created.id), global.quiet);
        }

        FieldCommand::Update { id, name, order } => {
            let request = UpdateDataFieldRequest {
                name,
                display_order: order,
                ..UpdateDataFieldRequest::default()
            };
            let updated = service.update(&id, &request).await?;
            output::print_output(&format!("updated field {}", updated.id), global.quiet);
        }

        FieldCommand::Delete { id } => {
            if !util::confirm(&format!("Delete field {id}?"), global.yes)? {
                util::aborted(global.quiet);
                return Ok(());
            }
            service.delete(&id).await?;
            output::print_output(&format!("deleted field {id}"), global.quiet);
        }

        FieldCommand::Options { field_id } => {
            let options = workbench.data_options();
            options.load_by_field(&field_id).await?;
            let rows = options.query().select_all().latest();
            let rendered =
                output::render_list(&global.output, &rows, |__r| OptionRow::from(__r), |o| o.id.to_string());
            output::print_output(&rendered, global.quiet);
        }
    }

    Ok(())
}
