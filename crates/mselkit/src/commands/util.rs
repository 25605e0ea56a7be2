//! Shared helpers for command handlers.

use uuid::Uuid;

use mselkit_core::{ListParams, SortDirection, SortSpec};

use crate::cli::ListArgs;
use crate::error::CliError;

/// Build core view parameters from the shared list flags.
pub fn list_params(args: &ListArgs) -> ListParams {
    let direction = if args.desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    ListParams {
        filter: args.filter.clone().unwrap_or_default(),
        sort: args.sort.clone().map(|column| SortSpec {
            column,
            direction,
        }),
        page_index: args.page.unwrap_or(0),
        page_size: args.page_size,
    }
}

/// The MSEL id a per-MSEL command operates on.
pub fn require_msel(msel: Option<Uuid>) -> Result<Uuid, CliError> {
    msel.ok_or_else(|| CliError::Validation {
        field: "msel".into(),
        reason: "pass --msel <id> or set MSEL_ID".into(),
    })
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Standard message when a confirmation prompt is declined.
/// The server is never contacted in that case.
pub fn aborted(quiet: bool) {
    crate::output::print_output("aborted", quiet);
}

/// Parse a status flag value into the wire enum.
pub fn parse_status(raw: &str) -> Result<mselkit_core::MselStatus, CliError> {
    match raw.to_lowercase().as_str() {
        "pending" => Ok(mselkit_core::MselStatus::Pending),
        "in-progress" | "inprogress" => Ok(mselkit_core::MselStatus::InProgress),
        "approved" => Ok(mselkit_core::MselStatus::Approved),
        "complete" => Ok(mselkit_core::MselStatus::Complete),
        other => Err(CliError::Validation {
            field: "status".into(),
            reason: format!(
                "expected pending, in-progress, approved, or complete, got '{other}'"
            ),
        }),
    }
}

/// Parse a data-type flag value into the wire enum.
pub fn parse_data_type(raw: &str) -> Result<mselkit_core::DataFieldType, CliError> {
    match raw.to_lowercase().as_str() {
        "text" => Ok(mselkit_core::DataFieldType::Text),
        "numeric" => Ok(mselkit_core::DataFieldType::Numeric),
        "date" => Ok(mselkit_core::DataFieldType::Date),
        "boolean" | "bool" => Ok(mselkit_core::DataFieldType::Boolean),
        "select" => Ok(mselkit_core::DataFieldType::Select),
        "url" => Ok(mselkit_core::DataFieldType::Url),
        other => Err(CliError::Validation {
            field: "data-type".into(),
            reason: format!(
                "expected text, numeric, date, boolean, select, or url, got '{other}'"
            ),
        }),
    }
}
