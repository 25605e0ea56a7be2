//! Command handlers: translate parsed CLI intents into data-service
//! calls and render the results.

pub mod catalogs;
pub mod cards;
pub mod cite;
pub mod config_cmd;
pub mod events;
pub mod fields;
pub mod invitations;
pub mod moves;
pub mod msels;
pub mod teams;
pub mod units;
pub mod util;

use mselkit_core::Workbench;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

pub async fn dispatch(
    command: Command,
    workbench: &Workbench,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        Command::Msel(args) => msels::handle(workbench, args, global).await,
        Command::Event(args) => events::handle(workbench, args, global).await,
        Command::Field(args) => fields::handle(workbench, args, global).await,
        Command::Team(args) => teams::handle(workbench, args, global).await,
        Command::Unit(args) => units::handle(workbench, args, global).await,
        Command::Catalog(args) => catalogs::handle_catalog(workbench, args, global).await,
        Command::Inject(args) => catalogs::handle_inject(workbench, args, global).await,
        Command::Move(args) => moves::handle(workbench, args, global).await,
        Command::Card(args) => cards::handle(workbench, args, global).await,
        Command::Cite(args) => cite::handle(workbench, args, global).await,
        Command::Invitation(args) => invitations::handle(workbench, args, global).await,
        // Handled before a workbench exists.
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
