//! Catalog and inject command handlers.

use std::sync::Arc;

use tabled::Tabled;

use mselkit_core::model::{
    CreateCatalogInjectRequest, CreateCatalogRequest, CreateInjectRequest, UpdateCatalogRequest,
    UpdateInjectRequest,
};
use mselkit_core::{Catalog, Inject, InjectType, Workbench};

use crate::cli::{CatalogArgs, CatalogCommand, GlobalOpts, InjectArgs, InjectCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Rows ────────────────────────────────────────────────────────────

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Public")]
    public: String,
    #[tabled(rename = "Inject Type")]
    inject_type: String,
}

impl From<&Arc<Catalog>> for CatalogRow {
    fn from(c: &Arc<Catalog>) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
            public: if c.is_public { "yes" } else { "no" }.into(),
            inject_type: c.inject_type_id.to_string(),
        }
    }
}

#[derive(Tabled)]
struct InjectRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Arc<Inject>> for InjectRow {
    fn from(i: &Arc<Inject>) -> Self {
        Self {
            id: i.id.to_string(),
            name: i.name.clone(),
            description: i.description.clone().unwrap_or_else(|| "-".into()),
        }
    }
}

#[derive(Tabled)]
struct InjectTypeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&Arc<InjectType>> for InjectTypeRow {
    fn from(t: &Arc<InjectType>) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name.clone(),
        }
    }
}

// ── Catalog handler ─────────────────────────────────────────────────

pub async fn handle_catalog(
    workbench: &Workbench,
    args: CatalogArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let service = workbench.catalogs();

    match args.command {
        CatalogCommand::List { list } => {
            service.load().await?;
            let rows = service.view(util::list_params(&list)).current();
            let rendered =
                output::render_list(&global.output, &rows, |__r| CatalogRow::from(__r), |c| c.id.to_string());
            output::print_output(&rendered, global.quiet);
        }

        CatalogCommand::Create {
            name,
            inject_type,
            description,
            public,
        } => {
            let request = CreateCatalogRequest {
                name,
                description,
                inject_type_id: inject_type,
                is_public: public,
            };
            let created = service.create(&request).await?;
            output::print_output(&format!("created catalog {}", created.id), global.quiet);
        }

        CatalogCommand::Update {
            id,
            name,
            description,
        } => {
            let request = UpdateCatalogRequest {
                name,
                description,
                ..UpdateCatalogRequest::default()
            };
            let updated = service.update(&id, &request).await?;
            output::print_output(&format!("updated catalog {}", updated.id), global.quiet);
        }

        CatalogCommand::Delete { id } => {
            if !util::confirm(&format!("Delete catalog {id}?"), global.yes)? {
                util::aborted(global.quiet);
                return Ok(());
            }
            service.delete(&id).await?;
            output::print_output(&format!("deleted catalog {id}"), global.quiet);
        }

        CatalogCommand::Injects { catalog_id, list } => {
            let injects = workbench.injects();
            injects.load_by_catalog(&catalog_id).await?;
            let rows = injects.view(util::list_params(&list)).current();
            let rendered =
                output::render_list(&global.output, &rows, |__r| InjectRow::from(__r), |i| i.id.to_string());
            output::print_output(&rendered, global.quiet);
        }

        CatalogCommand::Types => {
            let types = workbench.inject_types();
            types.load().await?;
            let rows = types.query().select_all().latest();
            let rendered = output::render_list(&global.output, &rows, |__r| InjectTypeRow::from(__r), |t| {
                t.id.to_string()
            });
            output::print_output(&rendered, global.quiet);
        }
    }

    Ok(())
}

// ── Inject handler ──────────────────────────────────────────────────

pub async fn handle_inject(
    workbench: &Workbench,
    args: InjectArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let service = workbench.injects();

    match args.command {
        InjectCommand::Create {
            name,
            inject_type,
            description,
            catalog,
        } => {
            let request = CreateInjectRequest {
                inject_type_id: inject_type,
                name,
                description,
            };
            let created = service.create(&request).await?;
            output::print_output(&format!("created inject {}", created.id), global.quiet);

            if let Some(catalog_id) = catalog {
                let link = CreateCatalogInjectRequest {
                    catalog_id,
                    inject_id: created.id,
                };
                workbench.catalog_injects().add(&link).await?;
                output::print_output(
                    &format!("attached inject {} to catalog {catalog_id}", created.id),
                    global.quiet,
                );
            }
        }

        InjectCommand::Update {
            id,
            name,
            description,
        } => {
            let request = UpdateInjectRequest { name, description };
            let updated = service.update(&id, &request).await?;
            output::print_output(&format!("updated inject {}", updated.id), global.quiet);
        }

        InjectCommand::Delete { id } => {
            if !util::confirm(&format!("Delete inject {id}?"), global.yes)? {
                util::aborted(global.quiet);
                return Ok(());
            }
            service.delete(&id).await?;
            output::print_output(&format!("deleted inject {id}"), global.quiet);
        }

        InjectCommand::Attach { inject_id, catalog } => {
            let request = CreateCatalogInjectRequest {
                catalog_id: catalog,
                inject_id,
            };
            let created = workbench.catalog_injects().add(&request).await?;
            output::print_output(
                &format!("attached inject {inject_id} to catalog {catalog} ({})", created.id),
                global.quiet,
            );
        }

        InjectCommand::Detach { catalog_inject_id } => {
            workbench.catalog_injects().remove(&catalog_inject_id).await?;
            output::print_output(&format!("detached {catalog_inject_id}"), global.quiet);
        }
    }

    Ok(())
}
