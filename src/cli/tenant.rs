//! Tenant CLI commands

use clap::Subcommand;

use super::shell::{parse_date_arg, parse_money_arg, today, Shell};
use crate::display::{format_tenant_details, format_tenant_list};
use crate::error::{RentlogError, RentlogResult};
use crate::models::{Document, EntityId};
use crate::services::{find_property, find_tenant, tenant_summaries, tenant_summary, TenantService};

/// Tenant subcommands
#[derive(Subcommand)]
pub enum TenantCommands {
    /// Add a tenant to a property
    Add {
        /// Tenant name
        name: String,
        /// Monthly rent (e.g., "5000" or "5000.00")
        #[arg(short, long)]
        rent: String,
        /// Property name or ID (may be omitted when there is only one)
        #[arg(short, long)]
        property: Option<String>,
        /// Move-in date (YYYY-MM-DD)
        #[arg(short, long)]
        move_in: Option<String>,
    },
    /// List tenants
    List {
        /// Only tenants of this property
        #[arg(short, long)]
        property: Option<String>,
    },
    /// Show a tenant's details and ledger
    Show {
        /// Tenant name or ID
        tenant: String,
    },
}

/// Handle a tenant command
pub fn handle_tenant_command(shell: &mut Shell, cmd: TenantCommands) -> RentlogResult<()> {
    match cmd {
        TenantCommands::Add {
            name,
            rent,
            property,
            move_in,
        } => {
            let rent = parse_money_arg(&rent)?;
            let move_in = move_in.as_deref().map(|d| parse_date_arg(Some(d))).transpose()?;

            let created = shell.edit(|doc| {
                let property_id = choose_property(doc, property.as_deref())?;
                let tenant = TenantService::new(doc).create(property_id, &name, rent, move_in)?;
                let property_name = doc.property_name_for(&tenant).to_string();
                Ok((tenant, property_name))
            })?;

            if let Some((tenant, property_name)) = created {
                println!("Added tenant: {}", tenant.name);
                println!("  Property: {}", property_name);
                println!("  Rent: {}", shell.money(tenant.rent));
                if let Some(date) = tenant.move_in_date {
                    println!("  Moved in: {}", date);
                }
                println!("  ID: {}", tenant.id);
            }
        }

        TenantCommands::List { property } => {
            let symbol = shell.symbol().to_string();
            let listed = shell.view(|doc| -> RentlogResult<String> {
                let property_id = match property.as_deref() {
                    Some(p) => Some(
                        find_property(doc, p)
                            .map(|found| found.id)
                            .ok_or_else(|| RentlogError::property_not_found(p))?,
                    ),
                    None => None,
                };
                Ok(format_tenant_list(&tenant_summaries(doc, property_id), &symbol))
            })?;

            if let Some(output) = listed.transpose()? {
                print!("{}", output);
            }
        }

        TenantCommands::Show { tenant } => {
            let symbol = shell.symbol().to_string();
            let shown = shell.view(|doc| -> RentlogResult<String> {
                let summary = tenant_summary(doc, tenant_id(doc, &tenant)?)?;
                Ok(format_tenant_details(&summary, &symbol, today()))
            })?;

            if let Some(output) = shown.transpose()? {
                print!("{}", output);
            }
        }
    }

    Ok(())
}

/// Resolve the property a new tenant moves into
fn choose_property(doc: &Document, identifier: Option<&str>) -> RentlogResult<EntityId> {
    match identifier {
        Some(identifier) => find_property(doc, identifier)
            .map(|p| p.id)
            .ok_or_else(|| RentlogError::property_not_found(identifier)),
        None => match doc.properties.as_slice() {
            [] => Err(RentlogError::Validation(
                "Add a property before adding a tenant".into(),
            )),
            [only] => Ok(only.id),
            _ => Err(RentlogError::Validation(
                "Several properties exist; choose one with --property".into(),
            )),
        },
    }
}

/// Resolve a tenant by name or ID
pub(crate) fn tenant_id(doc: &Document, identifier: &str) -> RentlogResult<EntityId> {
    find_tenant(doc, identifier)
        .map(|t| t.id)
        .ok_or_else(|| RentlogError::tenant_not_found(identifier))
}
