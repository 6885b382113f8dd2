//! Property CLI commands
//!
//! Implements CLI commands for property management.

use clap::Subcommand;

use super::shell::Shell;
use crate::display::format_property_list;
use crate::error::{RentlogError, RentlogResult};
use crate::services::{find_property, PropertyService};

/// Property subcommands
#[derive(Subcommand)]
pub enum PropertyCommands {
    /// Add a property
    Add {
        /// Property name
        name: String,
        /// Street address
        #[arg(short, long)]
        address: String,
    },
    /// List all properties
    List,
    /// Edit a property's name or address
    Edit {
        /// Property name or ID
        property: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New address
        #[arg(short, long)]
        address: Option<String>,
    },
}

/// Handle a property command
pub fn handle_property_command(shell: &mut Shell, cmd: PropertyCommands) -> RentlogResult<()> {
    match cmd {
        PropertyCommands::Add { name, address } => {
            let created = shell.edit(|doc| PropertyService::new(doc).create(&name, &address))?;

            if let Some(property) = created {
                println!("Created property: {}", property.name);
                println!("  Address: {}", property.address);
                println!("  ID: {}", property.id);
            }
        }

        PropertyCommands::List => {
            if let Some(output) = shell.view(format_property_list)? {
                print!("{}", output);
            }
        }

        PropertyCommands::Edit {
            property,
            name,
            address,
        } => {
            if name.is_none() && address.is_none() {
                println!("No changes specified. Use --name or --address.");
                return Ok(());
            }

            let updated = shell.edit(|doc| {
                let id = find_property(doc, &property)
                    .map(|p| p.id)
                    .ok_or_else(|| RentlogError::property_not_found(&property))?;
                PropertyService::new(doc).update(id, name.as_deref(), address.as_deref())
            })?;

            if let Some(property) = updated {
                println!("Updated property: {}", property);
            }
        }
    }

    Ok(())
}
