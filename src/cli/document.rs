//! Whole-document CLI commands
//!
//! Creating a new file, the dashboard, and copying the current file to a new
//! target.

use std::path::Path;

use super::shell::{today, Shell};
use crate::display::format_dashboard;
use crate::error::{RentlogError, RentlogResult};
use crate::gateway::HostProfile;
use crate::models::Document;
use crate::services::DashboardSummary;

/// Downloads cannot be aimed at a path
fn reject_target_when_downloading(
    shell: &Shell,
    target: Option<&Path>,
    command: &str,
) -> RentlogResult<()> {
    match (shell.profile(), target) {
        (HostProfile::Fallback, Some(path)) => Err(RentlogError::Validation(format!(
            "Cannot write to {}: with the fallback profile '{}' downloads to {}. Run it without a target path",
            path.display(),
            command,
            shell.downloads_dir().display()
        ))),
        _ => Ok(()),
    }
}

/// Create the starter document and save it to a newly chosen file
///
/// `target` is the path the user named up front, if any; an existing file
/// there is only replaced with `force`.
pub fn handle_new_command(
    shell: &mut Shell,
    target: Option<&Path>,
    force: bool,
) -> RentlogResult<()> {
    reject_target_when_downloading(shell, target, "new")?;

    if let Some(path) = target {
        if path.is_file() && !force {
            return Err(RentlogError::Validation(format!(
                "{} already exists. Run again with --force to replace it",
                path.display()
            )));
        }
    }

    let document = Document::starter();
    let outcome = shell.save_as(&document)?;

    if let Some(name) = outcome.name() {
        println!("Created {} with a starter property.", name);
        println!();
        println!("Run 'rentlog property list' to see it.");
    }

    Ok(())
}

/// Show the dashboard for the current file
pub fn handle_summary_command(shell: &mut Shell) -> RentlogResult<()> {
    let symbol = shell.symbol().to_string();
    let shown = shell.view(|doc| {
        let summary = DashboardSummary::compute(doc, today());
        format_dashboard(&summary, &symbol)
    })?;

    if let Some(output) = shown {
        print!("{}", output);
    }

    Ok(())
}

/// Open the current file and save it to a new target
///
/// `target` is only accepted when saves go to files the user picks.
pub fn handle_save_as_command(shell: &mut Shell, target: Option<&Path>) -> RentlogResult<()> {
    reject_target_when_downloading(shell, target, "save-as")?;

    let Some(document) = shell.open()? else {
        return Ok(());
    };

    let label = shell.session().display_name().unwrap_or_default().to_string();
    if let Some(name) = shell.save_as(&document)?.name() {
        println!("Saved a copy of {} as {}", label, name);
    }

    Ok(())
}
