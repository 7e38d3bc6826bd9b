use console::style;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::path::PathBuf;

use eco_core::{EcoError, KeyFileWarning, validate};
use eco_store::ConnectionStore;

use crate::table;

fn prompt_failed(e: dialoguer::Error) -> EcoError {
    EcoError::Io(std::io::Error::other(e))
}

/// Interactive `eco add`: prompt for the profile fields, resolve the
/// key file (picker or `--key-file`), and persist the new entry.
pub(super) fn cmd_add(store: &ConnectionStore, key_file: Option<PathBuf>) -> eco_core::Result<()> {
    let theme = ColorfulTheme::default();

    let name: String = Input::with_theme(&theme)
        .with_prompt("Connection name")
        .validate_with(|input: &String| -> Result<(), &str> {
            if validate::validate_name(input).is_err() {
                Err("Name is required")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(prompt_failed)?;

    let description: String = Input::with_theme(&theme)
        .with_prompt("Connection description (optional)")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_failed)?;

    let pem_file_path = match key_file {
        Some(path) => path,
        None => {
            println!(
                "{}",
                style("Opening file picker to select PEM file...").blue()
            );
            println!(
                "{}",
                style("Make sure you have granted Terminal/your app permission to control System Events")
                    .yellow()
            );
            match eco_ssh::default_picker().pick() {
                Ok(Some(path)) => {
                    println!("Selected file: {}", path.display());
                    path
                }
                Ok(None) => {
                    println!(
                        "{} No file selected",
                        style("File selection was cancelled or failed:").yellow()
                    );
                    return Ok(());
                }
                Err(EcoError::PickerFailed(reason)) => {
                    println!(
                        "{} {reason}",
                        style("File selection was cancelled or failed:").yellow()
                    );
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    };

    if pem_file_path.as_os_str().is_empty() {
        println!("{}", style("No PEM file selected.").red());
        return Ok(());
    }

    let warnings = match validate::check_key_file(&pem_file_path) {
        Ok(warnings) => warnings,
        Err(EcoError::KeyFileNotFound(_)) => {
            println!("{}", style("Selected file does not exist.").red());
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    for warning in warnings {
        match warning {
            KeyFileWarning::NonPemExtension => {
                println!(
                    "{}",
                    style("Warning: Selected file does not have .pem extension.").yellow()
                );
                println!("File path: {}", pem_file_path.display());
                let keep = Confirm::with_theme(&theme)
                    .with_prompt("Do you want to continue with this file?")
                    .default(false)
                    .interact()
                    .map_err(prompt_failed)?;
                if !keep {
                    println!("{}", style("File selection cancelled.").yellow());
                    return Ok(());
                }
            }
            KeyFileWarning::InsecurePermissions { mode } => {
                println!(
                    "{}",
                    style("Warning: PEM file should have 600 permissions for security.").yellow()
                );
                println!("Current permissions: {mode:o}");
                println!(
                    "You can fix this with: chmod 600 {}",
                    pem_file_path.display()
                );
            }
            KeyFileWarning::PermissionsUnreadable => {
                println!("{}", style("Could not check file permissions.").yellow());
            }
        }
    }

    let ip: String = Input::with_theme(&theme)
        .with_prompt("Connection IP")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("IP address is required")
            } else if validate::validate_ip(input).is_err() {
                Err("Please enter a valid IP address")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(prompt_failed)?;

    let profiles = store.add(name, description, pem_file_path, ip)?;
    println!("{}", style("Connection added successfully:").green());
    print!("{}", table::render(&profiles));
    Ok(())
}
