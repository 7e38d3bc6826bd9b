use console::style;

use eco_core::EcoError;
use eco_store::ConnectionStore;

use super::load_or_notice;

/// `eco con <id>`: look the profile up and hand the terminal over to
/// ssh. Returns the child's exit code so the process can mirror it.
pub(super) fn cmd_con(store: &ConnectionStore, id: u32) -> eco_core::Result<Option<i32>> {
    let Some(profiles) = load_or_notice(store)? else {
        return Ok(None);
    };

    let Some(profile) = profiles.iter().find(|p| p.id == id) else {
        tracing::warn!(id, "connection not found");
        println!(
            "{}",
            style(format!("Connection with ID {id} not found.")).red()
        );
        println!(
            "{}",
            style("Use \"eco ls\" to see available connections.").yellow()
        );
        return Ok(None);
    };

    match eco_ssh::connect(profile) {
        Ok(status) if status.success() => Ok(None),
        Ok(status) => {
            let code = status.code().unwrap_or(1);
            println!(
                "{}",
                style(format!("SSH connection closed with code {code}")).yellow()
            );
            Ok(Some(code))
        }
        Err(EcoError::LaunchFailed(reason)) => {
            tracing::warn!(error = %reason, "ssh launch failed");
            eprintln!(
                "{}",
                style(format!("Failed to start SSH connection: {reason}")).red()
            );
            Ok(Some(1))
        }
        Err(e) => Err(e),
    }
}
