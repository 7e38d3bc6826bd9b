use std::path::PathBuf;
use std::process::{Command, Output};
use tracing::warn;

use eco_core::{EcoError, Result};

/// Prompt shown by the native file dialog.
const PICKER_PROMPT: &str = "Select PEM file";

/// Capability interface for choosing a key file. `Ok(None)` means the
/// user cancelled or the dialog returned nothing; only a picker that
/// could not run at all is an error.
pub trait FilePicker {
    fn pick(&self) -> Result<Option<PathBuf>>;
}

/// Convert an HFS-style AppleScript result
/// (`alias Macintosh HD:Users:me:key.pem`) to a POSIX path: every colon
/// becomes a slash, then the leading volume token is stripped.
pub fn hfs_to_posix(raw: &str) -> String {
    raw.replace(':', "/").replacen("alias Macintosh HD", "", 1)
}

/// Native macOS picker driven through `osascript`, with a System Events
/// fallback for terminals where the bare `choose file` fails. Cancelling
/// the dialog makes `osascript` exit non-zero, so a cancel surfaces as
/// both mechanisms failing.
pub struct OsascriptPicker;

impl OsascriptPicker {
    fn run_script(script: &str) -> std::io::Result<Output> {
        Command::new("osascript").arg("-e").arg(script).output()
    }

    fn selected_path(output: &Output) -> Option<PathBuf> {
        let selected = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if selected.is_empty() {
            None
        } else {
            Some(PathBuf::from(hfs_to_posix(&selected)))
        }
    }
}

impl FilePicker for OsascriptPicker {
    fn pick(&self) -> Result<Option<PathBuf>> {
        let primary = format!(r#"choose file with prompt "{PICKER_PROMPT}""#);
        match Self::run_script(&primary) {
            Ok(output) if output.status.success() => {
                return Ok(Self::selected_path(&output));
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                warn!(error = %stderr.trim(), "file picker failed, trying System Events");
            }
            Err(e) => {
                warn!(error = %e, "file picker failed, trying System Events");
            }
        }

        let fallback = format!(
            r#"tell application "System Events" to choose file with prompt "{PICKER_PROMPT}""#
        );
        match Self::run_script(&fallback) {
            Ok(output) if output.status.success() => Ok(Self::selected_path(&output)),
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(EcoError::PickerFailed(stderr.trim().to_string()))
            }
            Err(e) => Err(EcoError::PickerFailed(e.to_string())),
        }
    }
}

/// Fallback for platforms without a native dialog: ask for the path
/// directly in the terminal. Empty input counts as a cancel.
pub struct PathPromptPicker;

impl FilePicker for PathPromptPicker {
    fn pick(&self) -> Result<Option<PathBuf>> {
        let input: String =
            dialoguer::Input::with_theme(&dialoguer::theme::ColorfulTheme::default())
                .with_prompt("Path to PEM file")
                .allow_empty(true)
                .interact_text()
                .map_err(|e| EcoError::PickerFailed(e.to_string()))?;
        let input = input.trim();
        if input.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(input)))
        }
    }
}

/// Picker for the current platform.
pub fn default_picker() -> Box<dyn FilePicker> {
    #[cfg(target_os = "macos")]
    {
        Box::new(OsascriptPicker)
    }
    #[cfg(not(target_os = "macos"))]
    {
        Box::new(PathPromptPicker)
    }
}
