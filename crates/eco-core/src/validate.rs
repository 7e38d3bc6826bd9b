use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{EcoError, Result};

/// Dotted-quad IPv4, each octet 0-255. Leading zeros ("010") pass the
/// pattern; stored profiles rely on that acceptance.
static IP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$")
        .expect("valid ip regex")
});

/// Advisory findings about a selected key file. None of these block an
/// add on their own; the caller decides whether to prompt or just report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyFileWarning {
    /// Extension is not `.pem` (case-insensitive).
    NonPemExtension,
    /// Permission bits are not exactly 0600.
    InsecurePermissions { mode: u32 },
    /// File metadata could not be read.
    PermissionsUnreadable,
}

/// A connection name must contain something other than whitespace.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(EcoError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Validate a dotted-quad IPv4 address.
pub fn validate_ip(ip: &str) -> Result<()> {
    if !IP_RE.is_match(ip) {
        return Err(EcoError::InvalidIp(ip.to_string()));
    }
    Ok(())
}

/// Check a selected key file: a missing file is fatal, everything else is
/// advisory. Warnings come back in the order the add flow reports them
/// (extension first, then permissions).
pub fn check_key_file(path: &Path) -> Result<Vec<KeyFileWarning>> {
    if !path.is_file() {
        return Err(EcoError::KeyFileNotFound(path.to_path_buf()));
    }

    let mut warnings = Vec::new();

    let is_pem = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pem"))
        .unwrap_or(false);
    if !is_pem {
        warnings.push(KeyFileWarning::NonPemExtension);
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        match std::fs::metadata(path) {
            Ok(meta) => {
                let mode = meta.permissions().mode() & 0o777;
                if mode != 0o600 {
                    warnings.push(KeyFileWarning::InsecurePermissions { mode });
                }
            }
            Err(_) => warnings.push(KeyFileWarning::PermissionsUnreadable),
        }
    }

    Ok(warnings)
}
