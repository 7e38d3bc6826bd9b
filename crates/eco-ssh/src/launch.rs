use std::ffi::OsString;
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, info};

use eco_core::{EcoError, Profile, Result};

/// Remote user for every session; profiles store only the host IP.
pub const SSH_USER: &str = "ec2-user";

/// Arguments for the ssh invocation: `-t -i <key> ec2-user@<ip>`.
pub fn ssh_args(profile: &Profile) -> Vec<OsString> {
    vec![
        OsString::from("-t"),
        OsString::from("-i"),
        profile.pem_file_path.clone().into_os_string(),
        OsString::from(format!("{SSH_USER}@{}", profile.ip)),
    ]
}

/// Launch an interactive SSH session for the profile, attached to this
/// process's terminal, and wait for it to finish. A non-zero child exit
/// is returned as a status, not an error; only failing to start the
/// client at all is.
pub fn connect(profile: &Profile) -> Result<ExitStatus> {
    info!(name = %profile.name, ip = %profile.ip, "starting ssh session");
    let status = Command::new("ssh")
        .args(ssh_args(profile))
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| EcoError::LaunchFailed(e.to_string()))?;
    debug!(code = ?status.code(), "ssh session ended");
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn profile() -> Profile {
        Profile {
            id: 0,
            name: "prod".into(),
            description: String::new(),
            pem_file_path: PathBuf::from("/home/me/keys/prod.pem"),
            ip: "10.0.0.1".into(),
        }
    }

    #[test]
    fn test_ssh_args_shape() {
        let args = ssh_args(&profile());
        assert_eq!(
            args,
            vec![
                OsString::from("-t"),
                OsString::from("-i"),
                OsString::from("/home/me/keys/prod.pem"),
                OsString::from("ec2-user@10.0.0.1"),
            ]
        );
    }

    #[test]
    fn test_ssh_args_keep_spaces_in_key_path() {
        let mut p = profile();
        p.pem_file_path = PathBuf::from("/Users/me/My Keys/prod.pem");
        let args = ssh_args(&p);
        assert_eq!(args[2], OsString::from("/Users/me/My Keys/prod.pem"));
    }
}
