use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for the entire eco CLI.
#[derive(Error, Debug)]
pub enum EcoError {
    // ── Store errors ───────────────────────────────────────────
    #[error("store file is corrupt: {path}: {reason}")]
    CorruptStore { path: String, reason: String },

    #[error("connection with ID {0} not found")]
    ProfileNotFound(u32),

    // ── Validation errors ──────────────────────────────────────
    #[error("invalid connection name: {0:?}")]
    InvalidName(String),

    #[error("invalid IP address: {0:?}")]
    InvalidIp(String),

    #[error("key file not found: {}", .0.display())]
    KeyFileNotFound(PathBuf),

    // ── Picker errors ──────────────────────────────────────────
    #[error("file picker failed: {0}")]
    PickerFailed(String),

    // ── Launch errors ──────────────────────────────────────────
    #[error("failed to start SSH connection: {0}")]
    LaunchFailed(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EcoError>;
