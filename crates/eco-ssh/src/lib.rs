//! # eco-ssh
//!
//! Platform integration for the eco CLI: the native key-file picker
//! (macOS `osascript`, a plain path prompt elsewhere) and the SSH
//! session launcher.

pub mod launch;
pub mod picker;

pub use launch::{SSH_USER, connect, ssh_args};
pub use picker::{FilePicker, OsascriptPicker, PathPromptPicker, default_picker, hfs_to_posix};
