//! # eco-core
//!
//! Core types, validation, and error types for the eco CLI.
//! This crate defines the shared vocabulary used by every other crate in the workspace.

pub mod error;
pub mod profile;
pub mod validate;

pub use error::{EcoError, Result};
pub use profile::Profile;
pub use validate::KeyFileWarning;
