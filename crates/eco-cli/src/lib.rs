//! # eco-cli
//!
//! Command-line interface for eco.
//!
//! ## Commands
//!
//! - `eco add` — Add a new connection interactively
//! - `eco ls` — List stored connections (table or JSON)
//! - `eco remove <id>` — Remove a connection by ID
//! - `eco con <id>` — Open an SSH session for a connection

pub mod commands;
mod table;

pub use commands::Cli;
