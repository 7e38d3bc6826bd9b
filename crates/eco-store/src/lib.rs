//! # eco-store
//!
//! File-backed store for SSH connection profiles: one JSON document at
//! `~/.eco/connection.json` (overridable), rewritten in full on every
//! mutation.

pub mod store;

pub use store::ConnectionStore;
