//! CLI command handlers
//!
//! Each handler takes already-parsed arguments plus the loaded configuration,
//! so `main.rs` only parses and dispatches.

pub mod build;
pub mod install;
pub mod list;
pub mod uninstall;
