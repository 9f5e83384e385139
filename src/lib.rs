//! # cppvend - Vendor C/C++ Libraries from Git
//!
//! cppvend copies a library's headers, and the sources that belong to them,
//! straight into your project. Includes are rewritten to point at the vendored
//! copies so the code compiles without extra include paths.
//!
//! ## Quick Start
//!
//! ```bash
//! # Vendor nlohmann/json into include/nlohmann/json
//! cppvend install https://github.com/nlohmann/json.git
//!
//! # Remove it again
//! cppvend uninstall nlohmann/json
//! ```
//!
//! ## Module Organization
//!
//! - [`vendor`] - Selection, pairing and include rewriting
//! - [`fetch`] - Git clone of the library to vendor
//! - [`config`] - Configuration (`cppvend.toml`) and credentials
//! - [`ledger`] - Installed package record (`packages.json`)
//! - [`commands`] - CLI command handlers

/// Build tool invocation.
pub mod builder;

/// CMakeLists.txt / Makefile generation.
pub mod buildgen;

/// CLI command handlers.
pub mod commands;

/// Configuration file parsing (`cppvend.toml`).
pub mod config;

/// Repository cloning.
pub mod fetch;

/// Installed package ledger (`packages.json`).
pub mod ledger;

/// Terminal UI utilities (tables, spinners).
pub mod ui;

/// The vendoring engine.
pub mod vendor;
