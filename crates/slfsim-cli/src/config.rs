//! Layered configuration for the `simulate` command.
//!
//! Values come from [`defaults::DefaultsConfig`], an optional TOML file
//! patched by `-S KEY=VALUE` pairs, and finally the dedicated command-line
//! flags.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;
