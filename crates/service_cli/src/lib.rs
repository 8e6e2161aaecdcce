//! # service_cli: Constant-Term Recovery CLI
//!
//! Operational entry point of the workspace. As part of the **S**ervice
//! layer, this crate wires the point loader (`adapter_loader`) to the exact
//! interpolators (`interp_core`) and adds configuration, logging, and
//! error reporting.
//!
//! The binary lives in `main.rs`; command logic is exposed here so it can be
//! driven from tests with an in-memory writer.

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, Result};
