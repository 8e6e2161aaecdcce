//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to a caller-supplied writer and log progress through `tracing`.

pub mod check;
pub mod solve;
