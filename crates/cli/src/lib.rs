//! Command-line frontend for the floor-plan prompt toolkit.
//!
//! The `floorplan` binary wires clap subcommands to `plan-core` and
//! `plan-content`. This library half holds the pieces the binary and the
//! integration tests share: configuration, logging, plan-file I/O and the
//! command implementations.

pub mod commands;
pub mod config;
mod dirs;
pub mod logging;
pub mod plan_file;

pub use commands::CommandContext;
pub use config::{CliConfig, LogConfig};
