//! Subcommand implementations.
//!
//! Every command writes its result to the supplied writer so the binary can
//! hand it stdout and tests can hand it a buffer.

mod generate;
mod init_plan;
mod options;
mod rotate;
mod summary;
mod table;
mod wizard;

pub use generate::{Generate, GeneratedPlan, ZoneOverrides};
pub use init_plan::InitPlan;
pub use options::Options;
pub use rotate::Rotate;
pub use summary::Summary;
pub use table::Table;
pub use wizard::{Wizard, run_wizard};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plan_content::PlacementCatalog;
use plan_core::{CompassDirection, PlanError, PlotSpec};

use crate::config::CliConfig;
use crate::plan_file;

/// Shared state handed to every command.
#[derive(Clone, Debug, Default)]
pub struct CommandContext {
    pub config: CliConfig,
}

impl CommandContext {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    /// Plot spec from `explicit`, else the configured default plan file,
    /// else built-in defaults.
    pub fn load_spec(&self, explicit: Option<&Path>) -> Result<PlotSpec> {
        let path: Option<PathBuf> = explicit
            .map(Path::to_path_buf)
            .or_else(|| self.config.default_plan_file.clone());

        match path {
            Some(path) => plan_file::load(&path),
            None => {
                tracing::debug!("no plan file given, using defaults");
                Ok(PlotSpec::default())
            }
        }
    }

    pub fn load_catalog(&self) -> Result<PlacementCatalog> {
        match &self.config.catalog_file {
            Some(path) => PlacementCatalog::load_from_path(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display())),
            None => PlacementCatalog::load().context("Failed to load embedded catalog"),
        }
    }
}

/// Clap value parser for options that need a real compass direction.
pub fn parse_road(value: &str) -> Result<CompassDirection, PlanError> {
    CompassDirection::parse_exact(value).ok_or_else(|| PlanError::UnknownRoad(value.to_string()))
}
