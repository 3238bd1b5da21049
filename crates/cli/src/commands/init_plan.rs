//! Write a starter plan file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use plan_core::PlotSpec;

use super::CommandContext;
use crate::plan_file;

/// Write the default plan to a TOML file for editing
#[derive(Parser, Debug)]
pub struct InitPlan {
    /// Destination file
    pub path: PathBuf,

    /// Replace the file if it already exists
    #[arg(short, long)]
    pub force: bool,
}

impl InitPlan {
    pub fn execute(self, _ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
        plan_file::save(&PlotSpec::default(), &self.path, self.force)?;
        writeln!(
            out,
            "{} {}",
            style("Wrote").green(),
            style(self.path.display()).bold()
        )?;
        Ok(())
    }
}
