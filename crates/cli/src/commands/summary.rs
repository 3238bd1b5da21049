//! Print the review summary for a plan.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use plan_core::summary_lines;

use super::CommandContext;

/// Print the plan summary as entered (unrotated)
#[derive(Parser, Debug)]
pub struct Summary {
    /// Plan file (TOML); defaults to $FLOORPLAN_PLAN_FILE or built-in defaults
    #[arg(long)]
    pub plan: Option<PathBuf>,
}

impl Summary {
    pub fn execute(self, ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
        let spec = ctx.load_spec(self.plan.as_deref())?;
        for line in summary_lines(&spec) {
            writeln!(out, "- {line}")?;
        }
        Ok(())
    }
}
