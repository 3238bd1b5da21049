//! List the placement choices from the catalog.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use console::style;
use plan_core::Zone;

use super::CommandContext;

/// List the placement choices offered for each zone
#[derive(Parser, Debug)]
pub struct Options {
    /// Only list one zone (parking, kitchen, bedroom, stairs, bath)
    #[arg(short, long)]
    pub zone: Option<Zone>,

    /// Also list the road choices
    #[arg(long)]
    pub roads: bool,

    /// Report choices the rotation cannot map
    #[arg(long)]
    pub check: bool,
}

impl Options {
    pub fn execute(self, ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
        let catalog = ctx.load_catalog()?;

        if self.roads {
            let roads: Vec<&str> = catalog.roads().iter().map(|r| r.as_ref()).collect();
            writeln!(out, "{} {}", style("road:").bold(), roads.join(", "))?;
        }

        let zones: Vec<Zone> = match self.zone {
            Some(zone) => vec![zone],
            None => catalog.zones().collect(),
        };
        for zone in zones {
            writeln!(
                out,
                "{} {}",
                style(format!("{zone}:")).bold(),
                catalog.options(zone).join(", ")
            )?;
        }

        if self.check {
            let unrotatable = catalog.unrotatable();
            if unrotatable.is_empty() {
                writeln!(out, "{}", style("every choice rotates").green())?;
            }
            for (zone, option) in unrotatable {
                tracing::warn!(%zone, option, "catalog choice is not rotatable");
                writeln!(
                    out,
                    "{} {zone}: {option:?} is left as-is by the rotation",
                    style("warning:").yellow().bold()
                )?;
            }
        }
        Ok(())
    }
}
