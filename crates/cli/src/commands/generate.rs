//! Render the image prompt for a plan.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser};
use console::style;
use plan_core::{CompassDirection, PlotSpec, Zone, ZonePlacements, render_prompt, summary_lines};
use serde::Serialize;

use super::{CommandContext, parse_road};

/// Per-zone placement overrides shared by commands that build a plan.
#[derive(Args, Debug, Default, Clone)]
pub struct ZoneOverrides {
    /// Car parking placement
    #[arg(long)]
    pub parking: Option<String>,

    /// Kitchen placement
    #[arg(long)]
    pub kitchen: Option<String>,

    /// Master bedroom placement
    #[arg(long)]
    pub bedroom: Option<String>,

    /// Staircase placement, e.g. "South wall"
    #[arg(long)]
    pub stairs: Option<String>,

    /// Bathroom placement, or "Attached"
    #[arg(long)]
    pub bath: Option<String>,
}

impl ZoneOverrides {
    pub fn apply(self, spec: &mut PlotSpec) {
        let overrides = [
            (Zone::Parking, self.parking),
            (Zone::Kitchen, self.kitchen),
            (Zone::Bedroom, self.bedroom),
            (Zone::Stairs, self.stairs),
            (Zone::Bath, self.bath),
        ];
        for (zone, value) in overrides {
            if let Some(value) = value {
                spec.zones.set(zone, value);
            }
        }
    }
}

/// Generate the floor-plan prompt (road rotated to the bottom edge)
#[derive(Parser, Debug, Default)]
pub struct Generate {
    /// Plan file (TOML); defaults to $FLOORPLAN_PLAN_FILE or built-in defaults
    #[arg(long)]
    pub plan: Option<PathBuf>,

    /// Plot width in feet (drawn along the road edge)
    #[arg(long)]
    pub width: Option<u32>,

    /// Plot length in feet
    #[arg(long)]
    pub length: Option<u32>,

    /// Side of the plot facing the road
    #[arg(short, long, value_parser = parse_road)]
    pub road: Option<CompassDirection>,

    /// Omit the Vastu Shastra sentence
    #[arg(long)]
    pub no_vastu: bool,

    #[command(flatten)]
    pub zones: ZoneOverrides,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Everything `generate` produces, in the shape written by `--json`.
#[derive(Debug, Serialize)]
pub struct GeneratedPlan {
    pub summary: Vec<String>,
    pub prompt: String,
    pub rotated_zones: ZonePlacements,
    /// Zones left unrotated because their placement is not on the ring.
    pub unrecognized: Vec<Zone>,
}

impl GeneratedPlan {
    pub fn from_spec(spec: &PlotSpec) -> Self {
        Self {
            summary: summary_lines(spec),
            prompt: render_prompt(spec),
            rotated_zones: spec.rotated_zones(),
            unrecognized: spec.zones.unrecognized(&spec.rotation()),
        }
    }

    pub fn write_text(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", style("Summary").bold().underlined())?;
        for line in &self.summary {
            writeln!(out, "- {line}")?;
        }
        writeln!(out)?;
        for zone in &self.unrecognized {
            writeln!(
                out,
                "{} {} placement is not a compass direction; left as entered",
                style("warning:").yellow().bold(),
                zone
            )?;
        }
        writeln!(out, "{}", style("Prompt").bold().underlined())?;
        writeln!(out, "{}", self.prompt)?;
        Ok(())
    }
}

impl Generate {
    /// Resolves the final spec: plan file first, then command-line overrides.
    pub fn resolve_spec(self, ctx: &CommandContext) -> Result<PlotSpec> {
        let mut spec = ctx.load_spec(self.plan.as_deref())?;

        if let Some(width) = self.width {
            spec.dimensions.width_ft = width;
        }
        if let Some(length) = self.length {
            spec.dimensions.length_ft = length;
        }
        if let Some(road) = self.road {
            spec.road = road;
        }
        if self.no_vastu {
            spec.vastu = false;
        }
        self.zones.apply(&mut spec);

        spec.validate().context("Invalid plot")?;
        Ok(spec)
    }

    pub fn execute(self, ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
        let json = self.json;
        let spec = self.resolve_spec(ctx)?;
        let generated = GeneratedPlan::from_spec(&spec);

        tracing::info!(
            road = %spec.road,
            shift = spec.rotation().shift(),
            unrecognized = generated.unrecognized.len(),
            "generated prompt"
        );
        for zone in &generated.unrecognized {
            tracing::warn!(%zone, placement = spec.zones.get(*zone), "placement left unrotated");
        }

        if json {
            serde_json::to_writer_pretty(&mut *out, &generated)
                .context("Failed to write JSON output")?;
            writeln!(out)?;
        } else {
            generated.write_text(out)?;
        }
        Ok(())
    }
}
