//! Print the full ring mapping for one road direction.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use console::style;
use plan_core::{CompassDirection, Rotation};

use super::{CommandContext, parse_road};

/// Show where each compass direction lands for a given road side
#[derive(Parser, Debug)]
pub struct Table {
    /// Side of the plot facing the road
    #[arg(short, long, value_parser = parse_road)]
    pub road: CompassDirection,
}

impl Table {
    pub fn execute(self, _ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
        let rotation = Rotation::new(self.road);
        writeln!(
            out,
            "{} {} (shift {:+}, rear {})",
            style("Road:").bold(),
            style(self.road).cyan(),
            rotation.shift(),
            self.road.opposite()
        )?;
        for (from, to) in rotation.table() {
            let from_name: &str = from.as_ref();
            let to_name: &str = to.as_ref();
            writeln!(out, "  {:<10} -> {:<10} {:>3}°", from_name, to_name, to.degrees())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn east_road_table_rows() {
        console::set_colors_enabled(false);
        let mut out = Vec::new();
        Table {
            road: CompassDirection::East,
        }
        .execute(&CommandContext::default(), &mut out)
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("(shift +2, rear West)"));
        assert!(text.contains("  East       -> South      180°\n"));
        assert!(text.contains("  Northwest  -> Northeast   45°\n"));
        assert_eq!(text.lines().count(), 9);
    }

    #[test]
    fn south_road_keeps_headings() {
        console::set_colors_enabled(false);
        let mut out = Vec::new();
        Table {
            road: CompassDirection::South,
        }
        .execute(&CommandContext::default(), &mut out)
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("(shift +0, rear North)"));
        assert!(text.contains("  North      -> North        0°\n"));
        assert!(text.contains("  West       -> West       270°\n"));
    }
}
