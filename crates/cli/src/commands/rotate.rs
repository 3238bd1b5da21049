//! Rotate a single placement value.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use plan_core::{RotationOutcome, rotate_traced};

use super::CommandContext;

/// Rotate one placement so the road side becomes South
#[derive(Parser, Debug)]
pub struct Rotate {
    /// Placement to rotate, e.g. "Northeast", "South wall", "Center"
    pub direction: String,

    /// Side of the plot facing the road
    #[arg(short, long)]
    pub road: String,

    /// Fail instead of echoing input that is not on the compass ring
    #[arg(long)]
    pub strict: bool,
}

impl Rotate {
    pub fn execute(self, _ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
        let (rotated, outcome) = rotate_traced(&self.direction, &self.road);
        tracing::info!(
            direction = %self.direction,
            road = %self.road,
            rotated = %rotated,
            outcome = %outcome,
            "rotate"
        );

        if self.strict && outcome == RotationOutcome::Unrecognized {
            anyhow::bail!(
                "cannot rotate {:?} with road {:?}: not a compass direction",
                self.direction,
                self.road
            );
        }

        writeln!(out, "{rotated}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(direction: &str, road: &str, strict: bool) -> Result<String> {
        let mut out = Vec::new();
        Rotate {
            direction: direction.into(),
            road: road.into(),
            strict,
        }
        .execute(&CommandContext::default(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_rotated_value() {
        assert_eq!(run("South wall", "East", false).unwrap(), "West wall\n");
        assert_eq!(run("Attached", "North", true).unwrap(), "Attached\n");
    }

    #[test]
    fn lenient_mode_echoes_unknown_input() {
        assert_eq!(run("Upward", "East", false).unwrap(), "Upward\n");
    }

    #[test]
    fn strict_mode_rejects_unknown_input() {
        assert!(run("Upward", "East", true).is_err());
        assert!(run("North", "Up", true).is_err());
    }
}
