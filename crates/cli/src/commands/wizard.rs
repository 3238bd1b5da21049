//! Interactive, line-based walk through the five plan steps.
//!
//! Every question shows the current value in brackets; an empty answer keeps
//! it. Answering `back` returns to the previous step.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use plan_content::PlacementCatalog;
use plan_core::{
    CompassDirection, PlanFailure, PlotSpec, StepInput, Wizard as PlanWizard, WizardStep, Zone,
};

use super::{CommandContext, GeneratedPlan};
use crate::plan_file;

/// Fill in a plan step by step, then print the summary and prompt
#[derive(Parser, Debug)]
pub struct Wizard {
    /// Pre-fill answers from this plan file
    #[arg(long)]
    pub plan: Option<PathBuf>,

    /// Save the finished plan to this file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Warn when a placement is not one of the catalog choices
    #[arg(long)]
    pub catalog_check: bool,
}

impl Wizard {
    pub fn execute(
        self,
        ctx: &CommandContext,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<()> {
        let initial = ctx.load_spec(self.plan.as_deref())?;
        let catalog = ctx.load_catalog()?;
        let check = self.catalog_check.then_some(&catalog);

        let spec = run_wizard(initial, &catalog, check, input, out)?;

        if let Some(path) = &self.save {
            plan_file::save(&spec, path, true)?;
            writeln!(out, "{} {}", style("Saved plan to").green(), path.display())?;
        }

        writeln!(out)?;
        GeneratedPlan::from_spec(&spec).write_text(out)
    }
}

enum Answer {
    Back,
    Value(String),
}

/// Drives a [`PlanWizard`] from `input` until the review step.
///
/// `catalog` supplies the option hints; `check` (when set) also warns about
/// answers outside the catalog.
pub fn run_wizard(
    initial: PlotSpec,
    catalog: &PlacementCatalog,
    check: Option<&PlacementCatalog>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<PlotSpec> {
    let mut wizard = PlanWizard::with_spec(initial);

    while !wizard.is_review() {
        let step = wizard.step();
        writeln!(
            out,
            "{} {}",
            style(format!(
                "Step {}/{} [{:>3}%]",
                step.number(),
                WizardStep::ALL.len(),
                wizard.progress_percent()
            ))
            .cyan()
            .bold(),
            style(step.title()).bold()
        )?;

        let Some(step_input) = collect_step(&wizard, catalog, check, input, out)? else {
            if !wizard.can_go_back() {
                writeln!(out, "{} already at the first step", style("note:").yellow())?;
                continue;
            }
            let now = wizard.back();
            tracing::debug!(step = %now, "wizard moved back");
            continue;
        };

        match wizard.advance(step_input) {
            Ok(next) => tracing::debug!(step = %next, "wizard advanced"),
            Err(err) if err.severity().is_user_correctable() => {
                tracing::info!(
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "wizard input rejected"
                );
                writeln!(out, "{} {}", style("error:").red().bold(), err)?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(wizard.into_spec())
}

/// Asks the questions for the current step. `None` means the user asked to
/// go back.
fn collect_step(
    wizard: &PlanWizard,
    catalog: &PlacementCatalog,
    check: Option<&PlacementCatalog>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<Option<StepInput>> {
    let spec = wizard.spec();

    let step_input = match wizard.step() {
        WizardStep::Dimensions => {
            let width = spec.dimensions.width_ft.to_string();
            let Answer::Value(width) = ask(input, out, "Width (ft)", &width, &[])? else {
                return Ok(None);
            };
            let length = spec.dimensions.length_ft.to_string();
            let Answer::Value(length) = ask(input, out, "Length (ft)", &length, &[])? else {
                return Ok(None);
            };
            // Whole feet only; plan files store integers.
            StepInput::Dimensions {
                width_ft: width.parse().ok(),
                length_ft: length.parse().ok(),
            }
        }
        WizardStep::Orientation => {
            let roads: Vec<&str> = catalog.roads().iter().map(|r| r.as_ref()).collect();
            let Answer::Value(road) = ask(input, out, "Road facing", spec.road.as_ref(), &roads)?
            else {
                return Ok(None);
            };
            let road = CompassDirection::parse_normalized(&road);
            if road.is_none() {
                writeln!(
                    out,
                    "{} not a compass direction, using East",
                    style("note:").yellow()
                )?;
            }

            let vastu_default = if spec.vastu { "y" } else { "n" };
            let Answer::Value(vastu) = ask(input, out, "Vastu compliant (y/n)", vastu_default, &[])?
            else {
                return Ok(None);
            };
            StepInput::Orientation {
                road,
                vastu: matches!(vastu.to_ascii_lowercase().as_str(), "y" | "yes" | "true"),
            }
        }
        WizardStep::MainZones => {
            let Some([parking, kitchen, bedroom]) = ask_zones(
                [Zone::Parking, Zone::Kitchen, Zone::Bedroom],
                spec,
                catalog,
                check,
                input,
                out,
            )?
            else {
                return Ok(None);
            };
            StepInput::MainZones {
                parking,
                kitchen,
                bedroom,
            }
        }
        WizardStep::Fixtures => {
            let Some([stairs, bath]) =
                ask_zones([Zone::Stairs, Zone::Bath], spec, catalog, check, input, out)?
            else {
                return Ok(None);
            };
            StepInput::Fixtures { stairs, bath }
        }
        WizardStep::Review => unreachable!("review step has no inputs"),
    };

    Ok(Some(step_input))
}

fn ask_zones<const N: usize>(
    zones: [Zone; N],
    spec: &PlotSpec,
    catalog: &PlacementCatalog,
    check: Option<&PlacementCatalog>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<Option<[String; N]>> {
    let mut answers: [String; N] = std::array::from_fn(|_| String::new());

    for (slot, zone) in answers.iter_mut().zip(zones) {
        let options: Vec<&str> = catalog.options(zone).iter().map(String::as_str).collect();
        let Answer::Value(value) = ask(input, out, zone.label(), spec.zones.get(zone), &options)?
        else {
            return Ok(None);
        };

        if let Some(catalog) = check
            && !catalog.contains(zone, &value)
        {
            writeln!(
                out,
                "{} {:?} is not one of the usual {} choices",
                style("note:").yellow(),
                value,
                zone
            )?;
        }
        *slot = value;
    }

    Ok(Some(answers))
}

fn ask(
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    label: &str,
    current: &str,
    options: &[&str],
) -> Result<Answer> {
    if !options.is_empty() {
        writeln!(out, "  {}", style(options.join(" | ")).dim())?;
    }
    write!(out, "  {label} [{current}]: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("input ended before the wizard finished");
    }

    let answer = line.trim();
    if answer.eq_ignore_ascii_case("back") {
        return Ok(Answer::Back);
    }
    if answer.is_empty() {
        return Ok(Answer::Value(current.to_string()));
    }
    Ok(Answer::Value(answer.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn drive(script: &str) -> (Result<PlotSpec>, String) {
        console::set_colors_enabled(false);
        let catalog = PlacementCatalog::load().unwrap();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = run_wizard(
            PlotSpec::default(),
            &catalog,
            Some(&catalog),
            &mut input,
            &mut out,
        );
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn empty_answers_keep_defaults() {
        let (result, _) = drive("\n\n\n\n\n\n\n\n\n");
        assert_eq!(result.unwrap(), PlotSpec::default());
    }

    #[test]
    fn answers_are_captured() {
        let script = "30\n60\nNorth\nn\nNorthwest\nEast\nsouthwest\nWest wall\nAttached\n";
        let (result, _) = drive(script);
        let spec = result.unwrap();
        assert_eq!(spec.dimensions.width_ft, 30);
        assert_eq!(spec.dimensions.length_ft, 60);
        assert_eq!(spec.road, CompassDirection::North);
        assert!(!spec.vastu);
        assert_eq!(spec.zones.parking, "Northwest");
        assert_eq!(spec.zones.bedroom, "southwest");
        assert_eq!(spec.zones.bath, "Attached");
    }

    #[test]
    fn invalid_dimensions_are_asked_again() {
        let (result, text) = drive("abc\n40\n25\n40\n\n\n\n\n\n\n\n");
        assert_eq!(result.unwrap().dimensions.width_ft, 25);
        assert!(text.contains("error: Please enter valid dimensions."));
    }

    #[test]
    fn fractional_feet_are_rejected() {
        let (result, text) = drive("21.5\n40\n\n\n\n\n\n\n\n\n\n");
        assert_eq!(result.unwrap().dimensions.width_ft, 21);
        assert!(text.contains("error: Please enter valid dimensions."));
    }

    #[test]
    fn back_returns_to_previous_step() {
        // Step 1, then "back" on step 2, then step 1 again with new values.
        let (result, _) = drive("\n\nback\n50\n70\n\n\n\n\n\n\n\n");
        assert_eq!(result.unwrap().dimensions.width_ft, 50);
    }

    #[test]
    fn back_on_first_step_stays_put() {
        let (result, text) = drive("back\n\n\n\n\n\n\n\n\n\n");
        assert_eq!(result.unwrap(), PlotSpec::default());
        assert!(text.contains("note: already at the first step"));
        assert_eq!(text.matches("Step 1/5").count(), 2);
    }

    #[test]
    fn unknown_road_falls_back_to_east() {
        let (result, text) = drive("\n\nUp\n\n\n\n\n\n\n");
        assert_eq!(result.unwrap().road, CompassDirection::East);
        assert!(text.contains("not a compass direction, using East"));
    }

    #[test]
    fn catalog_check_notes_unusual_choice() {
        let (_, text) = drive("\n\n\n\nBasement\n\n\n\n\n");
        assert!(text.contains("\"Basement\" is not one of the usual parking choices"));
    }

    #[test]
    fn eof_is_an_error() {
        let (result, _) = drive("\n\n");
        assert!(result.is_err());
    }
}
