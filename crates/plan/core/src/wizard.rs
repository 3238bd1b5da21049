//! Five-step plot wizard.
//!
//! The wizard owns a [`PlotSpec`] pre-filled with defaults and walks the user
//! through the data-entry steps. Each step validates and captures its own
//! slice of the plot spec before the wizard moves on. The last step is a review;
//! the frontend renders the summary and prompt from [`Wizard::spec`] there.

use core::fmt;

use crate::config::PlanConfig;
use crate::direction::CompassDirection;
use crate::error::WizardError;
use crate::plan::{Dimensions, PlotSpec};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WizardStep {
    Dimensions,
    Orientation,
    MainZones,
    Fixtures,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; PlanConfig::TOTAL_STEPS as usize] = [
        WizardStep::Dimensions,
        WizardStep::Orientation,
        WizardStep::MainZones,
        WizardStep::Fixtures,
        WizardStep::Review,
    ];

    /// 1-based position, as shown to the user.
    pub const fn number(self) -> u8 {
        match self {
            WizardStep::Dimensions => 1,
            WizardStep::Orientation => 2,
            WizardStep::MainZones => 3,
            WizardStep::Fixtures => 4,
            WizardStep::Review => 5,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            WizardStep::Dimensions => "Plot dimensions",
            WizardStep::Orientation => "Road orientation",
            WizardStep::MainZones => "Main zones",
            WizardStep::Fixtures => "Stairs and bathrooms",
            WizardStep::Review => "Review",
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            WizardStep::Dimensions => Some(WizardStep::Orientation),
            WizardStep::Orientation => Some(WizardStep::MainZones),
            WizardStep::MainZones => Some(WizardStep::Fixtures),
            WizardStep::Fixtures => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    pub const fn previous(self) -> Option<Self> {
        match self {
            WizardStep::Dimensions => None,
            WizardStep::Orientation => Some(WizardStep::Dimensions),
            WizardStep::MainZones => Some(WizardStep::Orientation),
            WizardStep::Fixtures => Some(WizardStep::MainZones),
            WizardStep::Review => Some(WizardStep::Fixtures),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.title())
    }
}

/// Values submitted on one data-entry step.
///
/// Numeric fields are optional to model an empty form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepInput {
    Dimensions {
        width_ft: Option<u32>,
        length_ft: Option<u32>,
    },
    /// `road: None` means no option was selected; East is assumed.
    Orientation {
        road: Option<CompassDirection>,
        vastu: bool,
    },
    MainZones {
        parking: String,
        kitchen: String,
        bedroom: String,
    },
    Fixtures {
        stairs: String,
        bath: String,
    },
}

impl StepInput {
    pub const fn step(&self) -> WizardStep {
        match self {
            StepInput::Dimensions { .. } => WizardStep::Dimensions,
            StepInput::Orientation { .. } => WizardStep::Orientation,
            StepInput::MainZones { .. } => WizardStep::MainZones,
            StepInput::Fixtures { .. } => WizardStep::Fixtures,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wizard {
    step: WizardStep,
    spec: PlotSpec,
    config: PlanConfig,
}

impl Wizard {
    pub fn new() -> Self {
        Self::with_spec(PlotSpec::default())
    }

    /// Starts at step 1 with `spec` as the pre-filled values.
    pub fn with_spec(spec: PlotSpec) -> Self {
        Self {
            step: WizardStep::Dimensions,
            spec,
            config: PlanConfig::default(),
        }
    }

    pub const fn step(&self) -> WizardStep {
        self.step
    }

    pub const fn spec(&self) -> &PlotSpec {
        &self.spec
    }

    pub fn into_spec(self) -> PlotSpec {
        self.spec
    }

    pub fn is_review(&self) -> bool {
        self.step == WizardStep::Review
    }

    pub fn can_go_back(&self) -> bool {
        self.step.previous().is_some()
    }

    /// Progress-bar fill: the share of steps already completed, never below
    /// the configured minimum.
    pub fn progress_percent(&self) -> u32 {
        let done = u32::from(self.step.number() - 1);
        let span = u32::from(PlanConfig::TOTAL_STEPS - 1);
        (done * 100 / span).max(self.config.min_progress_percent)
    }

    /// Validates and captures `input`, then moves to the next step.
    ///
    /// On error the wizard stays where it is and the spec is untouched.
    pub fn advance(&mut self, input: StepInput) -> Result<WizardStep, WizardError> {
        let Some(next) = self.step.next() else {
            return Err(WizardError::AlreadyAtReview);
        };
        if input.step() != self.step {
            return Err(WizardError::StepMismatch {
                expected: self.step,
                got: input.step(),
            });
        }

        self.capture(input)?;
        self.step = next;
        Ok(next)
    }

    /// Moves back one step. Stays on the first step.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    fn capture(&mut self, input: StepInput) -> Result<(), WizardError> {
        match input {
            StepInput::Dimensions {
                width_ft,
                length_ft,
            } => {
                let (Some(width_ft), Some(length_ft)) = (width_ft, length_ft) else {
                    return Err(WizardError::InvalidDimensions);
                };
                let dimensions = Dimensions::new(width_ft, length_ft);
                dimensions
                    .validate()
                    .map_err(|_| WizardError::InvalidDimensions)?;
                self.spec.dimensions = dimensions;
            }
            StepInput::Orientation { road, vastu } => {
                self.spec.road = road.unwrap_or(PlanConfig::DEFAULT_ROAD);
                self.spec.vastu = vastu;
            }
            StepInput::MainZones {
                parking,
                kitchen,
                bedroom,
            } => {
                self.spec.zones.parking = parking;
                self.spec.zones.kitchen = kitchen;
                self.spec.zones.bedroom = bedroom;
            }
            StepInput::Fixtures { stairs, bath } => {
                self.spec.zones.stairs = stairs;
                self.spec.zones.bath = bath;
            }
        }
        Ok(())
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, length: u32) -> StepInput {
        StepInput::Dimensions {
            width_ft: Some(width),
            length_ft: Some(length),
        }
    }

    #[test]
    fn starts_on_first_step_with_minimum_progress() {
        let wizard = Wizard::new();
        assert_eq!(wizard.step(), WizardStep::Dimensions);
        assert_eq!(wizard.progress_percent(), 5);
        assert!(!wizard.can_go_back());
    }

    #[test]
    fn progress_tracks_completed_steps() {
        let mut wizard = Wizard::new();
        wizard.advance(dims(30, 50)).unwrap();
        assert_eq!(wizard.progress_percent(), 25);
        wizard
            .advance(StepInput::Orientation {
                road: Some(CompassDirection::North),
                vastu: false,
            })
            .unwrap();
        assert_eq!(wizard.progress_percent(), 50);
    }

    #[test]
    fn missing_dimension_is_rejected_without_moving() {
        let mut wizard = Wizard::new();
        let result = wizard.advance(StepInput::Dimensions {
            width_ft: Some(20),
            length_ft: None,
        });
        assert_eq!(result, Err(WizardError::InvalidDimensions));
        assert_eq!(wizard.advance(dims(0, 10)), Err(WizardError::InvalidDimensions));
        assert_eq!(wizard.step(), WizardStep::Dimensions);
        assert_eq!(wizard.spec().dimensions, Dimensions::new(21, 40));
    }

    #[test]
    fn unselected_road_defaults_to_east() {
        let mut wizard = Wizard::with_spec(PlotSpec::default().with_road(CompassDirection::West));
        wizard.advance(dims(21, 40)).unwrap();
        wizard
            .advance(StepInput::Orientation {
                road: None,
                vastu: true,
            })
            .unwrap();
        assert_eq!(wizard.spec().road, CompassDirection::East);
    }

    #[test]
    fn wrong_step_input_is_rejected() {
        let mut wizard = Wizard::new();
        let result = wizard.advance(StepInput::Fixtures {
            stairs: "North wall".into(),
            bath: "Attached".into(),
        });
        assert!(matches!(
            result,
            Err(WizardError::StepMismatch {
                expected: WizardStep::Dimensions,
                got: WizardStep::Fixtures
            })
        ));
    }

    #[test]
    fn full_walk_reaches_review() {
        let mut wizard = Wizard::new();
        wizard.advance(dims(25, 60)).unwrap();
        wizard
            .advance(StepInput::Orientation {
                road: Some(CompassDirection::North),
                vastu: false,
            })
            .unwrap();
        wizard
            .advance(StepInput::MainZones {
                parking: "North".into(),
                kitchen: "Southeast".into(),
                bedroom: "Southwest".into(),
            })
            .unwrap();
        let step = wizard
            .advance(StepInput::Fixtures {
                stairs: "West wall".into(),
                bath: "Attached".into(),
            })
            .unwrap();

        assert_eq!(step, WizardStep::Review);
        assert!(wizard.is_review());
        assert_eq!(wizard.progress_percent(), 100);
        assert_eq!(
            wizard.advance(dims(1, 1)),
            Err(WizardError::AlreadyAtReview)
        );

        let spec = wizard.into_spec();
        assert_eq!(spec.dimensions, Dimensions::new(25, 60));
        assert!(!spec.vastu);
        assert_eq!(spec.zones.bath, "Attached");
    }

    #[test]
    fn back_keeps_captured_values() {
        let mut wizard = Wizard::new();
        wizard.advance(dims(33, 44)).unwrap();
        assert_eq!(wizard.back(), WizardStep::Dimensions);
        assert_eq!(wizard.back(), WizardStep::Dimensions);
        assert_eq!(wizard.spec().dimensions, Dimensions::new(33, 44));
    }

    #[test]
    fn step_display_includes_number() {
        assert_eq!(WizardStep::MainZones.to_string(), "3 (Main zones)");
        assert_eq!(WizardStep::ALL.len(), 5);
    }
}
