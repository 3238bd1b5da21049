//! Deterministic floor-plan prompt logic shared across frontends.
//!
//! `plan-core` owns the compass ring and the rotation that re-orients a plot
//! so its road side faces South, plus the plot specification, the five-step
//! wizard that fills it in, and the summary/prompt text rendered from it.
//! Nothing here performs I/O.
pub mod config;
pub mod direction;
pub mod error;
pub mod plan;
pub mod prompt;
pub mod rotation;
pub mod wizard;

pub use config::PlanConfig;
pub use direction::CompassDirection;
pub use error::{ErrorSeverity, PlanError, PlanFailure, WizardError};
pub use plan::{Dimensions, PlotSpec, Zone, ZonePlacements};
pub use prompt::{PromptBuilder, render_prompt, summary_lines};
pub use rotation::{
    QualifiedDirection, Rotation, RotationOutcome, Sentinel, rotate, rotate_traced,
};
pub use wizard::{StepInput, Wizard, WizardStep};
