//! Common error infrastructure for plan-core.
//!
//! Rotation itself never fails: unrecognized placements fall back to their
//! original text. Errors here cover plot validation and wizard navigation.
//! Each concern has its own `thiserror` enum; all of them implement
//! [`PlanFailure`] so frontends can classify them uniformly.

use crate::wizard::WizardStep;

/// Severity level of an error, used by frontends to decide how to react.
///
/// - **Validation**: the user entered something unusable; ask again
/// - **Navigation**: the request does not fit the current wizard step
/// - **Internal**: a bug in the caller; should be investigated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Validation,
    Navigation,
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Navigation => "navigation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if re-prompting the user can resolve the error.
    pub const fn is_user_correctable(&self) -> bool {
        matches!(self, Self::Validation | Self::Navigation)
    }
}

/// Common trait for all plan-core errors.
pub trait PlanFailure: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for the error variant, for logs and tests.
    fn error_code(&self) -> &'static str;
}

/// Plot specification is unusable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("plot width must be a positive number of feet")]
    ZeroWidth,

    #[error("plot length must be a positive number of feet")]
    ZeroLength,

    #[error("road direction {0:?} is not one of the eight compass points")]
    UnknownRoad(String),
}

impl PlanFailure for PlanError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroWidth => "PLAN_ZERO_WIDTH",
            Self::ZeroLength => "PLAN_ZERO_LENGTH",
            Self::UnknownRoad(_) => "PLAN_UNKNOWN_ROAD",
        }
    }
}

/// Wizard rejected an input or a navigation request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("Please enter valid dimensions.")]
    InvalidDimensions,

    #[error("input for step {got} submitted while on step {expected}")]
    StepMismatch { expected: WizardStep, got: WizardStep },

    #[error("already on the review step; generate the prompt instead")]
    AlreadyAtReview,

    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl PlanFailure for WizardError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidDimensions | Self::Plan(_) => ErrorSeverity::Validation,
            Self::AlreadyAtReview => ErrorSeverity::Navigation,
            Self::StepMismatch { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDimensions => "WIZARD_INVALID_DIMENSIONS",
            Self::StepMismatch { .. } => "WIZARD_STEP_MISMATCH",
            Self::AlreadyAtReview => "WIZARD_ALREADY_AT_REVIEW",
            Self::Plan(inner) => inner.error_code(),
        }
    }
}
