use crate::direction::CompassDirection;

/// Defaults and fixed parameters for plot specifications and the wizard.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanConfig {
    /// Minimum progress-bar fill shown on the first step, in percent.
    pub min_progress_percent: u32,
}

impl PlanConfig {
    // ===== fixed by the form layout =====
    pub const TOTAL_STEPS: u8 = 5;

    // ===== defaults for a fresh plot =====
    pub const DEFAULT_WIDTH_FT: u32 = 21;
    pub const DEFAULT_LENGTH_FT: u32 = 40;
    pub const DEFAULT_ROAD: CompassDirection = CompassDirection::East;
    pub const DEFAULT_VASTU: bool = true;
    pub const DEFAULT_PARKING: &'static str = "Northeast";
    pub const DEFAULT_KITCHEN: &'static str = "Southeast";
    pub const DEFAULT_BEDROOM: &'static str = "Southwest";
    pub const DEFAULT_STAIRS: &'static str = "South wall";
    pub const DEFAULT_BATH: &'static str = "Northwest";

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MIN_PROGRESS_PERCENT: u32 = 5;

    pub fn new() -> Self {
        Self {
            min_progress_percent: Self::DEFAULT_MIN_PROGRESS_PERCENT,
        }
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self::new()
    }
}
