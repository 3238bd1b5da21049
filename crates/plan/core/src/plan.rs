//! Plot specification: dimensions, road orientation and zone placements.

use crate::config::PlanConfig;
use crate::direction::CompassDirection;
use crate::error::PlanError;
use crate::rotation::{Rotation, RotationOutcome};

/// A placeable feature of the floor plan.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Zone {
    Parking,
    Kitchen,
    Bedroom,
    Stairs,
    Bath,
}

impl Zone {
    pub const ALL: [Zone; 5] = [
        Zone::Parking,
        Zone::Kitchen,
        Zone::Bedroom,
        Zone::Stairs,
        Zone::Bath,
    ];

    /// Human-readable name used in summaries and prompts.
    pub const fn label(self) -> &'static str {
        match self {
            Zone::Parking => "Car Parking",
            Zone::Kitchen => "Kitchen",
            Zone::Bedroom => "Master Bedroom",
            Zone::Stairs => "Staircase",
            Zone::Bath => "Bathrooms",
        }
    }
}

/// Plot size in feet. Width is drawn along the road edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Dimensions {
    pub width_ft: u32,
    pub length_ft: u32,
}

impl Dimensions {
    pub const fn new(width_ft: u32, length_ft: u32) -> Self {
        Self {
            width_ft,
            length_ft,
        }
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        if self.width_ft == 0 {
            return Err(PlanError::ZeroWidth);
        }
        if self.length_ft == 0 {
            return Err(PlanError::ZeroLength);
        }
        Ok(())
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(PlanConfig::DEFAULT_WIDTH_FT, PlanConfig::DEFAULT_LENGTH_FT)
    }
}

/// Placement text for each zone, as entered (unrotated).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZonePlacements {
    pub parking: String,
    pub kitchen: String,
    pub bedroom: String,
    pub stairs: String,
    pub bath: String,
}

impl ZonePlacements {
    pub fn get(&self, zone: Zone) -> &str {
        match zone {
            Zone::Parking => &self.parking,
            Zone::Kitchen => &self.kitchen,
            Zone::Bedroom => &self.bedroom,
            Zone::Stairs => &self.stairs,
            Zone::Bath => &self.bath,
        }
    }

    pub fn set(&mut self, zone: Zone, placement: impl Into<String>) {
        let slot = match zone {
            Zone::Parking => &mut self.parking,
            Zone::Kitchen => &mut self.kitchen,
            Zone::Bedroom => &mut self.bedroom,
            Zone::Stairs => &mut self.stairs,
            Zone::Bath => &mut self.bath,
        };
        *slot = placement.into();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Zone, &str)> + '_ {
        Zone::ALL.into_iter().map(move |zone| (zone, self.get(zone)))
    }

    /// Applies `rotation` to every zone.
    pub fn rotated(&self, rotation: &Rotation) -> ZonePlacements {
        let mut out = self.clone();
        for zone in Zone::ALL {
            out.set(zone, rotation.apply(self.get(zone)));
        }
        out
    }

    /// Zones whose placement could not be mapped onto the compass ring.
    pub fn unrecognized(&self, rotation: &Rotation) -> Vec<Zone> {
        self.iter()
            .filter(|(_, placement)| {
                rotation.apply_traced(placement).1 == RotationOutcome::Unrecognized
            })
            .map(|(zone, _)| zone)
            .collect()
    }
}

impl Default for ZonePlacements {
    fn default() -> Self {
        Self {
            parking: PlanConfig::DEFAULT_PARKING.to_string(),
            kitchen: PlanConfig::DEFAULT_KITCHEN.to_string(),
            bedroom: PlanConfig::DEFAULT_BEDROOM.to_string(),
            stairs: PlanConfig::DEFAULT_STAIRS.to_string(),
            bath: PlanConfig::DEFAULT_BATH.to_string(),
        }
    }
}

/// Everything needed to describe a ground-floor plan.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlotSpec {
    /// Side of the plot that faces the road, in the original orientation.
    pub road: CompassDirection,
    pub vastu: bool,
    pub dimensions: Dimensions,
    pub zones: ZonePlacements,
}

impl PlotSpec {
    pub fn validate(&self) -> Result<(), PlanError> {
        self.dimensions.validate()
    }

    pub const fn rotation(&self) -> Rotation {
        Rotation::new(self.road)
    }

    /// Zone placements re-oriented so the road side is South.
    pub fn rotated_zones(&self) -> ZonePlacements {
        self.zones.rotated(&self.rotation())
    }

    pub fn with_road(mut self, road: CompassDirection) -> Self {
        self.road = road;
        self
    }

    pub fn with_dimensions(mut self, width_ft: u32, length_ft: u32) -> Self {
        self.dimensions = Dimensions::new(width_ft, length_ft);
        self
    }

    pub fn with_zone(mut self, zone: Zone, placement: impl Into<String>) -> Self {
        self.zones.set(zone, placement);
        self
    }
}

impl Default for PlotSpec {
    fn default() -> Self {
        Self {
            road: PlanConfig::DEFAULT_ROAD,
            vastu: PlanConfig::DEFAULT_VASTU,
            dimensions: Dimensions::default(),
            zones: ZonePlacements::default(),
        }
    }
}
