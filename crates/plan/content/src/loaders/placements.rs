//! Placement catalog loader.
//!
//! Loads the per-zone option lists from TOML and checks that every zone has
//! at least one choice and every road option is a ring name.

use std::collections::BTreeMap;
use std::path::Path;

use plan_core::{CompassDirection, Rotation, RotationOutcome, Zone};
use serde::Deserialize;

use super::{ContentError, LoadResult, read_file};

#[derive(Debug, Deserialize)]
struct RawCatalog {
    roads: Vec<String>,
    zones: BTreeMap<String, Vec<String>>,
}

/// Options the wizard offers for each zone and for the road side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementCatalog {
    roads: Vec<CompassDirection>,
    zones: BTreeMap<Zone, Vec<String>>,
}

impl PlacementCatalog {
    /// Loads the catalog embedded in the crate.
    pub fn load() -> LoadResult<Self> {
        let toml_str = include_str!("../../data/placements.toml");
        Self::parse(toml_str, "placements.toml")
    }

    /// Loads a catalog from a TOML file on disk.
    pub fn load_from_path(path: &Path) -> LoadResult<Self> {
        let content = read_file(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parses catalog TOML; `name` only labels errors.
    pub fn parse(toml_str: &str, name: &str) -> LoadResult<Self> {
        let raw: RawCatalog = toml::from_str(toml_str).map_err(|source| ContentError::Parse {
            name: name.to_string(),
            source,
        })?;

        let roads = raw
            .roads
            .into_iter()
            .map(|road| CompassDirection::parse_exact(&road).ok_or(ContentError::InvalidRoad(road)))
            .collect::<LoadResult<Vec<_>>>()?;

        let mut zones = BTreeMap::new();
        for (key, options) in raw.zones {
            let zone: Zone = key
                .parse()
                .map_err(|_| ContentError::UnknownZone(key.clone()))?;
            zones.insert(zone, options);
        }

        for zone in Zone::ALL {
            if zones.get(&zone).is_none_or(|options| options.is_empty()) {
                return Err(ContentError::MissingZone(zone));
            }
        }

        Ok(Self { roads, zones })
    }

    pub fn roads(&self) -> &[CompassDirection] {
        &self.roads
    }

    pub fn zones(&self) -> impl Iterator<Item = Zone> + '_ {
        self.zones.keys().copied()
    }

    pub fn options(&self, zone: Zone) -> &[String] {
        self.zones.get(&zone).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, zone: Zone, placement: &str) -> bool {
        self.options(zone).iter().any(|option| option == placement)
    }

    /// Options that the rotation cannot map (neither ring names nor sentinels).
    pub fn unrotatable(&self) -> Vec<(Zone, &str)> {
        let rotation = Rotation::new(CompassDirection::North);
        self.zones
            .iter()
            .flat_map(|(zone, options)| options.iter().map(move |o| (*zone, o.as_str())))
            .filter(|(_, option)| rotation.apply_traced(option).1 == RotationOutcome::Unrecognized)
            .collect()
    }
}
