//! Data-driven placement choices for the plan wizard.
//!
//! The option lists offered for each zone live in `data/placements.toml` and
//! are embedded at compile time. A replacement catalog can be loaded from a
//! file with the same layout.

pub mod loaders;

pub use loaders::{ContentError, LoadResult, PlacementCatalog};
