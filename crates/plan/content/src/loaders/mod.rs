//! Content loaders for reading plan data from TOML.

pub mod placements;

pub use placements::PlacementCatalog;

use std::path::{Path, PathBuf};

/// Common result type for loaders.
pub type LoadResult<T> = Result<T, ContentError>;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown zone {0:?} in placement catalog")]
    UnknownZone(String),

    #[error("placement catalog has no options for zone {0}")]
    MissingZone(plan_core::Zone),

    #[error("road option {0:?} is not a compass direction")]
    InvalidRoad(String),
}

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })
}
