//! Platform-specific directory utilities

use anyhow::Result;
use std::path::PathBuf;

/// Get the platform-specific log directory for floorplan
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/floorplan/logs`
/// - Linux: `~/.cache/floorplan/logs` (or `$XDG_CACHE_HOME/floorplan/logs`)
/// - Windows: `%LOCALAPPDATA%\floorplan\logs`
/// - Fallback: `/tmp/floorplan/logs`
pub fn log_dir() -> Result<PathBuf> {
    let base_dir = directories::ProjectDirs::from("", "", "floorplan")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("floorplan"));

    Ok(base_dir.join("logs"))
}
