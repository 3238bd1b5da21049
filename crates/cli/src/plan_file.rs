//! Reading and writing plot specifications as TOML.

use std::path::Path;

use anyhow::{Context, Result};
use plan_core::PlotSpec;

/// Loads a plan file. Missing keys take their default values.
pub fn load(path: &Path) -> Result<PlotSpec> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file: {}", path.display()))?;
    let spec: PlotSpec = toml::from_str(&content)
        .with_context(|| format!("Failed to parse plan file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), road = %spec.road, "loaded plan file");
    Ok(spec)
}

/// Writes `spec` to `path`, refusing to replace an existing file unless
/// `overwrite` is set.
pub fn save(spec: &PlotSpec, path: &Path, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    let content = toml::to_string_pretty(spec).context("Failed to serialize plan")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write plan file: {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote plan file");
    Ok(())
}
