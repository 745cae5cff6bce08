use std::{fs, path::Path};

use anyhow::{Context, Result};
use onboard_core::VehicleConfig;
use tracing::info;

/// Reads a TOML vehicle configuration from `path`.
///
/// Constants missing from the file keep their default values.
pub fn load(path: &Path) -> Result<VehicleConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration {}", path.display()))?;
    let config =
        from_toml(&text).with_context(|| format!("invalid configuration {}", path.display()))?;

    info!(path = %path.display(), "loaded vehicle configuration");
    Ok(config)
}

/// Parses and validates a TOML vehicle configuration.
pub fn from_toml(text: &str) -> Result<VehicleConfig> {
    let config: VehicleConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}
