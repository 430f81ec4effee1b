//! Native host helpers

use std::path::Path;

use anyhow::{Context, Result};

/// Environment variable naming an optional tuning file
pub const TUNING_ENV: &str = "SPLIT_BREAKOUT_TUNING";

/// Read the tuning file named by [`TUNING_ENV`], if the variable is set
pub fn tuning_file() -> Result<Option<(String, String)>> {
    let Some(path) = std::env::var_os(TUNING_ENV) else {
        return Ok(None);
    };
    let path = Path::new(&path);
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read tuning file {}", path.display()))?;
    Ok(Some((path.display().to_string(), json)))
}
