//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Finding the drawing surface (browser canvas)
//! - Loading tuning overrides (canvas attribute on web, file on native)

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

use crate::tuning::Tuning;

/// Parse an optional tuning document, falling back to defaults on error
pub fn tuning_or_default(source: Option<&str>, origin: &str) -> Tuning {
    let Some(json) = source else {
        log::info!("Using default tuning");
        return Tuning::default();
    };
    match Tuning::from_json(json) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", origin);
            tuning
        }
        Err(e) => {
            log::warn!("Ignoring tuning from {}: {:#}", origin, e);
            Tuning::default()
        }
    }
}
