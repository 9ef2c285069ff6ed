//! Configuration management for Platonic
//!
//! Supports dual-location configuration:
//! - User-level: ~/.platonic/platonic.toml
//! - Project-level: ./.platonic/platonic.toml
//!
//! Project-level config overrides user-level config, and `PLATONIC_*`
//! environment variables override both.

mod loader;
mod schema;

pub use loader::ConfigLoader;
pub use schema::{LoggingConfig, OracleSection, PlatonicConfig, BASE_URL_ENV, MODEL_ENV};

use crate::Result;
use std::path::PathBuf;

/// Load configuration from all locations, plus an optional explicit file
pub async fn load_config(explicit: Option<PathBuf>) -> Result<PlatonicConfig> {
    let loader = match explicit {
        Some(path) => ConfigLoader::new().with_explicit(path),
        None => ConfigLoader::new(),
    };
    loader.load().await
}
