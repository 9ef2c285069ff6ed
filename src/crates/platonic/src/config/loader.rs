//! Configuration loader with dual-location support
//!
//! Loads configuration from:
//! 1. Default values
//! 2. User-level config: ~/.platonic/platonic.toml
//! 3. Project-level config: ./.platonic/platonic.toml
//! 4. An explicit file passed with `--config`
//! 5. `PLATONIC_*` environment variables
//!
//! Later layers override earlier ones key by key.

use crate::config::schema::PlatonicConfig;
use crate::error::{PlatonicError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

const CONFIG_DIR: &str = ".platonic";
const CONFIG_FILE: &str = "platonic.toml";

/// Configuration loader that handles user, project and explicit configs
pub struct ConfigLoader {
    user_config_path: Option<PathBuf>,
    project_config_path: PathBuf,
    explicit_config_path: Option<PathBuf>,
    read_env: bool,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            user_config_path: dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE)),
            project_config_path: cwd.join(CONFIG_DIR).join(CONFIG_FILE),
            explicit_config_path: None,
            read_env: true,
        }
    }

    /// Loader rooted at explicit locations, without environment overrides
    pub fn with_paths(user_config_path: Option<PathBuf>, project_config_path: PathBuf) -> Self {
        Self {
            user_config_path,
            project_config_path,
            explicit_config_path: None,
            read_env: false,
        }
    }

    /// Add a file that must exist and overrides both standard locations
    pub fn with_explicit(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_config_path = Some(path.into());
        self
    }

    /// Load configuration from all layers
    pub async fn load(&self) -> Result<PlatonicConfig> {
        let mut merged = toml::Value::Table(toml::map::Map::new());

        if let Some(user_path) = &self.user_config_path {
            if let Some(layer) = Self::read_layer(user_path, false).await? {
                debug!(path = %user_path.display(), "Loaded user-level config");
                merge_values(&mut merged, layer);
            }
        }

        if let Some(layer) = Self::read_layer(&self.project_config_path, false).await? {
            debug!(path = %self.project_config_path.display(), "Loaded project-level config");
            merge_values(&mut merged, layer);
        }

        if let Some(explicit) = &self.explicit_config_path {
            if let Some(layer) = Self::read_layer(explicit, true).await? {
                debug!(path = %explicit.display(), "Loaded explicit config");
                merge_values(&mut merged, layer);
            }
        }

        let mut config: PlatonicConfig = merged
            .try_into()
            .map_err(|e| PlatonicError::Config(format!("Failed to parse config: {}", e)))?;

        if self.read_env {
            config.resolve_env_vars(|name| std::env::var(name).ok());
            config.apply_env_overrides(|name| std::env::var(name).ok());
        }

        info!(
            model = %config.oracle.model,
            has_api_key = config.oracle.api_key.is_some(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Read one TOML layer; a missing optional file is skipped
    async fn read_layer(path: &Path, required: bool) -> Result<Option<toml::Value>> {
        if !path.exists() {
            if required {
                return Err(PlatonicError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            debug!(path = %path.display(), "Config file not found, skipping");
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| PlatonicError::Config(format!("Failed to read config: {}", e)))?;

        let value: toml::Value = toml::from_str(&content).map_err(|e| {
            PlatonicError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        Ok(Some(value))
    }

    pub fn user_config_path(&self) -> Option<&Path> {
        self.user_config_path.as_deref()
    }

    pub fn project_config_path(&self) -> &Path {
        &self.project_config_path
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursively overlay `overlay` onto `base`; tables merge, everything else
/// is replaced
fn merge_values(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
