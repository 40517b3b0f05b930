//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. User config (~/.extguard/config.yaml, or an explicit file)
//! 3. Environment variables (EXTGUARD_* prefix)
//! 4. CLI flags (handled by caller)

use std::env;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde_yaml_ng::{Mapping, Value};
use tracing::debug;

use crate::config::types::PanelConfig;
use crate::error::{Error, Result};

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

const DEFAULTS_FILE: &str = "panel-defaults.yaml";
const USER_CONFIG_FILE: &str = "config.yaml";

/// Configuration hierarchy loader
pub struct ConfigLoader {
    /// Directory holding the user config file
    config_dir: Utf8PathBuf,

    /// Explicit config file that replaces the user config file
    explicit_file: Option<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a loader rooted at ~/.extguard
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_dir: Self::default_config_dir()?,
            explicit_file: None,
        })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self {
            config_dir,
            explicit_file: None,
        }
    }

    /// Read this file instead of `<config_dir>/config.yaml`; it must exist
    pub fn with_file(mut self, file: Utf8PathBuf) -> Self {
        self.explicit_file = Some(file);
        self
    }

    fn default_config_dir() -> Result<Utf8PathBuf> {
        let home = env::var("HOME")
            .ok()
            .map(Utf8PathBuf::from)
            .or_else(|| dirs::home_dir().and_then(|p| Utf8PathBuf::from_path_buf(p).ok()))
            .ok_or_else(|| Error::invalid_config("Could not determine home directory"))?;

        Ok(home.join(".extguard"))
    }

    /// Load the panel configuration with hierarchical precedence
    pub fn load(&self) -> Result<PanelConfig> {
        let mut merged = Self::load_embedded_value(DEFAULTS_FILE)?;

        match &self.explicit_file {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::config_not_found(path.as_str()));
                }
                merge_values(&mut merged, self.load_yaml_value(path)?);
            }
            None => {
                let path = self.config_dir.join(USER_CONFIG_FILE);
                if path.exists() {
                    merge_values(&mut merged, self.load_yaml_value(&path)?);
                }
            }
        }

        let config: PanelConfig = serde_yaml_ng::from_value(merged)
            .map_err(|e| Error::invalid_config(format!("Failed to parse configuration: {}", e)))?;

        self.apply_env_overrides(config)
    }

    fn load_embedded_value(filename: &str) -> Result<Value> {
        let embedded_file = EmbeddedConfigs::get(filename).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", filename))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", filename))
        })?;

        serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                filename, e
            ))
        })
    }

    fn load_yaml_value(&self, path: &Utf8Path) -> Result<Value> {
        debug!("Loading configuration from {}", path);
        let content = fs::read_to_string(path)?;
        serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))
    }

    fn apply_env_overrides(&self, mut config: PanelConfig) -> Result<PanelConfig> {
        if let Ok(val) = env::var("EXTGUARD_BASE_URL") {
            config.api.base_url = val;
        }

        if let Ok(val) = env::var("EXTGUARD_HTTP_TIMEOUT_SECS") {
            config.api.timeout_secs = val.parse().map_err(|_| {
                Error::invalid_config("EXTGUARD_HTTP_TIMEOUT_SECS must be a valid number")
            })?;
        }

        if let Ok(val) = env::var("EXTGUARD_MAX_LENGTH") {
            config.limits.max_length = val
                .parse()
                .map_err(|_| Error::invalid_config("EXTGUARD_MAX_LENGTH must be a valid number"))?;
        }

        if let Ok(val) = env::var("EXTGUARD_MAX_COUNT") {
            config.limits.max_count = val
                .parse()
                .map_err(|_| Error::invalid_config("EXTGUARD_MAX_COUNT must be a valid number"))?;
        }

        if let Ok(val) = env::var("EXTGUARD_TOAST_DURATION_MS") {
            config.toast.duration_ms = val.parse().map_err(|_| {
                Error::invalid_config("EXTGUARD_TOAST_DURATION_MS must be a valid number")
            })?;
        }

        if let Ok(val) = env::var("EXTGUARD_LOCALE") {
            config.locale = val.parse()?;
        }

        Ok(config)
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}

/// Recursively overlay `overlay` onto `base`; mappings merge, everything else replaces
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            merge_mappings(base_map, overlay_map);
        }
        (_, Value::Null) => {}
        (base, overlay) => *base = overlay,
    }
}

fn merge_mappings(base: &mut Mapping, overlay: Mapping) {
    for (key, value) in overlay {
        match base.get_mut(&key) {
            Some(existing) => merge_values(existing, value),
            None => {
                base.insert(key, value);
            }
        }
    }
}
