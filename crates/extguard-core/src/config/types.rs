//! Panel configuration types
//!
//! The limits mirror what the backend injects into its page template. They are
//! read once when the panel is built and never change for the session.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::messages::Locale;

/// Complete panel configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PanelConfig {
    /// Backend connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Input limits enforced client-side
    #[serde(default)]
    pub limits: UiLimits,

    /// Toast timing
    #[serde(default)]
    pub toast: ToastConfig,

    /// Display language
    #[serde(default)]
    pub locale: Locale,
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApiConfig {
    /// Base URL the `/api/extensions` routes hang off
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User agent string for HTTP requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_timeout() -> u64 {
    10
}
fn default_user_agent() -> String {
    format!(
        "extguard/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Custom extension limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UiLimits {
    /// Maximum characters in a custom extension
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Maximum number of custom extensions
    #[serde(default = "default_max_count")]
    pub max_count: usize,
}

impl Default for UiLimits {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            max_count: default_max_count(),
        }
    }
}

fn default_max_length() -> usize {
    20
}
fn default_max_count() -> usize {
    200
}

/// Toast timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ToastConfig {
    /// How long a toast stays visible
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Delay between setting content and revealing it
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            reveal_delay_ms: default_reveal_delay_ms(),
        }
    }
}

impl ToastConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

fn default_duration_ms() -> u64 {
    2000
}
fn default_reveal_delay_ms() -> u64 {
    10
}
