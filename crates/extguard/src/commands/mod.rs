//! CLI command implementations

pub mod config;
pub mod custom;
pub mod fixed;
pub mod panel;

use std::sync::Arc;

use anyhow::{Context, Result};
use extguard_api::HttpGateway;
use extguard_core::{ConfigLoader, Locale, PanelConfig};
use extguard_panel::{PageSurface, SettingsPage};
use tracing::debug;

use crate::cli::GlobalArgs;
use crate::terminal::{DialoguerConfirm, RenderMode, TerminalView};

/// Resolve configuration: embedded defaults, file, environment, then flags
pub fn load_config(globals: &GlobalArgs) -> Result<PanelConfig> {
    let loader = ConfigLoader::new().context("Failed to locate config directory")?;
    let loader = match &globals.config {
        Some(file) => loader.with_file(file.clone()),
        None => loader,
    };
    let mut config = loader.load().context("Failed to load configuration")?;

    if let Some(base_url) = &globals.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(locale) = &globals.locale {
        config.locale = locale
            .parse::<Locale>()
            .with_context(|| format!("Invalid --locale value '{}'", locale))?;
    }

    Ok(config)
}

/// Build the HTTP gateway for the resolved configuration
pub fn gateway(config: &PanelConfig) -> Result<Arc<HttpGateway>> {
    let gateway = HttpGateway::new(&config.api)
        .with_context(|| format!("Cannot use backend at {}", config.api.base_url))?;
    debug!("Using backend {}", gateway.base_url());
    Ok(Arc::new(gateway))
}

/// A settings page drawn on the terminal
pub struct TerminalPage {
    pub page: SettingsPage,
    pub view: Arc<TerminalView>,
}

impl TerminalPage {
    pub fn new(config: &PanelConfig, mode: RenderMode, assume_yes: bool) -> Result<Self> {
        let view = Arc::new(TerminalView::new(mode));
        let page = SettingsPage::new(
            config,
            gateway(config)?,
            PageSurface {
                fixed_view: view.clone(),
                custom_view: view.clone(),
                toasts: view.clone(),
                confirm: Arc::new(DialoguerConfirm::new(assume_yes)),
            },
        );
        Ok(Self { page, view })
    }
}
