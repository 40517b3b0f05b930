//! Settings page: both panels plus the shared toast

use std::sync::Arc;

use extguard_api::ExtensionGateway;
use extguard_core::PanelConfig;
use tracing::{debug, info};

use crate::custom::{AddOutcome, CustomExtensionPanel, RemoveOutcome};
use crate::fixed::{FixedExtensionPanel, ToggleOutcome};
use crate::notifier::{Notifier, ToastSurface};
use crate::view::{Confirm, CustomPanelView, FixedPanelView};

/// Everything the page draws on or asks through
pub struct PageSurface {
    pub fixed_view: Arc<dyn FixedPanelView>,
    pub custom_view: Arc<dyn CustomPanelView>,
    pub toasts: Arc<dyn ToastSurface>,
    pub confirm: Arc<dyn Confirm>,
}

/// A user interaction, already bound to the key it concerns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// Checkbox `ext-{name}` changed to `blocked`
    Toggle { name: String, blocked: bool },
    /// Add button clicked or Enter pressed in the input
    Submit { input: String },
    /// Remove control on tag `tag-{extension}` activated
    Remove { extension: String },
    /// Refetch both lists
    Reload,
}

/// Result of dispatching a [`PanelEvent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Toggled(ToggleOutcome),
    Added(AddOutcome),
    Removed(RemoveOutcome),
    Reloaded,
}

pub struct SettingsPage {
    notifier: Notifier,
    fixed: FixedExtensionPanel,
    custom: CustomExtensionPanel,
}

impl SettingsPage {
    pub fn new(config: &PanelConfig, gateway: Arc<dyn ExtensionGateway>, surface: PageSurface) -> Self {
        let notifier = Notifier::new(surface.toasts, config.toast);
        let fixed = FixedExtensionPanel::new(
            Arc::clone(&gateway),
            surface.fixed_view,
            notifier.clone(),
            config.locale,
        );
        let custom = CustomExtensionPanel::new(
            gateway,
            surface.custom_view,
            surface.confirm,
            notifier.clone(),
            config.locale,
            config.limits,
        );

        Self {
            notifier,
            fixed,
            custom,
        }
    }

    /// Fetch both lists concurrently
    ///
    /// A list that fails to load keeps its previous rendering; nothing is
    /// shown to the user.
    pub async fn load(&self) {
        let (fixed, custom) = tokio::join!(self.fixed.load(), self.custom.load());
        debug!(
            "Page loaded (fixed ok: {}, custom ok: {})",
            fixed.is_ok(),
            custom.is_ok()
        );
    }

    /// Route one user interaction to its panel
    pub async fn dispatch(&self, event: PanelEvent) -> EventOutcome {
        match event {
            PanelEvent::Toggle { name, blocked } => {
                EventOutcome::Toggled(self.fixed.toggle(&name, blocked).await)
            }
            PanelEvent::Submit { input } => EventOutcome::Added(self.custom.add(&input).await),
            PanelEvent::Remove { extension } => {
                EventOutcome::Removed(self.custom.remove(&extension).await)
            }
            PanelEvent::Reload => {
                info!("Reloading extension lists");
                self.load().await;
                EventOutcome::Reloaded
            }
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn fixed(&self) -> &FixedExtensionPanel {
        &self.fixed
    }

    pub fn custom(&self) -> &CustomExtensionPanel {
        &self.custom
    }
}
