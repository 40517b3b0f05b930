//! Fixed extension panel
//!
//! Toggles are optimistic: the row flips and is re-rendered before the
//! request goes out. A failed request shows an error toast and reloads the
//! list from the backend, which discards the flip.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use extguard_api::{ExtensionGateway, Result};
use extguard_core::{Locale, Message};
use tracing::{debug, error, info, warn};

use crate::notifier::{Notifier, ToastKind};
use crate::view::{FixedPanelView, FixedRow};

/// How a toggle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The backend accepted the new state
    Applied,
    /// The backend rejected it and the list was reloaded
    RolledBack,
}

pub struct FixedExtensionPanel {
    gateway: Arc<dyn ExtensionGateway>,
    view: Arc<dyn FixedPanelView>,
    notifier: Notifier,
    locale: Locale,
    rows: Mutex<Vec<FixedRow>>,
}

impl FixedExtensionPanel {
    pub fn new(
        gateway: Arc<dyn ExtensionGateway>,
        view: Arc<dyn FixedPanelView>,
        notifier: Notifier,
        locale: Locale,
    ) -> Self {
        Self {
            gateway,
            view,
            notifier,
            locale,
            rows: Mutex::new(Vec::new()),
        }
    }

    fn rows_mut(&self) -> MutexGuard<'_, Vec<FixedRow>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Rows as last rendered
    pub fn rows(&self) -> Vec<FixedRow> {
        self.rows_mut().clone()
    }

    /// Fetch the list and replace the rendered rows
    ///
    /// On failure the previous rendering is left untouched; the error is
    /// logged and returned but never shown to the user.
    pub async fn load(&self) -> Result<()> {
        let extensions = match self.gateway.list_fixed().await {
            Ok(extensions) => extensions,
            Err(e) => {
                warn!("Failed to load fixed extensions: {}", e);
                return Err(e);
            }
        };

        debug!("Loaded {} fixed extensions", extensions.len());
        let mut rows = self.rows_mut();
        *rows = extensions.iter().map(FixedRow::from).collect();
        self.view.render_fixed(&rows);
        Ok(())
    }

    /// Set `name`'s blocked state, rolling back on failure
    pub async fn toggle(&self, name: &str, blocked: bool) -> ToggleOutcome {
        {
            let mut rows = self.rows_mut();
            if let Some(row) = rows.iter_mut().find(|row| row.name == name) {
                row.blocked = blocked;
                self.view.render_fixed(&rows);
            }
        }

        match self.gateway.set_fixed_blocked(name, blocked).await {
            Ok(()) => {
                info!("Fixed extension {} blocked={}", name, blocked);
                let (message, kind) = if blocked {
                    (Message::Blocked { name: name.to_string() }, ToastKind::Success)
                } else {
                    (
                        Message::Unblocked { name: name.to_string() },
                        ToastKind::SuccessUnblock,
                    )
                };
                self.notifier.show(message.render(self.locale), kind);
                ToggleOutcome::Applied
            }
            Err(e) => {
                error!("Failed to update fixed extension {}: {}", name, e);
                self.notifier
                    .show(Message::UpdateFailed.render(self.locale), ToastKind::Error);
                // A failed reload is logged by load; the flipped row stays until the next one.
                let _ = self.load().await;
                ToggleOutcome::RolledBack
            }
        }
    }
}
