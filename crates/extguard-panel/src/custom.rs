//! Custom extension panel
//!
//! Adding validates locally first; nothing reaches the backend until the
//! input passes. Problems with an add are shown inline next to the input.
//! Removal asks for confirmation, and its result is reported through the
//! toast instead.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use extguard_api::{ApiError, ExtensionGateway, Result};
use extguard_core::{validate, CustomExtension, Locale, Message, UiLimits, ValidationError};
use tracing::{debug, error, info, warn};

use crate::notifier::{Notifier, ToastKind};
use crate::view::{Confirm, CustomListView, CustomPanelView};

/// How an add attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Rejected before any request was made
    Invalid(ValidationError),
    /// Created on the backend, holding the normalized extension
    Added(String),
    /// The backend refused; `message` is what was shown inline
    Rejected { extension: String, message: String },
}

/// How a remove attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The user declined the confirmation
    Cancelled,
    Removed,
    Failed,
}

pub struct CustomExtensionPanel {
    gateway: Arc<dyn ExtensionGateway>,
    view: Arc<dyn CustomPanelView>,
    confirm: Arc<dyn Confirm>,
    notifier: Notifier,
    locale: Locale,
    limits: UiLimits,
    extensions: Mutex<Vec<CustomExtension>>,
}

impl CustomExtensionPanel {
    pub fn new(
        gateway: Arc<dyn ExtensionGateway>,
        view: Arc<dyn CustomPanelView>,
        confirm: Arc<dyn Confirm>,
        notifier: Notifier,
        locale: Locale,
        limits: UiLimits,
    ) -> Self {
        Self {
            gateway,
            view,
            confirm,
            notifier,
            locale,
            limits,
            extensions: Mutex::new(Vec::new()),
        }
    }

    fn list(&self) -> MutexGuard<'_, Vec<CustomExtension>> {
        self.extensions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Extensions as last fetched
    pub fn extensions(&self) -> Vec<CustomExtension> {
        self.list().clone()
    }

    /// Size of the last fetched list; the count limit is checked against it
    pub fn current_count(&self) -> usize {
        self.list().len()
    }

    /// Fetch the list and re-render tags, count and empty state
    ///
    /// Failures are logged and returned; the rendering is left as it was.
    pub async fn load(&self) -> Result<()> {
        let extensions = match self.gateway.list_custom().await {
            Ok(extensions) => extensions,
            Err(e) => {
                warn!("Failed to load custom extensions: {}", e);
                return Err(e);
            }
        };

        debug!("Loaded {} custom extensions", extensions.len());
        let mut list = self.list();
        *list = extensions;
        self.view
            .render_custom(&CustomListView::new(&list, self.limits.max_count));
        Ok(())
    }

    /// Validate `raw` and create it on the backend
    pub async fn add(&self, raw: &str) -> AddOutcome {
        self.view.clear_inline_error();

        let extension = match validate(raw, &self.limits, self.current_count()) {
            Ok(extension) => extension,
            Err(e) => {
                debug!("Rejected custom extension input {:?}: {}", raw, e);
                self.view.show_inline_error(&e.message().render(self.locale));
                return AddOutcome::Invalid(e);
            }
        };

        match self.gateway.create_custom(&extension).await {
            Ok(created) => {
                info!("Custom extension {} added", created.extension);
                self.view.clear_input();
                self.notifier.show(
                    Message::Blocked {
                        name: extension.clone(),
                    }
                    .render(self.locale),
                    ToastKind::Success,
                );
                let _ = self.load().await;
                AddOutcome::Added(extension)
            }
            Err(e) => {
                error!("Failed to add custom extension {}: {}", extension, e);
                let message = self.rejection_message(&extension, &e);
                self.view.show_inline_error(&message);
                AddOutcome::Rejected { extension, message }
            }
        }
    }

    fn rejection_message(&self, extension: &str, err: &ApiError) -> String {
        if err.is_duplicate() {
            return Message::Duplicate {
                extension: extension.to_string(),
            }
            .render(self.locale);
        }
        match err.server_message() {
            Some(message) => message.to_string(),
            None => Message::AddFailed.render(self.locale),
        }
    }

    /// Ask for confirmation, then delete `extension`
    pub async fn remove(&self, extension: &str) -> RemoveOutcome {
        let prompt = Message::ConfirmDelete {
            name: extension.to_string(),
        }
        .render(self.locale);
        if !self.confirm.confirm(&prompt).await {
            debug!("Removal of {} cancelled", extension);
            return RemoveOutcome::Cancelled;
        }

        match self.gateway.delete_custom(extension).await {
            Ok(()) => {
                info!("Custom extension {} removed", extension);
                self.notifier.show(
                    Message::Unblocked {
                        name: extension.to_string(),
                    }
                    .render(self.locale),
                    ToastKind::SuccessUnblock,
                );
                let _ = self.load().await;
                RemoveOutcome::Removed
            }
            Err(e) => {
                error!("Failed to remove custom extension {}: {}", extension, e);
                self.notifier
                    .show(Message::DeleteFailed.render(self.locale), ToastKind::Error);
                RemoveOutcome::Failed
            }
        }
    }
}
