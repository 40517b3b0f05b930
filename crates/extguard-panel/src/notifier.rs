//! Single-slot toast notifier
//!
//! There is exactly one toast. A new `show` cancels the pending hide of the
//! previous toast, hides it immediately, then schedules its own reveal and
//! hide. Every scheduled task carries the generation it was created for and
//! does nothing once a newer toast has taken the slot.
//!
//! Scheduling uses `tokio::spawn`, so `show` must be called from within a
//! Tokio runtime.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use extguard_core::ToastConfig;
use tokio::task::JoinHandle;
use tracing::trace;

/// Visual style of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Something was blocked
    Success,
    /// Something was unblocked
    SuccessUnblock,
    Error,
}

/// Content of the toast slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// Where toasts are drawn
///
/// Called while the notifier's slot is locked; implementations must not call
/// back into the notifier.
pub trait ToastSurface: Send + Sync {
    /// Make the toast visible
    fn present(&self, toast: &Toast);

    /// Hide whatever is visible
    fn dismiss(&self);
}

/// Point-in-time view of the slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastSnapshot {
    pub toast: Option<Toast>,
    pub visible: bool,
    pub hide_pending: bool,
}

#[derive(Default)]
struct Slot {
    toast: Option<Toast>,
    visible: bool,
    generation: u64,
    reveal: Option<JoinHandle<()>>,
    hide: Option<JoinHandle<()>>,
}

struct Inner {
    slot: Mutex<Slot>,
    surface: Arc<dyn ToastSurface>,
    config: ToastConfig,
}

impl Inner {
    fn slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn reveal(&self, generation: u64) {
        let mut slot = self.slot();
        // A missing hide handle means this generation has already been hidden.
        if slot.generation != generation || slot.hide.is_none() {
            return;
        }
        slot.reveal = None;
        slot.visible = true;
        if let Some(toast) = &slot.toast {
            trace!("toast #{} visible", generation);
            self.surface.present(toast);
        }
    }

    fn hide(&self, generation: u64) {
        let mut slot = self.slot();
        if slot.generation != generation {
            return;
        }
        slot.hide = None;
        if let Some(reveal) = slot.reveal.take() {
            reveal.abort();
        }
        if slot.visible {
            slot.visible = false;
            trace!("toast #{} hidden", generation);
            self.surface.dismiss();
        }
    }
}

/// Owner of the single toast slot; cheap to clone
#[derive(Clone)]
pub struct Notifier {
    inner: Arc<Inner>,
}

impl Notifier {
    pub fn new(surface: Arc<dyn ToastSurface>, config: ToastConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                slot: Mutex::new(Slot::default()),
                surface,
                config,
            }),
        }
    }

    /// Show a toast for the configured duration
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        self.show_for(message, kind, self.inner.config.duration());
    }

    /// Show a toast for `duration`, superseding any toast already showing
    pub fn show_for(&self, message: impl Into<String>, kind: ToastKind, duration: Duration) {
        let mut slot = self.inner.slot();

        if let Some(hide) = slot.hide.take() {
            hide.abort();
            if slot.visible {
                slot.visible = false;
                self.inner.surface.dismiss();
            }
        }
        if let Some(reveal) = slot.reveal.take() {
            reveal.abort();
        }

        slot.generation += 1;
        let generation = slot.generation;
        slot.toast = Some(Toast {
            message: message.into(),
            kind,
        });

        let reveal_delay = self.inner.config.reveal_delay();
        let inner = Arc::clone(&self.inner);
        slot.reveal = Some(tokio::spawn(async move {
            tokio::time::sleep(reveal_delay).await;
            inner.reveal(generation);
        }));

        let inner = Arc::clone(&self.inner);
        slot.hide = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            inner.hide(generation);
        }));
    }

    /// Wait until the current toast has been revealed
    ///
    /// Lets a short-lived process print its toast before exiting.
    pub async fn settle(&self) {
        let pending = self.inner.slot().reveal.take();
        if let Some(handle) = pending {
            let _ = handle.await;
        }
    }

    pub fn snapshot(&self) -> ToastSnapshot {
        let slot = self.inner.slot();
        ToastSnapshot {
            toast: slot.toast.clone(),
            visible: slot.visible,
            hide_pending: slot.hide.is_some(),
        }
    }
}
