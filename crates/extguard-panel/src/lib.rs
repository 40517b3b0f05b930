//! # extguard-panel
//!
//! The blocklist settings page, independent of how it is drawn:
//! - [`Notifier`]: single-slot transient status messages
//! - [`FixedExtensionPanel`]: checkbox list with optimistic toggles
//! - [`CustomExtensionPanel`]: tag list with validated add and confirmed remove
//! - [`SettingsPage`]: loads both panels and routes typed [`PanelEvent`]s
//!
//! Rendering goes through the traits in [`view`]; the panels never format
//! anything themselves beyond the message catalog.

pub mod custom;
pub mod fixed;
pub mod notifier;
pub mod page;
pub mod view;

pub use custom::{AddOutcome, CustomExtensionPanel, RemoveOutcome};
pub use fixed::{FixedExtensionPanel, ToggleOutcome};
pub use notifier::{Notifier, Toast, ToastKind, ToastSnapshot, ToastSurface};
pub use page::{EventOutcome, PageSurface, PanelEvent, SettingsPage};
pub use view::{Confirm, CustomListView, CustomPanelView, CustomTag, FixedPanelView, FixedRow};
