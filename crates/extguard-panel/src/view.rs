//! Rendering seams between the panels and whatever draws them
//!
//! Rows and tags carry a stable `control_id` derived from their key, so a
//! surface can bind input controls to them and route events back as typed
//! [`crate::PanelEvent`]s.

use async_trait::async_trait;
use extguard_core::{CustomExtension, FixedExtension};

/// One checkbox row of the fixed panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedRow {
    /// `ext-{name}`; binds the label to its checkbox across re-renders
    pub control_id: String,
    pub name: String,
    pub blocked: bool,
}

impl From<&FixedExtension> for FixedRow {
    fn from(ext: &FixedExtension) -> Self {
        Self {
            control_id: format!("ext-{}", ext.name),
            name: ext.name.clone(),
            blocked: ext.blocked,
        }
    }
}

/// One removable tag of the custom panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTag {
    /// `tag-{extension}`
    pub control_id: String,
    pub extension: String,
}

impl From<&CustomExtension> for CustomTag {
    fn from(ext: &CustomExtension) -> Self {
        Self {
            control_id: format!("tag-{}", ext.extension),
            extension: ext.extension.clone(),
        }
    }
}

/// Everything the custom panel shows besides the input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomListView {
    pub tags: Vec<CustomTag>,
    pub count: usize,
    pub max_count: usize,
    /// Show the "no extensions" placeholder
    pub empty: bool,
}

impl CustomListView {
    pub fn new(extensions: &[CustomExtension], max_count: usize) -> Self {
        Self {
            tags: extensions.iter().map(CustomTag::from).collect(),
            count: extensions.len(),
            max_count,
            empty: extensions.is_empty(),
        }
    }
}

/// Surface for the fixed extension checkboxes
pub trait FixedPanelView: Send + Sync {
    /// Replace every rendered row
    fn render_fixed(&self, rows: &[FixedRow]);
}

/// Surface for the custom extension tags and input
pub trait CustomPanelView: Send + Sync {
    /// Replace the tag list, count and empty-state placeholder
    fn render_custom(&self, list: &CustomListView);

    /// Show a message next to the input
    fn show_inline_error(&self, message: &str);

    fn clear_inline_error(&self);

    /// Empty the input field
    fn clear_input(&self);
}

/// Interactive yes/no question
///
/// Implementations that wait on a person must not block the runtime thread.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}
