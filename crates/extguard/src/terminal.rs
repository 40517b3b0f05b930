//! Terminal rendering surface for the panels
//!
//! Lists are drawn with tabled, toasts as single styled lines. A terminal
//! cannot take back what it printed, so dismissing a toast is a no-op.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use dialoguer::Confirm as ConfirmPrompt;
use extguard_panel::{
    Confirm, CustomListView, CustomPanelView, FixedPanelView, FixedRow, Toast, ToastKind,
    ToastSurface,
};
use owo_colors::OwoColorize;
use tabled::{settings::Style, Table, Tabled};
use tracing::warn;

use crate::output;

#[derive(Tabled)]
struct FixedTableRow {
    #[tabled(rename = "")]
    checkbox: String,
    extension: String,
    control: String,
}

impl From<&FixedRow> for FixedTableRow {
    fn from(row: &FixedRow) -> Self {
        Self {
            checkbox: if row.blocked { "[x]" } else { "[ ]" }.to_string(),
            extension: row.name.clone(),
            control: row.control_id.clone(),
        }
    }
}

/// Which panel renders reach the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Draw every render, as the interactive panel does
    Live,
    /// Only toasts and inline errors; one-shot commands print their own summary
    Messages,
}

/// Terminal implementation of every panel surface
pub struct TerminalView {
    mode: RenderMode,
    /// Text of the input field, pre-filled on the next prompt
    draft: Mutex<String>,
    inline_error: Mutex<Option<String>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl TerminalView {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            draft: Mutex::new(String::new()),
            inline_error: Mutex::new(None),
        }
    }

    pub fn draft(&self) -> String {
        lock(&self.draft).clone()
    }

    pub fn set_draft(&self, text: &str) {
        *lock(&self.draft) = text.to_string();
    }

    #[cfg(test)]
    pub fn inline_error(&self) -> Option<String> {
        lock(&self.inline_error).clone()
    }
}

/// Format the fixed rows as a table
pub fn fixed_table(rows: &[FixedRow]) -> String {
    let mut table = Table::new(rows.iter().map(FixedTableRow::from));
    table.with(Style::sharp());
    table.to_string()
}

/// Format the custom tag list with its count line
pub fn custom_summary(list: &CustomListView) -> String {
    let count = format!("{}/{}", list.count, list.max_count);
    if list.empty {
        return format!("{} ({})", "No custom extensions".dimmed(), count);
    }
    let tags: Vec<String> = list
        .tags
        .iter()
        .map(|tag| format!("[{} ×]", tag.extension))
        .collect();
    format!("{}\n{}", tags.join(" "), count.dimmed())
}

impl FixedPanelView for TerminalView {
    fn render_fixed(&self, rows: &[FixedRow]) {
        if self.mode == RenderMode::Live {
            output::header("Fixed extensions");
            println!("{}", fixed_table(rows));
        }
    }
}

impl CustomPanelView for TerminalView {
    fn render_custom(&self, list: &CustomListView) {
        if self.mode == RenderMode::Live {
            output::header("Custom extensions");
            println!("{}", custom_summary(list));
        }
    }

    fn show_inline_error(&self, message: &str) {
        *lock(&self.inline_error) = Some(message.to_string());
        output::error(message);
    }

    fn clear_inline_error(&self) {
        *lock(&self.inline_error) = None;
    }

    fn clear_input(&self) {
        lock(&self.draft).clear();
    }
}

impl ToastSurface for TerminalView {
    fn present(&self, toast: &Toast) {
        match toast.kind {
            ToastKind::Success => println!("{} {}", "●".green().bold(), toast.message),
            ToastKind::SuccessUnblock => println!("{} {}", "○".cyan().bold(), toast.message),
            ToastKind::Error => eprintln!("{} {}", "●".red().bold(), toast.message.red()),
        }
    }

    fn dismiss(&self) {}
}

/// Confirmation through a dialoguer prompt
pub struct DialoguerConfirm {
    assume_yes: bool,
}

impl DialoguerConfirm {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

#[async_trait]
impl Confirm for DialoguerConfirm {
    /// Prompts on a blocking thread so toast timers keep running meanwhile
    async fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let prompt = prompt.to_string();
        let answer = tokio::task::spawn_blocking(move || {
            ConfirmPrompt::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
        })
        .await;

        match answer {
            Ok(Ok(confirmed)) => confirmed,
            Ok(Err(e)) => {
                warn!("Confirmation prompt failed: {}", e);
                false
            }
            Err(e) => {
                warn!("Confirmation prompt panicked: {}", e);
                false
            }
        }
    }
}
