//! Custom extension commands

use anyhow::{bail, Context, Result};
use extguard_api::ExtensionGateway;
use extguard_panel::{AddOutcome, CustomListView, RemoveOutcome};
use tracing::debug;

use super::{gateway, load_config, TerminalPage};
use crate::cli::{CustomAddArgs, CustomCommands, CustomRemoveArgs, GlobalArgs, ListArgs};
use crate::output;
use crate::terminal::{custom_summary, RenderMode};

pub async fn run(cmd: CustomCommands, globals: &GlobalArgs) -> Result<()> {
    match cmd {
        CustomCommands::List(args) => list(args, globals).await,
        CustomCommands::Add(args) => add(args, globals).await,
        CustomCommands::Remove(args) => remove(args, globals).await,
        CustomCommands::Count => count(globals).await,
    }
}

async fn list(args: ListArgs, globals: &GlobalArgs) -> Result<()> {
    let config = load_config(globals)?;
    let terminal = TerminalPage::new(&config, RenderMode::Messages, false)?;
    let custom = terminal.page.custom();

    let spinner = output::spinner("Fetching custom extensions...");
    let result = custom.load().await;
    spinner.finish_and_clear();
    result.context("Failed to fetch custom extensions")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&custom.extensions())?);
        return Ok(());
    }

    let view = CustomListView::new(&custom.extensions(), config.limits.max_count);
    println!("{}", custom_summary(&view));
    Ok(())
}

/// Add a custom extension
///
/// The list is fetched first so the count limit is checked against the
/// backend's current state, as the page does.
async fn add(args: CustomAddArgs, globals: &GlobalArgs) -> Result<()> {
    let config = load_config(globals)?;
    let terminal = TerminalPage::new(&config, RenderMode::Messages, false)?;
    let custom = terminal.page.custom();

    custom
        .load()
        .await
        .context("Failed to fetch custom extensions")?;
    terminal.view.set_draft(&args.extension);

    let outcome = custom.add(&args.extension).await;
    terminal.page.notifier().settle().await;

    match outcome {
        AddOutcome::Added(extension) => {
            output::kv(
                "Custom extensions",
                &format!("{}/{}", custom.current_count(), config.limits.max_count),
            );
            debug!("Added {}", extension);
            Ok(())
        }
        // Already shown inline
        AddOutcome::Invalid(_) | AddOutcome::Rejected { .. } => {
            bail!("'{}' was not added", args.extension.trim())
        }
    }
}

async fn remove(args: CustomRemoveArgs, globals: &GlobalArgs) -> Result<()> {
    let config = load_config(globals)?;
    let terminal = TerminalPage::new(&config, RenderMode::Messages, args.yes)?;

    let outcome = terminal.page.custom().remove(&args.extension).await;
    terminal.page.notifier().settle().await;

    match outcome {
        RemoveOutcome::Removed => Ok(()),
        RemoveOutcome::Cancelled => {
            output::info("Cancelled");
            Ok(())
        }
        RemoveOutcome::Failed => bail!("Failed to remove '{}'", args.extension),
    }
}

async fn count(globals: &GlobalArgs) -> Result<()> {
    let config = load_config(globals)?;
    let count = gateway(&config)?
        .custom_count()
        .await
        .context("Failed to fetch custom extension count")?;
    println!("{}/{}", count, config.limits.max_count);
    Ok(())
}
