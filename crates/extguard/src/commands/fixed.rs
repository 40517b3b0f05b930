//! Fixed extension commands

use anyhow::{bail, Context, Result};
use extguard_api::ExtensionGateway;
use extguard_panel::{FixedRow, ToggleOutcome};

use super::{gateway, load_config, TerminalPage};
use crate::cli::{FixedCommands, FixedNameArgs, GlobalArgs, ListArgs};
use crate::output;
use crate::terminal::{fixed_table, RenderMode};

pub async fn run(cmd: FixedCommands, globals: &GlobalArgs) -> Result<()> {
    match cmd {
        FixedCommands::List(args) => list(args, globals).await,
        FixedCommands::Block(args) => set_blocked(args, true, globals).await,
        FixedCommands::Unblock(args) => set_blocked(args, false, globals).await,
    }
}

async fn list(args: ListArgs, globals: &GlobalArgs) -> Result<()> {
    let config = load_config(globals)?;
    let gateway = gateway(&config)?;

    let spinner = output::spinner("Fetching fixed extensions...");
    let result = gateway.list_fixed().await;
    spinner.finish_and_clear();
    let extensions = result.context("Failed to fetch fixed extensions")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&extensions)?);
        return Ok(());
    }

    let rows: Vec<FixedRow> = extensions.iter().map(FixedRow::from).collect();
    println!("{}", fixed_table(&rows));
    let blocked = extensions.iter().filter(|ext| ext.blocked).count();
    output::kv("Blocked", &format!("{}/{}", blocked, extensions.len()));
    Ok(())
}

async fn set_blocked(args: FixedNameArgs, blocked: bool, globals: &GlobalArgs) -> Result<()> {
    let config = load_config(globals)?;
    let terminal = TerminalPage::new(&config, RenderMode::Messages, false)?;
    let fixed = terminal.page.fixed();

    fixed.load().await.context("Failed to fetch fixed extensions")?;
    if !fixed.rows().iter().any(|row| row.name == args.name) {
        bail!("'{}' is not a fixed extension", args.name);
    }

    let outcome = fixed.toggle(&args.name, blocked).await;
    terminal.page.notifier().settle().await;

    match outcome {
        ToggleOutcome::Applied => Ok(()),
        ToggleOutcome::RolledBack => bail!("Backend rejected the change to '{}'", args.name),
    }
}
