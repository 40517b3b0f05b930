//! Interactive settings panel
//!
//! Both panels are drawn on load and after every change. A bare line is
//! submitted as a new custom extension; lines starting with `:` are
//! commands. A rejected line is offered again as the next prompt's text.

use anyhow::{Context, Result};
use dialoguer::Input;
use extguard_panel::PanelEvent;
use tracing::debug;

use super::{load_config, TerminalPage};
use crate::cli::GlobalArgs;
use crate::output;
use crate::terminal::RenderMode;

const HELP: &str = "<ext> block a custom extension · :toggle <name> · :rm <ext> · :reload · :help · :quit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Submit(String),
    Toggle(String),
    Remove(String),
    Reload,
    Help,
    Quit,
}

fn parse_command(line: &str) -> std::result::Result<SessionCommand, String> {
    let Some(command) = line.trim_start().strip_prefix(':') else {
        return Ok(SessionCommand::Submit(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    let verb = parts.next().unwrap_or_default();
    let argument = parts.next().map(str::to_string);
    if parts.next().is_some() {
        return Err(format!("Too many arguments for :{}", verb));
    }

    match (verb, argument) {
        ("toggle" | "t", Some(name)) => Ok(SessionCommand::Toggle(name)),
        ("rm" | "remove", Some(extension)) => Ok(SessionCommand::Remove(extension)),
        ("toggle" | "t" | "rm" | "remove", None) => Err(format!(":{} needs an argument", verb)),
        ("reload" | "r", None) => Ok(SessionCommand::Reload),
        ("help" | "h" | "?", None) => Ok(SessionCommand::Help),
        ("quit" | "q" | "exit", None) => Ok(SessionCommand::Quit),
        _ => Err(format!("Unknown command ':{}'", command.trim())),
    }
}

/// Prompt for the next line on a blocking thread so toast timers keep running
async fn read_line(initial: String) -> Result<Option<String>> {
    let line = tokio::task::spawn_blocking(move || {
        Input::<String>::new()
            .with_prompt("extension")
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
    })
    .await
    .context("Input prompt panicked")?;

    match line {
        Ok(line) => Ok(Some(line)),
        Err(e) => {
            debug!("Input closed: {}", e);
            Ok(None)
        }
    }
}

pub async fn run(globals: &GlobalArgs) -> Result<()> {
    let config = load_config(globals)?;
    let terminal = TerminalPage::new(&config, RenderMode::Live, false)?;
    let page = &terminal.page;

    output::info(HELP);
    page.load().await;

    loop {
        let Some(line) = read_line(terminal.view.draft()).await? else {
            break;
        };

        let event = match parse_command(&line) {
            Ok(SessionCommand::Quit) => break,
            Ok(SessionCommand::Help) => {
                output::info(HELP);
                continue;
            }
            Ok(SessionCommand::Submit(input)) => {
                terminal.view.set_draft(&input);
                PanelEvent::Submit { input }
            }
            Ok(SessionCommand::Toggle(name)) => {
                let Some(row) = page.fixed().rows().into_iter().find(|row| row.name == name)
                else {
                    output::warning(&format!("'{}' is not a fixed extension", name));
                    continue;
                };
                PanelEvent::Toggle {
                    name,
                    blocked: !row.blocked,
                }
            }
            Ok(SessionCommand::Remove(extension)) => PanelEvent::Remove { extension },
            Ok(SessionCommand::Reload) => PanelEvent::Reload,
            Err(message) => {
                output::warning(&message);
                continue;
            }
        };

        let outcome = page.dispatch(event).await;
        debug!("Session event finished: {:?}", outcome);
        page.notifier().settle().await;
    }

    Ok(())
}
