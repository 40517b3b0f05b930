//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand};
use extguard_core::DEFAULT_FIXED_EXTENSIONS;

/// extguard - manage the file extension blocklist
#[derive(Parser, Debug)]
#[command(name = "extguard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub globals: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options that override the loaded configuration
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Path to a config file (default: ~/.extguard/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Backend base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Display language (en, ko)
    #[arg(long, global = true)]
    pub locale: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fixed extensions (checkbox list)
    #[command(subcommand)]
    Fixed(FixedCommands),

    /// Custom extensions (tag list)
    #[command(subcommand)]
    Custom(CustomCommands),

    /// Interactive settings panel
    Panel,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

// Fixed commands
#[derive(Subcommand, Debug)]
pub enum FixedCommands {
    /// List fixed extensions and their state
    List(ListArgs),

    /// Block a fixed extension
    Block(FixedNameArgs),

    /// Unblock a fixed extension
    Unblock(FixedNameArgs),
}

#[derive(Args, Debug)]
pub struct FixedNameArgs {
    /// Extension name (e.g. exe)
    #[arg(value_parser = PossibleValuesParser::new(DEFAULT_FIXED_EXTENSIONS))]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Custom commands
#[derive(Subcommand, Debug)]
pub enum CustomCommands {
    /// List custom extensions
    List(ListArgs),

    /// Block a new custom extension
    Add(CustomAddArgs),

    /// Remove a custom extension
    Remove(CustomRemoveArgs),

    /// Show how many custom extensions are registered
    Count,
}

#[derive(Args, Debug)]
pub struct CustomAddArgs {
    /// Extension to block; trimmed and lowercased before validation
    pub extension: String,
}

#[derive(Args, Debug)]
pub struct CustomRemoveArgs {
    /// Extension to unblock
    pub extension: String,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

// Config commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show resolved configuration
    Show(ConfigShowArgs),
}

#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
