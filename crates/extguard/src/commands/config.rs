//! Config command

use anyhow::Result;
use extguard_core::ConfigLoader;

use super::load_config;
use crate::cli::{ConfigCommands, ConfigShowArgs, GlobalArgs};
use crate::output;

pub fn run(cmd: ConfigCommands, globals: &GlobalArgs) -> Result<()> {
    match cmd {
        ConfigCommands::Show(args) => show(args, globals),
    }
}

fn show(args: ConfigShowArgs, globals: &GlobalArgs) -> Result<()> {
    let config = load_config(globals)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let source = match &globals.config {
        Some(file) => file.to_string(),
        None => ConfigLoader::new()?
            .config_dir()
            .join("config.yaml")
            .to_string(),
    };

    output::header("Resolved configuration");
    output::kv("Source", &source);
    output::kv("Backend", &config.api.base_url);
    output::kv("Timeout", &format!("{}s", config.api.timeout_secs));
    output::kv("Max length", &config.limits.max_length.to_string());
    output::kv("Max count", &config.limits.max_count.to_string());
    output::kv("Toast duration", &format!("{}ms", config.toast.duration_ms));
    output::kv("Locale", &config.locale.to_string());
    Ok(())
}
