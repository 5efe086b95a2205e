use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use std::path::Path;

use crate::config::{BACKEND_URL_ENV_VARS, Config};

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Print the config file location and values
    Show,
    /// Store settings in the config file
    Set {
        /// Backend base URL
        #[arg(long)]
        backend_url: Option<String>,
        /// Per-request timeout in seconds (0 disables)
        #[arg(long)]
        timeout: Option<u64>,
    },
}

pub fn handle_config_command(args: ConfigCommands, config_path: &Path) -> Result<()> {
    let mut config = Config::load_from(config_path)?;

    match args.command {
        ConfigSubcommands::Show => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            println!(
                "  backend_url: {}",
                config.backend_url.as_deref().unwrap_or("(not set)")
            );
            match config.request_timeout_secs {
                Some(secs) => println!("  request_timeout_secs: {}", secs),
                None => println!("  request_timeout_secs: (none)"),
            }
            for name in BACKEND_URL_ENV_VARS {
                if let Ok(value) = std::env::var(name) {
                    println!("  {} (env): {}", name, value);
                }
            }
        }
        ConfigSubcommands::Set { backend_url, timeout } => {
            if backend_url.is_none() && timeout.is_none() {
                anyhow::bail!("Nothing to set. Use --backend-url and/or --timeout");
            }
            if let Some(url) = backend_url {
                config.backend_url = Some(url);
            }
            if let Some(secs) = timeout {
                config.request_timeout_secs = (secs > 0).then_some(secs);
            }
            config.save_to(config_path)?;
            println!("{} Saved {}", "✓".bright_green().bold(), config_path.display());
        }
    }

    Ok(())
}
