use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

use hotel_theme_cli::cli::commands::{self, build_client};
use hotel_theme_cli::cli::{Cli, Commands};
use hotel_theme_cli::config::Config;

fn init_logger(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(path) = log_file {
        // Truncate on each run
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_file.as_ref())?;

    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {:?}", path);
    }
    info!("Starting hotel-theme-cli");

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::get_config_path()?,
    };

    let command = cli.command.unwrap_or(Commands::Manage);
    if let Commands::Config(args) = command {
        return commands::handle_config_command(args, &config_path);
    }

    let config = Config::load_from(&config_path)?;
    let settings = config.resolve(cli.backend_url.as_deref())?;
    let client = build_client(&settings)?;

    match command {
        Commands::Manage => commands::manage_command(client).await,
        Commands::List => commands::list_command(client).await,
        Commands::Show(args) => commands::show_command(client, args).await,
        Commands::Create(args) => commands::create_command(client, args).await,
        Commands::Update(args) => commands::update_command(client, args).await,
        Commands::Delete(args) => commands::delete_command(client, args).await,
        Commands::Hotels => commands::hotels_command(client).await,
        Commands::Themes(args) => commands::themes_command(client, args).await,
        Commands::Config(_) => unreachable!("handled before the client is built"),
    }
}
