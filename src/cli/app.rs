use super::commands::config::ConfigCommands;
use super::commands::reference::ThemesArgs;
use super::commands::relationships::{CreateArgs, DeleteArgs, ShowArgs, UpdateArgs};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hotel-theme-cli")]
#[command(about = "Manage hotel-theme relationships on a REST backend")]
#[command(version)]
pub struct Cli {
    /// Backend base URL (overrides HOTEL_THEME_BACKEND_URL / BACKEND_URL)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Path to an alternate config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive relationship manager (default)
    Manage,
    /// List relationships with hotel and theme names
    List,
    /// Show a single relationship
    Show(ShowArgs),
    /// Create a relationship
    Create(CreateArgs),
    /// Update a relationship
    Update(UpdateArgs),
    /// Delete a relationship
    Delete(DeleteArgs),
    /// List hotels
    Hotels,
    /// List themes, optionally filtered by id
    Themes(ThemesArgs),
    /// Show or change the config file
    Config(ConfigCommands),
}
