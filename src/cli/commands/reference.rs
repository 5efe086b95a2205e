use anyhow::Result;
use clap::Args;
use colored::*;
use log::info;

use crate::api::{Backend, RecordId};

#[derive(Args)]
pub struct ThemesArgs {
    /// Only fetch these theme ids (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub ids: Vec<RecordId>,
}

pub async fn hotels_command<B: Backend>(backend: B) -> Result<()> {
    info!("Listing hotels");
    let hotels = backend.list_hotels().await?;

    if hotels.is_empty() {
        println!("{}", "No hotels found.".dimmed());
        return Ok(());
    }

    println!("{:<6} {}", "ID".bold(), "Name".bold());
    for hotel in &hotels {
        println!("{:<6} {}", hotel.id, hotel.name);
    }
    Ok(())
}

pub async fn themes_command<B: Backend>(backend: B, args: ThemesArgs) -> Result<()> {
    let themes = if args.ids.is_empty() {
        info!("Listing themes");
        backend.list_themes().await?
    } else {
        info!("Listing themes {:?}", args.ids);
        backend.themes_by_ids(&args.ids).await?
    };

    if themes.is_empty() {
        println!("{}", "No themes found.".dimmed());
        return Ok(());
    }

    println!("{:<6} {}", "ID".bold(), "Name".bold());
    for theme in &themes {
        println!("{:<6} {}", theme.id, theme.name);
    }
    Ok(())
}
