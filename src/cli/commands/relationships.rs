//! One-shot relationship commands

use anyhow::Result;
use clap::Args;
use colored::*;
use log::info;

use super::{finish, mounted_view, print_failure, print_status};
use crate::api::{Backend, RecordId};
use crate::ui::prompts::TerminalConfirm;
use crate::view::{EMPTY_LIST_MESSAGE, Outcome};

#[derive(Args)]
pub struct ShowArgs {
    /// Relationship id
    pub id: RecordId,
}

#[derive(Args)]
pub struct CreateArgs {
    /// Hotel id
    #[arg(long)]
    pub hotel: RecordId,
    /// Theme id
    #[arg(long)]
    pub theme: RecordId,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Relationship id
    pub id: RecordId,
    /// New hotel id
    #[arg(long)]
    pub hotel: RecordId,
    /// New theme id
    #[arg(long)]
    pub theme: RecordId,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Relationship id
    pub id: RecordId,
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

pub async fn list_command<B: Backend>(backend: B) -> Result<()> {
    info!("Listing relationships");
    let (view, loaded) = mounted_view(backend).await;
    print_status(view.status());
    if !loaded.is_success() {
        return finish(loaded);
    }

    let rows = view.rows();
    if rows.is_empty() {
        println!("{}", EMPTY_LIST_MESSAGE.dimmed());
        return Ok(());
    }

    println!("{}", "Current Hotel-Theme Relationships".bold());
    for row in &rows {
        println!("  {}", row);
    }
    println!("\nTotal relationships: {}", rows.len());
    Ok(())
}

pub async fn show_command<B: Backend>(backend: B, args: ShowArgs) -> Result<()> {
    info!("Showing relationship {}", args.id);
    let record = backend.get_hotel_theme(args.id).await?;

    let (view, _) = mounted_view(backend).await;
    println!("Relationship #{}", record.id);
    println!("  Hotel: {}", view.hotel_name(record.id_hotel));
    println!("  Theme: {}", view.theme_name(record.id_theme));
    Ok(())
}

pub async fn create_command<B: Backend>(backend: B, args: CreateArgs) -> Result<()> {
    let (mut view, _) = mounted_view(backend).await;
    view.select_hotel(Some(args.hotel));
    view.select_theme(Some(args.theme));

    let outcome = view.create().await;
    print_status(view.status());
    if let Outcome::Created(record) = &outcome {
        println!(
            "  #{} Hotel: {} - Theme: {}",
            record.id,
            view.hotel_name(record.id_hotel),
            view.theme_name(record.id_theme)
        );
    }
    finish(outcome)
}

pub async fn update_command<B: Backend>(backend: B, args: UpdateArgs) -> Result<()> {
    let (mut view, loaded) = mounted_view(backend).await;

    let outcome = view.edit(args.id);
    if !outcome.is_success() {
        // A failed load explains a missing record better than "not found"
        if !loaded.is_success() {
            print_status(view.status());
            return finish(loaded);
        }
        print_failure(&format!("Relationship {} not found", args.id));
        return finish(outcome);
    }
    view.select_hotel(Some(args.hotel));
    view.select_theme(Some(args.theme));

    let outcome = view.submit().await;
    print_status(view.status());
    finish(outcome)
}

pub async fn delete_command<B: Backend>(backend: B, args: DeleteArgs) -> Result<()> {
    let (mut view, _) = mounted_view(backend).await;

    let outcome = if args.force {
        view.delete(args.id, &|_: &str| true).await
    } else {
        view.delete(args.id, &TerminalConfirm).await
    };

    if outcome == Outcome::Declined {
        println!("Operation cancelled.");
        return Ok(());
    }

    print_status(view.status());
    finish(outcome)
}
