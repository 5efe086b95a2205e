pub mod config;
pub mod manage;
pub mod reference;
pub mod relationships;

use anyhow::Result;
use colored::*;

use crate::api::{Backend, HotelThemeClient};
use crate::config::ClientSettings;
use crate::view::{Outcome, RelationshipView, StatusKind, StatusMessage};

pub use config::{ConfigCommands, handle_config_command};
pub use manage::manage_command;
pub use reference::{hotels_command, themes_command};
pub use relationships::{create_command, delete_command, list_command, show_command, update_command};

/// Build the REST client from resolved settings
pub fn build_client(settings: &ClientSettings) -> Result<HotelThemeClient> {
    let client = HotelThemeClient::with_timeout(&settings.backend_url, settings.request_timeout)?;
    log::debug!("Using backend {}", client.base_url());
    Ok(client)
}

/// Create a view and run its initial load, returning the load outcome too
pub async fn mounted_view<B: Backend>(backend: B) -> (RelationshipView<B>, Outcome) {
    let mut view = RelationshipView::new(backend);
    let loaded = view.mount().await;
    (view, loaded)
}

pub fn print_status(status: Option<&StatusMessage>) {
    let Some(status) = status else {
        return;
    };

    match status.kind {
        StatusKind::Info => println!("{} {}", "✓".bright_green().bold(), status.text.green()),
        StatusKind::Warning => println!("{} {}", "!".bright_yellow().bold(), status.text.yellow()),
        StatusKind::Error => println!("{} {}", "✗".bright_red().bold(), status.text.red()),
    }
}

/// Print a failure that did not come from the view's status line
pub fn print_failure(text: &str) {
    print_status(Some(&StatusMessage {
        kind: StatusKind::Error,
        text: text.to_string(),
    }));
}

/// One-shot commands fail the process when their single action failed
pub fn finish(outcome: Outcome) -> Result<()> {
    match outcome {
        Outcome::Invalid(message) | Outcome::Failed(message) => anyhow::bail!(message),
        Outcome::NotFound(id) => anyhow::bail!("Relationship {} not found", id),
        _ => Ok(()),
    }
}
