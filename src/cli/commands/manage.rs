//! Interactive relationship manager session

use anyhow::Result;
use colored::*;
use is_terminal::IsTerminal;
use log::info;

use super::print_status;
use crate::api::{Backend, RecordId};
use crate::ui::prompts::{TerminalConfirm, prompt_hotel_selection, prompt_menu, prompt_theme_selection};
use crate::view::RelationshipView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    SelectHotel,
    SelectTheme,
    Submit,
    Cancel,
    Edit,
    Delete,
    Reload,
    Quit,
}

impl Action {
    fn label<B: Backend>(self, view: &RelationshipView<B>) -> String {
        match self {
            Self::SelectHotel => "Select hotel".to_string(),
            Self::SelectTheme => "Select theme".to_string(),
            Self::Submit => view.form().submit_label().to_string(),
            Self::Cancel => "Cancel edit".to_string(),
            Self::Edit => "Edit a relationship".to_string(),
            Self::Delete => "Delete a relationship".to_string(),
            Self::Reload => "Reload".to_string(),
            Self::Quit => "Quit".to_string(),
        }
    }
}

/// Menu entries available in the current form mode
fn available_actions<B: Backend>(view: &RelationshipView<B>) -> Vec<Action> {
    let mut actions = vec![Action::SelectHotel, Action::SelectTheme, Action::Submit];
    if view.form().is_editing() {
        actions.push(Action::Cancel);
    }
    if !view.relationships().is_empty() {
        actions.push(Action::Edit);
        actions.push(Action::Delete);
    }
    actions.push(Action::Reload);
    actions.push(Action::Quit);
    actions
}

/// Ask which relationship to act on; `None` backs out
fn pick_relationship<B: Backend>(view: &RelationshipView<B>, prompt: &str) -> Result<Option<RecordId>> {
    let rows = view.rows();
    let mut items: Vec<String> = rows.iter().map(|row| row.to_string()).collect();
    items.push("Back".to_string());

    let index = prompt_menu(prompt, &items)?;
    Ok(rows.get(index).map(|row| row.id))
}

pub async fn manage_command<B: Backend>(backend: B) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("The interactive manager needs a terminal. Use 'list', 'create', 'update' or 'delete' instead");
    }

    info!("Starting interactive session");
    let mut view = RelationshipView::new(backend);
    view.mount().await;

    loop {
        println!();
        println!("{}", view.render());
        print_status(view.status());
        view.clear_status();

        let actions = available_actions(&view);
        let labels: Vec<String> = actions.iter().map(|action| action.label(&view)).collect();
        let action = actions[prompt_menu("Action", &labels)?];

        match action {
            Action::SelectHotel => {
                let choice = prompt_hotel_selection(view.hotels(), view.form().hotel_id())?;
                view.select_hotel(choice);
            }
            Action::SelectTheme => {
                let choice = prompt_theme_selection(view.themes(), view.form().theme_id())?;
                view.select_theme(choice);
            }
            Action::Submit => {
                view.submit().await;
            }
            Action::Cancel => {
                view.cancel();
            }
            Action::Edit => {
                if let Some(id) = pick_relationship(&view, "Edit which relationship?")? {
                    view.edit(id);
                }
            }
            Action::Delete => {
                if let Some(id) = pick_relationship(&view, "Delete which relationship?")? {
                    view.delete(id, &TerminalConfirm).await;
                }
            }
            Action::Reload => {
                view.reload().await;
            }
            Action::Quit => break,
        }
    }

    println!("{}", "Bye.".dimmed());
    Ok(())
}
