use anyhow::Result;
use dialoguer::Select;

use crate::api::{Hotel, RecordId, Theme};
use crate::view::Confirm;

/// Interactive confirmation prompt using arrow-key navigable selection
///
/// # Arguments
/// * `prompt` - The question to ask the user
/// * `default_yes` - Whether "Yes" should be the default selection (index 0)
///
/// # Returns
/// * `Ok(true)` if user selects "Yes"
/// * `Ok(false)` if user selects "No"
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let items = vec!["Yes", "No"];
    let default_index = if default_yes { 0 } else { 1 };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection == 0)
}

/// Confirmation backed by a terminal prompt, defaulting to "No"
///
/// A prompt that cannot be shown (closed stdin, no terminal) counts as a
/// refusal.
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, message: &str) -> bool {
        prompt_confirmation(message, false).unwrap_or_else(|e| {
            log::warn!("Confirmation prompt failed: {}", e);
            false
        })
    }
}

/// Pick one entry from `(id, name)` pairs, with a leading placeholder
///
/// Returns `None` when the placeholder is chosen.
fn select_record(prompt: &str, placeholder: &str, entries: &[(RecordId, &str)], current: Option<RecordId>) -> Result<Option<RecordId>> {
    let mut items = Vec::with_capacity(entries.len() + 1);
    items.push(placeholder.to_string());
    items.extend(entries.iter().map(|(_, name)| name.to_string()));

    let default_index = current
        .and_then(|id| entries.iter().position(|(candidate, _)| *candidate == id))
        .map(|index| index + 1)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection.checked_sub(1).map(|index| entries[index].0))
}

pub fn prompt_hotel_selection(hotels: &[Hotel], current: Option<RecordId>) -> Result<Option<RecordId>> {
    let entries: Vec<(RecordId, &str)> = hotels.iter().map(|h| (h.id, h.name.as_str())).collect();
    select_record("Hotel", "Select a hotel", &entries, current)
}

pub fn prompt_theme_selection(themes: &[Theme], current: Option<RecordId>) -> Result<Option<RecordId>> {
    let entries: Vec<(RecordId, &str)> = themes.iter().map(|t| (t.id, t.name.as_str())).collect();
    select_record("Theme", "Select a theme", &entries, current)
}

/// Choose from a fixed list of labels, returning the index
pub fn prompt_menu(prompt: &str, items: &[String]) -> Result<usize> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?;

    Ok(selection)
}
