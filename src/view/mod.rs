//! Relationship manager view
//!
//! Holds the three collections loaded from the backend, the two-state form,
//! and a transient status line. Every action reports an [`Outcome`]; backend
//! failures are logged and reflected in the status, never returned as errors.

pub mod form;

pub use form::{FormMode, RelationshipForm};

use crate::api::{ApiError, Backend, Hotel, HotelTheme, RecordId, Theme};
use log::{debug, error, info, warn};
use std::fmt;

pub const CREATE_VALIDATION_MESSAGE: &str = "Please select both a hotel and a theme";
pub const UPDATE_VALIDATION_MESSAGE: &str = "Please select both a hotel and a theme to edit";
pub const DELETE_CONFIRMATION_PROMPT: &str = "Are you sure you want to delete this relationship?";
pub const EMPTY_LIST_MESSAGE: &str = "No relationships found.";

/// Blocking yes/no prompt used before destructive actions
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Result of a single view action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Loaded,
    Created(HotelTheme),
    Updated(HotelTheme),
    Deleted(RecordId),
    EditStarted(RecordId),
    Cancelled,
    /// The user declined the confirmation prompt
    Declined,
    /// No local record has this id
    NotFound(RecordId),
    /// Required selections were missing; nothing was sent
    Invalid(String),
    /// The backend call failed
    Failed(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Self::Loaded | Self::Created(_) | Self::Updated(_) | Self::Deleted(_) | Self::EditStarted(_) | Self::Cancelled
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

/// Transient message shown under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }
}

/// A relationship with its ids resolved to display names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipRow {
    pub id: RecordId,
    pub hotel: String,
    pub theme: String,
}

impl fmt::Display for RelationshipRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:<4} Hotel: {} - Theme: {}", self.id, self.hotel, self.theme)
    }
}

pub struct RelationshipView<B> {
    backend: B,
    hotels: Vec<Hotel>,
    themes: Vec<Theme>,
    relationships: Vec<HotelTheme>,
    form: RelationshipForm,
    status: Option<StatusMessage>,
}

impl<B: Backend> RelationshipView<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            hotels: Vec::new(),
            themes: Vec::new(),
            relationships: Vec::new(),
            form: RelationshipForm::new(),
            status: None,
        }
    }

    /// Load hotels, themes and relationships concurrently
    ///
    /// Each collection is independent: a failed request leaves only that
    /// collection empty.
    pub async fn mount(&mut self) -> Outcome {
        info!("Loading hotels, themes and relationships");

        let (hotels, themes, relationships) = tokio::join!(
            self.backend.list_hotels(),
            self.backend.list_themes(),
            self.backend.list_hotel_themes(),
        );

        let mut failures = Vec::new();
        self.hotels = take_or_log(hotels, "hotels", &mut failures);
        self.themes = take_or_log(themes, "themes", &mut failures);
        self.relationships = take_or_log(relationships, "hotelthemes", &mut failures);

        debug!(
            "Loaded {} hotels, {} themes, {} relationships",
            self.hotels.len(),
            self.themes.len(),
            self.relationships.len()
        );

        if failures.is_empty() {
            self.status = None;
            Outcome::Loaded
        } else {
            let message = failures.join("; ");
            self.status = Some(StatusMessage::new(StatusKind::Error, message.clone()));
            Outcome::Failed(message)
        }
    }

    /// Discard the local copy and load everything again
    pub async fn reload(&mut self) -> Outcome {
        self.mount().await
    }

    pub fn select_hotel(&mut self, hotel_id: Option<RecordId>) {
        self.form.set_hotel(hotel_id);
    }

    pub fn select_theme(&mut self, theme_id: Option<RecordId>) {
        self.form.set_theme(theme_id);
    }

    /// Create or update depending on the form mode
    pub async fn submit(&mut self) -> Outcome {
        match self.form.mode() {
            FormMode::Create => self.create().await,
            FormMode::Edit { .. } => self.update().await,
        }
    }

    pub async fn create(&mut self) -> Outcome {
        let Some(payload) = self.form.payload() else {
            return self.invalid(CREATE_VALIDATION_MESSAGE);
        };

        match self.backend.create_hotel_theme(&payload).await {
            Ok(record) => {
                info!("Created relationship {}", record.id);
                self.relationships.push(record.clone());
                self.form.reset();
                self.status = Some(StatusMessage::new(StatusKind::Info, "Relationship created"));
                Outcome::Created(record)
            }
            Err(e) => self.failed("Error creating relationship", &e),
        }
    }

    pub async fn update(&mut self) -> Outcome {
        let (Some(payload), Some(editing_id)) = (self.form.payload(), self.form.editing_id()) else {
            return self.invalid(UPDATE_VALIDATION_MESSAGE);
        };

        match self.backend.update_hotel_theme(editing_id, &payload).await {
            Ok(record) => {
                info!("Updated relationship {}", editing_id);
                for item in self.relationships.iter_mut().filter(|item| item.id == editing_id) {
                    *item = record.clone();
                }
                self.form.reset();
                self.status = Some(StatusMessage::new(StatusKind::Info, "Relationship updated"));
                Outcome::Updated(record)
            }
            Err(e) => self.failed("Error editing relationship", &e),
        }
    }

    /// Delete after the user confirms; declining sends nothing
    pub async fn delete(&mut self, id: RecordId, confirm: &impl Confirm) -> Outcome {
        if !confirm.confirm(DELETE_CONFIRMATION_PROMPT) {
            debug!("Delete of relationship {} declined", id);
            return Outcome::Declined;
        }

        match self.backend.delete_hotel_theme(id).await {
            Ok(()) => {
                info!("Deleted relationship {}", id);
                self.relationships.retain(|item| item.id != id);
                self.status = Some(StatusMessage::new(StatusKind::Info, "Relationship deleted"));
                Outcome::Deleted(id)
            }
            Err(e) => self.failed("Error deleting relationship", &e),
        }
    }

    /// Load an existing relationship into the form
    pub fn edit(&mut self, id: RecordId) -> Outcome {
        match self.relationships.iter().find(|item| item.id == id) {
            Some(record) => {
                self.form.begin_edit(record);
                Outcome::EditStarted(id)
            }
            None => {
                debug!("No relationship {} to edit", id);
                Outcome::NotFound(id)
            }
        }
    }

    pub fn cancel(&mut self) -> Outcome {
        self.form.reset();
        Outcome::Cancelled
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn relationships(&self) -> &[HotelTheme] {
        &self.relationships
    }

    pub fn form(&self) -> &RelationshipForm {
        &self.form
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn hotel_name(&self, id: Option<RecordId>) -> String {
        resolve_name(id, self.hotels.iter().map(|h| (h.id, h.name.as_str())))
    }

    pub fn theme_name(&self, id: Option<RecordId>) -> String {
        resolve_name(id, self.themes.iter().map(|t| (t.id, t.name.as_str())))
    }

    /// Relationships in display order with names resolved
    pub fn rows(&self) -> Vec<RelationshipRow> {
        self.relationships
            .iter()
            .map(|item| RelationshipRow {
                id: item.id,
                hotel: self.hotel_name(item.id_hotel),
                theme: self.theme_name(item.id_theme),
            })
            .collect()
    }

    /// Plain-text rendering of the form and list, without the status line
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Hotel and Theme Management\n\n");
        out.push_str(&format!("{} Hotel-Theme Relationship\n", self.form.title()));

        let hotel = match self.form.hotel_id() {
            Some(id) => self.hotel_name(Some(id)),
            None => "Select a hotel".to_string(),
        };
        let theme = match self.form.theme_id() {
            Some(id) => self.theme_name(Some(id)),
            None => "Select a theme".to_string(),
        };
        out.push_str(&format!("  Hotel: {}\n", hotel));
        out.push_str(&format!("  Theme: {}\n", theme));

        if self.form.is_editing() {
            out.push_str(&format!("  [{}] [Cancel]\n", self.form.submit_label()));
        } else {
            out.push_str(&format!("  [{}]\n", self.form.submit_label()));
        }

        out.push_str("\nCurrent Hotel-Theme Relationships\n");
        let rows = self.rows();
        if rows.is_empty() {
            out.push_str(EMPTY_LIST_MESSAGE);
            out.push('\n');
        } else {
            for row in rows {
                out.push_str(&format!("  {}\n", row));
            }
        }

        out
    }

    fn invalid(&mut self, message: &str) -> Outcome {
        warn!("{}", message);
        self.status = Some(StatusMessage::new(StatusKind::Warning, message));
        Outcome::Invalid(message.to_string())
    }

    fn failed(&mut self, context: &str, err: &ApiError) -> Outcome {
        error!("{}: {}", context, err);
        let message = format!("{}: {}", context, err.message());
        self.status = Some(StatusMessage::new(StatusKind::Error, message.clone()));
        Outcome::Failed(message)
    }
}

fn take_or_log<T>(result: Result<Vec<T>, ApiError>, what: &str, failures: &mut Vec<String>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            error!("Error fetching {}: {}", what, e);
            failures.push(format!("Error fetching {}: {}", what, e.message()));
            Vec::new()
        }
    }
}

fn resolve_name<'a>(id: Option<RecordId>, mut entries: impl Iterator<Item = (RecordId, &'a str)>) -> String {
    let Some(id) = id else {
        return "(none)".to_string();
    };

    entries
        .find(|(candidate, _)| *candidate == id)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| format!("#{}", id))
}
