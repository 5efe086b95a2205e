//! Two-state form backing the relationship view

use crate::api::{HotelTheme, HotelThemePayload, RecordId};

/// Whether a submit creates a new relationship or updates an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit { id: RecordId },
}

/// Bound select inputs plus the current mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipForm {
    hotel_id: Option<RecordId>,
    theme_id: Option<RecordId>,
    mode: FormMode,
}

impl RelationshipForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hotel_id(&self) -> Option<RecordId> {
        self.hotel_id
    }

    pub fn theme_id(&self) -> Option<RecordId> {
        self.theme_id
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Id of the record being edited, if any
    pub fn editing_id(&self) -> Option<RecordId> {
        match self.mode {
            FormMode::Create => None,
            FormMode::Edit { id } => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn set_hotel(&mut self, hotel_id: Option<RecordId>) {
        self.hotel_id = hotel_id;
    }

    pub fn set_theme(&mut self, theme_id: Option<RecordId>) {
        self.theme_id = theme_id;
    }

    /// Load an existing record into the fields and switch to edit mode
    pub fn begin_edit(&mut self, record: &HotelTheme) {
        self.hotel_id = record.id_hotel;
        self.theme_id = record.id_theme;
        self.mode = FormMode::Edit { id: record.id };
    }

    /// Clear both fields and return to create mode
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Request body for the current selection, `None` unless both are set
    pub fn payload(&self) -> Option<HotelThemePayload> {
        Some(HotelThemePayload::new(self.hotel_id?, self.theme_id?))
    }

    /// Card title, "Create" or "Edit"
    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create",
            FormMode::Edit { .. } => "Edit",
        }
    }

    /// Submit button label
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Create Relationship",
            FormMode::Edit { .. } => "Update Relationship",
        }
    }
}
