use serde::{Deserialize, Serialize};

/// Backend record identifier
pub type RecordId = i64;

/// A lodging property, owned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: RecordId,
    pub name: String,
}

/// A categorization tag, owned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: RecordId,
    pub name: String,
}

/// Association between one hotel and one theme
///
/// The backend stores both foreign keys as nullable columns, so either side
/// may come back as `null` for rows written outside this tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelTheme {
    pub id: RecordId,
    #[serde(default)]
    pub id_hotel: Option<RecordId>,
    #[serde(default)]
    pub id_theme: Option<RecordId>,
}

/// Request body for create and update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelThemePayload {
    pub id_hotel: RecordId,
    pub id_theme: RecordId,
}

impl HotelThemePayload {
    pub fn new(id_hotel: RecordId, id_theme: RecordId) -> Self {
        Self { id_hotel, id_theme }
    }
}

/// Envelope returned by `GET api/theme?ids=...`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeList {
    #[serde(default)]
    pub themes: Vec<Theme>,
}

/// Error body shape used by the backend (`{"message": "..."}`)
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}
