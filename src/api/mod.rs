//! Typed client for the hotel-theme REST backend
//!
//! The [`Backend`] trait is the seam between the relationship view and the
//! network: [`HotelThemeClient`] implements it over reqwest, tests implement it
//! in memory.

pub mod client;
pub mod constants;
pub mod error;
pub mod models;

pub use client::HotelThemeClient;
pub use error::ApiError;
pub use models::{Hotel, HotelTheme, HotelThemePayload, RecordId, Theme};

use async_trait::async_trait;

/// Calls made against the hotel-theme backend
#[async_trait]
pub trait Backend: Send + Sync {
    /// `GET api/hotel`
    async fn list_hotels(&self) -> Result<Vec<Hotel>, ApiError>;

    /// `GET api/theme`
    async fn list_themes(&self) -> Result<Vec<Theme>, ApiError>;

    /// `GET api/theme?ids=1,2,3`
    async fn themes_by_ids(&self, ids: &[RecordId]) -> Result<Vec<Theme>, ApiError>;

    /// `GET api/hoteltheme`
    async fn list_hotel_themes(&self) -> Result<Vec<HotelTheme>, ApiError>;

    /// `GET api/hoteltheme/{id}`
    async fn get_hotel_theme(&self, id: RecordId) -> Result<HotelTheme, ApiError>;

    /// `POST api/hoteltheme`
    async fn create_hotel_theme(&self, payload: &HotelThemePayload) -> Result<HotelTheme, ApiError>;

    /// `PUT api/hoteltheme/{id}`
    async fn update_hotel_theme(&self, id: RecordId, payload: &HotelThemePayload) -> Result<HotelTheme, ApiError>;

    /// `DELETE api/hoteltheme/{id}`
    async fn delete_hotel_theme(&self, id: RecordId) -> Result<(), ApiError>;
}
