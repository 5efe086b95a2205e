//! Endpoint paths and request constants for the hotel-theme backend

/// Path prefix shared by every backend route
pub const API_BASE_PATH: &str = "api";

/// Collection names
pub const HOTEL_COLLECTION: &str = "hotel";
pub const THEME_COLLECTION: &str = "theme";
pub const HOTEL_THEME_COLLECTION: &str = "hoteltheme";

/// Query parameter used to filter themes by id
pub const THEME_IDS_PARAM: &str = "ids";

/// Standard headers for backend requests
pub mod headers {
    /// Content type for JSON requests
    pub const CONTENT_TYPE_JSON: &str = "application/json";
}

/// User agent sent with every request
pub fn user_agent() -> String {
    format!("hotel-theme-cli/{}", env!("CARGO_PKG_VERSION"))
}

/// Ensure the base URL ends with exactly one `/` so paths can be appended
pub fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    format!("{}/", trimmed)
}

/// Build a collection endpoint URL, e.g. `http://host/api/hotel`
pub fn collection_endpoint(base_url: &str, collection: &str) -> String {
    format!("{}{}/{}", normalize_base_url(base_url), API_BASE_PATH, collection)
}

/// Build a record endpoint URL, e.g. `http://host/api/hoteltheme/3`
pub fn record_endpoint(base_url: &str, collection: &str, id: i64) -> String {
    format!("{}/{}", collection_endpoint(base_url, collection), id)
}
