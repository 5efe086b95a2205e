use super::constants::{self, headers};
use super::error::ApiError;
use super::models::{ErrorBody, Hotel, HotelTheme, HotelThemePayload, RecordId, Theme, ThemeList};
use super::Backend;
use async_trait::async_trait;
use log::{debug, info};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// REST client for the hotel-theme backend with connection pooling
#[derive(Clone)]
pub struct HotelThemeClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl HotelThemeClient {
    /// Build a client without a request timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, None)
    }

    /// Build a client, optionally bounding each request by `timeout`
    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(constants::user_agent());

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder.build().map_err(ApiError::Transport)?;
        Self::with_custom_client(base_url, http_client)
    }

    /// Create a new client with custom HTTP client configuration
    pub fn with_custom_client(base_url: impl Into<String>, http_client: reqwest::Client) -> Result<Self, ApiError> {
        let base_url = constants::normalize_base_url(&base_url.into());
        Self::validate_base_url(&base_url)?;
        Ok(Self { base_url, http_client })
    }

    /// Only absolute http(s) URLs with a host can carry the API routes
    fn validate_base_url(base_url: &str) -> Result<(), ApiError> {
        let url = reqwest::Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("'{}': {}", base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "'{}' has unsupported scheme '{}', expected http or https",
                base_url,
                url.scheme()
            )));
        }

        if url.host_str().is_none() {
            return Err(ApiError::InvalidUrl(format!("'{}' has no host", base_url)));
        }

        Ok(())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!("GET {}", url);
        let response = self
            .http_client
            .get(url)
            .header("Accept", headers::CONTENT_TYPE_JSON)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Decode a success body, or turn a failure status into `ApiError::Status`
    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn error_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message)
            .or_else(|| {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

        ApiError::Status { status, message }
    }
}

#[async_trait]
impl Backend for HotelThemeClient {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, ApiError> {
        let url = constants::collection_endpoint(&self.base_url, constants::HOTEL_COLLECTION);
        self.get_json(&url).await
    }

    async fn list_themes(&self) -> Result<Vec<Theme>, ApiError> {
        let url = constants::collection_endpoint(&self.base_url, constants::THEME_COLLECTION);
        self.get_json(&url).await
    }

    async fn themes_by_ids(&self, ids: &[RecordId]) -> Result<Vec<Theme>, ApiError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let url = constants::collection_endpoint(&self.base_url, constants::THEME_COLLECTION);
        let joined = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",");
        debug!("GET {}?{}={}", url, constants::THEME_IDS_PARAM, joined);

        let response = self
            .http_client
            .get(&url)
            .header("Accept", headers::CONTENT_TYPE_JSON)
            .query(&[(constants::THEME_IDS_PARAM, joined)])
            .send()
            .await?;

        let list: ThemeList = Self::parse_response(response).await?;
        Ok(list.themes)
    }

    async fn list_hotel_themes(&self) -> Result<Vec<HotelTheme>, ApiError> {
        let url = constants::collection_endpoint(&self.base_url, constants::HOTEL_THEME_COLLECTION);
        self.get_json(&url).await
    }

    async fn get_hotel_theme(&self, id: RecordId) -> Result<HotelTheme, ApiError> {
        let url = constants::record_endpoint(&self.base_url, constants::HOTEL_THEME_COLLECTION, id);
        self.get_json(&url).await
    }

    async fn create_hotel_theme(&self, payload: &HotelThemePayload) -> Result<HotelTheme, ApiError> {
        let url = constants::collection_endpoint(&self.base_url, constants::HOTEL_THEME_COLLECTION);
        info!("POST {} hotel={} theme={}", url, payload.id_hotel, payload.id_theme);

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", headers::CONTENT_TYPE_JSON)
            .json(payload)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn update_hotel_theme(&self, id: RecordId, payload: &HotelThemePayload) -> Result<HotelTheme, ApiError> {
        let url = constants::record_endpoint(&self.base_url, constants::HOTEL_THEME_COLLECTION, id);
        info!("PUT {} hotel={} theme={}", url, payload.id_hotel, payload.id_theme);

        let response = self
            .http_client
            .put(&url)
            .header("Content-Type", headers::CONTENT_TYPE_JSON)
            .json(payload)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn delete_hotel_theme(&self, id: RecordId) -> Result<(), ApiError> {
        let url = constants::record_endpoint(&self.base_url, constants::HOTEL_THEME_COLLECTION, id);
        info!("DELETE {}", url);

        let response = self.http_client.delete(&url).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }
}
