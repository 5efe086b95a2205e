//! HotelThemeClient against the in-process fake backend

mod common;

use anyhow::Result;
use hotel_theme_cli::api::{ApiError, Backend, HotelThemeClient, HotelThemePayload};
use reqwest::StatusCode;

#[tokio::test]
async fn test_lists_reference_collections() -> Result<()> {
    let backend = common::spawn(common::Store::seeded()).await;
    let client = HotelThemeClient::new(&backend.base_url)?;

    let hotels = client.list_hotels().await?;
    let themes = client.list_themes().await?;
    let relationships = client.list_hotel_themes().await?;

    assert_eq!(hotels.len(), 2);
    assert_eq!(hotels[0].name, "Grand Palace");
    assert_eq!(themes.len(), 3);
    assert_eq!(relationships.len(), 2);
    assert_eq!(relationships[1].id_theme, Some(11));
    Ok(())
}

#[tokio::test]
async fn test_themes_by_ids_unwraps_envelope() -> Result<()> {
    let backend = common::spawn(common::Store::seeded()).await;
    let client = HotelThemeClient::new(&backend.base_url)?;

    let themes = client.themes_by_ids(&[10, 12]).await?;

    let names: Vec<&str> = themes.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Beach", "Spa"]);
    assert!(backend.requests().contains(&"GET /api/theme?ids=10,12".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_themes_by_empty_ids_skips_request() -> Result<()> {
    let backend = common::spawn(common::Store::seeded()).await;
    let client = HotelThemeClient::new(&backend.base_url)?;

    assert!(client.themes_by_ids(&[]).await?.is_empty());
    assert!(backend.requests().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_create_update_delete_hit_documented_routes() -> Result<()> {
    let backend = common::spawn(common::Store::seeded()).await;
    let client = HotelThemeClient::new(format!("{}/", backend.base_url))?;

    let created = client.create_hotel_theme(&HotelThemePayload::new(2, 12)).await?;
    assert_eq!(created.id, 3);
    assert_eq!(created.id_hotel, Some(2));

    let updated = client.update_hotel_theme(created.id, &HotelThemePayload::new(1, 12)).await?;
    assert_eq!(updated.id, 3);
    assert_eq!(updated.id_hotel, Some(1));

    client.delete_hotel_theme(created.id).await?;

    assert_eq!(
        backend.write_requests(),
        vec![
            r#"POST /api/hoteltheme {"id_hotel":2,"id_theme":12}"#.to_string(),
            r#"PUT /api/hoteltheme/3 {"id_hotel":1,"id_theme":12}"#.to_string(),
            "DELETE /api/hoteltheme/3".to_string(),
        ]
    );
    assert_eq!(backend.relationships().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_get_single_relationship() -> Result<()> {
    let backend = common::spawn(common::Store::seeded()).await;
    let client = HotelThemeClient::new(&backend.base_url)?;

    let found = client.get_hotel_theme(2).await?;
    assert_eq!(found.id_hotel, Some(2));

    let err = client.get_hotel_theme(42).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.message(), "HotelTheme not found");
    Ok(())
}

#[tokio::test]
async fn test_backend_message_is_surfaced() -> Result<()> {
    let backend = common::spawn(common::Store::seeded()).await;
    let client = HotelThemeClient::new(&backend.base_url)?;

    let err = client.create_hotel_theme(&HotelThemePayload::new(1, 99)).await.unwrap_err();

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(message, "Hotel or Theme not found");
        }
        other => panic!("expected status error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() -> Result<()> {
    let client = HotelThemeClient::new(common::closed_port_url().await)?;

    let err = client.list_hotels().await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
    Ok(())
}
