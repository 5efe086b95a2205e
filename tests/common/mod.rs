//! In-process fake of the hotel-theme backend
//!
//! Mirrors the backend's routes and status codes closely enough to exercise
//! the client and the view over real HTTP.

#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use hotel_theme_cli::api::{Hotel, HotelTheme, Theme};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
pub struct Store {
    pub hotels: Vec<Hotel>,
    pub themes: Vec<Theme>,
    pub relationships: Vec<HotelTheme>,
    /// `METHOD path` of every request received
    pub requests: Vec<String>,
    /// Answer `GET api/hotel` with a 500
    pub fail_hotels: bool,
}

impl Store {
    pub fn seeded() -> Self {
        Self {
            hotels: vec![
                Hotel { id: 1, name: "Grand Palace".into() },
                Hotel { id: 2, name: "Sea View".into() },
            ],
            themes: vec![
                Theme { id: 10, name: "Beach".into() },
                Theme { id: 11, name: "Mountain".into() },
                Theme { id: 12, name: "Spa".into() },
            ],
            relationships: vec![
                HotelTheme { id: 1, id_hotel: Some(1), id_theme: Some(10) },
                HotelTheme { id: 2, id_hotel: Some(2), id_theme: Some(11) },
            ],
            ..Default::default()
        }
    }
}

pub type SharedStore = Arc<Mutex<Store>>;

pub struct FakeBackend {
    pub base_url: String,
    pub store: SharedStore,
}

impl FakeBackend {
    pub fn requests(&self) -> Vec<String> {
        self.store.lock().unwrap().requests.clone()
    }

    pub fn write_requests(&self) -> Vec<String> {
        self.requests().into_iter().filter(|r| !r.starts_with("GET")).collect()
    }

    pub fn relationships(&self) -> Vec<HotelTheme> {
        self.store.lock().unwrap().relationships.clone()
    }
}

/// Bind an ephemeral port and serve the fake backend on it
pub async fn spawn(store: Store) -> FakeBackend {
    let store: SharedStore = Arc::new(Mutex::new(store));

    let app = Router::new()
        .route("/api/hotel", get(list_hotels))
        .route("/api/theme", get(list_themes))
        .route("/api/hoteltheme", get(list_relationships).post(create_relationship))
        .route(
            "/api/hoteltheme/{id}",
            get(get_relationship).put(update_relationship).delete(delete_relationship),
        )
        .with_state(store.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeBackend {
        base_url: format!("http://{}", addr),
        store,
    }
}

/// A base URL nothing is listening on
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

type Reply = (StatusCode, Json<Value>);

fn message(status: StatusCode, text: &str) -> Reply {
    (status, Json(json!({ "message": text })))
}

fn record(store: &mut Store, line: String) {
    store.requests.push(line);
}

async fn list_hotels(State(store): State<SharedStore>) -> Reply {
    let mut store = store.lock().unwrap();
    record(&mut store, "GET /api/hotel".into());
    if store.fail_hotels {
        return message(StatusCode::INTERNAL_SERVER_ERROR, "database unavailable");
    }
    (StatusCode::OK, Json(json!(store.hotels)))
}

async fn list_themes(State(store): State<SharedStore>, Query(params): Query<HashMap<String, String>>) -> Reply {
    let mut store = store.lock().unwrap();
    match params.get("ids") {
        Some(ids) => {
            record(&mut store, format!("GET /api/theme?ids={}", ids));
            let wanted: Vec<i64> = ids.split(',').filter_map(|id| id.trim().parse().ok()).collect();
            let themes: Vec<&Theme> = store.themes.iter().filter(|t| wanted.contains(&t.id)).collect();
            (StatusCode::OK, Json(json!({ "themes": themes })))
        }
        None => {
            record(&mut store, "GET /api/theme".into());
            (StatusCode::OK, Json(json!(store.themes)))
        }
    }
}

async fn list_relationships(State(store): State<SharedStore>) -> Reply {
    let mut store = store.lock().unwrap();
    record(&mut store, "GET /api/hoteltheme".into());
    (StatusCode::OK, Json(json!(store.relationships)))
}

async fn get_relationship(State(store): State<SharedStore>, Path(id): Path<i64>) -> Reply {
    let mut store = store.lock().unwrap();
    record(&mut store, format!("GET /api/hoteltheme/{}", id));
    match store.relationships.iter().find(|r| r.id == id) {
        Some(found) => (StatusCode::OK, Json(json!(found))),
        None => message(StatusCode::NOT_FOUND, "HotelTheme not found"),
    }
}

fn references_exist(store: &Store, id_hotel: i64, id_theme: i64) -> bool {
    store.hotels.iter().any(|h| h.id == id_hotel) && store.themes.iter().any(|t| t.id == id_theme)
}

async fn create_relationship(State(store): State<SharedStore>, Json(body): Json<Value>) -> Reply {
    let mut store = store.lock().unwrap();
    record(&mut store, format!("POST /api/hoteltheme {}", body));

    let (Some(id_hotel), Some(id_theme)) = (body["id_hotel"].as_i64(), body["id_theme"].as_i64()) else {
        return message(StatusCode::BAD_REQUEST, "id_hotel and id_theme are required");
    };
    if !references_exist(&store, id_hotel, id_theme) {
        return message(StatusCode::NOT_FOUND, "Hotel or Theme not found");
    }

    let id = store.relationships.iter().map(|r| r.id).max().unwrap_or(0) + 1;
    let created = HotelTheme { id, id_hotel: Some(id_hotel), id_theme: Some(id_theme) };
    store.relationships.push(created.clone());
    (StatusCode::CREATED, Json(json!(created)))
}

async fn update_relationship(
    State(store): State<SharedStore>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Reply {
    let mut store = store.lock().unwrap();
    record(&mut store, format!("PUT /api/hoteltheme/{} {}", id, body));

    let Some(index) = store.relationships.iter().position(|r| r.id == id) else {
        return message(StatusCode::NOT_FOUND, "HotelTheme not found");
    };
    let current = store.relationships[index].clone();
    let id_hotel = body["id_hotel"].as_i64().or(current.id_hotel).unwrap_or_default();
    let id_theme = body["id_theme"].as_i64().or(current.id_theme).unwrap_or_default();
    if !references_exist(&store, id_hotel, id_theme) {
        return message(StatusCode::NOT_FOUND, "Hotel or Theme not found");
    }

    let updated = HotelTheme { id, id_hotel: Some(id_hotel), id_theme: Some(id_theme) };
    store.relationships[index] = updated.clone();
    (StatusCode::OK, Json(json!(updated)))
}

async fn delete_relationship(State(store): State<SharedStore>, Path(id): Path<i64>) -> Reply {
    let mut store = store.lock().unwrap();
    record(&mut store, format!("DELETE /api/hoteltheme/{}", id));

    let before = store.relationships.len();
    store.relationships.retain(|r| r.id != id);
    if store.relationships.len() == before {
        return message(StatusCode::NOT_FOUND, "HotelTheme not found");
    }
    message(StatusCode::OK, "HotelTheme deleted")
}
