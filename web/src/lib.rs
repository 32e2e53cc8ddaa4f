use axum::{Json, Router, extract::Query, routing::get};
use serde::Deserialize;
use serde_json::json;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::{IntoParams, OpenApi};

pub mod config;
pub mod error;
pub mod extract;
pub mod features;

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        hello,
        features::events::handlers::list_events,
        features::events::handlers::get_event,
        features::events::handlers::create_event,
        features::events::handlers::join_event,
        features::events::handlers::list_participants,
    ),
    components(
        schemas(
            storage::dto::event::CreateEventRequest,
            storage::dto::event::JoinEventRequest,
            storage::dto::event::EventResponse,
            storage::dto::event::CreateEventResponse,
            storage::dto::event::JoinEventResponse,
            storage::dto::event::EventParticipantsResponse,
            storage::dto::participant::ParticipantResponse,
            storage::models::Event,
            storage::models::EventWithPlayers,
            storage::models::Participant,
        )
    ),
    tags(
        (name = "events", description = "Pickup event endpoints"),
        (name = "system", description = "Health and greeting endpoints"),
    )
)]
pub struct ApiDoc;

#[derive(Debug, Deserialize, IntoParams)]
pub struct HelloParams {
    pub name: Option<String>,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up")
    ),
    tag = "system"
)]
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

#[utoipa::path(
    get,
    path = "/hello",
    params(HelloParams),
    responses(
        (status = 200, description = "Greeting for the given name")
    ),
    tag = "system"
)]
async fn hello(Query(params): Query<HelloParams>) -> Json<serde_json::Value> {
    let name = params.name.unwrap_or_else(|| "world".to_string());
    Json(json!({ "message": format!("Hello, {}!", name) }))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn build_router(db: Database) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/hello", get(hello))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/events", features::events::routes::routes())
        .layer(cors)
        .with_state(db)
}
