use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::event::{
        CreateEventRequest, CreateEventResponse, EventParticipantsResponse, EventResponse,
        JoinEventRequest, JoinEventResponse,
    },
    dto::participant::ParticipantResponse,
};
use validator::Validate;

use crate::error::WebError;
use crate::extract::AppJson;

use super::services;

#[utoipa::path(
    get,
    path = "/events",
    responses(
        (status = 200, description = "List all events, most recently created first", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
pub async fn list_events(State(db): State<Database>) -> Result<Json<Vec<EventResponse>>, WebError> {
    let events = services::list_events(db.pool()).await?;

    let response: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/events/{id}",
    params(
        ("id" = i64, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let event = services::get_event(db.pool(), id).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}

#[utoipa::path(
    post,
    path = "/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created successfully", body = CreateEventResponse),
        (status = 400, description = "Missing or invalid fields")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    AppJson(req): AppJson<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(db.pool(), &req).await?;

    tracing::info!(event_id = event.id, "event created");

    let response = CreateEventResponse {
        message: "Event created successfully".to_string(),
        event: EventResponse::from(event),
    };

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

#[utoipa::path(
    post,
    path = "/events/{id}/join",
    params(
        ("id" = i64, Path, description = "Event id")
    ),
    request_body = JoinEventRequest,
    responses(
        (status = 200, description = "Joined the event", body = JoinEventResponse),
        (status = 400, description = "Missing or invalid player name"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Event is already full")
    ),
    tag = "events"
)]
pub async fn join_event(
    State(db): State<Database>,
    Path(id): Path<i64>,
    payload: Result<AppJson<JoinEventRequest>, WebError>,
) -> Result<Response, WebError> {
    // An unknown event is a 404 no matter what the payload looks like.
    services::get_event(db.pool(), id).await?;

    let AppJson(req) = payload?;
    req.validate()?;

    let event = services::join_event(db.pool(), id, &req).await?;

    tracing::info!(event_id = id, player = %req.player_name, "player joined event");

    let response = JoinEventResponse {
        message: "Joined event successfully".to_string(),
        event: EventResponse::from(event),
    };

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/events/{id}/participants",
    params(
        ("id" = i64, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event with its participants in join order", body = EventParticipantsResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn list_participants(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let (event, participants) = services::list_participants(db.pool(), id).await?;

    let response = EventParticipantsResponse {
        event: EventResponse::from(event),
        participants: participants
            .into_iter()
            .map(ParticipantResponse::from)
            .collect(),
    };

    Ok(Json(response).into_response())
}
