use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::participant::ParticipantResponse;
use crate::models::EventWithPlayers;

/// Request payload for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 50,
        message = "Sport must be between 1 and 50 characters"
    ))]
    pub sport: String,

    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    pub notes: Option<String>,

    #[validate(range(min = 1, message = "max_players must be a positive integer"))]
    pub max_players: i64,

    pub event_date: Option<NaiveDateTime>,
}

/// Request payload for joining an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct JoinEventRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Player name must be between 1 and 100 characters"
    ))]
    pub player_name: String,

    #[validate(length(max = 20, message = "Team label must be at most 20 characters"))]
    pub team: Option<String>,
}

/// Response containing event details and the current head-count
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub id: i64,
    pub name: String,
    pub sport: String,
    pub location: String,
    pub notes: Option<String>,
    pub max_players: i64,
    pub current_players: i64,
    pub created_at: NaiveDateTime,
    pub event_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEventResponse {
    pub message: String,
    pub event: EventResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JoinEventResponse {
    pub message: String,
    pub event: EventResponse,
}

/// An event together with everyone who joined it, in join order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventParticipantsResponse {
    pub event: EventResponse,
    pub participants: Vec<ParticipantResponse>,
}

impl From<EventWithPlayers> for EventResponse {
    fn from(event: EventWithPlayers) -> Self {
        Self {
            id: event.id,
            name: event.name,
            sport: event.sport,
            location: event.location,
            notes: event.notes,
            max_players: event.max_players,
            current_players: event.current_players,
            created_at: event.created_at,
            event_date: event.event_date,
        }
    }
}
