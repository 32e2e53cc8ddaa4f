use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub sport: String,
    pub location: String,
    pub notes: Option<String>,
    pub max_players: i64,
    pub created_at: chrono::NaiveDateTime,
    pub event_date: Option<chrono::NaiveDateTime>,
}

/// Event row joined with its participant head-count. The count is computed
/// per query; it is never stored on the event itself.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventWithPlayers {
    pub id: i64,
    pub name: String,
    pub sport: String,
    pub location: String,
    pub notes: Option<String>,
    pub max_players: i64,
    pub current_players: i64,
    pub created_at: chrono::NaiveDateTime,
    pub event_date: Option<chrono::NaiveDateTime>,
}
