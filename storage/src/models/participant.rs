use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Participant {
    pub id: i64,
    pub event_id: i64,
    pub player_name: String,
    pub team: Option<String>,
    pub joined_at: chrono::NaiveDateTime,
}
