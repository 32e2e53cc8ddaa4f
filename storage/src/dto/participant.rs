use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Participant;

/// Response containing a single participant record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantResponse {
    pub id: i64,
    pub event_id: i64,
    pub player_name: String,
    pub team: Option<String>,
    pub joined_at: NaiveDateTime,
}

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        Self {
            id: participant.id,
            event_id: participant.event_id,
            player_name: participant.player_name,
            team: participant.team,
            joined_at: participant.joined_at,
        }
    }
}
