use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{Result, StorageError};
use crate::models::{Event, Participant};

/// Team label assigned when a join request carries none
const DEFAULT_TEAM: &str = "team_a";

pub struct ParticipantRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List participants of an event in join order. Callers are expected to
    /// have checked that the event exists.
    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT id, event_id, player_name, team, joined_at
            FROM event_participants
            WHERE event_id = ?1
            ORDER BY id
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    /// Add a player to an event, enforcing the capacity bound.
    ///
    /// The existence check, head-count and insert run in one transaction, so
    /// concurrent joins cannot push an event past `max_players`.
    pub async fn join(
        &self,
        event_id: i64,
        player_name: &str,
        team: Option<&str>,
    ) -> Result<Participant> {
        let mut tx = self.pool.begin().await?;

        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, sport, location, notes, max_players, created_at, event_date
            FROM events
            WHERE id = ?1
            "#,
        )
        .bind(event_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        let current_players: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM event_participants WHERE event_id = ?1")
                .bind(event_id)
                .fetch_one(&mut *tx)
                .await?;

        if current_players >= event.max_players {
            return Err(StorageError::EventFull);
        }

        let joined_at = Utc::now().naive_utc();

        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO event_participants (event_id, player_name, team, joined_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, event_id, player_name, team, joined_at
            "#,
        )
        .bind(event_id)
        .bind(player_name)
        .bind(team.unwrap_or(DEFAULT_TEAM))
        .bind(joined_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(participant)
    }
}
