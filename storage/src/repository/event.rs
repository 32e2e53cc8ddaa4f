use chrono::Utc;
use sqlx::SqlitePool;

use crate::dto::event::CreateEventRequest;
use crate::error::{Result, StorageError};
use crate::models::{Event, EventWithPlayers};

pub struct EventRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new event with a server-assigned id and creation time
    pub async fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        let created_at = Utc::now().naive_utc();

        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (name, sport, location, notes, max_players, created_at, event_date)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            RETURNING id, name, sport, location, notes, max_players, created_at, event_date
            "#,
        )
        .bind(&req.name)
        .bind(&req.sport)
        .bind(&req.location)
        .bind(&req.notes)
        .bind(req.max_players)
        .bind(created_at)
        .bind(req.event_date)
        .fetch_one(self.pool)
        .await?;

        Ok(event)
    }

    /// List all events, most recently created first, with head-counts.
    /// The id tiebreak keeps same-timestamp events in creation order.
    pub async fn list(&self) -> Result<Vec<EventWithPlayers>> {
        let events = sqlx::query_as::<_, EventWithPlayers>(
            r#"
            SELECT e.id, e.name, e.sport, e.location, e.notes, e.max_players,
                   COUNT(p.id) AS current_players,
                   e.created_at, e.event_date
            FROM events e
            LEFT JOIN event_participants p ON p.event_id = e.id
            GROUP BY e.id
            ORDER BY e.created_at DESC, e.id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// Find a single event by id, with its head-count
    pub async fn find_by_id(&self, id: i64) -> Result<EventWithPlayers> {
        let event = sqlx::query_as::<_, EventWithPlayers>(
            r#"
            SELECT e.id, e.name, e.sport, e.location, e.notes, e.max_players,
                   COUNT(p.id) AS current_players,
                   e.created_at, e.event_date
            FROM events e
            LEFT JOIN event_participants p ON p.event_id = e.id
            WHERE e.id = ?1
            GROUP BY e.id
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }
}
