use sqlx::SqlitePool;
use storage::{
    dto::event::{CreateEventRequest, JoinEventRequest},
    error::Result,
    models::{EventWithPlayers, Participant},
    repository::event::EventRepository,
    repository::participant::ParticipantRepository,
};

/// List all events, newest first
pub async fn list_events(pool: &SqlitePool) -> Result<Vec<EventWithPlayers>> {
    let repo = EventRepository::new(pool);
    repo.list().await
}

/// Get a single event by id
pub async fn get_event(pool: &SqlitePool, id: i64) -> Result<EventWithPlayers> {
    let repo = EventRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new event and return it with its (zero) head-count
pub async fn create_event(pool: &SqlitePool, request: &CreateEventRequest) -> Result<EventWithPlayers> {
    let repo = EventRepository::new(pool);
    let event = repo.create(request).await?;
    repo.find_by_id(event.id).await
}

/// Join an event and return the event with its updated head-count
pub async fn join_event(
    pool: &SqlitePool,
    id: i64,
    request: &JoinEventRequest,
) -> Result<EventWithPlayers> {
    let participants = ParticipantRepository::new(pool);
    participants
        .join(id, &request.player_name, request.team.as_deref())
        .await?;

    let events = EventRepository::new(pool);
    events.find_by_id(id).await
}

/// Get an event together with everyone who joined it
pub async fn list_participants(
    pool: &SqlitePool,
    id: i64,
) -> Result<(EventWithPlayers, Vec<Participant>)> {
    let events = EventRepository::new(pool);
    let event = events.find_by_id(id).await?;

    let participants = ParticipantRepository::new(pool)
        .list_for_event(id)
        .await?;

    Ok((event, participants))
}
