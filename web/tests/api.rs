use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use storage::Database;
use storage::dto::event::EventResponse;
use tower::ServiceExt;

async fn app() -> Router {
    let db = Database::in_memory().await.expect("in-memory database");
    db.run_migrations().await.expect("migrations");
    web::build_router(db)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

fn event_body(name: &str, max_players: i64) -> Value {
    json!({
        "name": name,
        "sport": "football",
        "location": "https://maps.example.com/pitch-1",
        "max_players": max_players,
    })
}

#[tokio::test]
async fn health_returns_ok() {
    let app = app().await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn hello_greets_by_name() {
    let app = app().await;

    let (status, body) = get(&app, "/hello").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello, world!");

    let (_, body) = get(&app, "/hello?name=Ada").await;
    assert_eq!(body["message"], "Hello, Ada!");
}

#[tokio::test]
async fn create_event_returns_created_event() {
    let app = app().await;

    let (status, body) = post(&app, "/events", event_body("Sunday kickabout", 10)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Event created successfully");

    let event = &body["event"];
    assert_eq!(event["name"], "Sunday kickabout");
    assert_eq!(event["sport"], "football");
    assert_eq!(event["max_players"], 10);
    assert_eq!(event["current_players"], 0);
    assert_eq!(event["notes"], Value::Null);
    assert!(event["created_at"].is_string());

    // The new event must be retrievable.
    let uri = format!("/events/{}", event["id"]);
    let (status, fetched) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], event["id"]);
    assert_eq!(fetched["current_players"], 0);
}

#[tokio::test]
async fn create_event_missing_field_is_rejected() {
    let app = app().await;

    for field in ["name", "sport", "location", "max_players"] {
        let mut body = event_body("Incomplete", 10);
        body.as_object_mut().unwrap().remove(field);

        let (status, body) = post(&app, "/events", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field}");
        assert!(body["error"].is_string());
    }

    // Nothing may have been persisted along the way.
    let (_, events) = get(&app, "/events").await;
    assert_eq!(events, json!([]));
}

#[tokio::test]
async fn create_event_rejects_zero_capacity() {
    let app = app().await;

    let (status, body) = post(&app, "/events", event_body("No room", 0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn create_event_rejects_malformed_event_date() {
    let app = app().await;

    let mut body = event_body("Bad date", 10);
    body["event_date"] = json!("next tuesday-ish");

    let (status, body) = post(&app, "/events", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn create_event_accepts_optional_fields() {
    let app = app().await;

    let mut body = event_body("Full payload", 8);
    body["notes"] = json!("bring water");
    body["event_date"] = json!("2025-09-20T18:00:00");

    let (status, body) = post(&app, "/events", body).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["event"]["notes"], "bring water");
    assert_eq!(body["event"]["event_date"], "2025-09-20T18:00:00");
}

#[tokio::test]
async fn list_events_newest_first() {
    let app = app().await;

    let (_, first) = post(&app, "/events", event_body("First", 5)).await;
    let (_, second) = post(&app, "/events", event_body("Second", 5)).await;

    let (status, events) = get(&app, "/events").await;
    assert_eq!(status, StatusCode::OK);

    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["id"], second["event"]["id"]);
    assert_eq!(events[1]["id"], first["event"]["id"]);
}

#[tokio::test]
async fn get_unknown_event_returns_404() {
    let app = app().await;

    let (status, body) = get(&app, "/events/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn join_unknown_event_returns_404_regardless_of_payload() {
    let app = app().await;

    let (status, _) = post(&app, "/events/999/join", json!({ "player_name": "alice" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Even a payload with no player_name must not mask the missing event.
    let (status, _) = post(&app, "/events/999/join", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn join_requires_player_name() {
    let app = app().await;

    let (_, created) = post(&app, "/events", event_body("Join me", 5)).await;
    let uri = format!("/events/{}/join", created["event"]["id"]);

    let (status, body) = post(&app, &uri, json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = post(&app, &uri, json!({ "player_name": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn join_event_until_full() {
    let app = app().await;

    let (_, created) = post(&app, "/events", event_body("Singles", 1)).await;
    let uri = format!("/events/{}/join", created["event"]["id"]);

    let (status, body) = post(&app, &uri, json!({ "player_name": "alice" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Joined event successfully");
    assert_eq!(body["event"]["current_players"], 1);

    let (status, body) = post(&app, &uri, json!({ "player_name": "bob" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Event is full");

    // The rejected join must not change the head-count.
    let event_uri = format!("/events/{}", created["event"]["id"]);
    let (_, event) = get(&app, &event_uri).await;
    assert_eq!(event["current_players"], 1);
}

#[tokio::test]
async fn join_assigns_default_team() {
    let app = app().await;

    let (_, created) = post(&app, "/events", event_body("Teams", 6)).await;
    let id = created["event"]["id"].clone();

    let join_uri = format!("/events/{}/join", id);
    post(&app, &join_uri, json!({ "player_name": "alice" })).await;
    post(&app, &join_uri, json!({ "player_name": "bob", "team": "team_b" })).await;

    let (_, body) = get(&app, &format!("/events/{}/participants", id)).await;
    let participants = body["participants"].as_array().unwrap();
    assert_eq!(participants[0]["player_name"], "alice");
    assert_eq!(participants[0]["team"], "team_a");
    assert_eq!(participants[1]["team"], "team_b");
}

#[tokio::test]
async fn participants_empty_for_new_event() {
    let app = app().await;

    let (_, created) = post(&app, "/events", event_body("Lonely", 5)).await;
    let uri = format!("/events/{}/participants", created["event"]["id"]);

    let (status, body) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["participants"], json!([]));
    assert_eq!(body["event"]["id"], created["event"]["id"]);
}

#[tokio::test]
async fn participants_unknown_event_returns_404() {
    let app = app().await;

    let (status, body) = get(&app, "/events/999/participants").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn event_json_round_trips() {
    let app = app().await;

    let mut body = event_body("Round trip", 12);
    body["notes"] = json!("north entrance");
    body["event_date"] = json!("2025-10-05T09:30:00");

    let (_, created) = post(&app, "/events", body).await;
    let uri = format!("/events/{}", created["event"]["id"]);
    let (_, fetched) = get(&app, &uri).await;

    let parsed: EventResponse = serde_json::from_value(fetched.clone()).unwrap();
    assert_eq!(serde_json::to_value(&parsed).unwrap(), fetched);
}
