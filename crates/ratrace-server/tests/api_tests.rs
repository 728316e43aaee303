//! Integration tests for the Ratrace API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use ratrace_server::router::build_router;
use ratrace_server::state::AppState;
use ratrace_types::PlayerState;

fn make_app() -> Arc<AppState> {
    Arc::new(AppState::in_memory())
}

/// Seed a player document directly into the store.
fn seed(app: &AppState, player: &str, state: &PlayerState) {
    app.store.save(player, state).unwrap();
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn get_as(uri: &str, player: &str) -> Request<Body> {
    Request::get(uri)
        .header("x-player-id", player)
        .body(Body::empty())
        .unwrap()
}

fn post_as(uri: &str, player: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header("x-player-id", player)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// =========================================================================
// Status page and state document
// =========================================================================

#[tokio::test]
async fn test_index_returns_html() {
    let router = build_router(make_app());

    let response = router.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_game_state_creates_a_fresh_player() {
    let app = make_app();
    let router = build_router(app.clone());

    let response = router
        .oneshot(get_as("/api/game_state", "ada"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["state"]["money"], 100);
    assert_eq!(json["state"]["turn"], 1);
    assert_eq!(json["state"]["current_job"], "Unemployed");
    assert_eq!(json["state"]["look_label"], "Shabby");
    assert_eq!(json["state"]["time_remaining"], 1440);

    // The fresh player is persisted.
    assert_eq!(app.store.players().unwrap(), vec!["ada".to_owned()]);
}

#[tokio::test]
async fn test_players_are_isolated_by_header() {
    let app = make_app();

    let mut rich = PlayerState::new();
    rich.money = 9000;
    seed(&app, "rich", &rich);

    let router = build_router(app.clone());
    let response = router
        .clone()
        .oneshot(get_as("/api/game_state", "rich"))
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["state"]["money"], 9000);

    let response = router
        .oneshot(get_as("/api/game_state", "poor"))
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["state"]["money"], 100);
}

#[tokio::test]
async fn test_state_round_trip_is_identical() {
    let app = make_app();

    let mut original = PlayerState::new();
    original.money = 321;
    original.completed_courses.insert("high_school".to_owned());
    original.items.push("Formal Suit".to_owned());
    seed(&app, "ada", &original);

    let loaded = app.store.load("ada").unwrap().unwrap();
    // The look is recomputed on API load, but the stored document is
    // byte-for-byte what was saved.
    assert_eq!(loaded, original);
}

// =========================================================================
// Time info
// =========================================================================

#[tokio::test]
async fn test_time_info_for_a_fresh_day() {
    let router = build_router(make_app());

    let response = router
        .oneshot(get_as("/api/time_info/shop", "ada"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["travel_time"], 60);
    assert_eq!(json["action_time"], 120);
    assert_eq!(json["total_time"], 180);
    assert_eq!(json["has_enough_time"], true);
    assert_eq!(json["current_time"], "06:00");
    assert_eq!(json["arrival_time"], "07:00");
    assert_eq!(json["finish_time"], "09:00");
}

#[tokio::test]
async fn test_time_info_rejects_unknown_locations() {
    let router = build_router(make_app());

    let response = router
        .oneshot(get_as("/api/time_info/casino", "ada"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =========================================================================
// Generic actions
// =========================================================================

#[tokio::test]
async fn test_working_unemployed_fails_without_persisting() {
    let app = make_app();
    let router = build_router(app.clone());

    let response = router
        .oneshot(post_as("/api/action", "ada", &json!({"action": "workplace"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "You need to get a job first!");

    // The failed attempt was not persisted: the day is untouched.
    let saved = app.store.load("ada").unwrap().unwrap();
    assert_eq!(saved.time_remaining, 1440);
}

#[tokio::test]
async fn test_resting_at_home_spends_time() {
    let app = make_app();

    let mut state = PlayerState::new();
    state.tiredness = 30;
    seed(&app, "ada", &state);

    let router = build_router(app.clone());
    let response = router
        .oneshot(post_as("/api/action", "ada", &json!({"action": "home"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["burnout"], false);
    assert_eq!(json["state"]["tiredness"], 26);
    assert_eq!(json["state"]["time_remaining"], 1260);
    assert!(json["message"].as_str().unwrap().contains("2h"));
}

#[tokio::test]
async fn test_unknown_action_is_rejected() {
    let router = build_router(make_app());

    let response = router
        .oneshot(post_as("/api/action", "ada", &json!({"action": "casino"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("Invalid action"));
}

#[tokio::test]
async fn test_burnout_resets_the_player() {
    let app = make_app();

    let mut state = PlayerState::new();
    state.tiredness = 95;
    state.hunger = 95;
    state.money = 500;
    state.turn = 6;
    seed(&app, "ada", &state);

    let router = build_router(app.clone());
    let response = router
        .oneshot(post_as("/api/action", "ada", &json!({"action": "home"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["burnout"], true);
    assert_eq!(json["message"], "BURNOUT");
    assert_eq!(json["state"]["money"], 100);
    assert_eq!(json["state"]["tiredness"], 0);
    // The day counter survives the reset.
    assert_eq!(json["state"]["turn"], 6);
}

// =========================================================================
// Pass time
// =========================================================================

#[tokio::test]
async fn test_pass_time_starts_the_next_day() {
    let app = make_app();
    let router = build_router(app.clone());

    let response = router
        .oneshot(post_as("/api/pass_time", "ada", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["state"]["turn"], 2);
    assert_eq!(json["state"]["time_remaining"], 1440);
    assert_eq!(json["state"]["hunger"], 25);
    assert_eq!(json["turn_summary"]["turn"], 2);
    assert!(json["message"].as_str().unwrap().contains("day ended"));
}

#[tokio::test]
async fn test_rent_is_charged_overnight() {
    let app = make_app();

    let mut state = PlayerState::new();
    state.flat_tier = 3;
    state.rent = 50;
    seed(&app, "ada", &state);

    let router = build_router(app.clone());
    let response = router
        .oneshot(post_as("/api/pass_time", "ada", &json!({})))
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["state"]["money"], 50);
    assert_eq!(json["turn_summary"]["rent_charged"], 50);
}

// =========================================================================
// Catalogues
// =========================================================================

#[tokio::test]
async fn test_shop_catalogue_lists_the_food_range() {
    let router = build_router(make_app());

    let response = router.oneshot(get("/api/shop/catalogue")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 15);
    assert!(items.iter().any(|item| item["name"] == "Pizza"));
}

#[tokio::test]
async fn test_estate_catalogue_lists_six_tiers() {
    let router = build_router(make_app());

    let response = router
        .oneshot(get("/api/estate_agent/catalogue"))
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    let flats = json["flats"].as_array().unwrap();
    assert_eq!(flats.len(), 6);
    assert_eq!(flats[0]["rent"], 0);
    assert_eq!(flats[5]["name"], "Luxury Penthouse");
}

#[tokio::test]
async fn test_university_catalogue_reports_enrollment() {
    let app = make_app();

    let mut state = PlayerState::new();
    state.enrolled_course = Some("middle_school".to_owned());
    state.lectures_completed = 2;
    seed(&app, "ada", &state);

    let router = build_router(app.clone());
    let response = router
        .oneshot(get_as("/api/university/catalogue", "ada"))
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["enrolled_course"]["id"], "middle_school");
    assert_eq!(json["enrolled_course"]["lectures_completed"], 2);
    assert_eq!(json["enrolled_course"]["lectures_required"], 5);
    assert_eq!(json["courses"].as_array().unwrap().len(), 11);
}

#[tokio::test]
async fn test_job_listing_flags_eligibility() {
    let router = build_router(make_app());

    let response = router
        .oneshot(get_as("/api/job_office/jobs", "ada"))
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["current_job"], "Unemployed");
    let jobs = json["jobs"].as_array().unwrap();
    let janitor = jobs.iter().find(|job| job["title"] == "Janitor").unwrap();
    assert_eq!(janitor["eligible"], true);
    let executive = jobs.iter().find(|job| job["title"] == "Executive").unwrap();
    assert_eq!(executive["eligible"], false);
}

// =========================================================================
// Purchases and rentals
// =========================================================================

#[tokio::test]
async fn test_food_purchase_reduces_hunger() {
    let app = make_app();

    let mut state = PlayerState::new();
    state.hunger = 60;
    seed(&app, "ada", &state);

    let router = build_router(app.clone());
    let response = router
        .oneshot(post_as(
            "/api/shop/purchase",
            "ada",
            &json!({"item_name": "Bread"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["state"]["hunger"], 34);
    assert_eq!(json["state"]["money"], 95);
    // Food is consumed, never inventoried.
    assert!(json["state"]["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_food_is_a_bad_request() {
    let router = build_router(make_app());

    let response = router
        .oneshot(post_as(
            "/api/shop/purchase",
            "ada",
            &json!({"item_name": "Ambrosia"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "Item not found!");
}

#[tokio::test]
async fn test_clothing_purchase_updates_the_look() {
    let app = make_app();

    let mut state = PlayerState::new();
    state.money = 500;
    seed(&app, "ada", &state);

    let router = build_router(app.clone());
    let response = router
        .oneshot(post_as(
            "/api/john_lewis/purchase",
            "ada",
            &json!({"item_name": "Formal Suit"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["state"]["look"], 2);
    assert_eq!(json["state"]["look_label"], "Scruffy");
    assert_eq!(json["state"]["happiness"], 60);
    assert_eq!(json["state"]["items"][0], "Formal Suit");
}

#[tokio::test]
async fn test_renting_a_flat_sets_the_rent() {
    let app = make_app();
    let router = build_router(app.clone());

    let response = router
        .clone()
        .oneshot(post_as("/api/estate_agent/rent", "ada", &json!({"tier": 3})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["state"]["flat_tier"], 3);
    assert_eq!(json["state"]["rent"], 50);

    // Renting the same tier again fails.
    let response = router
        .oneshot(post_as("/api/estate_agent/rent", "ada", &json!({"tier": 3})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("already renting"));
}

#[tokio::test]
async fn test_becoming_homeless_twice_fails() {
    let router = build_router(make_app());

    let response = router
        .oneshot(post_as("/api/estate_agent/rent", "ada", &json!({"tier": 0})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "You're already homeless!");
}

#[tokio::test]
async fn test_enrollment_and_application_flow() {
    let app = make_app();
    let router = build_router(app.clone());

    let response = router
        .clone()
        .oneshot(post_as(
            "/api/university/enroll",
            "ada",
            &json!({"course_id": "middle_school"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["state"]["enrolled_course"], "middle_school");

    // A PhD application is blocked by education, with the course named.
    let response = router
        .oneshot(post_as(
            "/api/job_office/apply",
            "ada",
            &json!({"job_title": "University Lecturer"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("PhD"));
}

// =========================================================================
// Chat
// =========================================================================

#[tokio::test]
async fn test_chat_without_a_backend_is_unavailable() {
    let router = build_router(make_app());

    let response = router
        .oneshot(post_as(
            "/api/chat",
            "ada",
            &json!({"action": "shop", "message": "what's fresh today?"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_chat_requires_action_and_message() {
    let router = build_router(make_app());

    let response = router
        .oneshot(post_as(
            "/api/chat",
            "ada",
            &json!({"action": "", "message": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
