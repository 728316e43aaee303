//! REST API endpoint handlers.
//!
//! Handlers load the caller's state from the store, run it through the
//! engine, save it back, and return the UI-facing document. A failed
//! action returns HTTP 400 with the rule's message and does not persist
//! the attempt.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/game_state` | Load-or-create the player document |
//! | `GET` | `/api/time_info/{location}` | Time cost of visiting a location |
//! | `POST` | `/api/action` | Generic location visit |
//! | `POST` | `/api/pass_time` | Fast-forward to the next day |
//! | `GET/POST` | `/api/shop/...` | Food catalogue + purchase |
//! | `GET/POST` | `/api/john_lewis/...` | Store catalogue + purchase |
//! | `GET/POST` | `/api/estate_agent/...` | Flat catalogue + rental |
//! | `GET/POST` | `/api/university/...` | Course catalogue + enrollment |
//! | `GET/POST` | `/api/job_office/...` | Job listing + application |
//! | `POST` | `/api/chat` | NPC chat with tool calling |

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde_json::{json, Value};

use ratrace_catalog::{clothing, courses, flats, food, jobs};
use ratrace_engine::locations::{estate_agent, job_office, john_lewis, shop, university};
use ratrace_engine::{clock, endgame, locations, migrate, validation};
use ratrace_types::{Location, PlayerState, RuleOutcome, VisitOutcome};

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the caller's player id. Auth lives outside this
/// server; the header stands in for the session collaborator.
const PLAYER_HEADER: &str = "x-player-id";

/// Fallback player id when the header is absent.
const DEFAULT_PLAYER: &str = "default";

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body of `POST /api/action`.
#[derive(Debug, serde::Deserialize)]
pub struct ActionRequest {
    /// The location to visit.
    pub action: String,
}

/// Body of the purchase endpoints.
#[derive(Debug, serde::Deserialize)]
pub struct PurchaseRequest {
    /// Name of the item to purchase.
    pub item_name: String,
}

/// Body of `POST /api/estate_agent/rent`.
#[derive(Debug, serde::Deserialize)]
pub struct RentFlatRequest {
    /// Flat tier to rent (0-5).
    pub tier: u8,
}

/// Body of `POST /api/university/enroll`.
#[derive(Debug, serde::Deserialize)]
pub struct EnrollCourseRequest {
    /// Id of the course to enroll in.
    pub course_id: String,
}

/// Body of `POST /api/job_office/apply`.
#[derive(Debug, serde::Deserialize)]
pub struct ApplyJobRequest {
    /// Title of the job to apply for.
    pub job_title: String,
}

/// Body of `POST /api/chat`.
#[derive(Debug, serde::Deserialize)]
pub struct ChatRequest {
    /// The location whose NPC to talk to.
    pub action: String,
    /// The player's message.
    pub message: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the caller's player id from the request headers.
fn player_id(headers: &HeaderMap) -> String {
    headers
        .get(PLAYER_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_PLAYER)
        .to_owned()
}

/// Parse a location identifier, mapping failures to HTTP 400.
fn parse_location(raw: &str) -> Result<Location, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::InvalidRequest(format!("Invalid action: {raw}")))
}

/// Load a player's state, creating and saving a fresh one on first
/// contact. Loaded documents are upgraded in place.
fn load_or_create(app: &AppState, player: &str) -> Result<PlayerState, ApiError> {
    if let Some(mut state) = app.store.load(player)? {
        migrate::upgrade_state(&mut state);
        return Ok(state);
    }
    let state = endgame::new_player(&app.game);
    app.store.save(player, &state)?;
    Ok(state)
}

/// The standard success payload for a validated visit.
fn visit_response(state: &PlayerState, outcome: &VisitOutcome) -> Json<Value> {
    Json(json!({
        "success": true,
        "state": state.to_document(),
        "message": outcome.message,
        "burnout": outcome.burnout,
        "bankruptcy": outcome.bankruptcy,
        "turn_summary": outcome.turn_summary,
    }))
}

/// Run one validated visit for the calling player and persist the result.
///
/// A rejected visit (closed, out of time, or a failed rule) returns
/// [`ApiError::ActionFailed`] and leaves the stored state untouched.
fn run_visit(
    app: &AppState,
    headers: &HeaderMap,
    location: Location,
    options: validation::VisitOptions,
    rule: impl FnOnce(&mut PlayerState) -> RuleOutcome,
    post: Option<fn(&mut PlayerState)>,
) -> Result<(PlayerState, VisitOutcome), ApiError> {
    let player = player_id(headers);
    let mut state = load_or_create(app, &player)?;

    let outcome =
        validation::execute_with_validation(&mut state, &app.game, location, options, rule, post);

    if !outcome.success {
        return Err(ApiError::ActionFailed(outcome.message));
    }

    app.store.save(&player, &state)?;
    Ok((state, outcome))
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing server status and API links.
pub async fn index(State(app): State<Arc<AppState>>) -> impl IntoResponse {
    let players = app.store.players().map(|p| p.len()).unwrap_or_default();
    let uptime_minutes = (chrono::Utc::now() - app.started_at).num_minutes();
    let npc = app
        .npc
        .as_ref()
        .map_or("not configured", |npc| npc.backend_name());

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Ratrace</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        .status {{ color: #3fb950; font-weight: bold; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
    </style>
</head>
<body>
    <h1>Ratrace</h1>
    <p class="subtitle">Life simulation game server</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <div>
        <div class="metric">
            <div class="label">Players</div>
            <div class="value">{players}</div>
        </div>
        <div class="metric">
            <div class="label">Uptime (min)</div>
            <div class="value">{uptime_minutes}</div>
        </div>
        <div class="metric">
            <div class="label">NPC chat</div>
            <div class="value">{npc}</div>
        </div>
    </div>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li>GET <a href="/api/game_state">/api/game_state</a> -- Player state document</li>
        <li>GET /api/time_info/:location -- Time cost for a visit</li>
        <li>POST /api/action -- Visit a location</li>
        <li>POST /api/pass_time -- Fast-forward to the next day</li>
        <li>GET <a href="/api/shop/catalogue">/api/shop/catalogue</a> | POST /api/shop/purchase</li>
        <li>GET <a href="/api/john_lewis/catalogue">/api/john_lewis/catalogue</a> | POST /api/john_lewis/purchase</li>
        <li>GET <a href="/api/estate_agent/catalogue">/api/estate_agent/catalogue</a> | POST /api/estate_agent/rent</li>
        <li>GET <a href="/api/university/catalogue">/api/university/catalogue</a> | POST /api/university/enroll</li>
        <li>GET <a href="/api/job_office/jobs">/api/job_office/jobs</a> | POST /api/job_office/apply</li>
        <li>POST /api/chat -- Talk to the location's NPC</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// Game routes
// ---------------------------------------------------------------------------

/// `GET /api/game_state` -- load-or-create the caller's state document.
pub async fn get_game_state(
    State(app): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let player = player_id(&headers);
    let state = load_or_create(&app, &player)?;
    Ok(Json(json!({ "success": true, "state": state.to_document() })))
}

/// `GET /api/time_info/{location}` -- time cost info for visiting a
/// location, with arrival and finish wall-clock times.
pub async fn get_time_info(
    State(app): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(location_raw): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let location = parse_location(&location_raw)?;
    let player = player_id(&headers);
    let state = load_or_create(&app, &player)?;

    let cost = clock::time_cost(&app.game, location);
    let total = cost.total();
    let remaining = state.time_remaining;

    let arrival_time = (cost.travel <= remaining)
        .then(|| clock::format_time(&app.game, remaining - cost.travel));
    let finish_time =
        (total <= remaining).then(|| clock::format_time(&app.game, remaining - total));

    Ok(Json(json!({
        "success": true,
        "location": location,
        "travel_time": cost.travel,
        "action_time": cost.action,
        "total_time": total,
        "has_enough_time": clock::has_enough_time(&state, &app.game, location),
        "time_remaining": remaining,
        "current_time": clock::format_time(&app.game, remaining),
        "arrival_time": arrival_time,
        "finish_time": finish_time,
    })))
}

/// `POST /api/action` -- generic location visit through the validated
/// wrapper, with opening hours enforced.
pub async fn post_action(
    State(app): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<ActionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let location = parse_location(&body.action)?;

    // The clothing store recomputes the look after a successful browse.
    let post: Option<fn(&mut PlayerState)> =
        (location == Location::JohnLewis).then_some(john_lewis::recompute_look);

    let (state, mut outcome) = run_visit(
        &app,
        &headers,
        location,
        validation::VisitOptions::with_hours(),
        |state| locations::visit(state, &app.game, location),
        post,
    )?;

    // Append the time spent to the message, unless the day ended badly.
    if !outcome.burnout && !outcome.bankruptcy {
        let action = clock::time_cost(&app.game, location).action;
        outcome
            .message
            .push_str(&format!(" (\u{23f1} {})", clock::format_duration(action)));
    }

    Ok(visit_response(&state, &outcome))
}

/// `POST /api/pass_time` -- burn the rest of the day and start the next.
pub async fn post_pass_time(
    State(app): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let player = player_id(&headers);
    let mut state = load_or_create(&app, &player)?;

    let (minutes_passed, summary) = clock::pass_time(&mut state, &app.game);
    let check = endgame::check_endgame(&mut state, &app.game, String::new());

    let message = if check.burnout || check.bankruptcy {
        check.message
    } else {
        let hours = minutes_passed / 60;
        let minutes = minutes_passed % 60;
        if hours > 0 {
            format!("You passed {hours}h {minutes}m and the day ended...")
        } else {
            format!("You passed {minutes} minutes and the day ended...")
        }
    };

    app.store.save(&player, &state)?;

    Ok(Json(json!({
        "success": true,
        "state": state.to_document(),
        "message": message,
        "burnout": check.burnout,
        "bankruptcy": check.bankruptcy,
        "turn_summary": summary,
    })))
}

// ---------------------------------------------------------------------------
// Shop
// ---------------------------------------------------------------------------

/// `GET /api/shop/catalogue` -- the food range.
pub async fn get_shop_catalogue() -> impl IntoResponse {
    Json(json!({ "success": true, "items": food::FOOD_ITEMS }))
}

/// `POST /api/shop/purchase` -- buy a specific food item. The shop is
/// always open.
pub async fn post_shop_purchase(
    State(app): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<PurchaseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (state, outcome) = run_visit(
        &app,
        &headers,
        Location::Shop,
        validation::VisitOptions::default(),
        |state| shop::purchase_food(state, &body.item_name),
        None,
    )?;
    Ok(visit_response(&state, &outcome))
}

// ---------------------------------------------------------------------------
// John Lewis
// ---------------------------------------------------------------------------

/// `GET /api/john_lewis/catalogue` -- clothing and furniture stock.
pub async fn get_john_lewis_catalogue() -> impl IntoResponse {
    Json(json!({ "success": true, "items": clothing::STORE_ITEMS }))
}

/// `POST /api/john_lewis/purchase` -- buy a specific store item; the
/// look level is recomputed afterwards.
pub async fn post_john_lewis_purchase(
    State(app): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<PurchaseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (state, outcome) = run_visit(
        &app,
        &headers,
        Location::JohnLewis,
        validation::VisitOptions::default(),
        |state| john_lewis::purchase_item(state, &app.game, &body.item_name),
        Some(john_lewis::recompute_look),
    )?;
    Ok(visit_response(&state, &outcome))
}

// ---------------------------------------------------------------------------
// Estate agent
// ---------------------------------------------------------------------------

/// `GET /api/estate_agent/catalogue` -- flats for rent.
pub async fn get_estate_agent_catalogue() -> impl IntoResponse {
    Json(json!({ "success": true, "flats": flats::FLATS }))
}

/// `POST /api/estate_agent/rent` -- rent a flat of the given tier.
pub async fn post_rent_flat(
    State(app): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<RentFlatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (state, outcome) = run_visit(
        &app,
        &headers,
        Location::EstateAgent,
        validation::VisitOptions::with_hours(),
        |state| estate_agent::rent_flat(state, body.tier),
        None,
    )?;
    Ok(visit_response(&state, &outcome))
}

// ---------------------------------------------------------------------------
// University
// ---------------------------------------------------------------------------

/// `GET /api/university/catalogue` -- courses with eligibility plus the
/// caller's current enrollment progress.
pub async fn get_university_catalogue(
    State(app): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let player = player_id(&headers);
    let state = load_or_create(&app, &player)?;

    let enrolled_info = state
        .enrolled_course
        .as_deref()
        .and_then(courses::course_by_id)
        .map(|course| {
            json!({
                "id": course.id,
                "name": course.name,
                "lectures_completed": state.lectures_completed,
                "lectures_required": course.lectures_required,
                "cost_per_lecture": course.cost_per_lecture,
            })
        });

    Ok(Json(json!({
        "success": true,
        "courses": courses::available_courses(&state.completed_courses),
        "completed_courses": state.completed_courses,
        "enrolled_course": enrolled_info,
    })))
}

/// `POST /api/university/enroll` -- enroll in a course. Enrollment
/// consumes time like any other visit.
pub async fn post_enroll_course(
    State(app): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<EnrollCourseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (state, outcome) = run_visit(
        &app,
        &headers,
        Location::University,
        validation::VisitOptions::with_hours(),
        |state| university::enroll_course(state, &body.course_id),
        None,
    )?;
    Ok(visit_response(&state, &outcome))
}

// ---------------------------------------------------------------------------
// Job office
// ---------------------------------------------------------------------------

/// `GET /api/job_office/jobs` -- the job market with per-job requirement
/// flags for the caller.
pub async fn get_jobs(
    State(app): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let player = player_id(&headers);
    let state = load_or_create(&app, &player)?;

    Ok(Json(json!({
        "success": true,
        "jobs": jobs::available_jobs(&state.completed_courses, state.look),
        "current_job": state.current_job,
        "current_wage": state.job_wage,
    })))
}

/// `POST /api/job_office/apply` -- apply for a specific job.
pub async fn post_apply_job(
    State(app): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<ApplyJobRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (state, outcome) = run_visit(
        &app,
        &headers,
        Location::JobOffice,
        validation::VisitOptions::with_hours(),
        |state| job_office::apply_for_job(state, &body.job_title),
        None,
    )?;
    Ok(visit_response(&state, &outcome))
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// `POST /api/chat` -- talk to the location's NPC.
///
/// The NPC may invoke game rules as tools; a successful tool exchange
/// costs one day rollover, as chatting the NPC into action takes the rest
/// of the day. The exchange (and its conversation memory) is always
/// persisted.
pub async fn post_chat(
    State(app): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if body.action.is_empty() || body.message.is_empty() {
        return Err(ApiError::InvalidRequest(
            "Missing action or message".to_owned(),
        ));
    }
    let location = parse_location(&body.action)?;

    let Some(npc) = app.npc.clone() else {
        return Err(ApiError::ChatUnavailable);
    };

    let player = player_id(&headers);
    let mut state = load_or_create(&app, &player)?;

    let outcome = npc
        .chat(location, &body.message, &mut state, &app.game)
        .await?;

    if outcome.state_updated {
        let _ = clock::increment_turn(&mut state, &app.game);
    }
    app.store.save(&player, &state)?;

    Ok(Json(json!({
        "success": true,
        "response": outcome.response,
        "tool_calls": outcome.tool_results,
        "state": state.to_document(),
    })))
}
