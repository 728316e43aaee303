//! Axum router construction for the Ratrace API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin frontend access.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the game server.
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Game routes
        .route("/api/game_state", get(handlers::get_game_state))
        .route("/api/time_info/{location}", get(handlers::get_time_info))
        .route("/api/action", post(handlers::post_action))
        .route("/api/pass_time", post(handlers::post_pass_time))
        // Shop
        .route("/api/shop/catalogue", get(handlers::get_shop_catalogue))
        .route("/api/shop/purchase", post(handlers::post_shop_purchase))
        // John Lewis
        .route(
            "/api/john_lewis/catalogue",
            get(handlers::get_john_lewis_catalogue),
        )
        .route(
            "/api/john_lewis/purchase",
            post(handlers::post_john_lewis_purchase),
        )
        // Estate agent
        .route(
            "/api/estate_agent/catalogue",
            get(handlers::get_estate_agent_catalogue),
        )
        .route("/api/estate_agent/rent", post(handlers::post_rent_flat))
        // University
        .route(
            "/api/university/catalogue",
            get(handlers::get_university_catalogue),
        )
        .route("/api/university/enroll", post(handlers::post_enroll_course))
        // Job office
        .route("/api/job_office/jobs", get(handlers::get_jobs))
        .route("/api/job_office/apply", post(handlers::post_apply_job))
        // NPC chat
        .route("/api/chat", post(handlers::post_chat))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
