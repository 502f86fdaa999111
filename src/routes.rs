// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{docs, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Mounts the quiz routes and the OpenAPI document.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (quiz store and scoring engine).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let quiz_routes = Router::new()
        .route("/", post(quiz::create_quiz))
        .route("/{quiz_id}", get(quiz::get_quiz))
        .route(
            "/{quiz_id}/users/{user_id}/questions/{question_id}/answer",
            post(quiz::submit_answer),
        )
        .route(
            "/{quiz_id}/users/{user_id}/results",
            get(quiz::get_results),
        );

    Router::new()
        .nest("/api/quizzes", quiz_routes)
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
