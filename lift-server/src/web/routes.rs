//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;

use super::dto::*;
use super::state::AppState;
use super::templates::DashboardTemplate;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/health", get(health))
        .route("/api/disruptions", get(get_disruptions))
        .route("/api/stats", get(get_stats))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Dashboard page rendered from the latest feed snapshot.
async fn dashboard_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let snapshot = state.feed.borrow().clone();

    let template = DashboardTemplate::from_snapshot(&snapshot);
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// Current disruption list as JSON.
async fn get_disruptions(State(state): State<AppState>) -> Json<DisruptionsResponse> {
    let snapshot = state.feed.borrow().clone();
    Json(DisruptionsResponse::from_snapshot(&snapshot))
}

/// Derived statistics as JSON.
async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let snapshot = state.feed.borrow().clone();
    Json(StatsResponse::from_stats(&snapshot.stats))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
