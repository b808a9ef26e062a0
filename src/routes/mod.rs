//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One page at `/` plus the two callback endpoints its buttons post to.
//! Each callback endpoint only extracts its input, calls the matching
//! function in `demo`, and wraps the text as `{"output": ...}`.

pub mod demo;

use axum::Router;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(index))
        .route("/api/process", post(demo::process_document).layer(DefaultBodyLimit::max(upload_limit)))
        .route("/api/ask", post(demo::ask_question))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
