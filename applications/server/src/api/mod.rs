/// HTTP routes
pub mod health;
pub mod users;

use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Build the application router
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(users::index))
        .route("/add_user", get(users::add_user_form).post(users::add_user))
        .route("/delete_user/:id", get(users::delete_user))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .with_state(app_state)
}
