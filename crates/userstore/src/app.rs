use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        health::livez,
        pages::index,
        users::{create_user, delete_user, get_user, list_users, update_user},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// Requests running longer than `request_timeout` are dropped with a 408,
/// which also cancels any store call still in flight.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/livez", get(livez))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
