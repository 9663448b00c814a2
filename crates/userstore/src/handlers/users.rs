//! User CRUD handlers.
//!
//! Thin adapters between HTTP and [`UserService`](userstore_core::service::UserService).
//! A body that fails to decode is rejected here, before the service runs.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use userstore_core::user::{CreateUser, UpdateUser, User};

use crate::{handlers::AppError, state::AppState};

/// List all users (GET /users).
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.users.list().await?;
    tracing::debug!(count = users.len(), "Listed users");
    Ok(Json(users))
}

/// Create a new user (POST /users).
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let Json(input) = payload?;

    let user = state.users.create(input).await?;

    tracing::info!(user_id = %user.id, "Created new user");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a single user by ID (GET /users/{id}).
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    Ok(Json(state.users.get(&id).await?))
}

/// Replace a user's name and email (PUT /users/{id}).
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(input) = payload?;

    state.users.update(&id, input).await?;

    tracing::info!(user_id = %id, "Updated user");

    Ok(Json(json!({ "message": "user updated successfully" })))
}

/// Delete a user by ID (DELETE /users/{id}).
///
/// Returns 204 whether or not the user existed.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.users.delete(&id).await?;

    tracing::info!(user_id = %id, "Deleted user");

    Ok(StatusCode::NO_CONTENT)
}
