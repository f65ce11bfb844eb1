//! User HTTP Routes
//!
//! CRUD endpoints over the in-memory user store. All handlers convert
//! directory errors to a JSON error body at their own boundary; nothing
//! propagates beyond a single request.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::directory::{CreateUserRequest, DirectoryError, User, UserStore};

// ==================
// Shared State
// ==================

/// User directory state shared across handlers
#[derive(Debug, Default)]
pub struct UsersState {
    pub store: UserStore,
}

impl UsersState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// User routes with shared state
pub fn user_routes(state: Arc<UsersState>) -> Router {
    Router::new()
        .route("/users", get(list_users_handler))
        .route("/users", post(create_user_handler))
        .route("/users/{id}", put(update_user_handler))
        .route("/users/{id}", delete(delete_user_handler))
        .with_state(state)
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct UsersListResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub message: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<DirectoryError> for ErrorResponse {
    fn from(err: DirectoryError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

// ==================
// Helper Functions
// ==================

fn error_response(err: DirectoryError) -> (StatusCode, Json<ErrorResponse>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(err)))
}

/// Body-parse failures are validation errors, not internal errors
fn rejection_response(rejection: JsonRejection) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: rejection.body_text(),
        }),
    )
}

/// Resolve a path id to a stored record; any id that parses to no stored
/// record (including a malformed UUID) is not found.
fn find_user(state: &UsersState, id: &str) -> Result<User, (StatusCode, Json<ErrorResponse>)> {
    let id = Uuid::parse_str(id).map_err(|_| error_response(DirectoryError::UserNotFound))?;

    match state.store.find_by_id(id).map_err(error_response)? {
        Some(user) => Ok(user),
        None => Err(error_response(DirectoryError::UserNotFound)),
    }
}

// ==================
// Handlers
// ==================

/// List all users in insertion order
async fn list_users_handler(
    State(state): State<Arc<UsersState>>,
) -> Result<Json<UsersListResponse>, (StatusCode, Json<ErrorResponse>)> {
    let users = state.store.list().map_err(error_response)?;
    Ok(Json(UsersListResponse { users }))
}

/// Create a user
///
/// Required fields are checked in the order `name, surname, email, company,
/// jobTitle`; the first absent or whitespace-only field fails the request.
/// The duplicate-email check compares the submitted email verbatim.
async fn create_user_handler(
    State(state): State<Arc<UsersState>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = payload.map_err(rejection_response)?;

    let submitted_email = request.submitted_email().unwrap_or_default().to_string();
    let user = request.into_user().map_err(|e| {
        tracing::debug!(error = %e, "user creation rejected");
        error_response(e)
    })?;

    let user = state
        .store
        .insert(user, &submitted_email)
        .map_err(error_response)?;

    tracing::info!(id = %user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Look up a user for update
///
/// The request body is parsed but its contents are never applied; the
/// response echoes the stored record as-is.
async fn update_user_handler(
    State(state): State<Arc<UsersState>>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<User>, (StatusCode, Json<ErrorResponse>)> {
    let Json(_body) = payload.map_err(rejection_response)?;

    let user = find_user(&state, &id)?;
    Ok(Json(user))
}

/// Delete a user by id
async fn delete_user_handler(
    State(state): State<Arc<UsersState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteUserResponse>, (StatusCode, Json<ErrorResponse>)> {
    let id = Uuid::parse_str(&id).map_err(|_| error_response(DirectoryError::UserNotFound))?;

    match state.store.remove_by_id(id).map_err(error_response)? {
        Some(user) => {
            tracing::info!(id = %user.id, "user deleted");
            Ok(Json(DeleteUserResponse {
                message: "User deleted successfully".to_string(),
                user,
            }))
        }
        None => Err(error_response(DirectoryError::UserNotFound)),
    }
}
