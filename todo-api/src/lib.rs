//! HTTP API (axum) for the in-memory todo store.
//!
//! Four routes plus a health probe. Handlers read or mutate the shared
//! store and answer with JSON documents built by `todo_domain::resource`;
//! all error paths answer JSON as well (404 `{}`, 400 `{"error": ...}`).

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use todo_domain::{resource, Status, Todo, TodoStore};

/// Builds the router over an empty store.
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// Builds the router over externally supplied state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/:id", get(get_todo))
        .route("/todos/:id/toggle", post(toggle_todo))
        .with_state(state)
}

/// Shared application state. The store sits behind a mutex because axum
/// serves requests concurrently; each handler locks around its whole
/// read-modify-write sequence.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<TodoStore>>,
}

impl AppState {
    pub fn new(store: TodoStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, TodoStore>, ApiError> {
        self.store
            .lock()
            .map_err(|_| ApiError::Internal("store lock poisoned".to_string()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TodoStore::new())
    }
}

/// API error kinds and their HTTP mapping.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,

    #[error("invalid JSON: {0}")]
    Parse(String),

    #[error("invalid body: {0}")]
    Validation(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(serde_json::json!({}))).into_response()
            }
            ApiError::Parse(_) | ApiError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": self.to_string() })),
            )
                .into_response(),
            ApiError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

/// POST /todos request body. Both fields are required; `status` must be
/// one of the enumeration's variant names.
#[derive(Debug, serde::Deserialize)]
struct CreateTodoRequest {
    title: String,
    status: Status,
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthBody { status: "ok" }))
}

/// GET /todos
async fn list_todos(State(state): State<AppState>) -> Result<Response, ApiError> {
    let store = state.lock()?;
    Ok(json_ok(resource::collection(store.list())))
}

/// POST /todos
///
/// The `Bytes` extractor drains the whole payload before parsing. Parsing
/// is two-stage so a syntax error and a shape error report differently:
/// bytes -> JSON value (Parse), value -> typed request (Validation).
async fn create_todo(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let parsed: Value =
        serde_json::from_slice(&body).map_err(|e| ApiError::Parse(e.to_string()))?;
    let req: CreateTodoRequest =
        serde_json::from_value(parsed).map_err(|e| ApiError::Validation(e.to_string()))?;

    let todo = Todo::new(req.title, req.status);
    let doc = resource::single(&todo);
    tracing::info!(identifier = %todo.identifier().as_str(), "todo created");

    let mut store = state.lock()?;
    store.append(todo);
    Ok((StatusCode::CREATED, Json(doc)).into_response())
}

/// GET /todos/:id
async fn get_todo(
    Path(identifier): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let store = state.lock()?;
    let todo = store
        .find_by_identifier(&identifier)
        .ok_or(ApiError::NotFound)?;
    Ok(json_ok(resource::single(todo)))
}

/// POST /todos/:id/toggle
async fn toggle_todo(
    Path(identifier): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let mut store = state.lock()?;
    let updated = store
        .find_by_identifier(&identifier)
        .ok_or(ApiError::NotFound)?
        .toggled();
    store.replace(&identifier, updated.clone());
    tracing::info!(identifier = %identifier, status = updated.status().as_str(), "todo toggled");
    Ok(json_ok(resource::single(&updated)))
}

fn json_ok(doc: Value) -> Response {
    (StatusCode::OK, Json(doc)).into_response()
}
