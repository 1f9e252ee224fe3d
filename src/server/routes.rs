//! HTTP route handlers for the keepsake journal API.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use crate::journal::core::ids::{MemoryId, SessionToken};
use crate::journal::core::memory::{MAX_IMAGES, Memory, MemoryDraft};
use crate::journal::core::user::User;
use crate::journal::images;

use super::state::AppState;

/// Header carrying the bearer token minted by login.
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/memories", get(list_memories).post(create_memory))
        .route("/api/memories/{id}", delete(delete_memory))
        .route("/api/suggest-title", post(suggest_title))
        .fallback_service(ServeDir::new("static"))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "keepsake",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Resolve the session token header to a signed-in user.
fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<User, (StatusCode, String)> {
    let token: SessionToken = headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| (StatusCode::UNAUTHORIZED, "missing session token".to_string()))?;

    state
        .sessions
        .user_for(&token)
        .ok_or_else(|| (StatusCode::UNAUTHORIZED, "not signed in".to_string()))
}

/// Login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: SessionToken,
    /// Signed-in user profile.
    pub user: User,
}

/// Handle the simulated sign-in.
async fn login(State(state): State<Arc<AppState>>) -> Json<LoginResponse> {
    let (token, user) = state.sessions.login();
    Json(LoginResponse { token, user })
}

/// Handle sign-out. Always succeeds; unknown tokens are a no-op.
async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> StatusCode {
    if let Some(token) = headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| raw.parse::<SessionToken>().ok())
    {
        state.sessions.logout(&token);
    }
    StatusCode::NO_CONTENT
}

/// Memory listing response.
#[derive(Debug, Serialize)]
pub struct MemoriesResponse {
    /// Memories, newest first.
    pub memories: Vec<Memory>,
    /// Number of memories.
    pub count: usize,
}

/// List all memories, newest first.
async fn list_memories(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<MemoriesResponse>, (StatusCode, String)> {
    authenticate(&state, &headers)?;

    let memories = state.collection.lock().await.current();
    let count = memories.len();

    Ok(Json(MemoriesResponse { memories, count }))
}

/// Create a memory from a submitted draft.
///
/// The submission contract is enforced here; a violation is a blocking
/// notice, not a partial save.
async fn create_memory(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(draft): Json<MemoryDraft>,
) -> Result<(StatusCode, Json<Memory>), (StatusCode, String)> {
    authenticate(&state, &headers)?;

    if draft.image_urls.len() > MAX_IMAGES {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("You can only upload a maximum of {MAX_IMAGES} images."),
        ));
    }

    draft
        .validate()
        .map_err(|err| (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()))?;

    if let Some(bad) = draft
        .image_urls
        .iter()
        .find(|url| !images::looks_like_image_url(url))
    {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("not a usable photo reference: {bad:.48}"),
        ));
    }

    let memory = state.collection.lock().await.add(&draft);
    Ok((StatusCode::CREATED, Json(memory)))
}

/// Delete a memory by id. Unknown ids are a no-op.
async fn delete_memory(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    authenticate(&state, &headers)?;

    let id: MemoryId = id
        .parse()
        .map_err(|_| (StatusCode::BAD_REQUEST, "malformed memory id".to_string()))?;

    state.collection.lock().await.delete(&id);
    Ok(StatusCode::NO_CONTENT)
}

/// Title suggestion request.
#[derive(Debug, Deserialize)]
pub struct SuggestTitleRequest {
    /// The story to derive a title from.
    pub story: String,
}

/// Title suggestion response.
#[derive(Debug, Serialize)]
pub struct SuggestTitleResponse {
    /// Suggested (or fallback) title; never empty.
    pub title: String,
}

/// Handle title suggestion requests. Never fails: unavailability and
/// upstream errors degrade to fixed fallback titles.
async fn suggest_title(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<SuggestTitleRequest>,
) -> Result<Json<SuggestTitleResponse>, (StatusCode, String)> {
    authenticate(&state, &headers)?;

    let title = state.suggester.suggest_title(&request.story).await;
    Ok(Json(SuggestTitleResponse { title }))
}
