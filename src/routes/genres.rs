//! Genre Endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::extract::JsonBody;
use crate::{
    db::{Genre, NameInput},
    error::ApiError,
    types::{CreatedResponse, MessageResponse},
    AppState,
};

const NOT_FOUND: &str = "Genero no encontrado";
const UPDATED: &str = "Datos del genero actualizados correctamente";
const DELETED: &str = "Genero eliminado correctamente";

/// GET /genres
pub async fn list_genres(State(state): State<AppState>) -> Result<Json<Vec<Genre>>, ApiError> {
    Ok(Json(state.db.list_genres().await?))
}

/// GET /genres/:id
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Genre>, ApiError> {
    match state.db.get_genre(&id).await? {
        Some(genre) => Ok(Json(genre)),
        None => Err(ApiError::NotFound(NOT_FOUND)),
    }
}

/// POST /genres
pub async fn create_genre(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NameInput>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = state.db.create_genre(&input).await?;
    tracing::debug!(id, "Genre created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// PUT /genres/:id
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<NameInput>,
) -> Result<Json<MessageResponse>, ApiError> {
    if state.db.update_genre(&id, &input).await? == 0 {
        tracing::warn!(%id, "PUT /genres matched no rows");
    }

    Ok(Json(MessageResponse::new(UPDATED)))
}

/// DELETE /genres/:id
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if state.db.delete_genre(&id).await? == 0 {
        tracing::warn!(%id, "DELETE /genres matched no rows");
    }

    Ok(Json(MessageResponse::new(DELETED)))
}
