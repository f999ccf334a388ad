//! Director Endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::extract::JsonBody;
use crate::{
    db::{Director, NameInput},
    error::ApiError,
    types::{CreatedResponse, MessageResponse},
    AppState,
};

const NOT_FOUND: &str = "Director no encontrado";
const UPDATED: &str = "Datos del director actualizados correctamente";
const DELETED: &str = "Director eliminado correctamente";

/// GET /directors
pub async fn list_directors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Director>>, ApiError> {
    Ok(Json(state.db.list_directors().await?))
}

/// GET /directors/:id
pub async fn get_director(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Director>, ApiError> {
    state
        .db
        .get_director(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(NOT_FOUND))
}

/// POST /directors
pub async fn create_director(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NameInput>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = state.db.create_director(&input).await?;
    tracing::debug!(id, "Director created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// PUT /directors/:id
///
/// 대상 행이 없어도 200
pub async fn update_director(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<NameInput>,
) -> Result<Json<MessageResponse>, ApiError> {
    if state.db.update_director(&id, &input).await? == 0 {
        tracing::warn!(%id, "PUT /directors matched no rows");
    }

    Ok(Json(MessageResponse::new(UPDATED)))
}

/// DELETE /directors/:id
///
/// 이 감독을 참조하는 영화의 director_id는 그대로 남음
pub async fn delete_director(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if state.db.delete_director(&id).await? == 0 {
        tracing::warn!(%id, "DELETE /directors matched no rows");
    }

    Ok(Json(MessageResponse::new(DELETED)))
}
