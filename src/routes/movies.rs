//! Movie Endpoints
//!
//! CRUD over `movies` plus the two filtered listings joined with the
//! director / genre name.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::extract::JsonBody;
use crate::{
    db::{Movie, MovieInput, MovieWithDirector, MovieWithGenre},
    error::ApiError,
    types::{CreatedResponse, MessageResponse},
    AppState,
};

const NOT_FOUND: &str = "Película no encontrada";
const UPDATED: &str = "Datos de la película actualizados correctamente";
const DELETED: &str = "Película eliminada correctamente";
const NONE_FOR_DIRECTOR: &str = "No se encontraron películas para este director";
const NONE_FOR_GENRE: &str = "No se encontraron películas para este género";

/// GET /movies
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    Ok(Json(state.db.list_movies().await?))
}

/// GET /movies/:id
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    state
        .db
        .get_movie(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(NOT_FOUND))
}

/// POST /movies
///
/// # Request
///
/// ```json
/// {
///   "title": "Inception",
///   "director_id": 1,
///   "genre_id": null,
///   "score": 8.8,
///   "rating": "PG-13",
///   "release_year": 2010
/// }
/// ```
///
/// director_id / genre_id 존재 여부는 확인하지 않음
pub async fn create_movie(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<MovieInput>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = state.db.create_movie(&input).await?;
    tracing::debug!(id, "Movie created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// PUT /movies/:id
///
/// 모든 필드를 덮어씀. 대상 행이 없어도 200 응답 (UPDATE 문 성공 여부만 보고)
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<MovieInput>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = state.db.update_movie(&id, &input).await?;
    if affected == 0 {
        tracing::warn!(%id, "PUT /movies matched no rows");
    }

    Ok(Json(MessageResponse::new(UPDATED)))
}

/// DELETE /movies/:id
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let affected = state.db.delete_movie(&id).await?;
    if affected == 0 {
        tracing::warn!(%id, "DELETE /movies matched no rows");
    }

    Ok(Json(MessageResponse::new(DELETED)))
}

/// GET /movies/director/:director_id
///
/// 결과가 비어 있으면 404
pub async fn list_movies_by_director(
    State(state): State<AppState>,
    Path(director_id): Path<String>,
) -> Result<Json<Vec<MovieWithDirector>>, ApiError> {
    let movies = state.db.list_movies_by_director(&director_id).await?;
    if movies.is_empty() {
        return Err(ApiError::NotFound(NONE_FOR_DIRECTOR));
    }

    Ok(Json(movies))
}

/// GET /movies/genre/:genre_id
pub async fn list_movies_by_genre(
    State(state): State<AppState>,
    Path(genre_id): Path<String>,
) -> Result<Json<Vec<MovieWithGenre>>, ApiError> {
    let movies = state.db.list_movies_by_genre(&genre_id).await?;
    if movies.is_empty() {
        return Err(ApiError::NotFound(NONE_FOR_GENRE));
    }

    Ok(Json(movies))
}
