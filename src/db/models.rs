//! Database Models
//!
//! Row types for the three catalog tables and the request payloads that
//! feed INSERT / UPDATE statements.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 감독
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Director {
    pub id: i64,
    pub name: String,
}

/// 장르
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// 영화
///
/// director_id / genre_id는 존재하지 않는 행을 가리킬 수 있음 (쓰기 시 검증 없음)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub director_id: Option<i64>,
    pub genre_id: Option<i64>,
    pub score: Option<f64>,
    pub rating: Option<String>,
    pub release_year: Option<i64>,
}

/// 감독별 영화 조회 결과 (movies.* + directors.name)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct MovieWithDirector {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub movie: Movie,
    pub director_name: String,
}

/// 장르별 영화 조회 결과 (movies.* + genres.name)
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct MovieWithGenre {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub movie: Movie,
    pub genre_name: String,
}

// ============ Request Payloads ============

/// 영화 생성/수정 요청
///
/// 누락된 필드는 NULL로 바인딩됨 (기본값 대체 없음).
/// title이 없으면 NOT NULL 제약 위반으로 저장소가 거부함
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieInput {
    pub title: Option<String>,
    pub director_id: Option<i64>,
    pub genre_id: Option<i64>,
    pub score: Option<f64>,
    pub rating: Option<String>,
    pub release_year: Option<i64>,
}

/// 감독/장르 생성/수정 요청
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameInput {
    pub name: Option<String>,
}
