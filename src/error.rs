//! Error Handling Module
//!
//! Maps store failures and lookups that found nothing to HTTP responses.
//! Every error body has the same shape: `{"error": "<message>"}`.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// 에러 바운더리가 반환하는 고정 메시지
pub const INTERNAL_ERROR_MESSAGE: &str = "Atencion: Ha habido un error en el servidor!";

/// API 에러 타입
///
/// # Design Decision
///
/// - 404: 단건 조회 / 필터 목록이 비어 있을 때만 사용 (PUT/DELETE 제외)
/// - 500 (Store): 저장소 에러 메시지를 그대로 노출
/// - 500 (Internal): 고정 메시지, 상세 내용은 서버 로그에만 남김
#[derive(Debug, Error)]
pub enum ApiError {
    // ============ 404 Not Found ============
    #[error("{0}")]
    NotFound(&'static str),

    // ============ 500 Internal Server Error ============
    #[error("Store failure: {0}")]
    Store(String),

    #[error("Internal server error")]
    Internal,
}

/// API 에러 응답 구조
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message.to_string()),
            ApiError::Store(message) => {
                tracing::error!("Store error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            ),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// SQLx 에러를 ApiError로 변환
///
/// 데이터베이스 에러는 SQLite 메시지 원문을 유지
/// (예: `NOT NULL constraint failed: movies.title`)
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        let message = match &err {
            sqlx::Error::Database(db_err) => db_err.message().to_string(),
            other => other.to_string(),
        };
        ApiError::Store(message)
    }
}

/// 에러 바운더리: 핸들러/미들웨어에서 발생한 panic 처리
///
/// `CatchPanicLayer::custom`에 등록됨. panic 내용은 서버 로그에만 남기고
/// 클라이언트에는 고정 메시지를 반환
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(
        panic = %detail,
        backtrace = %std::backtrace::Backtrace::force_capture(),
        "Unhandled failure while serving request"
    );

    ApiError::Internal.into_response()
}
