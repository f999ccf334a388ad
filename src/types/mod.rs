//! Common Types Module
//!
//! 핸들러가 공통으로 반환하는 응답 본문

use serde::Serialize;

/// POST 성공 응답: `{"id": <new id>}`
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// PUT/DELETE 성공 응답: `{"message": "..."}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
