//! Request body extractor
//!
//! Wraps axum's `Json` with the body policy of this API:
//! - no JSON content type or an empty body → every field absent (`T::default()`)
//! - malformed JSON / wrong field types → error boundary (500, fixed message)

use axum::{
    async_trait,
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// 요청 본문 최대 크기 (axum 기본값과 동일, 2MB)
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// JSON 요청 본문
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = axum::body::to_bytes(body, BODY_LIMIT).await.map_err(|err| {
            tracing::error!("Failed to read request body: {}", err);
            ApiError::Internal
        })?;

        // 빈 본문은 `{}`로 취급
        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => Ok(Self(T::default())),
            Err(rejection) => {
                tracing::error!(
                    status = %rejection.status(),
                    "Request body rejected: {}",
                    rejection.body_text()
                );
                Err(ApiError::Internal)
            }
        }
    }
}
