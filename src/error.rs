//! Error Handling Module
//!
//! Provides type-safe error handling with proper HTTP status code mapping.
//! Uses thiserror for domain errors and integrates with tracing for structured logging.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API 에러 타입
///
/// # Design Decision
///
/// 각 에러 variant는 적절한 HTTP 상태 코드에 매핑됨
/// - 클라이언트 에러: 4xx (필드 누락, 타입 오류, 잘못된 ID)
/// - 서버 에러: 5xx (저장소 장애)
///
/// 저장소 에러의 원인은 서버 로그에만 남기고 클라이언트에 노출하지 않음
#[derive(Debug, Error)]
pub enum ApiError {
    // ============ 400 Bad Request ============
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    // ============ 404 Not Found ============
    #[error("Resource not found: {0}")]
    NotFound(String),

    // ============ 500 Internal Server Error ============
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error")]
    InternalError,
}

/// API 에러 응답 구조
///
/// 모든 실패 응답은 `{ "success": false, "error": "..." }` 형태
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DatabaseError(_) | ApiError::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::BadRequest(msg) | ApiError::ValidationError(msg) => msg.clone(),
            ApiError::NotFound(resource) => format!("{} not found.", resource),
            ApiError::DatabaseError(_) => {
                tracing::error!("Database error: {:?}", self);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            ApiError::InternalError => {
                tracing::error!("Internal error: {:?}", self);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        let body = ErrorResponse {
            success: false,
            error: message,
        };

        (self.status(), Json(body)).into_response()
    }
}

/// anyhow 에러를 ApiError로 변환
///
/// Repository는 anyhow::Result를 반환하므로 저장소 장애는 여기로 들어옴.
/// 원인이 SQLx 에러면 DatabaseError, 그 외는 InternalError
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<sqlx::Error>() {
            Some(sqlx_err) => {
                tracing::error!("SQLx error: {:?}", sqlx_err);
                ApiError::DatabaseError(sqlx_err.to_string())
            }
            None => {
                tracing::error!("Store error: {:?}", err);
                ApiError::InternalError
            }
        }
    }
}

/// JSON body 파싱 실패 → 400
///
/// Axum 기본 rejection(plain text, 415/422)을 공통 에러 형태로 통일
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

/// Path 파라미터 파싱 실패 → 400
///
/// 경로 파라미터는 Pool ID뿐이므로 ID 형식 오류로 응답
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Path rejected: {}", rejection.body_text());
        ApiError::ValidationError(crate::types::PoolId::INVALID_FORMAT.to_string())
    }
}
