//! Common Types Module
//!
//! 애플리케이션 전반에서 사용되는 공통 타입 정의

use std::fmt;

use axum::extract::{FromRequest, FromRequestParts};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;

/// API 성공 응답 래퍼
///
/// `data`의 필드는 envelope에 펼쳐짐: `{ "success": true, "pools": [...] }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// JSON body extractor
///
/// 파싱 실패 시 Axum 기본 응답 대신 `ApiError::BadRequest`로 변환
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor
///
/// 잘못된 percent-encoding 등도 공통 에러 형태(400)로 응답
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// Pool 식별자
///
/// 모든 핸들러가 공유하는 ID 검증 단계. 문자열을 한 번 파싱하면
/// 이후에는 타입으로 유효성이 보장됨
///
/// `Deserialize`는 구현하지 않음: 외부 입력은 항상 `PoolId::parse`를 거침
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PoolId(Uuid);

impl PoolId {
    pub const INVALID_FORMAT: &'static str = "Invalid Pool ID format.";

    /// 새 ID 발급 (생성 시점에 할당)
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// 문자열 → PoolId
    ///
    /// 정규 형식(소문자, 하이픈 포함)만 허용. 파싱 후 다시 문자열로 만들었을 때
    /// 입력과 동일해야 함
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        Uuid::try_parse(raw)
            .ok()
            .filter(|id| id.hyphenated().to_string() == raw)
            .map(Self)
            .ok_or_else(|| ApiError::ValidationError(Self::INVALID_FORMAT.to_string()))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for PoolId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// 필수 텍스트 필드: 없거나 공백뿐이면 None
pub fn present_text(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// 금액 필드: JSON number만 허용
///
/// 문자열 "100" 같은 값은 None (타입 오류)
pub fn amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
