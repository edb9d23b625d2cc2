//! Pool Endpoints
//!
//! Create/list funding pools, record investors and admin contributions,
//! and serve the computed funding summary of a single pool.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    db::{Investment, Pool},
    error::ApiError,
    services::{compute_summary, PoolSummary},
    types::{amount, present_text, ApiJson, ApiPath, ApiResponse, PoolId},
    AppState,
};

// ============ Request/Response Types ============

/// Pool 생성 요청
///
/// 숫자 필드는 `Value`로 받아서 "누락"과 "타입 오류"를 구분
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePoolRequest {
    pub name: Option<String>,
    pub total_amount: Option<Value>,
    /// 없으면 0
    pub admin_share: Option<Value>,
}

/// 투자자 추가 요청
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPersonRequest {
    pub pool_id: Option<String>,
    pub person_name: Option<String>,
    pub amount: Option<Value>,
}

/// 관리자 추가 출자 요청
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSharesRequest {
    pub pool_id: Option<String>,
    pub extra_amount: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct PoolsResponse {
    pub pools: Vec<Pool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePoolResponse {
    pub message: &'static str,
    pub pool_id: PoolId,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: PoolSummary,
}

// ============ Handlers ============

/// GET /pools
///
/// 전체 Pool 목록 (최신순)
pub async fn list_pools(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PoolsResponse>>, ApiError> {
    let pools = state.repo.list_pools().await?;
    tracing::debug!("Listed {} pools", pools.len());

    Ok(Json(ApiResponse::success(PoolsResponse { pools })))
}

/// POST /pools/create
///
/// # Validation
///
/// - `name`, `totalAmount` 필수
/// - `totalAmount`, `adminShare`는 JSON number
pub async fn create_pool(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreatePoolRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreatePoolResponse>>), ApiError> {
    let (Some(name), Some(total_amount)) = (present_text(req.name), req.total_amount) else {
        return Err(ApiError::ValidationError(
            "`name` and `totalAmount` are required.".to_string(),
        ));
    };

    let total_amount = amount(&total_amount);
    let admin_share = match &req.admin_share {
        Some(value) => amount(value),
        None => Some(0.0),
    };
    let (Some(total_amount), Some(admin_share)) = (total_amount, admin_share) else {
        return Err(ApiError::ValidationError(
            "`totalAmount` and `adminShare` must be numbers.".to_string(),
        ));
    };

    let pool = Pool::new(name, total_amount, admin_share);
    state.repo.insert_pool(&pool).await?;
    tracing::info!(pool_id = %pool.id, name = %pool.name, total_amount, "Pool created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CreatePoolResponse {
            message: "Pool created successfully.",
            pool_id: pool.pool_id(),
        })),
    ))
}

/// POST /pools/add-person
///
/// 참조하는 Pool이 없으면 404 (고아 투자 기록을 만들지 않음)
pub async fn add_person(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AddPersonRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MessageResponse>>), ApiError> {
    let (Some(pool_id), Some(person_name), Some(raw_amount)) =
        (req.pool_id, present_text(req.person_name), req.amount)
    else {
        return Err(ApiError::ValidationError(
            "`poolId`, `personName`, and `amount` are required.".to_string(),
        ));
    };

    let pool_id = PoolId::parse(&pool_id)?;
    let amount = amount(&raw_amount)
        .ok_or_else(|| ApiError::ValidationError("`amount` must be a number.".to_string()))?;

    let investment = Investment::new(pool_id, person_name, amount);
    if !state.repo.insert_investment(&investment).await? {
        return Err(ApiError::NotFound("Pool".to_string()));
    }
    tracing::info!(%pool_id, person = %investment.person_name, amount, "Investor added");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(MessageResponse {
            message: "Person added to pool successfully.",
        })),
    ))
}

/// POST /pools/admin/add-shares
///
/// 저장소의 원자적 증가 연산 사용 (동시 요청에도 유실 없음)
pub async fn add_admin_shares(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AddSharesRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let (Some(pool_id), Some(raw_amount)) = (req.pool_id, req.extra_amount) else {
        return Err(ApiError::ValidationError(
            "`poolId` and `extraAmount` are required.".to_string(),
        ));
    };

    let pool_id = PoolId::parse(&pool_id)?;
    let extra_amount = amount(&raw_amount).ok_or_else(|| {
        ApiError::ValidationError("`extraAmount` must be a number.".to_string())
    })?;

    if !state.repo.increment_admin_share(pool_id, extra_amount).await? {
        return Err(ApiError::NotFound("Pool".to_string()));
    }
    tracing::info!(%pool_id, extra_amount, "Admin share updated");

    Ok(Json(ApiResponse::success(MessageResponse {
        message: "Admin share updated successfully.",
    })))
}

/// GET /pools/:poolId/summary
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "summary": {
///     "poolDetails": { "_id": "...", "name": "Alpha", "totalAmount": 1000, "createdAt": "..." },
///     "investmentStatus": { "totalInvestment": 250, "remainingAmount": 750, "isFunded": false },
///     "adminContribution": { "amount": 0, "sharePercentage": 0 },
///     "investors": [{ "personName": "Bob", "amount": 250, "sharePercentage": 25, ... }],
///     "investorCount": 1,
///     "distribution": { "fundingPercentage": 25, "slices": [...] }
///   }
/// }
/// ```
pub async fn get_pool_summary(
    State(state): State<AppState>,
    ApiPath(pool_id): ApiPath<String>,
) -> Result<Json<ApiResponse<SummaryResponse>>, ApiError> {
    let pool_id = PoolId::parse(&pool_id)?;

    let pool = state
        .repo
        .find_pool(pool_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Pool".to_string()))?;

    let investments = state.repo.find_investments(pool_id).await?;
    let summary = compute_summary(&pool, investments);

    Ok(Json(ApiResponse::success(SummaryResponse { summary })))
}
