//! Database Models
//!
//! Persisted records for funding pools and the investments made into them.
//! Field names serialize in camelCase with `_id` keys, matching what the dashboard reads.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::types::PoolId;

/// 펀딩 Pool (모금 목표)
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    #[serde(rename = "_id")]
    pub id: Uuid,

    pub name: String,

    /// 모금 목표 금액. 생성 이후 변경되지 않음
    pub total_amount: f64,

    /// 관리자 본인 출자액 (기본값 0, add-shares로만 증가)
    pub admin_share: f64,

    pub created_at: DateTime<Utc>,
}

impl Pool {
    pub fn new(name: String, total_amount: f64, admin_share: f64) -> Self {
        Self {
            id: PoolId::generate().as_uuid(),
            name,
            total_amount,
            admin_share,
            created_at: Utc::now(),
        }
    }

    pub fn pool_id(&self) -> PoolId {
        PoolId::from(self.id)
    }
}

/// 투자 기록 (Pool을 ID로 참조)
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    #[serde(rename = "_id")]
    pub id: Uuid,

    pub pool_id: Uuid,

    pub person_name: String,

    pub amount: f64,

    pub created_at: DateTime<Utc>,
}

impl Investment {
    pub fn new(pool_id: PoolId, person_name: String, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            pool_id: pool_id.as_uuid(),
            person_name,
            amount,
            created_at: Utc::now(),
        }
    }
}
