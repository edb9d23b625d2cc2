//! Database Module
//!
//! # Interview Q&A
//!
//! Q: 저장소 연결은 어떻게 관리하는가?
//! A: 전역 싱글톤 대신 명시적 생명주기
//!
//!    ```text
//!    main: Database::connect() → AppState 주입 → serve → Database::close()
//!    ```
//!
//!    - 핸들러는 `AppState`를 통해서만 저장소에 접근
//!    - 종료 시 커넥션 풀을 명시적으로 닫음
//!
//! Q: 커넥션 풀은 어떻게 관리하는가?
//! A: SQLx의 PgPool 사용
//!    - 최소/최대 커넥션 수 설정
//!    - 커넥션 재사용 (오버헤드 감소)
//!    - 타임아웃 처리
//!
//! Q: 존재하지 않는 Pool을 참조하는 투자 기록은?
//! A: 조건부 INSERT 한 문장으로 처리 (`INSERT ... SELECT ... WHERE EXISTS`)
//!    - 존재 확인과 저장 사이에 경쟁 구간이 없음
//!    - 외래키 제약으로 한 번 더 보장

mod models;
mod repository;

pub use models::*;
pub use repository::PoolRepository;
#[cfg(test)]
pub use repository::mock::MockPoolRepository;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::types::PoolId;

/// 데이터베이스 연결 및 쿼리 담당
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// 데이터베이스 연결
    ///
    /// # Connection Pool Settings
    ///
    /// - max_connections: 10 (트래픽에 따라 조정)
    /// - min_connections: 1 (idle 시 최소 유지)
    /// - acquire_timeout: 3초 (커넥션 획득 대기)
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .min_connections(1)
            .acquire_timeout(std::time::Duration::from_secs(3))
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// 마이그레이션 실행
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await?;
        Ok(())
    }

    /// 커넥션 풀 종료 (진행 중인 커넥션 반환 대기)
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl PoolRepository for Database {
    async fn list_pools(&self) -> Result<Vec<Pool>> {
        let pools = sqlx::query_as::<_, Pool>(
            r#"
            SELECT id, name, total_amount, admin_share, created_at
            FROM pools
            ORDER BY created_at DESC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(pools)
    }

    async fn insert_pool(&self, pool: &Pool) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO pools (id, name, total_amount, admin_share, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#
        )
        .bind(pool.id)
        .bind(&pool.name)
        .bind(pool.total_amount)
        .bind(pool.admin_share)
        .bind(pool.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_pool(&self, id: PoolId) -> Result<Option<Pool>> {
        let pool = sqlx::query_as::<_, Pool>(
            r#"
            SELECT id, name, total_amount, admin_share, created_at
            FROM pools
            WHERE id = $1
            "#
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(pool)
    }

    async fn increment_admin_share(&self, id: PoolId, amount: f64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE pools
            SET admin_share = admin_share + $1
            WHERE id = $2
            "#
        )
        .bind(amount)
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn insert_investment(&self, investment: &Investment) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO investments (id, pool_id, person_name, amount, created_at)
            SELECT $1, $2, $3, $4, $5
            WHERE EXISTS (SELECT 1 FROM pools WHERE id = $2)
            "#
        )
        .bind(investment.id)
        .bind(investment.pool_id)
        .bind(&investment.person_name)
        .bind(investment.amount)
        .bind(investment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_investments(&self, pool_id: PoolId) -> Result<Vec<Investment>> {
        let investments = sqlx::query_as::<_, Investment>(
            r#"
            SELECT id, pool_id, person_name, amount, created_at
            FROM investments
            WHERE pool_id = $1
            ORDER BY created_at ASC
            "#
        )
        .bind(pool_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(investments)
    }

    /// Health check
    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
