//! Repository Pattern Implementation
//!
//! # Interview Q&A
//!
//! Q: Repository trait을 왜 두었는가?
//! A: 핸들러가 저장소 구현에 의존하지 않도록
//!
//!    - `AppState`는 `Arc<dyn PoolRepository>`만 알고 있음
//!    - 운영: `Database` (PostgreSQL)
//!    - 테스트: `MockPoolRepository` (메모리)
//!
//! Q: adminShare 증가는 왜 별도 메서드인가?
//! A: read-modify-write를 하면 동시 요청에서 업데이트가 유실됨
//!
//!    ```text
//!    요청 A: read 100 ─────────── write 150
//!    요청 B:      read 100 ─── write 130      → 최종 150 (B 유실)
//!    ```
//!
//!    저장소 레벨의 원자적 증가 연산 하나로 처리

use async_trait::async_trait;
use anyhow::Result;

use super::models::{Investment, Pool};
use crate::types::PoolId;

/// Pool / Investment 저장소 인터페이스
#[async_trait]
pub trait PoolRepository: Send + Sync {
    /// 전체 Pool 조회 (createdAt 내림차순)
    async fn list_pools(&self) -> Result<Vec<Pool>>;

    async fn insert_pool(&self, pool: &Pool) -> Result<()>;

    async fn find_pool(&self, id: PoolId) -> Result<Option<Pool>>;

    /// adminShare += amount (원자적)
    ///
    /// 대상 Pool이 없으면 `false`
    async fn increment_admin_share(&self, id: PoolId, amount: f64) -> Result<bool>;

    /// 투자 기록 저장
    ///
    /// 참조하는 Pool이 없으면 저장하지 않고 `false`
    async fn insert_investment(&self, investment: &Investment) -> Result<bool>;

    /// Pool에 속한 투자 기록 조회 (createdAt 오름차순)
    async fn find_investments(&self, pool_id: PoolId) -> Result<Vec<Investment>>;

    async fn health_check(&self) -> Result<()>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::RwLock;

    /// 메모리 기반 Mock 저장소
    #[derive(Default)]
    pub struct MockPoolRepository {
        pools: RwLock<Vec<Pool>>,
        investments: RwLock<Vec<Investment>>,
        failing: bool,
    }

    impl MockPoolRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// 모든 호출이 실패하는 저장소 (장애 시뮬레이션)
        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Self::default()
            }
        }

        pub fn pool_count(&self) -> usize {
            self.pools.read().unwrap().len()
        }

        pub fn investment_count(&self) -> usize {
            self.investments.read().unwrap().len()
        }

        fn check(&self) -> Result<()> {
            if self.failing {
                anyhow::bail!("mock store unavailable");
            }
            Ok(())
        }
    }

    #[async_trait]
    impl PoolRepository for MockPoolRepository {
        async fn list_pools(&self) -> Result<Vec<Pool>> {
            self.check()?;
            // 동일 시각이면 나중에 들어온 것이 먼저
            let mut pools: Vec<Pool> = self.pools.read().unwrap().iter().rev().cloned().collect();
            pools.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(pools)
        }

        async fn insert_pool(&self, pool: &Pool) -> Result<()> {
            self.check()?;
            self.pools.write().unwrap().push(pool.clone());
            Ok(())
        }

        async fn find_pool(&self, id: PoolId) -> Result<Option<Pool>> {
            self.check()?;
            let pools = self.pools.read().unwrap();
            Ok(pools.iter().find(|p| p.id == id.as_uuid()).cloned())
        }

        async fn increment_admin_share(&self, id: PoolId, amount: f64) -> Result<bool> {
            self.check()?;
            let mut pools = self.pools.write().unwrap();
            match pools.iter_mut().find(|p| p.id == id.as_uuid()) {
                Some(pool) => {
                    pool.admin_share += amount;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn insert_investment(&self, investment: &Investment) -> Result<bool> {
            self.check()?;
            let exists = self
                .pools
                .read()
                .unwrap()
                .iter()
                .any(|p| p.id == investment.pool_id);
            if exists {
                self.investments.write().unwrap().push(investment.clone());
            }
            Ok(exists)
        }

        async fn find_investments(&self, pool_id: PoolId) -> Result<Vec<Investment>> {
            self.check()?;
            let mut investments: Vec<Investment> = self
                .investments
                .read()
                .unwrap()
                .iter()
                .filter(|i| i.pool_id == pool_id.as_uuid())
                .cloned()
                .collect();
            investments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            Ok(investments)
        }

        async fn health_check(&self) -> Result<()> {
            self.check()
        }
    }

    mod tests {
        use super::*;
        use tokio_test::block_on;

        #[test]
        fn test_increment_missing_pool_is_reported() {
            let repo = MockPoolRepository::new();
            let updated = block_on(repo.increment_admin_share(PoolId::generate(), 10.0)).unwrap();
            assert!(!updated);
        }

        #[test]
        fn test_orphan_investment_is_rejected() {
            let repo = MockPoolRepository::new();
            let investment = Investment::new(PoolId::generate(), "Bob".into(), 250.0);
            assert!(!block_on(repo.insert_investment(&investment)).unwrap());
            assert_eq!(repo.investment_count(), 0);
        }

        #[test]
        fn test_investments_filtered_by_pool() {
            let repo = MockPoolRepository::new();
            let a = Pool::new("A".into(), 100.0, 0.0);
            let b = Pool::new("B".into(), 100.0, 0.0);
            block_on(repo.insert_pool(&a)).unwrap();
            block_on(repo.insert_pool(&b)).unwrap();
            block_on(repo.insert_investment(&Investment::new(a.pool_id(), "x".into(), 1.0))).unwrap();
            block_on(repo.insert_investment(&Investment::new(b.pool_id(), "y".into(), 2.0))).unwrap();

            let found = block_on(repo.find_investments(a.pool_id())).unwrap();
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].person_name, "x");
        }
    }
}
