//! Services Module
//!
//! 비즈니스 로직을 담당하는 서비스 레이어
//!
//! # Services
//! - `summary`: Pool + 투자 기록 → 모금 현황 요약 (순수 계산)

mod summary;

pub use summary::{
    compute_summary, share_percentage, AdminContribution, DistributionSlice,
    FundingDistribution, InvestmentStatus, InvestorShare, PoolDetails, PoolSummary,
};
