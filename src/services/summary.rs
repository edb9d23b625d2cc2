//! Pool Summary Calculator
//!
//! # Interview Q&A
//!
//! Q: 요약(summary)을 왜 저장하지 않고 매번 계산하는가?
//! A: Pool과 투자 기록이 원본 데이터
//!    - 저장된 파생값은 원본과 어긋날 수 있음
//!    - 계산 비용이 작음 (합계 + 나눗셈)
//!
//! Q: 지분율(share percentage)의 기준은?
//! A: 실제 모금액이 아니라 모금 목표(totalAmount) 대비
//!
//!    ```text
//!    목표 1000, Bob 250 → 25.00%
//!    목표 1000, 관리자 750 → 75.00%
//!    ```
//!
//!    미달/초과 모금 시 참여자 지분율 합계는 100이 아님
//!
//! Q: 목표 금액이 0이면?
//! A: 모든 지분율을 0으로 정의 (0으로 나누기 방지)

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::db::{Investment, Pool};

/// Pool 요약 (저장되지 않는 파생 데이터)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolSummary {
    pub pool_details: PoolDetails,
    pub investment_status: InvestmentStatus,
    pub admin_contribution: AdminContribution,
    pub investors: Vec<InvestorShare>,
    pub investor_count: usize,
    /// 대시보드 차트/진행률 표시용 (UI에서 재계산하지 않음)
    pub distribution: FundingDistribution,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolDetails {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentStatus {
    /// 투자자 합계 + 관리자 출자액
    pub total_investment: f64,
    /// 목표 - 총 투자액 (초과 모금 시 음수)
    pub remaining_amount: f64,
    pub is_funded: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminContribution {
    pub amount: f64,
    pub share_percentage: f64,
}

/// 지분율이 붙은 투자 기록
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorShare {
    #[serde(flatten)]
    pub investment: Investment,
    pub share_percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingDistribution {
    /// 총 투자액 / 목표 (%)
    pub funding_percentage: f64,
    /// Admin, Investors, Unfunded 순서
    pub slices: Vec<DistributionSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSlice {
    pub name: &'static str,
    pub value: f64,
}

/// 목표 대비 비율 (%), 소수점 둘째 자리 반올림
///
/// 반올림은 0에서 먼 쪽 (`f64::round`)
pub fn share_percentage(amount: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    round_to_cents(amount / total * 100.0)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Pool + 투자 기록 → 요약
///
/// # Algorithm
///
/// 1. totalInvestedByPeople = Σ investment.amount
/// 2. totalInvestment = totalInvestedByPeople + adminShare
/// 3. remainingAmount = totalAmount - totalInvestment (clamp 없음)
/// 4. isFunded = totalInvestment >= totalAmount
/// 5. 각 참여자 지분율 = share_percentage(amount, totalAmount)
pub fn compute_summary(pool: &Pool, investments: Vec<Investment>) -> PoolSummary {
    let total_invested_by_people: f64 = investments.iter().map(|i| i.amount).sum();
    let admin_share = pool.admin_share;
    let total_investment = total_invested_by_people + admin_share;
    let remaining_amount = pool.total_amount - total_investment;

    let investor_count = investments.len();
    let investors = investments
        .into_iter()
        .map(|investment| InvestorShare {
            share_percentage: share_percentage(investment.amount, pool.total_amount),
            investment,
        })
        .collect();

    PoolSummary {
        pool_details: PoolDetails {
            id: pool.id,
            name: pool.name.clone(),
            total_amount: pool.total_amount,
            created_at: pool.created_at,
        },
        investment_status: InvestmentStatus {
            total_investment,
            remaining_amount,
            is_funded: total_investment >= pool.total_amount,
        },
        admin_contribution: AdminContribution {
            amount: admin_share,
            share_percentage: share_percentage(admin_share, pool.total_amount),
        },
        investors,
        investor_count,
        distribution: FundingDistribution {
            funding_percentage: share_percentage(total_investment, pool.total_amount),
            slices: vec![
                DistributionSlice { name: "Admin", value: admin_share },
                DistributionSlice { name: "Investors", value: total_invested_by_people },
                DistributionSlice { name: "Unfunded", value: remaining_amount.max(0.0) },
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PoolId;

    fn pool(total_amount: f64, admin_share: f64) -> Pool {
        Pool::new("Alpha".into(), total_amount, admin_share)
    }

    fn invest(pool: &Pool, name: &str, amount: f64) -> Investment {
        Investment::new(pool.pool_id(), name.into(), amount)
    }

    #[test]
    fn test_totals_and_remaining() {
        let p = pool(1000.0, 100.0);
        let summary = compute_summary(&p, vec![invest(&p, "Bob", 250.0), invest(&p, "Eve", 150.0)]);

        assert_eq!(summary.investment_status.total_investment, 500.0);
        assert_eq!(summary.investment_status.remaining_amount, 500.0);
        assert!(!summary.investment_status.is_funded);
        assert_eq!(summary.investor_count, 2);
    }

    #[test]
    fn test_single_investor_share() {
        let p = pool(1000.0, 0.0);
        let summary = compute_summary(&p, vec![invest(&p, "Bob", 250.0)]);

        assert_eq!(summary.investment_status.total_investment, 250.0);
        assert_eq!(summary.investment_status.remaining_amount, 750.0);
        assert!(!summary.investment_status.is_funded);
        assert_eq!(summary.investors[0].share_percentage, 25.0);
        assert_eq!(summary.admin_contribution.share_percentage, 0.0);
    }

    #[test]
    fn test_exactly_funded() {
        let p = pool(1000.0, 750.0);
        let summary = compute_summary(&p, vec![invest(&p, "Bob", 250.0)]);

        assert_eq!(summary.investment_status.total_investment, 1000.0);
        assert_eq!(summary.investment_status.remaining_amount, 0.0);
        assert!(summary.investment_status.is_funded);
        assert_eq!(summary.admin_contribution.share_percentage, 75.0);
    }

    #[test]
    fn test_overfunded_remaining_is_negative() {
        let p = pool(1000.0, 500.0);
        let summary = compute_summary(&p, vec![invest(&p, "Bob", 700.0)]);

        assert_eq!(summary.investment_status.remaining_amount, -200.0);
        assert!(summary.investment_status.is_funded);
        assert_eq!(summary.distribution.funding_percentage, 120.0);
        // 차트의 미모금 조각은 0으로 clamp
        assert_eq!(summary.distribution.slices[2], DistributionSlice { name: "Unfunded", value: 0.0 });
    }

    #[test]
    fn test_no_investments() {
        let p = pool(1000.0, 0.0);
        let summary = compute_summary(&p, Vec::new());

        assert_eq!(summary.investment_status.total_investment, 0.0);
        assert_eq!(summary.investment_status.remaining_amount, 1000.0);
        assert!(summary.investors.is_empty());
        assert_eq!(summary.distribution.slices[2].value, 1000.0);
    }

    #[test]
    fn test_zero_goal_has_zero_percentages() {
        let p = pool(0.0, 40.0);
        let summary = compute_summary(&p, vec![invest(&p, "Bob", 10.0)]);

        assert_eq!(summary.investors[0].share_percentage, 0.0);
        assert_eq!(summary.admin_contribution.share_percentage, 0.0);
        assert_eq!(summary.distribution.funding_percentage, 0.0);
        assert!(summary.investment_status.is_funded);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        assert_eq!(share_percentage(1.0, 3.0), 33.33);
        assert_eq!(share_percentage(2.0, 3.0), 66.67);
        assert_eq!(share_percentage(1.0, 8.0), 12.5);
        assert_eq!(share_percentage(0.0, 3.0), 0.0);
    }

    #[test]
    fn test_percentage_is_monotonic() {
        let total = 777.0;
        let mut previous = f64::MIN;
        for step in 0..500 {
            let pct = share_percentage(step as f64 * 1.37, total);
            assert!(pct >= previous);
            previous = pct;
        }
    }

    #[test]
    fn test_participant_shares_track_total_investment() {
        let p = pool(900.0, 123.45);
        let amounts = [10.0, 77.77, 333.33, 1.01];
        let investments = amounts.iter().map(|a| invest(&p, "x", *a)).collect();
        let summary = compute_summary(&p, investments);

        let sum: f64 = summary.admin_contribution.share_percentage
            + summary.investors.iter().map(|i| i.share_percentage).sum::<f64>();
        let expected = summary.investment_status.total_investment / p.total_amount * 100.0;
        let participants = (amounts.len() + 1) as f64;
        assert!((sum - expected).abs() <= 0.01 * participants);
    }

    #[test]
    fn test_summary_json_layout() {
        let p = pool(1000.0, 0.0);
        let summary = compute_summary(&p, vec![invest(&p, "Bob", 250.0)]);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["poolDetails"]["_id"], p.id.to_string());
        assert_eq!(json["investmentStatus"]["isFunded"], false);
        assert_eq!(json["adminContribution"]["amount"], 0.0);
        assert_eq!(json["investors"][0]["personName"], "Bob");
        assert_eq!(json["investors"][0]["poolId"], PoolId::from(p.id).to_string());
        assert_eq!(json["investors"][0]["sharePercentage"], 25.0);
        assert_eq!(json["investorCount"], 1);
        assert_eq!(json["distribution"]["slices"][1]["name"], "Investors");
    }
}
