//! Budget consumption classification.

use serde::{Deserialize, Serialize};

use crate::models::Budget;

/// How far through its allocation a budget is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStatus {
    /// At most 80% of the allocation has been spent.
    OnTrack,
    /// More than 80% but no more than 100% has been spent. Exactly 100% is
    /// still near-limit, not over.
    NearLimit,
    /// More than 100% of the allocation has been spent.
    OverBudget,
}

/// A budget's consumption as a percentage with its classification band.
///
/// Drives presentation only. It has no side effects and is recomputed on
/// every read from the budget's current `spent` value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetProgress {
    /// `spent / amount * 100`, or 0 for a zero allocation.
    pub percentage: f64,
    /// The classification band for the percentage.
    pub status: BudgetStatus,
}

/// Classify how much of `budget`'s allocation has been spent.
pub fn budget_progress(budget: &Budget) -> BudgetProgress {
    let percentage = if budget.amount > 0.0 {
        budget.spent / budget.amount * 100.0
    } else {
        0.0
    };

    let status = if percentage > 100.0 {
        BudgetStatus::OverBudget
    } else if percentage > 80.0 {
        BudgetStatus::NearLimit
    } else {
        BudgetStatus::OnTrack
    };

    BudgetProgress { percentage, status }
}

#[cfg(test)]
mod budget_progress_tests {
    use time::OffsetDateTime;

    use crate::{
        analytics::{BudgetStatus, budget_progress},
        models::{Budget, BudgetPeriod},
    };

    fn budget_with(amount: f64, spent: f64) -> Budget {
        Budget {
            id: 1,
            category: "food".to_string(),
            amount,
            month: 1,
            year: 2024,
            period: BudgetPeriod::Monthly,
            spent,
            created_at: OffsetDateTime::UNIX_EPOCH,
            updated_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn under_eighty_percent_is_on_track() {
        let progress = budget_progress(&budget_with(200.0, 100.0));

        assert_eq!(progress.percentage, 50.0);
        assert_eq!(progress.status, BudgetStatus::OnTrack);
    }

    #[test]
    fn exactly_eighty_percent_is_on_track() {
        let progress = budget_progress(&budget_with(200.0, 160.0));

        assert_eq!(progress.percentage, 80.0);
        assert_eq!(progress.status, BudgetStatus::OnTrack);
    }

    #[test]
    fn over_eighty_percent_is_near_limit() {
        let progress = budget_progress(&budget_with(200.0, 170.0));

        assert_eq!(progress.percentage, 85.0);
        assert_eq!(progress.status, BudgetStatus::NearLimit);
    }

    #[test]
    fn exactly_one_hundred_percent_is_near_limit() {
        // The over-budget boundary is strictly greater than 100.
        let progress = budget_progress(&budget_with(200.0, 200.0));

        assert_eq!(progress.percentage, 100.0);
        assert_eq!(progress.status, BudgetStatus::NearLimit);
    }

    #[test]
    fn over_one_hundred_percent_is_over_budget() {
        let progress = budget_progress(&budget_with(200.0, 250.0));

        assert_eq!(progress.percentage, 125.0);
        assert_eq!(progress.status, BudgetStatus::OverBudget);
    }

    #[test]
    fn zero_allocation_is_zero_percent() {
        let progress = budget_progress(&budget_with(0.0, 50.0));

        assert_eq!(progress.percentage, 0.0);
        assert_eq!(progress.status, BudgetStatus::OnTrack);
    }

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&BudgetStatus::OverBudget).unwrap(),
            "\"over-budget\""
        );
        assert_eq!(
            serde_json::to_string(&BudgetStatus::NearLimit).unwrap(),
            "\"near-limit\""
        );
        assert_eq!(
            serde_json::to_string(&BudgetStatus::OnTrack).unwrap(),
            "\"on-track\""
        );
    }
}
