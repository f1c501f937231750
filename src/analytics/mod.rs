//! The analytics aggregation engine.
//!
//! Pure functions that transform a transaction list plus a selected
//! [TimeWindow] into category breakdowns, monthly trend series and derived
//! insight metrics. The engine owns no state and performs no I/O: callers
//! fetch the transactions and thread the window selection in as an explicit
//! parameter, so the same inputs always produce the same output.

mod breakdown;
mod insights;
mod progress;
mod trend;
mod window;

pub use breakdown::{CategorySpending, category_breakdown};
pub use insights::{Insights, derive_insights, savings_rate};
pub use progress::{BudgetProgress, BudgetStatus, budget_progress};
pub use trend::{MonthlySummary, month_label, monthly_trend};
pub use window::{TimeWindow, filter_by_window};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::models::{Transaction, TransactionType};

/// Sum the amounts of all income transactions.
pub fn total_income(transactions: &[Transaction]) -> f64 {
    total_of_type(transactions, TransactionType::Income)
}

/// Sum the amounts of all expense transactions.
pub fn total_expenses(transactions: &[Transaction]) -> f64 {
    total_of_type(transactions, TransactionType::Expense)
}

fn total_of_type(transactions: &[Transaction], transaction_type: TransactionType) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.transaction_type == transaction_type)
        .map(|transaction| transaction.amount)
        .sum()
}

/// Everything the analytics view needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Expense totals per category within the window, largest first.
    pub category_breakdown: Vec<CategorySpending>,
    /// Income, expenses and net per calendar month within the window.
    pub monthly_trend: Vec<MonthlySummary>,
    /// Derived metrics. Note that the savings rate intentionally ignores the
    /// window, see [derive_insights].
    pub insights: Insights,
}

/// Compute the full analytics report for the transactions within `window` of
/// `today`.
pub fn analytics_report(
    transactions: &[Transaction],
    window: TimeWindow,
    today: Date,
) -> AnalyticsReport {
    let windowed = filter_by_window(transactions, window, today);
    let category_breakdown = category_breakdown(&windowed);
    let insights = derive_insights(transactions, &windowed, &category_breakdown);

    AnalyticsReport {
        monthly_trend: monthly_trend(&windowed),
        category_breakdown,
        insights,
    }
}
