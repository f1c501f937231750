//! Derived metrics shown as insight cards on the analytics view.

use serde::{Deserialize, Serialize};

use crate::{
    analytics::{CategorySpending, total_expenses, total_income},
    models::Transaction,
};

/// The fixed divisor for the average daily spending metric.
///
/// The average always divides by 30 regardless of the selected window's
/// actual length, so it reads as "per day of a typical month" rather than a
/// true daily average over the window.
const AVERAGE_SPENDING_DAYS: f64 = 30.0;

/// Headline metrics derived from aggregated transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    /// The category with the highest expenses in the selected window, or
    /// `None` when the window contains no expenses.
    pub top_category: Option<CategorySpending>,
    /// The window's total expenses divided by 30.
    ///
    /// Unlike the breakdown this counts every expense in the window,
    /// including those whose category ID is not in the registry.
    pub average_daily_spending: f64,
    /// The percentage of all-time income that was not spent.
    ///
    /// Unlike the other metrics this is computed over the entire transaction
    /// history, not the selected window, so it does not move when the window
    /// changes.
    pub savings_rate: f64,
}

/// Derive the insight metrics from the full transaction history, the
/// windowed transactions and the windowed category breakdown.
pub fn derive_insights(
    all_transactions: &[Transaction],
    windowed: &[Transaction],
    category_breakdown: &[CategorySpending],
) -> Insights {
    Insights {
        top_category: category_breakdown.first().cloned(),
        average_daily_spending: total_expenses(windowed) / AVERAGE_SPENDING_DAYS,
        savings_rate: savings_rate(all_transactions),
    }
}

/// The percentage of income that was not spent, over `transactions`.
///
/// Defined as 0 when there is no income, so the rate is never NaN or
/// infinite. A negative rate means more was spent than earned.
pub fn savings_rate(transactions: &[Transaction]) -> f64 {
    let income = total_income(transactions);

    if income > 0.0 {
        (income - total_expenses(transactions)) / income * 100.0
    } else {
        0.0
    }
}
