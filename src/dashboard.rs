//! Aggregates for the overview dashboard.
//!
//! The dashboard intentionally diverges from the analytics view: its totals
//! cover the entire transaction history rather than a selected window, and
//! its monthly series is a fixed trailing six calendar months with
//! zero-filled gaps rather than only the months that have transactions.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    analytics::{MonthlySummary, month_label, total_expenses, total_income},
    category::{CATEGORIES, DEFAULT_CATEGORY_ICON, INCOME_CATEGORY, category_color, get_category},
    models::{Transaction, TransactionType},
};

/// The number of trailing calendar months in the dashboard series, including
/// the current month.
const TRAILING_MONTHS: i32 = 6;

/// The number of recent transactions listed on the dashboard.
const RECENT_TRANSACTION_COUNT: usize = 5;

/// All-time income, expenses and balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// The sum of all income amounts.
    pub total_income: f64,
    /// The sum of all expense amounts.
    pub total_expenses: f64,
    /// `total_income - total_expenses`.
    pub balance: f64,
}

/// One slice of the dashboard's expense pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    /// The category's display name.
    pub name: String,
    /// The all-time expenses in the category.
    pub value: f64,
    /// The category's chart color.
    pub color: String,
}

/// A transaction on the dashboard's recent list, with its category's display
/// data resolved.
///
/// Transactions only store a category ID, which may no longer be in the
/// registry; the dashboard resolves the name, icon and color at read time so
/// stale IDs still render, falling back to the raw ID as the name and the
/// neutral icon and color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentTransaction {
    /// The transaction itself.
    #[serde(flatten)]
    pub transaction: Transaction,
    /// The category's display name, or the raw category ID when unknown.
    pub category_name: String,
    /// The category's icon glyph.
    pub category_icon: String,
    /// The category's chart color.
    pub category_color: String,
}

/// Everything the overview dashboard needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// All-time totals.
    pub summary: DashboardSummary,
    /// One bucket per trailing calendar month, oldest first, zero-filled.
    pub monthly: Vec<MonthlySummary>,
    /// All-time expenses per category, income excluded, zero slices dropped.
    pub expense_chart: Vec<ChartSlice>,
    /// The most recent transactions by date, newest first.
    pub recent_transactions: Vec<RecentTransaction>,
}

/// Compute the dashboard aggregates over the entire transaction history.
///
/// `today` anchors the trailing six month series; everything else ignores it.
pub fn dashboard_report(transactions: &[Transaction], today: Date) -> DashboardReport {
    let total_income = total_income(transactions);
    let total_expenses = total_expenses(transactions);

    DashboardReport {
        summary: DashboardSummary {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        },
        monthly: trailing_monthly_series(transactions, today),
        expense_chart: expense_chart(transactions),
        recent_transactions: recent_transactions(transactions),
    }
}

/// One bucket per trailing calendar month, oldest first.
///
/// Unlike [crate::analytics::monthly_trend], months without transactions are
/// included with zeroed totals so the chart always shows six bars.
fn trailing_monthly_series(transactions: &[Transaction], today: Date) -> Vec<MonthlySummary> {
    (0..TRAILING_MONTHS)
        .rev()
        .map(|months_back| {
            let month = subtract_months(today.replace_day(1).unwrap(), months_back);

            let mut income = 0.0;
            let mut expenses = 0.0;
            for transaction in transactions
                .iter()
                .filter(|transaction| transaction.date.replace_day(1).unwrap() == month)
            {
                match transaction.transaction_type {
                    TransactionType::Income => income += transaction.amount,
                    TransactionType::Expense => expenses += transaction.amount,
                }
            }

            MonthlySummary {
                month: month_label(month),
                income,
                expenses,
                net: income - expenses,
            }
        })
        .collect()
}

/// The first day of the month `count` calendar months before `month`.
fn subtract_months(month: Date, count: i32) -> Date {
    let months_since_epoch = month.year() * 12 + month.month() as i32 - 1 - count;
    let year = months_since_epoch.div_euclid(12);
    let month_number = months_since_epoch.rem_euclid(12) as u8 + 1;

    Date::from_calendar_date(
        year,
        time::Month::try_from(month_number).expect("invalid month number"),
        1,
    )
    .expect("invalid month start date")
}

/// All-time expenses per category for the pie chart.
///
/// The income category is skipped since it never holds expenses, and
/// categories without expenses are dropped.
fn expense_chart(transactions: &[Transaction]) -> Vec<ChartSlice> {
    CATEGORIES
        .iter()
        .filter(|category| category.id != INCOME_CATEGORY)
        .map(|category| {
            let value = transactions
                .iter()
                .filter(|transaction| {
                    transaction.transaction_type == TransactionType::Expense
                        && transaction.category == category.id
                })
                .map(|transaction| transaction.amount)
                .sum();

            ChartSlice {
                name: category.name.to_string(),
                value,
                color: category.color.to_string(),
            }
        })
        .filter(|slice| slice.value > 0.0)
        .collect()
}

/// The five most recent transactions by date, newest first, with their
/// category display data resolved.
fn recent_transactions(transactions: &[Transaction]) -> Vec<RecentTransaction> {
    let mut recent = transactions.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(RECENT_TRANSACTION_COUNT);

    recent.into_iter().map(resolve_category_display).collect()
}

fn resolve_category_display(transaction: Transaction) -> RecentTransaction {
    let category = get_category(&transaction.category);

    RecentTransaction {
        category_name: category
            .map_or_else(|| transaction.category.clone(), |entry| entry.name.to_string()),
        category_icon: category
            .map_or(DEFAULT_CATEGORY_ICON, |entry| entry.icon)
            .to_string(),
        category_color: category_color(&transaction.category).to_string(),
        transaction,
    }
}

#[cfg(test)]
mod dashboard_report_tests {
    use time::macros::date;

    use crate::{
        category::{DEFAULT_CATEGORY_COLOR, DEFAULT_CATEGORY_ICON},
        dashboard::dashboard_report,
        models::TransactionType,
        test_utils::create_test_transaction,
    };

    #[test]
    fn summary_covers_the_entire_history() {
        // One transaction far outside any analytics window.
        let transactions = vec![
            create_test_transaction(
                1000.0,
                "income",
                date!(2020 - 06 - 01),
                TransactionType::Income,
            ),
            create_test_transaction(
                150.0,
                "food",
                date!(2024 - 01 - 15),
                TransactionType::Expense,
            ),
        ];

        let report = dashboard_report(&transactions, date!(2024 - 01 - 31));

        assert_eq!(report.summary.total_income, 1000.0);
        assert_eq!(report.summary.total_expenses, 150.0);
        assert_eq!(report.summary.balance, 850.0);
    }

    #[test]
    fn monthly_series_zero_fills_gap_months() {
        let transactions = vec![
            create_test_transaction(
                100.0,
                "food",
                date!(2024 - 03 - 15),
                TransactionType::Expense,
            ),
            create_test_transaction(
                200.0,
                "income",
                date!(2024 - 06 - 01),
                TransactionType::Income,
            ),
        ];

        let report = dashboard_report(&transactions, date!(2024 - 06 - 15));

        let months: Vec<&str> = report
            .monthly
            .iter()
            .map(|bucket| bucket.month.as_str())
            .collect();
        assert_eq!(
            months,
            vec![
                "Jan 2024", "Feb 2024", "Mar 2024", "Apr 2024", "May 2024", "Jun 2024"
            ]
        );

        assert_eq!(report.monthly[2].expenses, 100.0);
        assert_eq!(report.monthly[5].income, 200.0);
        // Gap months are present with zeroed totals.
        assert_eq!(report.monthly[3].income, 0.0);
        assert_eq!(report.monthly[3].expenses, 0.0);
        assert_eq!(report.monthly[3].net, 0.0);
    }

    #[test]
    fn monthly_series_crosses_year_boundaries() {
        let report = dashboard_report(&[], date!(2024 - 02 - 10));

        let months: Vec<&str> = report
            .monthly
            .iter()
            .map(|bucket| bucket.month.as_str())
            .collect();
        assert_eq!(
            months,
            vec![
                "Sep 2023", "Oct 2023", "Nov 2023", "Dec 2023", "Jan 2024", "Feb 2024"
            ]
        );
    }

    #[test]
    fn expense_chart_skips_income_and_empty_categories() {
        let transactions = vec![
            create_test_transaction(
                100.0,
                "food",
                date!(2024 - 01 - 15),
                TransactionType::Expense,
            ),
            create_test_transaction(
                1000.0,
                "income",
                date!(2024 - 01 - 01),
                TransactionType::Income,
            ),
        ];

        let report = dashboard_report(&transactions, date!(2024 - 01 - 31));

        assert_eq!(report.expense_chart.len(), 1);
        assert_eq!(report.expense_chart[0].name, "Food & Dining");
        assert_eq!(report.expense_chart[0].value, 100.0);
    }

    #[test]
    fn recent_transactions_are_newest_first_and_capped_at_five() {
        let transactions: Vec<_> = (1..=7)
            .map(|day| {
                create_test_transaction(
                    day as f64,
                    "food",
                    date!(2024 - 01 - 01).replace_day(day).unwrap(),
                    TransactionType::Expense,
                )
            })
            .collect();

        let report = dashboard_report(&transactions, date!(2024 - 01 - 31));

        assert_eq!(report.recent_transactions.len(), 5);
        let days: Vec<u8> = report
            .recent_transactions
            .iter()
            .map(|recent| recent.transaction.date.day())
            .collect();
        assert_eq!(days, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn recent_transactions_resolve_category_display_data() {
        let transactions = vec![
            create_test_transaction(
                20.0,
                "food",
                date!(2024 - 01 - 15),
                TransactionType::Expense,
            ),
            // A category ID that has left the registry.
            create_test_transaction(
                15.0,
                "subscriptions",
                date!(2024 - 01 - 10),
                TransactionType::Expense,
            ),
        ];

        let report = dashboard_report(&transactions, date!(2024 - 01 - 31));

        let food = &report.recent_transactions[0];
        assert_eq!(food.category_name, "Food & Dining");
        assert_eq!(food.category_icon, "🍕");
        assert_eq!(food.category_color, "#FF6B6B");

        let unknown = &report.recent_transactions[1];
        assert_eq!(unknown.category_name, "subscriptions");
        assert_eq!(unknown.category_icon, DEFAULT_CATEGORY_ICON);
        assert_eq!(unknown.category_color, DEFAULT_CATEGORY_COLOR);
    }

    #[test]
    fn report_over_empty_list_has_zeroed_summary() {
        let report = dashboard_report(&[], date!(2024 - 01 - 31));

        assert_eq!(report.summary.total_income, 0.0);
        assert_eq!(report.summary.total_expenses, 0.0);
        assert_eq!(report.summary.balance, 0.0);
        assert!(report.expense_chart.is_empty());
        assert!(report.recent_transactions.is_empty());
        assert_eq!(report.monthly.len(), 6);
    }
}
