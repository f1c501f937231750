//! Monthly income and expense totals for the trend chart.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::{Date, Month};

use crate::models::{Transaction, TransactionType};

/// The income, expenses and net total for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// A human readable month label, e.g. "Jan 2024".
    pub month: String,
    /// The sum of income amounts in the month.
    pub income: f64,
    /// The sum of expense amounts in the month.
    pub expenses: f64,
    /// `income - expenses`.
    pub net: f64,
}

/// Group transactions into per-month buckets, earliest month first.
///
/// Buckets are keyed by the calendar month and year of the transaction date.
/// Months without any transactions are absent from the series rather than
/// zero-filled, so a window spanning three months with activity in two of
/// them produces exactly two buckets. The dashboard's trailing six month
/// series is the one place that zero-fills instead, see
/// [crate::dashboard::dashboard_report].
pub fn monthly_trend(transactions: &[Transaction]) -> Vec<MonthlySummary> {
    let mut buckets: BTreeMap<Date, (f64, f64)> = BTreeMap::new();

    for transaction in transactions {
        let month = transaction.date.replace_day(1).unwrap();
        let (income, expenses) = buckets.entry(month).or_insert((0.0, 0.0));

        match transaction.transaction_type {
            TransactionType::Income => *income += transaction.amount,
            TransactionType::Expense => *expenses += transaction.amount,
        }
    }

    buckets
        .into_iter()
        .map(|(month, (income, expenses))| MonthlySummary {
            month: month_label(month),
            income,
            expenses,
            net: income - expenses,
        })
        .collect()
}

/// Format a month as a label like "Jan 2024". The day component is ignored.
pub fn month_label(month: Date) -> String {
    format!("{} {}", month_abbrev(month.month()), month.year())
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
