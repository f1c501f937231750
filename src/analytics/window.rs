//! The trailing time window used to filter transactions for analytics.

use serde::Deserialize;
use time::{Date, Duration, Month};

use crate::models::Transaction;

/// A trailing time span ending at the current date.
///
/// The day-based windows subtract calendar days; [TimeWindow::OneYear]
/// subtracts one calendar year rather than 365 days.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TimeWindow {
    /// The last 7 calendar days.
    #[serde(rename = "7d")]
    SevenDays,
    /// The last 30 calendar days. The default selection.
    #[default]
    #[serde(rename = "30d")]
    ThirtyDays,
    /// The last 90 calendar days.
    #[serde(rename = "90d")]
    NinetyDays,
    /// The last calendar year.
    #[serde(rename = "1y")]
    OneYear,
}

impl TimeWindow {
    /// The earliest date included in the window ending at `today`.
    pub fn cutoff(self, today: Date) -> Date {
        match self {
            Self::SevenDays => today - Duration::days(7),
            Self::ThirtyDays => today - Duration::days(30),
            Self::NinetyDays => today - Duration::days(90),
            Self::OneYear => subtract_calendar_year(today),
        }
    }
}

/// The same calendar date one year earlier.
///
/// The year before a leap year is never a leap year, so Feb 29 falls back to
/// Feb 28.
fn subtract_calendar_year(date: Date) -> Date {
    date.replace_year(date.year() - 1).unwrap_or_else(|_| {
        Date::from_calendar_date(date.year() - 1, Month::February, 28)
            .expect("invalid leap day fallback date")
    })
}

/// The transactions dated within `window` of `today`.
///
/// A transaction is included iff its date is on or after the window's cutoff.
/// No upper bound is applied, so transactions dated in the future are always
/// included.
pub fn filter_by_window(
    transactions: &[Transaction],
    window: TimeWindow,
    today: Date,
) -> Vec<Transaction> {
    let cutoff = window.cutoff(today);

    transactions
        .iter()
        .filter(|transaction| transaction.date >= cutoff)
        .cloned()
        .collect()
}
