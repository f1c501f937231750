//! The JSON route handlers for the REST API.

pub mod analytics;
pub mod budget;
pub mod category;
pub mod dashboard;
pub mod transaction;

use time::{Date, OffsetDateTime};

/// The current date in the server's local timezone, falling back to UTC when
/// the local offset cannot be determined.
pub(crate) fn local_date_today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}
