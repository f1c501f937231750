//! Helpers for constructing test fixtures.

use time::{Date, OffsetDateTime};

use crate::models::{Transaction, TransactionType};

/// Create a transaction without going through a store.
///
/// The ID and bookkeeping timestamps are fixed values since the aggregation
/// functions never read them.
pub(crate) fn create_test_transaction(
    amount: f64,
    category: &str,
    date: Date,
    transaction_type: TransactionType,
) -> Transaction {
    Transaction {
        id: 0,
        amount,
        description: format!("{category} transaction"),
        category: category.to_string(),
        date,
        transaction_type,
        created_at: OffsetDateTime::UNIX_EPOCH,
        updated_at: OffsetDateTime::UNIX_EPOCH,
    }
}
