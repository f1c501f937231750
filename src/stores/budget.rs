//! Defines the budget store trait.

use crate::{
    Error,
    models::{Budget, BudgetData, DatabaseID},
};

/// Handles the creation and retrieval of budgets.
///
/// A budget's `spent` field is derived data: implementers must compute it at
/// read time from the expense transactions in the budget's category and
/// month, never store it. Two reads may therefore observe different values
/// if a transaction is inserted between them; there is no snapshot isolation.
pub trait BudgetStore {
    /// Create a new budget in the store.
    ///
    /// Implementers must enforce the one-budget-per-`(category, month, year)`
    /// invariant atomically, so that two concurrent creates for the same
    /// triple cannot both succeed.
    ///
    /// # Errors
    /// Returns an [Error::DuplicateBudget] if a budget already exists for the
    /// category, month and year in `data`, an [Error::InvalidAmount] or
    /// [Error::InvalidMonth] if `data` fails validation, or
    /// [Error::SqlError] for unexpected SQL errors.
    fn create(&mut self, data: BudgetData) -> Result<Budget, Error>;

    /// Retrieve every budget in the store with its `spent` amount computed.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] for unexpected SQL errors.
    fn list(&self) -> Result<Vec<Budget>, Error>;

    /// Change the allocation ceiling of the budget `id` and bump its
    /// `updated_at` timestamp.
    ///
    /// # Errors
    /// Returns an [Error::UpdateMissingBudget] if `id` does not refer to a
    /// budget in the store, an [Error::InvalidAmount] if `amount` is zero or
    /// negative, or [Error::SqlError] for unexpected SQL errors.
    fn update_amount(&mut self, id: DatabaseID, amount: f64) -> Result<Budget, Error>;

    /// Remove the budget `id` from the store.
    ///
    /// # Errors
    /// Returns an [Error::DeleteMissingBudget] if `id` does not refer to a
    /// budget in the store, or [Error::SqlError] for unexpected SQL errors.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error>;
}
