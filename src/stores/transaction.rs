//! Defines the transaction store trait.

use crate::{
    Error,
    models::{DatabaseID, Transaction, TransactionData},
};

/// Handles the creation and retrieval of transactions.
///
/// The store exposes no server-side filtering: [TransactionStore::list]
/// returns every transaction, and the [analytics](crate::analytics) functions
/// filter and aggregate the full list in-process.
pub trait TransactionStore {
    /// Create a new transaction in the store.
    ///
    /// The store assigns the ID and the bookkeeping timestamps.
    ///
    /// # Errors
    /// Returns an [Error::InvalidAmount] or [Error::EmptyDescription] if
    /// `data` fails validation, or [Error::SqlError] for unexpected SQL
    /// errors.
    fn create(&mut self, data: TransactionData) -> Result<Transaction, Error>;

    /// Retrieve every transaction in the store, most recent date first.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] for unexpected SQL errors.
    fn list(&self) -> Result<Vec<Transaction>, Error>;

    /// Replace the business fields of the transaction `id` with `data` and
    /// bump its `updated_at` timestamp.
    ///
    /// # Errors
    /// Returns an [Error::UpdateMissingTransaction] if `id` does not refer to
    /// a transaction in the store, an [Error::InvalidAmount] or
    /// [Error::EmptyDescription] if `data` fails validation, or
    /// [Error::SqlError] for unexpected SQL errors.
    fn update(&mut self, id: DatabaseID, data: TransactionData) -> Result<Transaction, Error>;

    /// Remove the transaction `id` from the store.
    ///
    /// # Errors
    /// Returns an [Error::DeleteMissingTransaction] if `id` does not refer to
    /// a transaction in the store, or [Error::SqlError] for unexpected SQL
    /// errors.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error>;
}
