//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};
use time::OffsetDateTime;

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{DatabaseID, Transaction, TransactionData},
    stores::TransactionStore,
};

const TRANSACTION_COLUMNS: &str =
    "id, amount, description, category, date, type, created_at, updated_at";

/// Stores transactions in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Create a new transaction in the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidAmount] or [Error::EmptyDescription] if `data` fails
    ///   validation,
    /// - or [Error::SqlError] if there is some other SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the same thread.
    fn create(&mut self, data: TransactionData) -> Result<Transaction, Error> {
        data.validate()?;

        let now = OffsetDateTime::now_utc();
        let connection = self.connection.lock().unwrap();

        let transaction = connection
            .prepare(&format!(
                "INSERT INTO \"transaction\" (amount, description, category, date, type, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 RETURNING {TRANSACTION_COLUMNS}"
            ))?
            .query_row(
                (
                    data.amount,
                    &data.description,
                    &data.category,
                    data.date,
                    data.transaction_type,
                    now,
                    now,
                ),
                Self::map_row,
            )?;

        Ok(transaction)
    }

    /// Retrieve every transaction in the database, most recent date first.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is a SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the same thread.
    fn list(&self) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(&format!(
                "SELECT {TRANSACTION_COLUMNS} FROM \"transaction\" ORDER BY date DESC, id DESC"
            ))?
            .query_map([], Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    /// Replace the business fields of the transaction `id` with `data`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::UpdateMissingTransaction] if `id` does not refer to a valid
    ///   transaction,
    /// - [Error::InvalidAmount] or [Error::EmptyDescription] if `data` fails
    ///   validation,
    /// - or [Error::SqlError] if there is some other SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the same thread.
    fn update(&mut self, id: DatabaseID, data: TransactionData) -> Result<Transaction, Error> {
        data.validate()?;

        let now = OffsetDateTime::now_utc();
        let connection = self.connection.lock().unwrap();

        connection
            .prepare(&format!(
                "UPDATE \"transaction\"
                 SET amount = ?1, description = ?2, category = ?3, date = ?4, type = ?5, updated_at = ?6
                 WHERE id = ?7
                 RETURNING {TRANSACTION_COLUMNS}"
            ))?
            .query_row(
                (
                    data.amount,
                    &data.description,
                    &data.category,
                    data.date,
                    data.transaction_type,
                    now,
                    id,
                ),
                Self::map_row,
            )
            .map_err(|error| match error {
                rusqlite::Error::QueryReturnedNoRows => Error::UpdateMissingTransaction,
                error => error.into(),
            })
    }

    /// Remove the transaction `id` from the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DeleteMissingTransaction] if `id` does not refer to a valid
    ///   transaction,
    /// - or [Error::SqlError] if there is some other SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the same thread.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error> {
        let rows_affected = self
            .connection
            .lock()
            .unwrap()
            .execute("DELETE FROM \"transaction\" WHERE id = ?1", [id])?;

        if rows_affected == 0 {
            return Err(Error::DeleteMissingTransaction);
        }

        Ok(())
    }
}

impl CreateTable for SQLiteTransactionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS \"transaction\" (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    amount REAL NOT NULL,
                    description TEXT NOT NULL,
                    category TEXT NOT NULL,
                    date TEXT NOT NULL,
                    type TEXT NOT NULL,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                    )",
            (),
        )?;

        // Ensure the sequence starts at 1
        connection.execute(
            "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('transaction', 0)",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteTransactionStore {
    type ReturnType = Transaction;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Transaction {
            id: row.get(offset)?,
            amount: row.get(offset + 1)?,
            description: row.get(offset + 2)?,
            category: row.get(offset + 3)?,
            date: row.get(offset + 4)?,
            transaction_type: row.get(offset + 5)?,
            created_at: row.get(offset + 6)?,
            updated_at: row.get(offset + 7)?,
        })
    }
}

#[cfg(test)]
mod sqlite_transaction_store_tests {
    use time::macros::date;

    use crate::{
        Error,
        models::{TransactionData, TransactionType},
        stores::{
            TransactionStore,
            sqlite::{SQLAppState, create_app_state},
        },
    };

    fn get_app_state() -> SQLAppState {
        let connection = rusqlite::Connection::open_in_memory().unwrap();
        create_app_state(connection).unwrap()
    }

    fn expense(amount: f64, category: &str, date: time::Date) -> TransactionData {
        TransactionData {
            amount,
            description: format!("{category} purchase"),
            category: category.to_string(),
            date,
            transaction_type: TransactionType::Expense,
        }
    }

    #[test]
    fn create_succeeds() {
        let mut state = get_app_state();
        let data = expense(12.3, "food", date!(2024 - 01 - 15));

        let transaction = state
            .transaction_store
            .create(data.clone())
            .expect("could not create transaction");

        assert_eq!(transaction.amount, data.amount);
        assert_eq!(transaction.description, data.description);
        assert_eq!(transaction.category, data.category);
        assert_eq!(transaction.date, data.date);
        assert_eq!(transaction.transaction_type, data.transaction_type);
        assert_eq!(transaction.created_at, transaction.updated_at);
    }

    #[test]
    fn create_fails_on_non_positive_amount() {
        let mut state = get_app_state();

        let result = state
            .transaction_store
            .create(expense(-5.0, "food", date!(2024 - 01 - 15)));

        assert_eq!(result, Err(Error::InvalidAmount(-5.0)));
    }

    #[test]
    fn create_fails_on_empty_description() {
        let mut state = get_app_state();
        let data = TransactionData {
            description: "".to_string(),
            ..expense(5.0, "food", date!(2024 - 01 - 15))
        };

        let result = state.transaction_store.create(data);

        assert_eq!(result, Err(Error::EmptyDescription));
    }

    #[test]
    fn list_returns_most_recent_date_first() {
        let mut state = get_app_state();
        let store = &mut state.transaction_store;
        store
            .create(expense(10.0, "food", date!(2024 - 01 - 15)))
            .unwrap();
        store
            .create(expense(20.0, "transport", date!(2024 - 03 - 02)))
            .unwrap();
        store
            .create(expense(30.0, "bills", date!(2024 - 02 - 10)))
            .unwrap();

        let transactions = store.list().expect("could not list transactions");

        let dates: Vec<_> = transactions
            .iter()
            .map(|transaction| transaction.date)
            .collect();
        assert_eq!(
            dates,
            vec![
                date!(2024 - 03 - 02),
                date!(2024 - 02 - 10),
                date!(2024 - 01 - 15)
            ]
        );
    }

    #[test]
    fn update_replaces_fields_and_bumps_updated_at() {
        let mut state = get_app_state();
        let store = &mut state.transaction_store;
        let original = store
            .create(expense(10.0, "food", date!(2024 - 01 - 15)))
            .unwrap();

        let updated = store
            .update(
                original.id,
                TransactionData {
                    amount: 99.0,
                    description: "monthly salary".to_string(),
                    category: "income".to_string(),
                    date: date!(2024 - 02 - 01),
                    transaction_type: TransactionType::Income,
                },
            )
            .expect("could not update transaction");

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.amount, 99.0);
        assert_eq!(updated.description, "monthly salary");
        assert_eq!(updated.category, "income");
        assert_eq!(updated.date, date!(2024 - 02 - 01));
        assert_eq!(updated.transaction_type, TransactionType::Income);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at >= original.updated_at);
    }

    #[test]
    fn update_fails_on_missing_transaction() {
        let mut state = get_app_state();

        let result = state
            .transaction_store
            .update(999, expense(10.0, "food", date!(2024 - 01 - 15)));

        assert_eq!(result, Err(Error::UpdateMissingTransaction));
    }

    #[test]
    fn delete_removes_transaction() {
        let mut state = get_app_state();
        let store = &mut state.transaction_store;
        let transaction = store
            .create(expense(10.0, "food", date!(2024 - 01 - 15)))
            .unwrap();

        store
            .delete(transaction.id)
            .expect("could not delete transaction");

        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn delete_fails_on_missing_transaction() {
        let mut state = get_app_state();

        let result = state.transaction_store.delete(999);

        assert_eq!(result, Err(Error::DeleteMissingTransaction));
    }
}
