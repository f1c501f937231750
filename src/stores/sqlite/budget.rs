//! Implements a SQLite backed budget store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};
use time::{Date, Month, OffsetDateTime};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Budget, BudgetData, BudgetPeriod, DatabaseID},
    stores::BudgetStore,
};

const BUDGET_COLUMNS: &str = "id, category, amount, month, year, period, created_at, updated_at";

/// Stores budgets in a SQLite database.
///
/// The `spent` amount of a budget is never stored. Every read recomputes it
/// by summing the expense transactions whose category matches the budget and
/// whose date falls within the budget's calendar month, so the
/// [transaction table](crate::stores::sqlite::SQLiteTransactionStore) must be
/// set up in the same database.
#[derive(Debug, Clone)]
pub struct SQLiteBudgetStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteBudgetStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    /// Sum the expense transactions for `category` within the given calendar
    /// month.
    fn spent(
        connection: &Connection,
        category: &str,
        month: u8,
        year: i32,
    ) -> Result<f64, rusqlite::Error> {
        connection.query_row(
            "SELECT COALESCE(SUM(amount), 0.0) FROM \"transaction\"
             WHERE category = ?1 AND type = 'expense' AND date >= ?2 AND date < ?3",
            (category, month_start(year, month), next_month_start(year, month)),
            |row| row.get(0),
        )
    }

    /// Attach the computed `spent` amount to a stored budget row.
    fn with_spent(connection: &Connection, mut budget: Budget) -> Result<Budget, rusqlite::Error> {
        budget.spent = Self::spent(connection, &budget.category, budget.month, budget.year)?;

        Ok(budget)
    }
}

/// The first day of the given calendar month.
///
/// # Panics
/// Panics if `month` is outside 1-12. Callers must validate the month first,
/// e.g. via [BudgetData::validate].
fn month_start(year: i32, month: u8) -> Date {
    let month = Month::try_from(month).expect("invalid month number");

    Date::from_calendar_date(year, month, 1).expect("invalid month start date")
}

/// The first day of the month after the given calendar month.
fn next_month_start(year: i32, month: u8) -> Date {
    if month == 12 {
        month_start(year + 1, 1)
    } else {
        month_start(year, month + 1)
    }
}

impl BudgetStore for SQLiteBudgetStore {
    /// Create a new budget in the database.
    ///
    /// The unique index on `(category, month, year)` makes the insert an
    /// atomic insert-if-absent: of two concurrent creates for the same
    /// triple, exactly one succeeds.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DuplicateBudget] if a budget already exists for the
    ///   category, month and year in `data`,
    /// - [Error::InvalidAmount] or [Error::InvalidMonth] if `data` fails
    ///   validation,
    /// - or [Error::SqlError] if there is some other SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the same thread.
    fn create(&mut self, data: BudgetData) -> Result<Budget, Error> {
        data.validate()?;

        let now = OffsetDateTime::now_utc();
        let connection = self.connection.lock().unwrap();

        let budget = connection
            .prepare(&format!(
                "INSERT INTO budget (category, amount, month, year, period, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                 RETURNING {BUDGET_COLUMNS}"
            ))?
            .query_row(
                (
                    &data.category,
                    data.amount,
                    data.month,
                    data.year,
                    BudgetPeriod::Monthly,
                    now,
                    now,
                ),
                Self::map_row,
            )
            .map_err(|error| match error {
                // Code 2067 occurs when a UNIQUE constraint failed.
                rusqlite::Error::SqliteFailure(sql_error, Some(_))
                    if sql_error.extended_code == 2067 =>
                {
                    Error::DuplicateBudget
                }
                error => error.into(),
            })?;

        Ok(Self::with_spent(&connection, budget)?)
    }

    /// Retrieve every budget in the database with its `spent` amount computed.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is a SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the same thread.
    fn list(&self) -> Result<Vec<Budget>, Error> {
        let connection = self.connection.lock().unwrap();

        let budgets: Vec<Budget> = connection
            .prepare(&format!(
                "SELECT {BUDGET_COLUMNS} FROM budget ORDER BY year, month, category"
            ))?
            .query_map([], Self::map_row)?
            .collect::<Result<_, _>>()?;

        budgets
            .into_iter()
            .map(|budget| Self::with_spent(&connection, budget).map_err(Error::from))
            .collect()
    }

    /// Change the allocation ceiling of the budget `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::UpdateMissingBudget] if `id` does not refer to a valid
    ///   budget,
    /// - [Error::InvalidAmount] if `amount` is zero or negative,
    /// - or [Error::SqlError] if there is some other SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the same thread.
    fn update_amount(&mut self, id: DatabaseID, amount: f64) -> Result<Budget, Error> {
        if amount <= 0.0 {
            return Err(Error::InvalidAmount(amount));
        }

        let now = OffsetDateTime::now_utc();
        let connection = self.connection.lock().unwrap();

        let budget = connection
            .prepare(&format!(
                "UPDATE budget SET amount = ?1, updated_at = ?2 WHERE id = ?3
                 RETURNING {BUDGET_COLUMNS}"
            ))?
            .query_row((amount, now, id), Self::map_row)
            .map_err(|error| match error {
                rusqlite::Error::QueryReturnedNoRows => Error::UpdateMissingBudget,
                error => error.into(),
            })?;

        Ok(Self::with_spent(&connection, budget)?)
    }

    /// Remove the budget `id` from the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DeleteMissingBudget] if `id` does not refer to a valid
    ///   budget,
    /// - or [Error::SqlError] if there is some other SQL error.
    ///
    /// # Panics
    /// Panics if the lock for the database connection is already held by the same thread.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error> {
        let rows_affected = self
            .connection
            .lock()
            .unwrap()
            .execute("DELETE FROM budget WHERE id = ?1", [id])?;

        if rows_affected == 0 {
            return Err(Error::DeleteMissingBudget);
        }

        Ok(())
    }
}

impl CreateTable for SQLiteBudgetStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS budget (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    category TEXT NOT NULL,
                    amount REAL NOT NULL,
                    month INTEGER NOT NULL,
                    year INTEGER NOT NULL,
                    period TEXT NOT NULL,
                    created_at TEXT NOT NULL,
                    updated_at TEXT NOT NULL,
                    UNIQUE(category, month, year)
                    )",
            (),
        )?;

        // Ensure the sequence starts at 1
        connection.execute(
            "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('budget', 0)",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteBudgetStore {
    type ReturnType = Budget;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Budget {
            id: row.get(offset)?,
            category: row.get(offset + 1)?,
            amount: row.get(offset + 2)?,
            month: row.get(offset + 3)?,
            year: row.get(offset + 4)?,
            period: row.get(offset + 5)?,
            spent: 0.0,
            created_at: row.get(offset + 6)?,
            updated_at: row.get(offset + 7)?,
        })
    }
}
