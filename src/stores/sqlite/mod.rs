//! SQLite backed implementations of the store traits.

mod budget;
mod transaction;

pub use budget::SQLiteBudgetStore;
pub use transaction::SQLiteTransactionStore;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{AppState, Error, db::initialize};

/// The [AppState] type used by the server binary and route tests.
pub type SQLAppState = AppState<SQLiteTransactionStore, SQLiteBudgetStore>;

/// Create an [AppState] with SQLite stores sharing `db_connection`.
///
/// This function will initialize the database by adding the tables for the
/// domain models.
///
/// # Errors
/// Returns an error if the database cannot be initialized.
pub fn create_app_state(db_connection: Connection) -> Result<SQLAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));

    Ok(AppState {
        transaction_store: SQLiteTransactionStore::new(connection.clone()),
        budget_store: SQLiteBudgetStore::new(connection),
    })
}
