/*! This module defines and implements traits for interacting with the application's database. */

use rusqlite::{Connection, Row};

use crate::{
    Error,
    stores::sqlite::{SQLiteBudgetStore, SQLiteTransactionStore},
};

/// Create the tables for the domain models.
///
/// This function is idempotent: tables that already exist are left untouched.
///
/// # Errors
/// Returns an [Error::SqlError] if a table could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    SQLiteTransactionStore::create_table(connection)?;
    SQLiteBudgetStore::create_table(connection)?;

    Ok(())
}

/// A trait for adding an object schema to a database.
pub trait CreateTable {
    /// Create a table for the model.
    ///
    /// # Errors
    /// Returns an error if there is an SQL error.
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error>;
}

/// A trait for mapping from a `rusqlite::Row` from a SQLite database to a concrete rust type.
///
/// # Examples
/// ```
/// use rusqlite::{Connection, Error, Row};
///
/// use finance_tracker::db::{CreateTable, MapRow};
///
/// struct Foo {
///     id: i64,
///     desc: String,
/// }
///
/// impl CreateTable for Foo {
///     fn create_table(connection: &Connection) -> Result<(), Error> {
///         connection.execute(
///             "CREATE TABLE foo (id INTEGER PRIMARY KEY, desc TEXT NOT NULL)",
///             (),
///         )?;
///
///         Ok(())
///     }
/// }
///
/// impl MapRow for Foo {
///     type ReturnType = Self;
///
///     fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self, Error> {
///         Ok(Self {
///             id: row.get(offset)?,
///             desc: row.get(offset + 1)?,
///         })
///     }
/// }
/// ```
pub trait MapRow {
    /// The type that the row is mapped to.
    type ReturnType;

    /// Map `row` to [MapRow::ReturnType], starting at the first column.
    ///
    /// # Errors
    /// Returns an error if a column could not be read or converted.
    fn map_row(row: &Row) -> Result<Self::ReturnType, rusqlite::Error> {
        Self::map_row_with_offset(row, 0)
    }

    /// Map `row` to [MapRow::ReturnType], starting at the column `offset`.
    ///
    /// # Errors
    /// Returns an error if a column could not be read or converted.
    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error>;
}

#[cfg(test)]
mod initialize_tests {
    use rusqlite::Connection;

    use crate::db::initialize;

    #[test]
    fn initialize_creates_tables() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).expect("could not initialize database");

        let table_count: i64 = connection
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('transaction', 'budget')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table_count, 2);
    }

    #[test]
    fn initialize_is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).expect("could not initialize database");
        initialize(&connection).expect("initializing twice should not fail");
    }
}
