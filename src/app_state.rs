//! Implements a struct that holds the state of the REST server.

/// The state of the REST server.
///
/// Generic over the store implementations so that route handlers depend on
/// the [store traits](crate::stores) rather than SQLite directly. The server
/// binary instantiates it with the SQLite stores via
/// [create_app_state](crate::stores::sqlite::create_app_state).
#[derive(Debug, Clone)]
pub struct AppState<T, B> {
    /// Persists the transaction records.
    pub transaction_store: T,
    /// Persists the budget allocations.
    pub budget_store: B,
}
