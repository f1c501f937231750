//! This file defines the API routes for the transaction type.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    models::{DatabaseID, TransactionData},
    stores::{BudgetStore, TransactionStore},
};

/// A route handler for listing all transactions, most recent date first.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn list_transactions<T, B>(State(state): State<AppState<T, B>>) -> Response
where
    T: TransactionStore + Send + Sync,
    B: BudgetStore + Send + Sync,
{
    match state.transaction_store.list() {
        Ok(transactions) => (StatusCode::OK, Json(transactions)).into_response(),
        Err(error) => error.into_response(),
    }
}

/// A route handler for creating a new transaction.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn create_transaction<T, B>(
    State(mut state): State<AppState<T, B>>,
    Json(data): Json<TransactionData>,
) -> Response
where
    T: TransactionStore + Send + Sync,
    B: BudgetStore + Send + Sync,
{
    match state.transaction_store.create(data) {
        Ok(transaction) => (StatusCode::CREATED, Json(transaction)).into_response(),
        Err(error) => error.into_response(),
    }
}

/// A route handler for replacing the fields of an existing transaction.
///
/// This function will return the status code 404 if the requested resource
/// does not exist (e.g., not created yet).
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn update_transaction<T, B>(
    State(mut state): State<AppState<T, B>>,
    Path(transaction_id): Path<DatabaseID>,
    Json(data): Json<TransactionData>,
) -> Response
where
    T: TransactionStore + Send + Sync,
    B: BudgetStore + Send + Sync,
{
    match state.transaction_store.update(transaction_id, data) {
        Ok(transaction) => (StatusCode::OK, Json(transaction)).into_response(),
        Err(error) => error.into_response(),
    }
}

/// A route handler for deleting a transaction.
///
/// This function will return the status code 404 if the requested resource
/// does not exist (e.g., already deleted).
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn delete_transaction<T, B>(
    State(mut state): State<AppState<T, B>>,
    Path(transaction_id): Path<DatabaseID>,
) -> Response
where
    T: TransactionStore + Send + Sync,
    B: BudgetStore + Send + Sync,
{
    match state.transaction_store.delete(transaction_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error.into_response(),
    }
}
