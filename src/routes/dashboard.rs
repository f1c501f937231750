//! This file defines the API route for the overview dashboard.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    dashboard::dashboard_report,
    routes::local_date_today,
    stores::{BudgetStore, TransactionStore},
};

/// A route handler for computing the overview dashboard report over the
/// entire transaction history.
///
/// If the store cannot be read the report is computed over an empty
/// transaction list rather than failing the request.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_dashboard<T, B>(State(state): State<AppState<T, B>>) -> Response
where
    T: TransactionStore + Send + Sync,
    B: BudgetStore + Send + Sync,
{
    let transactions = state.transaction_store.list().unwrap_or_else(|error| {
        tracing::error!("could not fetch transactions for the dashboard: {error}");
        Vec::new()
    });

    let report = dashboard_report(&transactions, local_date_today());

    Json(report).into_response()
}
