//! This file defines the API routes for the budget type.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    analytics::{BudgetProgress, budget_progress},
    AppState,
    models::{Budget, BudgetData, DatabaseID},
    stores::{BudgetStore, TransactionStore},
};

/// A budget with its consumption classification attached.
///
/// The progress fields are derived from the budget's computed `spent` amount
/// on every read; nothing here is stored.
#[derive(Debug, Serialize, Deserialize)]
pub struct BudgetResponse {
    /// The budget with its `spent` amount computed.
    #[serde(flatten)]
    pub budget: Budget,
    /// The consumption percentage and classification band.
    #[serde(flatten)]
    pub progress: BudgetProgress,
}

impl From<Budget> for BudgetResponse {
    fn from(budget: Budget) -> Self {
        Self {
            progress: budget_progress(&budget),
            budget,
        }
    }
}

/// The request body for changing a budget's allocation.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateBudgetData {
    /// The new allocation ceiling, must be greater than zero.
    pub amount: f64,
}

/// A route handler for listing all budgets with their spent amounts and
/// classification computed.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn list_budgets<T, B>(State(state): State<AppState<T, B>>) -> Response
where
    T: TransactionStore + Send + Sync,
    B: BudgetStore + Send + Sync,
{
    match state.budget_store.list() {
        Ok(budgets) => {
            let budgets: Vec<BudgetResponse> =
                budgets.into_iter().map(BudgetResponse::from).collect();

            (StatusCode::OK, Json(budgets)).into_response()
        }
        Err(error) => error.into_response(),
    }
}

/// A route handler for creating a new budget.
///
/// This function will return the status code 409 if a budget already exists
/// for the requested category, month and year.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn create_budget<T, B>(
    State(mut state): State<AppState<T, B>>,
    Json(data): Json<BudgetData>,
) -> Response
where
    T: TransactionStore + Send + Sync,
    B: BudgetStore + Send + Sync,
{
    match state.budget_store.create(data) {
        Ok(budget) => (StatusCode::CREATED, Json(BudgetResponse::from(budget))).into_response(),
        Err(error) => error.into_response(),
    }
}

/// A route handler for changing a budget's allocation.
///
/// This function will return the status code 404 if the requested resource
/// does not exist (e.g., not created yet).
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn update_budget<T, B>(
    State(mut state): State<AppState<T, B>>,
    Path(budget_id): Path<DatabaseID>,
    Json(data): Json<UpdateBudgetData>,
) -> Response
where
    T: TransactionStore + Send + Sync,
    B: BudgetStore + Send + Sync,
{
    match state.budget_store.update_amount(budget_id, data.amount) {
        Ok(budget) => (StatusCode::OK, Json(BudgetResponse::from(budget))).into_response(),
        Err(error) => error.into_response(),
    }
}

/// A route handler for deleting a budget.
///
/// This function will return the status code 404 if the requested resource
/// does not exist (e.g., already deleted).
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn delete_budget<T, B>(
    State(mut state): State<AppState<T, B>>,
    Path(budget_id): Path<DatabaseID>,
) -> Response
where
    T: TransactionStore + Send + Sync,
    B: BudgetStore + Send + Sync,
{
    match state.budget_store.delete(budget_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error.into_response(),
    }
}
