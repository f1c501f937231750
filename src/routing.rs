//! Defines the application routes and wires them to their handlers.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, put},
};
use serde_json::json;

use crate::{
    AppState, endpoints,
    routes::{
        analytics::get_analytics,
        budget::{create_budget, delete_budget, list_budgets, update_budget},
        category::list_categories,
        dashboard::get_dashboard,
        transaction::{
            create_transaction, delete_transaction, list_transactions, update_transaction,
        },
    },
    stores::{BudgetStore, TransactionStore},
};

/// Return a router with all the app's routes.
pub fn build_router<T, B>(state: AppState<T, B>) -> Router
where
    T: TransactionStore + Clone + Send + Sync + 'static,
    B: BudgetStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions::<T, B>).post(create_transaction::<T, B>),
        )
        .route(
            endpoints::TRANSACTION,
            put(update_transaction::<T, B>).delete(delete_transaction::<T, B>),
        )
        .route(
            endpoints::BUDGETS,
            get(list_budgets::<T, B>).post(create_budget::<T, B>),
        )
        .route(
            endpoints::BUDGET,
            put(update_budget::<T, B>).delete(delete_budget::<T, B>),
        )
        .route(endpoints::CATEGORIES, get(list_categories))
        .route(endpoints::ANALYTICS, get(get_analytics::<T, B>))
        .route(endpoints::DASHBOARD, get(get_dashboard::<T, B>))
        .route(endpoints::COFFEE, get(get_coffee))
        .fallback(not_found)
        .with_state(state)
}

/// The root does not serve anything itself, clients land on the dashboard.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD)
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (
        StatusCode::IM_A_TEAPOT,
        Json(json!({ "error": "I'm a teapot" })),
    )
        .into_response()
}

/// The JSON 404 response for unknown paths.
async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "not found" })),
    )
        .into_response()
}
