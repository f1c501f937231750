//! This file defines the API route for the analytics report.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    AppState,
    analytics::{TimeWindow, analytics_report},
    routes::local_date_today,
    stores::{BudgetStore, TransactionStore},
};

/// The query parameters for the analytics report.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    /// The time window to aggregate over. Defaults to the last 30 days.
    #[serde(default)]
    pub window: TimeWindow,
}

/// A route handler for computing the analytics report over the transactions
/// within the requested time window.
///
/// If the store cannot be read the report is computed over an empty
/// transaction list rather than failing the request.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn get_analytics<T, B>(
    State(state): State<AppState<T, B>>,
    Query(query): Query<AnalyticsQuery>,
) -> Response
where
    T: TransactionStore + Send + Sync,
    B: BudgetStore + Send + Sync,
{
    let transactions = state.transaction_store.list().unwrap_or_else(|error| {
        tracing::error!("could not fetch transactions for analytics: {error}");
        Vec::new()
    });

    let report = analytics_report(&transactions, query.window, local_date_today());

    Json(report).into_response()
}

#[cfg(test)]
mod analytics_route_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;
    use time::{Duration, OffsetDateTime};

    use crate::{
        analytics::AnalyticsReport, build_router, endpoints,
        stores::sqlite::create_app_state,
    };

    fn test_server() -> TestServer {
        let state = create_app_state(Connection::open_in_memory().unwrap()).unwrap();
        let app = build_router(state);

        TestServer::new(app)
    }

    /// The handler filters against the real current date, so test data is
    /// seeded relative to it.
    fn days_ago(days: i64) -> String {
        (OffsetDateTime::now_utc().date() - Duration::days(days)).to_string()
    }

    async fn seed_transaction(
        server: &TestServer,
        amount: f64,
        category: &str,
        date: &str,
        transaction_type: &str,
    ) {
        let response = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "amount": amount,
                "description": "seeded",
                "category": category,
                "date": date,
                "type": transaction_type,
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn report_over_empty_store_is_empty() {
        let server = test_server();

        let response = server.get(endpoints::ANALYTICS).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let report = response.json::<AnalyticsReport>();
        assert!(report.category_breakdown.is_empty());
        assert!(report.monthly_trend.is_empty());
        assert_eq!(report.insights.top_category, None);
        assert_eq!(report.insights.savings_rate, 0.0);
    }

    #[tokio::test]
    async fn report_aggregates_recent_transactions() {
        let server = test_server();
        seed_transaction(&server, 1000.0, "income", &days_ago(5), "income").await;
        seed_transaction(&server, 100.0, "food", &days_ago(5), "expense").await;
        seed_transaction(&server, 50.0, "transport", &days_ago(2), "expense").await;

        let response = server.get(endpoints::ANALYTICS).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let report = response.json::<AnalyticsReport>();
        assert_eq!(report.category_breakdown.len(), 2);
        assert_eq!(report.category_breakdown[0].category, "food");
        assert_eq!(report.category_breakdown[0].amount, 100.0);
        assert_eq!(report.insights.savings_rate, 85.0);
    }

    #[tokio::test]
    async fn window_query_parameter_narrows_the_report() {
        let server = test_server();
        seed_transaction(&server, 100.0, "food", &days_ago(2), "expense").await;
        seed_transaction(&server, 50.0, "transport", &days_ago(20), "expense").await;

        let response = server
            .get(endpoints::ANALYTICS)
            .add_query_param("window", "7d")
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let report = response.json::<AnalyticsReport>();
        assert_eq!(report.category_breakdown.len(), 1);
        assert_eq!(report.category_breakdown[0].category, "food");
        assert_eq!(report.category_breakdown[0].percentage, 100.0);
    }

    #[tokio::test]
    async fn unknown_window_token_is_rejected() {
        let server = test_server();

        let response = server
            .get(endpoints::ANALYTICS)
            .add_query_param("window", "14d")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }
}
