//! This file defines the API route for the category registry.

use axum::{Json, response::Response, response::IntoResponse};

use crate::category::{CATEGORIES, Category};

/// A route handler for listing the fixed category registry.
///
/// The registry is compiled into the binary, so this handler never fails.
pub async fn list_categories() -> Response {
    Json::<&[Category]>(&CATEGORIES).into_response()
}
