//! Middleware for logging requests and responses.

use axum::{body::to_bytes, extract::Request, middleware::Next, response::Response};

/// How many bytes of a request or response body are logged at the `info`
/// level. Longer bodies are truncated, with the full body logged at `debug`.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response bodies for each request.
///
/// The API only deals in small JSON payloads, so both bodies are buffered in
/// full before being passed along.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_text = body_to_text(body).await;
    log_body("Received request", format!("{parts:#?}"), &body_text);
    let request = Request::from_parts(parts, body_text.into());

    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_text = body_to_text(body).await;
    log_body("Sending response", format!("{parts:#?}"), &body_text);

    Response::from_parts(parts, body_text.into())
}

async fn body_to_text(body: axum::body::Body) -> String {
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).to_string(),
        Err(error) => {
            tracing::warn!("could not buffer body for logging: {error}");
            String::new()
        }
    }
}

fn log_body(direction: &str, parts: String, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        // Category icons are emoji, so the cut must land on a char boundary.
        let cut = (0..=LOG_BODY_LENGTH_LIMIT)
            .rev()
            .find(|&index| body.is_char_boundary(index))
            .unwrap_or(0);
        tracing::info!("{direction}: {parts}\nbody: {}...", &body[..cut]);
        tracing::debug!("Full body: {body:?}");
    } else {
        tracing::info!("{direction}: {parts}\nbody: {body:?}");
    }
}
