//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes, to_bytes},
    extract::Request,
    http::{StatusCode, request::Parts as RequestParts, response::Parts as ResponseParts},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::ErrorResponse;

/// Bodies longer than this many characters are truncated in the `info` logs.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// The largest request body the middleware will buffer.
///
/// Response bodies are buffered in full.
const REQUEST_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] characters, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body = match to_bytes(body, REQUEST_BODY_LIMIT).await {
        Ok(body) => body,
        Err(error) => {
            tracing::error!("could not read request body: {error}");
            return (
                StatusCode::PAYLOAD_TOO_LARGE,
                axum::Json(ErrorResponse::new("Request body could not be read")),
            )
                .into_response();
        }
    };
    log_request(&parts, &body);

    let response = next.run(Request::from_parts(parts, Body::from(body))).await;

    let (parts, body) = response.into_parts();
    let body = match to_bytes(body, usize::MAX).await {
        Ok(body) => body,
        Err(error) => {
            tracing::error!("could not read response body: {error}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(ErrorResponse::new("Internal Server Error")),
            )
                .into_response();
        }
    };
    log_response(&parts, &body);

    Response::from_parts(parts, Body::from(body))
}

/// Cut `text` down to at most `limit` characters.
///
/// Returns `None` if `text` already fits.
fn truncate(text: &str, limit: usize) -> Option<&str> {
    text.char_indices()
        .nth(limit)
        .map(|(byte_index, _)| &text[..byte_index])
}

fn log_request(parts: &RequestParts, body: &Bytes) {
    let body = String::from_utf8_lossy(body);

    match truncate(&body, LOG_BODY_LENGTH_LIMIT) {
        Some(short_body) => {
            tracing::info!(
                "Received request: {} {}\nbody: {short_body}...",
                parts.method,
                parts.uri
            );
            tracing::debug!("Full request body: {body:?}");
        }
        None => tracing::info!(
            "Received request: {} {}\nbody: {body:?}",
            parts.method,
            parts.uri
        ),
    }
}

fn log_response(parts: &ResponseParts, body: &Bytes) {
    let body = String::from_utf8_lossy(body);

    match truncate(&body, LOG_BODY_LENGTH_LIMIT) {
        Some(short_body) => {
            tracing::info!("Sending response: {}\nbody: {short_body}...", parts.status);
            tracing::debug!("Full response body: {body:?}");
        }
        None => tracing::info!("Sending response: {}\nbody: {body:?}", parts.status),
    }
}
