//! Application router configuration.

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    AppState, ErrorResponse, endpoints,
    logging::logging_middleware,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint)
                .post(create_transaction_endpoint)
                .put(edit_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .fallback(get_404_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// Respond to requests for routes that do not exist.
async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Not found")),
    )
        .into_response()
}

/// Respond to requests that use a method a route does not support.
async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method not allowed")),
    )
        .into_response()
}
