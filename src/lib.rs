//! Expense tracker is a small web app for recording where your money goes.
//!
//! This library provides a JSON REST API over a single transaction resource,
//! and a dashboard client that keeps a local copy of the transactions in sync
//! with the server and turns them into chart series.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod config;
mod dashboard;
mod db;
mod endpoints;
mod envelope;
mod logging;
mod routing;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use config::{Config, DEFAULT_LOG_FILE};
pub use dashboard::{
    ChartPolicy, ClientError, Dashboard, HttpTransactionApi, Notification, NotificationKind,
    SeriesPoint, TransactionApi, TransactionDraft, chart_page, derive_series, series_chart,
};
pub use db::{Database, initialize as initialize_db};
pub use endpoints::TRANSACTIONS_API;
pub use envelope::{
    DeletedTransactionResponse, ErrorResponse, SavedTransactionResponse, TransactionListResponse,
    UpdatedTransactionResponse,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::{
    Category, ParseCategoryError, Transaction, TransactionId, TransactionIdPayload,
    TransactionPayload, ValidatedTransaction,
};

/// How long in-flight requests get to finish once a shutdown signal arrives.
const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(1);

/// The message sent to clients when a transaction is missing its amount or category.
pub const MISSING_FIELDS_MESSAGE: &str = "Amount and category are required";

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("could not listen for ctrl+c: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("could not install the terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received ctrl+c signal, shutting down."),
        _ = terminate => tracing::info!("Received terminate signal, shutting down."),
    }

    handle.graceful_shutdown(Some(SHUTDOWN_GRACE_PERIOD));
}

/// The errors that may occur while serving the transaction API.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request was missing a required field, had a field with an invalid
    /// value, or could not be parsed at all.
    ///
    /// The string is safe to show to the client.
    #[error("{0}")]
    Validation(String),

    /// No transaction has the requested ID.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested transaction could not be found")]
    NotFound,

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLock,

    /// An unhandled/unexpected SQL error.
    ///
    /// The error should only be logged on the server. Clients only ever see
    /// the generic internal server error message.
    #[error("an unexpected SQL error occurred: {0}")]
    Sql(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => Error::Sql(error),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("rejected request body: {rejection}");
        Error::Validation(rejection.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::Validation(message) => (StatusCode::BAD_REQUEST, message),
            Error::NotFound => {
                tracing::debug!("responding with 404, the transaction does not exist");
                (StatusCode::NOT_FOUND, "Transaction not found".to_owned())
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_owned(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
