//! Shared state for the transaction endpoints.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{AppState, Error};

/// The state needed by the transaction endpoints.
#[derive(Debug, Clone)]
pub struct TransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

impl TransactionState {
    /// Lock the database connection for the duration of one request.
    ///
    /// # Errors
    /// Returns an [Error::DatabaseLock] if the lock is poisoned.
    pub fn connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.db_connection
            .lock()
            .map_err(|_| Error::DatabaseLock)
    }
}
