//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

/// The state of the REST server.
///
/// The connection is opened once at startup (see [crate::Database]) and shared
/// by every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Create a new [AppState] from an already initialized database connection.
    pub fn new(db_connection: Arc<Mutex<Connection>>) -> Self {
        Self { db_connection }
    }
}
