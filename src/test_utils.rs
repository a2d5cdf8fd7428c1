//! Helpers shared by the unit tests.

use std::sync::{Arc, Mutex};

use axum_test::TestServer;
use rusqlite::Connection;

use crate::{AppState, build_router, initialize_db};

/// Open an in-memory database with the schema registered.
#[track_caller]
pub(crate) fn must_create_test_connection() -> Connection {
    let connection =
        Connection::open_in_memory().expect("could not create in-memory SQLite database");
    initialize_db(&connection).expect("could not initialize test DB");

    connection
}

/// App state backed by a fresh in-memory database.
pub(crate) fn get_test_app_state() -> AppState {
    AppState::new(Arc::new(Mutex::new(must_create_test_connection())))
}

/// A test server running the full router, together with the state it uses.
pub(crate) fn get_test_server() -> (AppState, TestServer) {
    let state = get_test_app_state();
    let server = TestServer::new(build_router(state.clone()));

    (state, server)
}
