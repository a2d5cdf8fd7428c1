//! Opening the application database and registering its schema.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};
use tokio::sync::OnceCell;

use crate::{Error, transaction::create_transaction_table};

/// A process-wide handle to the application database.
///
/// Create one in `main` from the configured connection string and call
/// [Database::connect] to get the shared connection. Connecting is idempotent:
/// the connection is opened and the schema registered on the first call only,
/// and every later call returns the same connection.
#[derive(Debug)]
pub struct Database {
    connection_string: String,
    connection: OnceCell<Arc<Mutex<Connection>>>,
}

impl Database {
    /// Create a handle for the SQLite database at `connection_string`.
    ///
    /// Nothing is opened until [Database::connect] is called. Use `:memory:`
    /// for a throwaway in-memory database.
    pub fn new(connection_string: &str) -> Self {
        Self {
            connection_string: connection_string.to_owned(),
            connection: OnceCell::new(),
        }
    }

    /// Get the shared connection, opening it and creating the tables if this
    /// is the first call.
    ///
    /// # Errors
    /// Returns an [Error::Sql] if the database cannot be opened or the tables
    /// cannot be created. A failed attempt is not cached, so the next call
    /// tries again.
    pub async fn connect(&self) -> Result<Arc<Mutex<Connection>>, Error> {
        self.connection
            .get_or_try_init(|| async {
                tracing::info!("Opening database {}", self.connection_string);
                let connection = Connection::open(&self.connection_string)?;
                initialize(&connection)?;

                Ok::<_, Error>(Arc::new(Mutex::new(connection)))
            })
            .await
            .cloned()
    }

    /// Whether [Database::connect] has already succeeded.
    pub fn is_connected(&self) -> bool {
        self.connection.initialized()
    }
}

/// Create the tables for the domain models.
///
/// All tables are created in a single exclusive SQL transaction, so either
/// the whole schema is registered or none of it is.
///
/// # Errors
/// Returns an [Error::Sql] if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
