//! Defines the core data model and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, transaction::Category};

// ============================================================================
// MODELS
// ============================================================================

/// Alias for the integer type used for transaction IDs.
pub type TransactionId = i64;

/// An expense, i.e. an event where money was spent.
///
/// Transactions are only ever created by the database, which assigns the ID
/// and both timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money spent in this transaction.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// What the money was spent on.
    pub category: Category,
    /// When the transaction was first recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the transaction was last changed.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// The user editable fields of a transaction after validation.
///
/// Get one from [crate::TransactionPayload::validate].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedTransaction {
    /// The amount of money spent, never zero.
    pub amount: f64,
    /// A text description, empty if none was given.
    pub description: String,
    /// What the money was spent on.
    pub category: Category,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

const TRANSACTION_COLUMNS: &str = "id, amount, description, category, created_at, updated_at";

/// Create a new transaction in the database.
///
/// Both timestamps are set to `now`.
///
/// # Errors
/// This function will return a [Error::Sql] if there is an SQL error.
pub fn create_transaction(
    transaction: &ValidatedTransaction,
    now: OffsetDateTime,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(&format!(
            "INSERT INTO \"transaction\" (amount, description, category, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)
             RETURNING {TRANSACTION_COLUMNS}"
        ))?
        .query_row(
            (
                transaction.amount,
                &transaction.description,
                transaction.category,
                now,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::Sql] there is some other SQL error.
#[cfg(test)]
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM \"transaction\" WHERE id = :id"
        ))?
        .query_one(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve every transaction in the database, in the order they were inserted.
///
/// # Errors
/// This function will return a [Error::Sql] there is some SQL error.
pub fn list_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM \"transaction\" ORDER BY id"
        ))?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Overwrite the amount, description and category of the transaction `id`
/// and set its `updated_at` timestamp to `now`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::Sql] there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    transaction: &ValidatedTransaction,
    now: OffsetDateTime,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(&format!(
            "UPDATE \"transaction\"
             SET amount = ?1, description = ?2, category = ?3, updated_at = ?4
             WHERE id = ?5
             RETURNING {TRANSACTION_COLUMNS}"
        ))?
        .query_row(
            (
                transaction.amount,
                &transaction.description,
                transaction.category,
                now,
                id,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Delete the transaction `id` and return it as it was just before deletion.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::Sql] there is some other SQL error.
pub fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(&format!(
            "DELETE FROM \"transaction\" WHERE id = :id RETURNING {TRANSACTION_COLUMNS}"
        ))?
        .query_one(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::Sql] there is some SQL error.
#[cfg(test)]
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                category TEXT NOT NULL CHECK (
                    category IN ('groceries', 'food', 'entertainment', 'travel', 'others')
                ),
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let description = row.get(2)?;
    let category = row.get(3)?;
    let created_at = row.get(4)?;
    let updated_at = row.get(5)?;

    Ok(Transaction {
        id,
        amount,
        description,
        category,
        created_at,
        updated_at,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod database_tests {
    use time::{Duration, macros::datetime};

    use crate::{
        Error,
        test_utils::must_create_test_connection,
        transaction::{
            Category, ValidatedTransaction,
            core::{
                count_transactions, create_transaction, delete_transaction, get_transaction,
                list_transactions, update_transaction,
            },
        },
    };

    fn groceries(amount: f64) -> ValidatedTransaction {
        ValidatedTransaction {
            amount,
            description: "Weekly shop".to_owned(),
            category: Category::Groceries,
        }
    }

    #[test]
    fn create_succeeds() {
        let conn = must_create_test_connection();
        let now = datetime!(2025-10-05 09:15:30.25 UTC);

        let transaction = create_transaction(&groceries(12.3), now, &conn)
            .expect("could not create transaction");

        assert_eq!(transaction.id, 1);
        assert_eq!(transaction.amount, 12.3);
        assert_eq!(transaction.description, "Weekly shop");
        assert_eq!(transaction.category, Category::Groceries);
        assert_eq!(transaction.created_at, now);
        assert_eq!(transaction.created_at, transaction.updated_at);
    }

    #[test]
    fn create_assigns_distinct_ids_to_duplicates() {
        let conn = must_create_test_connection();
        let now = datetime!(2025-10-05 09:00 UTC);

        let first = create_transaction(&groceries(5.0), now, &conn).unwrap();
        let second = create_transaction(&groceries(5.0), now, &conn).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(count_transactions(&conn).unwrap(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let conn = must_create_test_connection();
        let now = datetime!(2025-10-05 09:00 UTC);
        let first = create_transaction(&groceries(5.0), now, &conn).unwrap();
        delete_transaction(first.id, &conn).unwrap();

        let second = create_transaction(&groceries(5.0), now, &conn).unwrap();

        assert!(second.id > first.id);
    }

    #[test]
    fn list_returns_transactions_in_insertion_order() {
        let conn = must_create_test_connection();
        let now = datetime!(2025-10-05 09:00 UTC);
        let want: Vec<_> = (1..=3)
            .map(|i| create_transaction(&groceries(i as f64), now, &conn).unwrap())
            .collect();

        let got = list_transactions(&conn).unwrap();

        assert_eq!(want, got);
    }

    #[test]
    fn list_after_creates_and_deletes_has_the_difference() {
        let conn = must_create_test_connection();
        let now = datetime!(2025-10-05 09:00 UTC);
        let created: Vec<_> = (1..=5)
            .map(|i| create_transaction(&groceries(i as f64), now, &conn).unwrap())
            .collect();

        for transaction in &created[..2] {
            delete_transaction(transaction.id, &conn).unwrap();
        }

        assert_eq!(list_transactions(&conn).unwrap().len(), 3);
    }

    #[test]
    fn update_overwrites_fields_and_refreshes_updated_at() {
        let conn = must_create_test_connection();
        let created_at = datetime!(2025-10-05 09:00 UTC);
        let updated_at = created_at + Duration::hours(2);
        let original = create_transaction(&groceries(12.3), created_at, &conn).unwrap();
        let changes = ValidatedTransaction {
            amount: 50.0,
            description: String::new(),
            category: Category::Travel,
        };

        let updated = update_transaction(original.id, &changes, updated_at, &conn).unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.amount, 50.0);
        assert_eq!(updated.description, "");
        assert_eq!(updated.category, Category::Travel);
        assert_eq!(updated.created_at, created_at);
        assert_eq!(updated.updated_at, updated_at);
        assert_eq!(get_transaction(original.id, &conn), Ok(updated));
    }

    #[test]
    fn update_of_missing_transaction_leaves_store_unchanged() {
        let conn = must_create_test_connection();
        let now = datetime!(2025-10-05 09:00 UTC);
        let existing = create_transaction(&groceries(12.3), now, &conn).unwrap();

        let result = update_transaction(existing.id + 1, &groceries(99.0), now, &conn);

        assert_eq!(result, Err(Error::NotFound));
        assert_eq!(list_transactions(&conn).unwrap(), vec![existing]);
    }

    #[test]
    fn delete_returns_snapshot_once() {
        let conn = must_create_test_connection();
        let now = datetime!(2025-10-05 09:00 UTC);
        let transaction = create_transaction(&groceries(12.3), now, &conn).unwrap();

        let deleted = delete_transaction(transaction.id, &conn);
        let deleted_again = delete_transaction(transaction.id, &conn);

        assert_eq!(deleted, Ok(transaction.clone()));
        assert_eq!(deleted_again, Err(Error::NotFound));
        assert_eq!(get_transaction(transaction.id, &conn), Err(Error::NotFound));
    }

    #[test]
    fn table_rejects_unknown_category() {
        let conn = must_create_test_connection();

        let result = conn.execute(
            "INSERT INTO \"transaction\" (amount, category, created_at, updated_at)
             VALUES (1.0, 'rent', '2025-10-05', '2025-10-05')",
            (),
        );

        assert!(result.is_err());
    }
}
