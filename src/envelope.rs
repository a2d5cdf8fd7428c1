//! The JSON envelopes wrapped around every API response.
//!
//! Successful responses carry `success: true` plus the payload under an
//! operation specific key. Failures carry `success: false` and an `error`
//! message. The same types are used by the server to encode responses and by
//! [crate::HttpTransactionApi] to decode them.

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// The message sent along with a newly created transaction.
pub const TRANSACTION_ADDED_MESSAGE: &str = "Transaction added successfully";

/// The response to creating a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTransactionResponse {
    /// Always `true`.
    pub success: bool,
    /// A human readable confirmation.
    pub message: String,
    /// The transaction as it was stored, including its new ID and timestamps.
    pub saved_transaction: Transaction,
}

impl SavedTransactionResponse {
    /// Wrap a newly created transaction.
    pub fn new(saved_transaction: Transaction) -> Self {
        Self {
            success: true,
            message: TRANSACTION_ADDED_MESSAGE.to_owned(),
            saved_transaction,
        }
    }
}

/// The response to listing transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionListResponse {
    /// Always `true`.
    pub success: bool,
    /// Every stored transaction.
    pub transactions: Vec<Transaction>,
}

impl TransactionListResponse {
    /// Wrap a list of transactions.
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            success: true,
            transactions,
        }
    }
}

/// The response to updating a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedTransactionResponse {
    /// Always `true`.
    pub success: bool,
    /// The transaction after the update.
    pub updated_transaction: Transaction,
}

impl UpdatedTransactionResponse {
    /// Wrap an updated transaction.
    pub fn new(updated_transaction: Transaction) -> Self {
        Self {
            success: true,
            updated_transaction,
        }
    }
}

/// The response to deleting a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedTransactionResponse {
    /// Always `true`.
    pub success: bool,
    /// The transaction as it was just before it was deleted.
    pub deleted_transaction: Transaction,
}

impl DeletedTransactionResponse {
    /// Wrap the snapshot of a deleted transaction.
    pub fn new(deleted_transaction: Transaction) -> Self {
        Self {
            success: true,
            deleted_transaction,
        }
    }
}

/// The body of every failed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// What went wrong, safe to show to the user.
    pub error: String,
}

impl ErrorResponse {
    /// Create an error envelope with `error` as the message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
