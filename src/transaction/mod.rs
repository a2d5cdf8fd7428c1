//! Transaction management for the expense tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and its `Category`
//! - Database functions for storing, querying, and managing transactions
//! - Request payloads and their validation
//! - Route handlers for the transaction API

mod category;
mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod list_endpoint;
mod payload;
mod state;

pub use category::{Category, ParseCategoryError};
pub use self::core::{Transaction, TransactionId, ValidatedTransaction, create_transaction_table};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
pub use payload::{TransactionIdPayload, TransactionPayload};
