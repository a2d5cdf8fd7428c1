//! Defines the endpoint for listing every transaction.

use axum::{Json, extract::State};

use crate::{
    Error,
    envelope::TransactionListResponse,
    transaction::{core::list_transactions, state::TransactionState},
};

/// A route handler that responds with every stored transaction.
///
/// No filtering or pagination is applied. Transactions come back in the order
/// they were inserted.
pub async fn list_transactions_endpoint(
    State(state): State<TransactionState>,
) -> Result<Json<TransactionListResponse>, Error> {
    let connection = state.connection()?;

    let transactions = list_transactions(&connection)?;

    Ok(Json(TransactionListResponse::new(transactions)))
}
