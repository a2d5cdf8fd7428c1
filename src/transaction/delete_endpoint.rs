//! Defines the endpoint for deleting a transaction.

use axum::{Json, extract::State};
use axum_extra::extract::WithRejection;

use crate::{
    Error,
    envelope::DeletedTransactionResponse,
    transaction::{TransactionIdPayload, core::delete_transaction, state::TransactionState},
};

/// A route handler for deleting a transaction, responds with the deleted transaction.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    WithRejection(Json(payload), _): WithRejection<Json<TransactionIdPayload>, Error>,
) -> Result<Json<DeletedTransactionResponse>, Error> {
    let transaction_id = payload.require_id()?;

    let connection = state.connection()?;

    let deleted_transaction = delete_transaction(transaction_id, &connection)
        .inspect_err(|error| tracing::debug!("could not delete transaction {transaction_id}: {error}"))?;

    tracing::info!("Deleted transaction {transaction_id}");

    Ok(Json(DeletedTransactionResponse::new(deleted_transaction)))
}
