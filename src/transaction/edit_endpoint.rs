//! Defines the endpoint for updating an existing transaction.

use axum::{Json, extract::State};
use axum_extra::extract::WithRejection;
use time::OffsetDateTime;

use crate::{
    Error,
    envelope::UpdatedTransactionResponse,
    transaction::{TransactionPayload, core::update_transaction, state::TransactionState},
};

/// A route handler for overwriting a transaction, responds with the updated transaction.
///
/// The amount and category are validated first. A request with invalid fields
/// is rejected with 400 even if the ID does not exist.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionState>,
    WithRejection(Json(payload), _): WithRejection<Json<TransactionPayload>, Error>,
) -> Result<Json<UpdatedTransactionResponse>, Error> {
    let transaction = payload
        .validate()
        .inspect_err(|error| tracing::debug!("rejected transaction update: {error}"))?;
    let transaction_id = payload.require_id()?;

    let connection = state.connection()?;

    let updated_transaction = update_transaction(
        transaction_id,
        &transaction,
        OffsetDateTime::now_utc(),
        &connection,
    )
    .inspect_err(|error| tracing::debug!("could not update transaction {transaction_id}: {error}"))?;

    Ok(Json(UpdatedTransactionResponse::new(updated_transaction)))
}
