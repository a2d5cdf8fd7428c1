//! Defines the endpoint for creating a new transaction.

use axum::{Json, extract::State};
use axum_extra::extract::WithRejection;
use time::OffsetDateTime;

use crate::{
    Error,
    envelope::SavedTransactionResponse,
    transaction::{TransactionPayload, core::create_transaction, state::TransactionState},
};

/// A route handler for creating a new transaction, responds with the stored transaction.
///
/// The payload is validated before the database is touched, so an invalid
/// request never creates a record.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    WithRejection(Json(payload), _): WithRejection<Json<TransactionPayload>, Error>,
) -> Result<Json<SavedTransactionResponse>, Error> {
    let transaction = payload
        .validate()
        .inspect_err(|error| tracing::debug!("rejected new transaction: {error}"))?;

    let connection = state.connection()?;

    let saved_transaction = create_transaction(&transaction, OffsetDateTime::now_utc(), &connection)
        .inspect_err(|error| tracing::debug!("could not create transaction: {error}"))?;

    tracing::info!("Created transaction {}", saved_transaction.id);

    Ok(Json(SavedTransactionResponse::new(saved_transaction)))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{Router, routing::post};
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{
        ErrorResponse, MISSING_FIELDS_MESSAGE, endpoints,
        envelope::SavedTransactionResponse,
        test_utils::must_create_test_connection,
        transaction::{
            Category,
            core::{count_transactions, get_transaction},
            create_transaction_endpoint,
            state::TransactionState,
        },
    };

    fn get_test_state_and_server() -> (TransactionState, TestServer) {
        let state = TransactionState {
            db_connection: Arc::new(Mutex::new(must_create_test_connection())),
        };
        let app = Router::new()
            .route(endpoints::TRANSACTIONS_API, post(create_transaction_endpoint))
            .with_state(state.clone());
        let server = TestServer::new(app);

        (state, server)
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let (state, server) = get_test_state_and_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "amount": 12.3,
                "description": "test transaction",
                "category": "groceries",
            }))
            .await;

        response.assert_status_ok();
        let body = response.json::<SavedTransactionResponse>();
        assert!(body.success);
        assert_eq!(body.message, "Transaction added successfully");
        assert_eq!(body.saved_transaction.amount, 12.3);
        assert_eq!(body.saved_transaction.description, "test transaction");
        assert_eq!(body.saved_transaction.category, Category::Groceries);
        assert_eq!(
            body.saved_transaction.created_at,
            body.saved_transaction.updated_at
        );

        let connection = state.db_connection.lock().unwrap();
        let stored = get_transaction(body.saved_transaction.id, &connection).unwrap();
        assert_eq!(stored, body.saved_transaction);
    }

    #[tokio::test]
    async fn description_is_optional() {
        let (_, server) = get_test_state_and_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({"amount": 8, "category": "travel"}))
            .await;

        response.assert_status_ok();
        let body = response.json::<SavedTransactionResponse>();
        assert_eq!(body.saved_transaction.description, "");
    }

    #[tokio::test]
    async fn missing_fields_are_rejected_without_persisting() {
        let (state, server) = get_test_state_and_server();
        let bodies = [
            json!({"category": "food"}),
            json!({"amount": 10.0}),
            json!({"amount": 0, "category": "food"}),
            json!({"amount": 10.0, "category": ""}),
        ];

        for body in bodies {
            let response = server.post(endpoints::TRANSACTIONS_API).json(&body).await;

            response.assert_status_bad_request();
            assert_eq!(
                response.json::<ErrorResponse>(),
                ErrorResponse::new(MISSING_FIELDS_MESSAGE)
            );
        }

        let connection = state.db_connection.lock().unwrap();
        assert_eq!(count_transactions(&connection).unwrap(), 0);
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let (state, server) = get_test_state_and_server();

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({"amount": "lots", "category": "food"}))
            .await;

        response.assert_status_bad_request();
        assert!(!response.json::<ErrorResponse>().success);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(count_transactions(&connection).unwrap(), 0);
    }

    #[tokio::test]
    async fn duplicate_requests_create_two_records() {
        let (state, server) = get_test_state_and_server();
        let body = json!({"amount": 3.5, "category": "food"});

        let first = server.post(endpoints::TRANSACTIONS_API).json(&body).await;
        let second = server.post(endpoints::TRANSACTIONS_API).json(&body).await;

        let first = first.json::<SavedTransactionResponse>().saved_transaction;
        let second = second.json::<SavedTransactionResponse>().saved_transaction;
        assert_ne!(first.id, second.id);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(count_transactions(&connection).unwrap(), 2);
    }
}
