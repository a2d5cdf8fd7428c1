//! The client side of the transaction API.

use std::future::Future;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    endpoints,
    envelope::{
        DeletedTransactionResponse, ErrorResponse, SavedTransactionResponse,
        TransactionListResponse, UpdatedTransactionResponse,
    },
    transaction::{Transaction, TransactionId, TransactionIdPayload, TransactionPayload},
};

/// The errors that may occur while talking to the transaction API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read.
    #[error("could not reach the server: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error envelope.
    #[error("{message} (status {status})")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The `error` field of the envelope, or the raw body if there was no envelope.
        message: String,
    },

    /// The form was not filled in well enough to send.
    #[error("{0}")]
    InvalidDraft(String),
}

/// The operations the dashboard needs from the server.
pub trait TransactionApi {
    /// Fetch every stored transaction.
    fn list(&self) -> impl Future<Output = Result<Vec<Transaction>, ClientError>> + Send;

    /// Store a new transaction and return it with its ID and timestamps.
    fn create(
        &self,
        payload: &TransactionPayload,
    ) -> impl Future<Output = Result<Transaction, ClientError>> + Send;

    /// Overwrite the transaction named by `payload.id`.
    fn update(
        &self,
        payload: &TransactionPayload,
    ) -> impl Future<Output = Result<Transaction, ClientError>> + Send;

    /// Delete a transaction and return what it looked like.
    fn delete(
        &self,
        id: TransactionId,
    ) -> impl Future<Output = Result<Transaction, ClientError>> + Send;
}

/// A [TransactionApi] that talks JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransactionApi {
    client: Client,
    url: String,
}

impl HttpTransactionApi {
    /// Create a client for the server at `base_url`, e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            url: format!(
                "{}{}",
                base_url.trim_end_matches('/'),
                endpoints::TRANSACTIONS_API
            ),
        }
    }
}

impl TransactionApi for HttpTransactionApi {
    async fn list(&self) -> Result<Vec<Transaction>, ClientError> {
        let response = self.client.get(&self.url).send().await?;

        decode::<TransactionListResponse>(response)
            .await
            .map(|body| body.transactions)
    }

    async fn create(&self, payload: &TransactionPayload) -> Result<Transaction, ClientError> {
        let response = self.client.post(&self.url).json(payload).send().await?;

        decode::<SavedTransactionResponse>(response)
            .await
            .map(|body| body.saved_transaction)
    }

    async fn update(&self, payload: &TransactionPayload) -> Result<Transaction, ClientError> {
        let response = self.client.put(&self.url).json(payload).send().await?;

        decode::<UpdatedTransactionResponse>(response)
            .await
            .map(|body| body.updated_transaction)
    }

    async fn delete(&self, id: TransactionId) -> Result<Transaction, ClientError> {
        let response = self
            .client
            .delete(&self.url)
            .json(&TransactionIdPayload { id: Some(id) })
            .send()
            .await?;

        decode::<DeletedTransactionResponse>(response)
            .await
            .map(|body| body.deleted_transaction)
    }
}

/// Read the success envelope `T`, or turn the error envelope into a [ClientError::Api].
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await?;
    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(envelope) => envelope.error,
        Err(_) => body,
    };
    tracing::debug!("server answered {status}: {message}");

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
