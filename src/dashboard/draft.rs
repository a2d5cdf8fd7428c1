//! The transaction form as the user fills it in.

use crate::{
    dashboard::ClientError,
    transaction::{Category, Transaction, TransactionId, TransactionPayload},
};

/// The fields of the add/edit transaction form.
///
/// The amount is kept as the text the user typed, so a half typed or empty
/// amount can be represented.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionDraft {
    /// The amount as typed, e.g. "12.50".
    pub amount: String,
    /// What the money was spent on.
    pub description: String,
    /// The chosen category, if any.
    pub category: Option<Category>,
}

impl TransactionDraft {
    /// A draft pre-filled with the fields of an existing transaction.
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            amount: transaction.amount.to_string(),
            description: transaction.description.clone(),
            category: Some(transaction.category),
        }
    }

    /// Whether the draft is complete enough to send.
    pub fn is_complete(&self) -> bool {
        self.parse_amount().is_ok() && self.category.is_some()
    }

    /// Turn the draft into a request body, for updating `id` if given.
    ///
    /// Uses the same rule as the server: the amount must be a non-zero number
    /// and a category must be chosen.
    ///
    /// # Errors
    /// Returns [ClientError::InvalidDraft] if the amount or category is missing
    /// or the amount is not a number.
    pub fn to_payload(&self, id: Option<TransactionId>) -> Result<TransactionPayload, ClientError> {
        let amount = self.parse_amount()?;
        let category = self
            .category
            .ok_or_else(|| ClientError::InvalidDraft("choose a category".to_owned()))?;

        Ok(TransactionPayload {
            id,
            amount: Some(amount),
            description: Some(self.description.trim().to_owned()),
            category: Some(category.to_string()),
        })
    }

    fn parse_amount(&self) -> Result<f64, ClientError> {
        let amount = self.amount.trim();

        if amount.is_empty() {
            return Err(ClientError::InvalidDraft("enter an amount".to_owned()));
        }

        match amount.parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount != 0.0 => Ok(amount),
            Ok(_) => Err(ClientError::InvalidDraft(
                "the amount must be a non-zero number".to_owned(),
            )),
            Err(_) => Err(ClientError::InvalidDraft(format!(
                "\"{amount}\" is not a number"
            ))),
        }
    }
}
