//! Request bodies for the transaction endpoints and their validation.

use serde::{Deserialize, Serialize};

use crate::{
    Error, MISSING_FIELDS_MESSAGE,
    transaction::{Category, TransactionId, ValidatedTransaction},
};

/// The JSON body for creating or updating a transaction.
///
/// Every field is optional at the parsing stage so that a missing amount or
/// category is reported as a validation error rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionPayload {
    /// The transaction to update. Ignored when creating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TransactionId>,
    /// The amount spent. Required and must not be zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// What the money was spent on. Defaults to an empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The name of the category. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl TransactionPayload {
    /// Check that the amount and category are present and convert the payload
    /// into the fields that get stored.
    ///
    /// An amount of zero counts as missing, as does an empty category.
    ///
    /// # Errors
    /// Returns an [Error::Validation] if the amount or category is missing, or
    /// if the category is not one of the known categories.
    pub fn validate(&self) -> Result<ValidatedTransaction, Error> {
        let amount = self.amount.filter(|amount| *amount != 0.0);
        let category = self
            .category
            .as_deref()
            .filter(|category| !category.is_empty());

        let (Some(amount), Some(category)) = (amount, category) else {
            return Err(Error::Validation(MISSING_FIELDS_MESSAGE.to_owned()));
        };

        let category = category
            .parse::<Category>()
            .map_err(|error| Error::Validation(error.to_string()))?;

        Ok(ValidatedTransaction {
            amount,
            description: self.description.clone().unwrap_or_default(),
            category,
        })
    }

    /// The ID of the transaction to update.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if there is no ID, since no transaction
    /// can match it.
    pub fn require_id(&self) -> Result<TransactionId, Error> {
        self.id.ok_or(Error::NotFound)
    }
}

/// The JSON body for deleting a transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionIdPayload {
    /// The transaction to delete.
    #[serde(default)]
    pub id: Option<TransactionId>,
}

impl TransactionIdPayload {
    /// The ID of the transaction to delete.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if there is no ID, since no transaction
    /// can match it.
    pub fn require_id(&self) -> Result<TransactionId, Error> {
        self.id.ok_or(Error::NotFound)
    }
}
