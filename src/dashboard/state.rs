//! The dashboard's local copy of the transactions and the actions that change it.

use crate::{
    dashboard::{
        ClientError, Notification, TransactionApi, TransactionDraft,
        series::{ChartPolicy, SeriesPoint, derive_series},
    },
    transaction::{Transaction, TransactionId},
};

/// Keeps the transaction list, the add/edit form and pending notifications
/// in sync with the server behind `A`.
///
/// Every change goes to the server first. The local list is only ever
/// replaced by a fresh [Dashboard::load].
#[derive(Debug)]
pub struct Dashboard<A> {
    api: A,
    transactions: Vec<Transaction>,
    is_loading: bool,
    is_submitting: bool,
    is_form_open: bool,
    editing: Option<TransactionId>,
    draft: TransactionDraft,
    notifications: Vec<Notification>,
}

impl<A: TransactionApi> Dashboard<A> {
    /// Create an empty dashboard. Call [Dashboard::load] to fetch the transactions.
    pub fn new(api: A) -> Self {
        Self {
            api,
            transactions: Vec::new(),
            is_loading: false,
            is_submitting: false,
            is_form_open: false,
            editing: None,
            draft: TransactionDraft::default(),
            notifications: Vec::new(),
        }
    }

    /// The transactions, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Whether a list request is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether a create or update request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Whether the add/edit form is shown.
    pub fn is_form_open(&self) -> bool {
        self.is_form_open
    }

    /// The transaction the form is editing, if it is not adding a new one.
    pub fn editing(&self) -> Option<TransactionId> {
        self.editing
    }

    /// The current form fields.
    pub fn draft(&self) -> &TransactionDraft {
        &self.draft
    }

    /// The form fields, for the user to fill in.
    pub fn draft_mut(&mut self) -> &mut TransactionDraft {
        &mut self.draft
    }

    /// Remove and return the notifications raised since the last call.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Replace the local list with the server's, newest first.
    ///
    /// On failure the list is cleared and an error notification is raised.
    pub async fn load(&mut self) {
        self.is_loading = true;

        match self.api.list().await {
            Ok(mut transactions) => {
                transactions.sort_by(|a, b| {
                    b.created_at
                        .cmp(&a.created_at)
                        .then_with(|| b.id.cmp(&a.id))
                });
                self.transactions = transactions;
            }
            Err(error) => {
                tracing::error!("could not load transactions: {error}");
                self.transactions.clear();
                self.notify_error("Could not load transactions", &error);
            }
        }

        self.is_loading = false;
    }

    /// Open an empty form for adding a transaction.
    pub fn open_create_form(&mut self) {
        self.editing = None;
        self.draft = TransactionDraft::default();
        self.is_form_open = true;
    }

    /// Open the form pre-filled with the transaction `id`.
    ///
    /// Raises an error notification and changes nothing else if `id` is not
    /// in the local list.
    pub fn open_edit_form(&mut self, id: TransactionId) {
        let Some(transaction) = self
            .transactions
            .iter()
            .find(|transaction| transaction.id == id)
        else {
            self.notifications.push(Notification::error(
                "Could not edit transaction",
                &format!("there is no transaction with ID {id}"),
            ));
            return;
        };

        self.draft = TransactionDraft::from_transaction(transaction);
        self.editing = Some(id);
        self.is_form_open = true;
    }

    /// Close the form, discarding the draft.
    pub fn close_form(&mut self) {
        self.is_form_open = false;
        self.editing = None;
        self.draft = TransactionDraft::default();
    }

    /// Send the draft to the server, updating the edited transaction or
    /// creating a new one.
    ///
    /// On success the form is closed and the list reloaded. On failure the
    /// form stays open with the draft and edit target kept.
    pub async fn submit(&mut self) {
        let editing = self.editing;
        let payload = match self.draft.to_payload(editing) {
            Ok(payload) => payload,
            Err(error) => {
                self.notify_error("Please fill in the form", &error);
                return;
            }
        };

        self.is_submitting = true;
        let result = match editing {
            Some(_) => self.api.update(&payload).await,
            None => self.api.create(&payload).await,
        };
        self.is_submitting = false;

        match (result, editing) {
            (Ok(_), Some(_)) => self.finish_submit("Transaction updated").await,
            (Ok(_), None) => self.finish_submit("Transaction added").await,
            (Err(error), Some(_)) => self.notify_error("Could not update transaction", &error),
            (Err(error), None) => self.notify_error("Could not add transaction", &error),
        }
    }

    /// Delete the transaction `id` on the server and reload the list.
    pub async fn remove(&mut self, id: TransactionId) {
        match self.api.delete(id).await {
            Ok(_) => {
                self.notifications
                    .push(Notification::success("Transaction deleted", ""));
                self.load().await;
            }
            Err(error) => self.notify_error("Could not delete transaction", &error),
        }
    }

    /// The chart series for the current list.
    pub fn series(&self, policy: ChartPolicy) -> Vec<SeriesPoint> {
        derive_series(&self.transactions, policy)
    }

    async fn finish_submit(&mut self, message: &str) {
        self.close_form();
        self.notifications.push(Notification::success(message, ""));
        self.load().await;
    }

    fn notify_error(&mut self, message: &str, error: &ClientError) {
        self.notifications
            .push(Notification::error(message, &error.to_string()));
    }
}
