//! Transient messages telling the user how their last action went.

use std::fmt::Display;

/// Notification types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The action went through.
    Success,
    /// The action failed. The dashboard stays usable.
    Error,
}

/// A message for the user about the outcome of an action.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Whether this reports a success or a failure.
    pub kind: NotificationKind,
    /// A short summary, e.g. "Could not load transactions".
    pub message: String,
    /// Further detail, may be empty.
    pub details: String,
}

impl Notification {
    /// Create a new success notification
    pub fn success(message: &str, details: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Create a new error notification
    pub fn error(message: &str, details: &str) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Whether this notification reports a failure.
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.kind {
            NotificationKind::Success => "ok",
            NotificationKind::Error => "error",
        };

        if self.details.is_empty() {
            write!(f, "[{prefix}] {}", self.message)
        } else {
            write!(f, "[{prefix}] {}: {}", self.message, self.details)
        }
    }
}
