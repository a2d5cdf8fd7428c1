//! Dashboard client
//!
//! Keeps a local, newest-first copy of the transactions in sync with the
//! server, manages the add/edit form and turns the list into chart series.

mod api;
mod charts;
mod draft;
mod notification;
mod series;
mod state;

pub use api::{ClientError, HttpTransactionApi, TransactionApi};
pub use charts::{chart_page, series_chart};
pub use draft::TransactionDraft;
pub use notification::{Notification, NotificationKind};
pub use series::{ChartPolicy, SeriesPoint, derive_series};
pub use state::Dashboard;
