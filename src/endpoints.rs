//! The API endpoint URIs.

/// The route to access transactions.
///
/// Every transaction operation goes through this one path: the HTTP method
/// selects the operation and the JSON body carries the transaction ID.
pub const TRANSACTIONS_API: &str = "/api/transactions";
