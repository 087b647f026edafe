//! Store client error types

use thiserror::Error;

/// Errors that can occur while talking to the remote store.
///
/// The display string is diagnostic detail for the console; the view layer
/// maps every variant to one of the translated user-facing messages.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Request never completed (connection refused, DNS, CORS, ...)
    #[error("network error: {0}")]
    Network(String),

    /// The store received the request and rejected it
    #[error("store rejected request: {0}")]
    Rejected(String),

    /// Response body did not match the expected shape
    #[error("decode error: {0}")]
    Decode(String),
}
