//! Error types for the API client.

use thiserror::Error;

/// Errors from remote CRM calls.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure or non-success status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server accepted the batch but returned no entities, so
    /// there are no ids to merge back.
    #[error("API returned an empty response for {0}")]
    EmptyResponse(&'static str),

    /// Nothing to send: the caller filtered everything out.
    #[error("no {0} to post")]
    EmptyBatch(&'static str),
}
