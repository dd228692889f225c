//! Error taxonomy for the CLI's submission client, matching
//! `cli/common/exceptions.py`'s `DaException` catch-all in spirit but
//! split into a `thiserror` enum per the teacher's convention.

use thiserror::Error;

/// Everything that can go wrong submitting or polling a batch.
#[derive(Debug, Error)]
pub enum CliError {
    /// The HTTP call to the gateway itself failed (connection, timeout, ...).
    #[error("failed to reach gateway: {0}")]
    Transport(#[from] reqwest::Error),
    /// The gateway rejected the submitted transaction.
    #[error("batch invalid: {0}")]
    Invalid(String),
    /// Status stayed `PENDING`/`UNKNOWN` past the retry budget.
    #[error("batch {batch_id} still {status} after {retries} retries")]
    NotSettled {
        /// Submitted batch id.
        batch_id: String,
        /// Last observed status string.
        status: String,
        /// Retries spent.
        retries: u32,
    },
    /// The gateway's response body didn't decode as expected.
    #[error("malformed gateway response: {0}")]
    Decode(#[from] serde_json::Error),
}
