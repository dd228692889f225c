//! Submission client: posts a single-entry batch to `ledger-gateway` and,
//! if asked to wait, polls `/batch_statuses` until it settles. Grounded on
//! `cli/workflow/client.py`'s `DaClient._send_batches`/`_get_status`, with
//! the same bounded 6-retry policy for `PENDING`/`UNKNOWN`.

use ledger_core::ports::inbound::Payload;
use serde::{Deserialize, Serialize};

use crate::domain::{CliConfig, CliError};

const MAX_RETRIES: u32 = 6;

/// Status of a submitted batch, mirroring `ledger_gateway::batches::BatchStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BatchStatus {
    /// Queued but not yet applied.
    Pending,
    /// Applied successfully.
    Committed,
    /// Rejected during application.
    Invalid,
    /// No record of this batch id.
    Unknown,
}

#[derive(Serialize)]
struct BatchEntry<'a> {
    signer: &'a str,
    payload: Payload,
}

#[derive(Serialize)]
struct SubmitBatchRequest<'a> {
    entries: Vec<BatchEntry<'a>>,
}

#[derive(Deserialize)]
struct SubmitBatchResponse {
    batch_id: String,
}

#[derive(Deserialize)]
struct BatchStatusEntry {
    status: BatchStatus,
}

/// Talks to one `ledger-gateway` instance over HTTP.
pub struct LedgerClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl LedgerClient {
    /// Build a client targeting `config.url`.
    pub fn new(config: &CliConfig) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: config.url.clone(),
        }
    }

    /// Submit one payload on behalf of `signer`, returning the batch id.
    pub fn submit(&self, signer: &str, payload: Payload) -> Result<String, CliError> {
        let request = SubmitBatchRequest {
            entries: vec![BatchEntry { signer, payload }],
        };
        let response = self
            .http
            .post(format!("{}/batches", self.base_url))
            .json(&request)
            .send()?;

        if !response.status().is_success() {
            let message = response.text().unwrap_or_default();
            return Err(CliError::Invalid(message));
        }

        let body: SubmitBatchResponse = response.json()?;
        Ok(body.batch_id)
    }

    /// Poll this batch's status once.
    pub fn status(&self, batch_id: &str) -> Result<BatchStatus, CliError> {
        let url = format!("{}/batch_statuses?ids={}", self.base_url, batch_id);
        let body: Vec<BatchStatusEntry> = self.http.get(url).send()?.json()?;
        Ok(body
            .into_iter()
            .next()
            .map(|entry| entry.status)
            .unwrap_or(BatchStatus::Unknown))
    }

    /// Submit, then poll up to [`MAX_RETRIES`] times while the batch stays
    /// `PENDING` or `UNKNOWN`. Returns as soon as the batch settles
    /// (`COMMITTED`/`INVALID`), matching `client.py`'s wait loop.
    pub fn submit_and_wait(
        &self,
        signer: &str,
        payload: Payload,
        wait_secs: u64,
    ) -> Result<String, CliError> {
        let batch_id = self.submit(signer, payload)?;
        let mut retries = 0;
        let mut last_status = self.status(&batch_id)?;

        while matches!(last_status, BatchStatus::Pending | BatchStatus::Unknown)
            && retries < MAX_RETRIES
        {
            std::thread::sleep(std::time::Duration::from_secs(
                wait_secs / u64::from(MAX_RETRIES).max(1),
            ));
            last_status = self.status(&batch_id)?;
            retries += 1;
        }

        match last_status {
            BatchStatus::Committed => Ok(batch_id),
            BatchStatus::Invalid => Err(CliError::Invalid(batch_id)),
            other => Err(CliError::NotSettled {
                batch_id,
                status: format!("{other:?}").to_uppercase(),
                retries,
            }),
        }
    }
}
