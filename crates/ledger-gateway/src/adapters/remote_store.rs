//! HTTP-backed [`StateStore`] for an external state-store RPC boundary:
//! a 3-second per-call timeout, fatal on overrun.
//!
//! Addresses are opaque hex strings already; raw bytes are hex-encoded
//! over the wire to keep the request/response bodies plain JSON, the
//! same encoding `ledger_core::address` uses internally.

use std::time::Duration;

use ledger_core::ports::outbound::StateStore;
use ledger_types::LedgerError;
use serde::{Deserialize, Serialize};

const CALL_TIMEOUT: Duration = Duration::from_secs(3);

/// Talks to a remote key/value state store over HTTP.
///
/// `base_url` is expected to serve `GET {base}/state/:address` and
/// `POST {base}/state/batch`. Any transport failure or timeout surfaces
/// as [`LedgerError::InternalError`] — a store timeout is a fatal
/// transaction error, not a retryable one.
pub struct RemoteStateStore {
    http: reqwest::blocking::Client,
    base_url: String,
}

#[derive(Serialize)]
struct Entry {
    address: String,
    value_hex: String,
}

#[derive(Serialize)]
struct SetManyRequest {
    entries: Vec<Entry>,
}

#[derive(Deserialize)]
struct GetResponse {
    value_hex: Option<String>,
}

impl RemoteStateStore {
    /// Build a client targeting `base_url`, timing out every call after
    /// 3 seconds.
    pub fn new(base_url: impl Into<String>) -> Result<Self, LedgerError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(CALL_TIMEOUT)
            .build()
            .map_err(|err| LedgerError::InternalError(err.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

impl StateStore for RemoteStateStore {
    fn get(&self, address: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        let url = format!("{}/state/{address}", self.base_url);
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|err| LedgerError::InternalError(err.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(LedgerError::InternalError(format!(
                "state store returned {}",
                response.status()
            )));
        }

        let body: GetResponse = response
            .json()
            .map_err(|err| LedgerError::InternalError(err.to_string()))?;
        body.value_hex
            .map(|hex| hex::decode(hex).map_err(|err| LedgerError::InternalError(err.to_string())))
            .transpose()
    }

    fn set_many(&self, entries: Vec<(String, Vec<u8>)>) -> Result<(), LedgerError> {
        let request = SetManyRequest {
            entries: entries
                .into_iter()
                .map(|(address, bytes)| Entry {
                    address,
                    value_hex: hex::encode(bytes),
                })
                .collect(),
        };
        let url = format!("{}/state/batch", self.base_url);
        let response = self
            .http
            .post(url)
            .json(&request)
            .send()
            .map_err(|err| LedgerError::InternalError(err.to_string()))?;

        if !response.status().is_success() {
            return Err(LedgerError::InternalError(format!(
                "state store returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}
