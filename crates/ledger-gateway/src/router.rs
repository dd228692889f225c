//! Route wiring, grounded on the reference implementation's
//! `rest_api/account.py` / `rest_api/token.py` / `rest_api/main.py`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use ledger_core::adapters::MemoryStateStore;
use ledger_core::ports::inbound::Payload;
use ledger_core::ports::outbound::StateStore;
use ledger_core::{apply, Ledger};
use ledger_types::{Account, Balance, LedgerError, Token};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::batches::{BatchStatus, BatchTracker};
use crate::domain::error::ApiResult;

/// Shared state handed to every route handler. `store` is boxed behind a
/// trait object so the gateway can run against either the in-process
/// `MemoryStateStore` or a `RemoteStateStore` talking to an external
/// state-store RPC boundary, chosen by `GatewayConfig::remote_store_url`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StateStore + Send + Sync>,
    pub batches: Arc<BatchTracker>,
}

impl AppState {
    /// Wire a fresh, empty in-memory ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryStateStore::new()),
            batches: Arc::new(BatchTracker::new()),
        }
    }

    /// Wire state on top of a caller-supplied store (e.g. `RemoteStateStore`).
    #[must_use]
    pub fn with_store(store: Arc<dyn StateStore + Send + Sync>) -> Self {
        Self {
            store,
            batches: Arc::new(BatchTracker::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the gateway's route table.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/accounts/:pkey", get(get_account))
        .route("/tokens/:name", get(get_token))
        .route("/tokens/:name/balances/:pkey", get(get_balance))
        .route("/batches", post(submit_batch))
        .route("/batch_statuses", get(batch_statuses))
        .with_state(state)
}

async fn get_account(
    State(state): State<AppState>,
    Path(pkey): Path<String>,
) -> ApiResult<Json<Account>> {
    let ledger = Ledger::new(state.store.as_ref());
    let account = ledger
        .account(&pkey)?
        .ok_or_else(|| LedgerError::NotFound(format!("account not registered: {pkey}")))?;
    Ok(Json(account))
}

async fn get_token(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Token>> {
    let ledger = Ledger::new(state.store.as_ref());
    let token = ledger
        .token(&name)?
        .ok_or_else(|| LedgerError::NotFound(format!("token not issued: {name}")))?;
    Ok(Json(token))
}

async fn get_balance(
    State(state): State<AppState>,
    Path((name, pkey)): Path<(String, String)>,
) -> ApiResult<Json<Balance>> {
    let ledger = Ledger::new(state.store.as_ref());
    let token_hex = ledger_core::address::token_address(&name);
    let balance = ledger
        .balance(&pkey, &token_hex)?
        .ok_or_else(|| {
            LedgerError::NotFound(format!("no balance for account {pkey} in token {name}"))
        })?;
    Ok(Json(balance))
}

/// One submitted transaction: a decoded payload plus the signer it is
/// submitted on behalf of. Real collaborators sign an opaque envelope and
/// the header carries the signer; this gateway's glue layer accepts the
/// same shape already decoded, since signature verification is outside
/// this crate's scope.
#[derive(Debug, Deserialize)]
pub struct BatchEntry {
    pub signer: String,
    pub payload: Payload,
}

#[derive(Debug, Deserialize)]
pub struct SubmitBatchRequest {
    pub entries: Vec<BatchEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitBatchResponse {
    pub batch_id: String,
}

async fn submit_batch(
    State(state): State<AppState>,
    Json(request): Json<SubmitBatchRequest>,
) -> ApiResult<Json<SubmitBatchResponse>> {
    let batch_id = Uuid::new_v4().to_string();
    let ledger = Ledger::new(state.store.as_ref());

    for entry in request.entries {
        if let Err(err) = apply(entry.payload, &entry.signer, &ledger) {
            state.batches.record(batch_id.clone(), BatchStatus::Invalid);
            return Err(err.into());
        }
    }
    state.batches.record(batch_id.clone(), BatchStatus::Committed);
    Ok(Json(SubmitBatchResponse { batch_id }))
}

#[derive(Debug, Deserialize)]
pub struct BatchStatusesQuery {
    pub ids: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchStatusEntry {
    pub id: String,
    pub status: BatchStatus,
}

async fn batch_statuses(
    State(state): State<AppState>,
    axum::extract::Query(query): axum::extract::Query<BatchStatusesQuery>,
) -> Json<Vec<BatchStatusEntry>> {
    let statuses = query
        .ids
        .split(',')
        .filter(|id| !id.is_empty())
        .map(|id| BatchStatusEntry {
            id: id.to_string(),
            status: state.batches.status(id),
        })
        .collect();
    Json(statuses)
}
