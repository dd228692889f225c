//! # ledger-gateway
//!
//! REST glue around `ledger-core`: read-only account/token/balance
//! lookups plus a batch submission and status-polling surface. Implements
//! no business rules of its own — every mutation goes through
//! [`ledger_core::apply`].

pub mod adapters;
pub mod batches;
pub mod domain;
pub mod router;
pub mod service;

pub use domain::{ApiError, GatewayConfig};
pub use router::{build_router, AppState};
