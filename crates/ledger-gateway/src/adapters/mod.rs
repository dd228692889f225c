//! Gateway-side [`ledger_core::ports::outbound::StateStore`] adapters
//! beyond the in-memory one `ledger-core` ships for tests.

pub mod remote_store;

pub use remote_store::RemoteStateStore;
