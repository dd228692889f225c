//! # Ledger Integration Tests
//!
//! End-to-end scenario and property tests driving [`ledger_core::apply`]
//! against [`ledger_core::adapters::MemoryStateStore`], exercising whole
//! operation sequences the way a real collaborator batch would. Grounded
//! on the teacher's `integration-tests` crate: one module per concern,
//! scenario functions reading top-to-bottom as a script of submitted
//! transactions.
//!
//! ## Structure
//!
//! - `scenarios` — the bootstrapping/issuance/transfer/heartbeat flows.
//! - `properties` — the universal properties, including a `proptest`
//!   check that address derivation is a pure function of its inputs.

pub mod properties;
pub mod scenarios;
